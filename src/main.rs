use std::fs;
use std::path::PathBuf;

use clap::Parser;

use brickify::{Config, Element, GeneratedComponent};

#[derive(Parser)]
#[command(name = "brickify")]
#[command(about = "Convert Elementor pages into React Bricks component source")]
struct Cli {
    /// Page URL (http/https) or local HTML file
    input: String,

    /// Output directory for generated .tsx files
    #[arg(short, long, default_value = "bricks")]
    output: PathBuf,

    /// Optional TOML config overriding builder markup conventions
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the parsed element tree instead of writing files
    #[arg(long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::default(),
    };

    let page = if cli.input.starts_with("http://") || cli.input.starts_with("https://") {
        brickify::fetch_page(&cli.input, &config)
    } else {
        match fs::read_to_string(&cli.input) {
            Ok(html) => brickify::parse(&html, &config),
            Err(e) => {
                eprintln!("Error reading {}: {}", cli.input, e);
                std::process::exit(1);
            }
        }
    };

    let page = match page {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.list {
        if !page.title.is_empty() {
            println!("{}", page.title);
        }
        for element in &page.elements {
            print_tree(element, 0);
        }
        return;
    }

    let generated: Vec<GeneratedComponent> = page
        .elements
        .iter()
        .map(|element| {
            let component = brickify::map_element(element);
            let source = brickify::generate(&component);
            GeneratedComponent {
                name: component.name,
                label: component.label,
                source,
            }
        })
        .collect();

    if let Err(e) = fs::create_dir_all(&cli.output) {
        eprintln!("Error creating {}: {}", cli.output.display(), e);
        std::process::exit(1);
    }

    let mut used_names = Vec::new();
    for component in &generated {
        let path = cli.output.join(unique_file_name(&component.name, &mut used_names));
        if let Err(e) = fs::write(&path, &component.source) {
            eprintln!("Error writing {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Created {}", path.display());
    }
}

fn print_tree(element: &Element, depth: usize) {
    println!(
        "{}{} [{}] {}",
        "  ".repeat(depth),
        element.element_type,
        element.tag,
        element.id
    );
    for child in &element.children {
        print_tree(child, depth + 1);
    }
}

/// `heading-block.tsx`, then `heading-block-2.tsx` on collision.
fn unique_file_name(name: &str, used: &mut Vec<String>) -> String {
    let mut candidate = name.to_string();
    let mut counter = 1;
    while used.contains(&candidate) {
        counter += 1;
        candidate = format!("{name}-{counter}");
    }
    used.push(candidate.clone());
    format!("{candidate}.tsx")
}
