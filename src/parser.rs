use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::config::{BuilderConfig, Config};
use crate::element::{Element, ParsedPage};
use crate::error::{Error, Result};

/// Fetch a page body over HTTP. One-shot GET, redirects followed, no retry.
pub fn fetch(url: &str, config: &Config) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(config.http.user_agent.clone())
        .build()?;
    Ok(client.get(url).send()?.error_for_status()?.text()?)
}

/// Parse a document into the builder's element tree.
///
/// All-or-nothing: a page without the builder's root container yields
/// `Error::BuilderNotFound` and no partial tree.
pub fn parse(html: &str, config: &Config) -> Result<ParsedPage> {
    let document = Html::parse_document(html);

    let root =
        find_root(document.root_element(), &config.builder.root_class).ok_or_else(|| {
            Error::BuilderNotFound {
                root_class: config.builder.root_class.clone(),
                builder: config.builder.name.clone(),
            }
        })?;

    let mut ids = IdAllocator::default();
    let mut elements = Vec::new();
    collect_elements(root, config, &mut ids, &mut elements);

    Ok(ParsedPage {
        title: page_title(&document),
        elements,
        global_styles: global_styles(&document, config),
    })
}

/// Synthesizes `el-N` ids for elements the builder left unlabeled. Unique
/// within one parse, best-effort across pages.
#[derive(Default)]
struct IdAllocator {
    next: usize,
}

impl IdAllocator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("el-{}", self.next)
    }
}

/// First element carrying the root marker class, depth-first.
fn find_root<'a>(node: ElementRef<'a>, root_class: &str) -> Option<ElementRef<'a>> {
    if node.value().classes().any(|c| c == root_class) {
        return Some(node);
    }
    for child in node.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if let Some(found) = find_root(el, root_class) {
                return Some(found);
            }
        }
    }
    None
}

/// Gather builder elements below `node` in document order. Children carrying
/// the element marker become nodes of their own; plain wrapper markup is
/// descended through so matching descendants attach to the nearest matching
/// ancestor.
fn collect_elements(
    node: ElementRef<'_>,
    config: &Config,
    ids: &mut IdAllocator,
    out: &mut Vec<Element>,
) {
    for child in node.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if el.value().classes().any(|c| c == config.builder.element_class) {
                out.push(parse_element(el, config, ids));
            } else {
                collect_elements(el, config, ids, out);
            }
        }
    }
}

fn parse_element(el: ElementRef<'_>, config: &Config, ids: &mut IdAllocator) -> Element {
    let builder = &config.builder;
    let classes: Vec<String> = el.value().classes().map(str::to_string).collect();
    let element_type = resolve_type(&classes, builder);

    let mut settings = IndexMap::new();
    let mut attributes = IndexMap::new();
    for (name, value) in el.value().attrs() {
        if let Some(key) = name.strip_prefix(&builder.data_prefix) {
            // Structured decode first; a value that was never JSON stays a
            // raw string and parsing continues.
            let decoded =
                serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
            settings.insert(key.to_string(), decoded);
        } else if !matches!(name, "style" | "class" | "id") {
            attributes.insert(name.to_string(), value.to_string());
        }
    }

    let styles = parse_inline_styles(el.value().attr("style").unwrap_or(""));

    let content = if element_type.contains("text") || element_type.contains("heading") {
        Some(el.inner_html())
    } else {
        None
    };

    let id = el
        .value()
        .attr(&builder.id_attribute)
        .map(str::to_string)
        .unwrap_or_else(|| ids.next_id());

    let mut children = Vec::new();
    collect_elements(el, config, ids, &mut children);

    Element {
        id,
        element_type,
        tag: el.value().name().to_ascii_lowercase(),
        settings,
        classes,
        styles,
        content,
        attributes,
        children,
    }
}

/// Resolution order: section class, column class, widget class with the
/// prefix stripped from the most specific widget class, else `widget`.
fn resolve_type(classes: &[String], builder: &BuilderConfig) -> String {
    if classes.iter().any(|c| c == &builder.section_class) {
        return "section".to_string();
    }
    if classes.iter().any(|c| c == &builder.column_class) {
        return "column".to_string();
    }
    if classes.iter().any(|c| c == &builder.widget_class) {
        if let Some(widget_type) = classes
            .iter()
            .filter_map(|c| c.strip_prefix(&builder.widget_prefix))
            .filter(|t| !t.is_empty())
            .max_by_key(|t| t.len())
        {
            return widget_type.to_string();
        }
    }
    "widget".to_string()
}

/// Split an inline style attribute into property/value pairs. Empty
/// segments and declarations without a colon are ignored.
fn parse_inline_styles(raw: &str) -> IndexMap<String, String> {
    let mut styles = IndexMap::new();
    for declaration in raw.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if !property.is_empty() && !value.is_empty() {
            styles.insert(property.to_string(), value.to_string());
        }
    }
    styles
}

fn page_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Head `<style>` blocks that mention the builder by name, keyed with a
/// synthetic incrementing key. No CSS parsing happens here.
fn global_styles(document: &Html, config: &Config) -> IndexMap<String, String> {
    let mut styles = IndexMap::new();
    let Ok(selector) = Selector::parse("head style") else {
        return styles;
    };
    for el in document.select(&selector) {
        let text: String = el.text().collect();
        if text.contains(&config.builder.name) {
            styles.insert(format!("style-{}", styles.len()), text);
        }
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><title> Demo Page </title>
<style>.elementor-section { margin: 0 }</style>
<style>body { color: red }</style>
</head><body>
<div class="elementor" data-elementor-id="99">
  <section class="elementor-element elementor-section" data-id="abc123" data-settings='{"structure":"20"}'>
    <div class="elementor-container">
      <div class="elementor-element elementor-column" data-id="c1" data-col="50">
        <div class="elementor-widget-wrap">
          <div class="elementor-element elementor-widget elementor-widget-heading" data-id="h1" style="font-size: 24px; ">
            <h2>Hello</h2>
          </div>
          <div class="elementor-element elementor-widget elementor-widget-button" role="presentation" data-settings="not json">
            <a href="/signup">Go</a>
          </div>
        </div>
      </div>
    </div>
  </section>
</div>
</body></html>"#;

    fn parse_page() -> ParsedPage {
        parse(PAGE, &Config::default()).expect("page parses")
    }

    #[test]
    fn missing_root_container_is_an_error() {
        let result = parse("<html><body><div class=\"page\"></div></body></html>", &Config::default());
        assert!(matches!(result, Err(Error::BuilderNotFound { .. })));
    }

    #[test]
    fn tree_structure_follows_document_order() {
        let page = parse_page();
        assert_eq!(page.elements.len(), 1);

        let section = &page.elements[0];
        assert_eq!(section.element_type, "section");
        assert_eq!(section.tag, "section");
        assert_eq!(section.id, "abc123");
        // Wrapper divs are descended through, not represented.
        assert_eq!(section.children.len(), 1);

        let column = &section.children[0];
        assert_eq!(column.element_type, "column");
        assert_eq!(column.children.len(), 2);
        assert_eq!(column.children[0].element_type, "heading");
        assert_eq!(column.children[1].element_type, "button");
    }

    #[test]
    fn settings_decode_json_with_raw_fallback() {
        let page = parse_page();
        let section = &page.elements[0];
        let structure = section
            .settings
            .get("settings")
            .and_then(|v| v.get("structure"))
            .and_then(|v| v.as_str());
        assert_eq!(structure, Some("20"));

        let column = &section.children[0];
        assert_eq!(column.setting_number("col"), Some(50.0));

        // Undecodable settings keep the raw string and never abort the parse.
        let button = &column.children[1];
        assert_eq!(button.setting_str("settings"), Some("not json"));
    }

    #[test]
    fn styles_and_content_extraction() {
        let page = parse_page();
        let column = &page.elements[0].children[0];

        let heading = &column.children[0];
        assert_eq!(heading.style("font-size"), Some("24px"));
        assert!(heading.content.as_deref().unwrap_or("").contains("Hello"));

        // Only text-bearing types carry content.
        let button = &column.children[1];
        assert!(button.content.is_none());
    }

    #[test]
    fn leftover_attributes_and_synthesized_ids() {
        let page = parse_page();
        let button = &page.elements[0].children[0].children[1];
        assert_eq!(button.attributes.get("role").map(String::as_str), Some("presentation"));
        // No data-id on the button: id is synthesized.
        assert_eq!(button.id, "el-1");
    }

    #[test]
    fn title_and_global_styles() {
        let page = parse_page();
        assert_eq!(page.title, "Demo Page");
        assert_eq!(page.global_styles.len(), 1);
        assert!(page.global_styles.get("style-0").expect("kept").contains("elementor-section"));
    }

    #[test]
    fn malformed_inline_styles_are_skipped() {
        let styles = parse_inline_styles("color: red; ; broken ; background-color : #fff ;");
        assert_eq!(styles.get("color").map(String::as_str), Some("red"));
        assert_eq!(styles.get("background-color").map(String::as_str), Some("#fff"));
        assert_eq!(styles.len(), 2);
    }
}
