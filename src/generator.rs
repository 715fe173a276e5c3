use indexmap::IndexSet;

use crate::component::{ComponentDescription, ComponentKind, PropValue};

/// Stock image used whenever no concrete source was mapped.
const PLACEHOLDER_IMAGE: &str = "https://images.reactbricks.com/original/placeholder.png";

/// Video id baked in as the last-resort default so video output is never
/// empty.
const FALLBACK_VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Ordered, deduplicated import accumulator for one generated file.
///
/// Fresh per generation call unless the caller explicitly shares one across
/// a batch; nothing here leaks between unrelated calls.
#[derive(Debug, Default, Clone)]
pub struct ImportSet {
    bricks: IndexSet<String>,
    lines: IndexSet<String>,
}

impl ImportSet {
    /// Add a named import from the target framework's runtime module.
    pub fn add_brick(&mut self, name: &str) {
        self.bricks.insert(name.to_string());
    }

    /// Add a whole import line.
    pub fn add_line(&mut self, line: &str) {
        self.lines.insert(line.to_string());
    }

    fn emit(&self, out: &mut String) {
        out.push_str("import * as React from 'react'\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        let names: Vec<&str> = self.bricks.iter().map(String::as_str).collect();
        out.push_str(&format!(
            "import {{ {} }} from 'react-bricks/frontend'\n",
            names.join(", ")
        ));
    }
}

/// Generate component source for one mapped component.
///
/// Deterministic: the same description always yields byte-identical output.
/// Children contribute imports but are not code-generated into the same
/// artifact.
pub fn generate(component: &ComponentDescription) -> String {
    let mut imports = ImportSet::default();
    generate_with_imports(component, &mut imports)
}

/// Same as [`generate`] with a caller-supplied import accumulator, for
/// batches that want the union of imports across several generated files.
pub fn generate_with_imports(component: &ComponentDescription, imports: &mut ImportSet) -> String {
    collect_imports(component, imports);

    let mut out = String::new();
    imports.emit(&mut out);
    out.push('\n');
    emit_props_interface(component, &mut out);
    out.push('\n');
    emit_brick(component, &mut out);
    out.push('\n');
    emit_schema(component, &mut out);
    out.push('\n');
    out.push_str(&format!("export default {}\n", pascal_case(&component.name)));
    out
}

/// `heading-block` -> `HeadingBlock`. Stable; test identifiers depend on it.
pub fn pascal_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn collect_imports(component: &ComponentDescription, imports: &mut ImportSet) {
    imports.add_line("import classNames from 'classnames'");
    imports.add_brick("types");
    match &component.kind {
        ComponentKind::Section => {
            imports.add_brick("RichText");
            imports.add_brick("Repeater");
        }
        ComponentKind::Heading | ComponentKind::Text => imports.add_brick("RichText"),
        ComponentKind::Image => imports.add_brick("Image"),
        ComponentKind::Button => imports.add_brick("Link"),
        ComponentKind::Column | ComponentKind::Video | ComponentKind::Generic(_) => {}
    }
    for child in &component.children {
        collect_imports(child, imports);
    }
}

// ---------------------------------------------------------------------------
// Props interface

/// The fields every component carries, emitted first and in this order.
const BASELINE_FIELDS: [(&str, &str); 5] = [
    ("backgroundColor", "string"),
    ("borderTop", "boolean"),
    ("borderBottom", "boolean"),
    ("paddingTop", "string"),
    ("paddingBottom", "string"),
];

fn family_fields(kind: &ComponentKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        ComponentKind::Heading => &[
            ("title", "string"),
            ("tag", "string"),
            ("extraBoldTitle", "boolean"),
        ],
        ComponentKind::Text => &[("text", "string"), ("textAlign", "string")],
        ComponentKind::Image => &[
            ("source", "types.IImageSource"),
            ("isRounded", "boolean"),
            ("hasShadow", "boolean"),
        ],
        ComponentKind::Button => &[
            ("text", "string"),
            ("href", "string"),
            ("target", "string"),
            ("buttonColor", "string"),
            ("type", "'solid' | 'outline' | 'link'"),
            ("isBigButton", "boolean"),
        ],
        ComponentKind::Section => &[
            ("imageSide", "'left' | 'right'"),
            ("bigImage", "boolean"),
            ("mobileImageOnTop", "boolean"),
            ("align", "string"),
            ("verticalAlign", "string"),
            ("mediaType", "string"),
            ("buttons", "types.RepeaterItems"),
        ],
        ComponentKind::Video => &[
            ("videoType", "string"),
            ("platform?", "string"),
            ("videoId?", "string"),
            ("videoFile?", "{ url: string }"),
        ],
        ComponentKind::Column | ComponentKind::Generic(_) => &[],
    }
}

fn emit_props_interface(component: &ComponentDescription, out: &mut String) {
    let family = family_fields(&component.kind);
    out.push_str(&format!("interface {}Props {{\n", pascal_case(&component.name)));
    for (name, ty) in BASELINE_FIELDS {
        out.push_str(&format!("  {name}: {ty}\n"));
    }
    for (name, ty) in family {
        out.push_str(&format!("  {name}: {ty}\n"));
    }
    // Everything the mapper produced beyond the known set, in mapper order,
    // with a type tag inferred from the runtime shape.
    for (key, value) in &component.props {
        // Optional fields are declared with a `?` suffix; the prop key has
        // none.
        let known = BASELINE_FIELDS.iter().any(|(n, _)| *n == key.as_str())
            || family.iter().any(|(n, _)| n.trim_end_matches('?') == key.as_str());
        if !known {
            out.push_str(&format!("  {key}: {}\n", ts_type(value)));
        }
    }
    out.push_str("}\n");
}

fn ts_type(value: &PropValue) -> &'static str {
    match value {
        PropValue::Bool(_) => "boolean",
        PropValue::Number(_) => "number",
        PropValue::Text(_) | PropValue::RichText(_) => "string",
        PropValue::List(_) => "any[]",
        PropValue::Image { .. } => "types.IImageSource",
        PropValue::Map(map) => {
            if map.contains_key("url") || map.contains_key("src") {
                "types.IImageSource"
            } else {
                "Record<string, any>"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Render function

fn emit_brick(component: &ComponentDescription, out: &mut String) {
    let ident = pascal_case(&component.name);
    let params = destructured_params(component);
    if params.is_empty() {
        out.push_str(&format!("const {ident}: types.Brick<{ident}Props> = () => {{\n"));
    } else {
        out.push_str(&format!("const {ident}: types.Brick<{ident}Props> = ({{\n"));
        for param in params {
            out.push_str(&format!("  {param},\n"));
        }
        out.push_str("}) => {\n");
    }

    match &component.kind {
        ComponentKind::Section => emit_section_body(component, out),
        ComponentKind::Column => emit_column_body(component, out),
        ComponentKind::Heading => emit_heading_body(component, out),
        ComponentKind::Text => emit_text_body(out),
        ComponentKind::Image => emit_image_body(component, out),
        ComponentKind::Button => emit_button_body(out),
        ComponentKind::Video => emit_video_body(component, out),
        ComponentKind::Generic(_) => emit_generic_body(component, out),
    }

    out.push_str("}\n");
}

fn destructured_params(component: &ComponentDescription) -> &'static [&'static str] {
    match &component.kind {
        ComponentKind::Video => {
            if component.prop_text("videoType") == Some("file") {
                &["videoFile"]
            } else {
                &["videoId"]
            }
        }
        ComponentKind::Section => &[
            "backgroundColor",
            "borderTop",
            "borderBottom",
            "paddingTop",
            "paddingBottom",
        ],
        ComponentKind::Heading => &["extraBoldTitle"],
        ComponentKind::Text => &["textAlign"],
        ComponentKind::Image => &["isRounded", "hasShadow"],
        ComponentKind::Button => &[
            "text",
            "href",
            "target",
            "buttonColor",
            "type",
            "isBigButton",
        ],
        ComponentKind::Column | ComponentKind::Generic(_) => &[],
    }
}

fn emit_section_body(component: &ComponentDescription, out: &mut String) {
    // Padding tokens become utility classes at render time, so the editable
    // prop stays the live source of truth.
    out.push_str(
        "  const spacing = (side: string, value: string) =>\n    value === 'none'\n      ? `${side}-0`\n      : value === 'hairline'\n        ? `${side}-px`\n        : value === 'normal'\n          ? `${side}-12`\n          : value === 'large'\n            ? `${side}-64`\n            : `${side}-${value}`\n\n",
    );

    out.push_str("  return (\n");
    out.push_str("    <section\n      className={classNames(\n        'relative overflow-hidden',\n        backgroundColor,\n        spacing('pt', paddingTop),\n        spacing('pb', paddingBottom),\n        { 'border-t border-gray-200': borderTop, 'border-b border-gray-200': borderBottom }\n      )}\n    >\n");

    if let Some(PropValue::Image { src, .. }) = component.props.get("backgroundImage") {
        let position = component.prop_text("backgroundPosition").unwrap_or("center center");
        out.push_str(&format!(
            "      <div\n        className=\"absolute inset-0 bg-cover\"\n        style={{{{ backgroundImage: \"url({src})\", backgroundPosition: {} }}}}\n      />\n",
            js_string(position)
        ));
        out.push_str(
            "      <div className={classNames('absolute inset-0 opacity-60', backgroundColor)} />\n",
        );
    }

    out.push_str("      <div className=\"container relative mx-auto px-6\">\n");

    let copy_kinds = [ComponentKind::Heading, ComponentKind::Text, ComponentKind::Button];
    let has_copy = component.subtree_has(&copy_kinds);
    let has_image = component.subtree_has(&[ComponentKind::Image]);

    if has_copy && has_image {
        emit_section_two_sides(component, out);
    } else {
        emit_section_plain(component, out);
    }

    out.push_str("      </div>\n    </section>\n  )\n");
}

/// Copy on one side, image on the other.
fn emit_section_two_sides(component: &ComponentDescription, out: &mut String) {
    out.push_str("        <div className=\"flex flex-col items-center md:flex-row\">\n");
    out.push_str("          <div className=\"w-full md:w-1/2 md:pr-8\">\n");
    emit_section_copy(component, out, "            ");
    out.push_str("          </div>\n");
    out.push_str("          <div className=\"w-full md:w-1/2\">\n");

    let alt = component
        .find_kind(&ComponentKind::Image)
        .and_then(|image| match image.props.get("source") {
            Some(PropValue::Image { alt: Some(alt), .. }) => Some(alt.as_str()),
            _ => None,
        })
        .unwrap_or("Image");
    out.push_str(&format!(
        "            <Image propName=\"sideImage\" alt={} imageClassName=\"w-full\" />\n",
        js_string(alt)
    ));
    out.push_str("          </div>\n        </div>\n");
}

fn emit_section_plain(component: &ComponentDescription, out: &mut String) {
    out.push_str("        <div className=\"flex flex-col\">\n");
    emit_section_copy(component, out, "          ");
    out.push_str("        </div>\n");
}

fn emit_section_copy(component: &ComponentDescription, out: &mut String, indent: &str) {
    out.push_str(&format!(
        "{indent}<RichText\n{indent}  propName=\"title\"\n{indent}  placeholder=\"Title...\"\n{indent}  renderBlock={{(props) => (\n{indent}    <h2 className=\"text-3xl font-extrabold\" {{...props.attributes}}>\n{indent}      {{props.children}}\n{indent}    </h2>\n{indent}  )}}\n{indent}/>\n"
    ));
    out.push_str(&format!(
        "{indent}<RichText\n{indent}  propName=\"text\"\n{indent}  placeholder=\"Text...\"\n{indent}  renderBlock={{(props) => (\n{indent}    <p className=\"mt-4 text-lg text-gray-700\" {{...props.attributes}}>\n{indent}      {{props.children}}\n{indent}    </p>\n{indent}  )}}\n{indent}/>\n"
    ));
    out.push_str(&format!(
        "{indent}<div className=\"mt-6 flex flex-row items-center space-x-4\">\n{indent}  <Repeater propName=\"buttons\" />\n{indent}</div>\n"
    ));
    // Anything beyond the copy/image arrangement stays visible as a marker.
    for child in &component.children {
        if !matches!(
            child.kind,
            ComponentKind::Heading
                | ComponentKind::Text
                | ComponentKind::Button
                | ComponentKind::Image
                | ComponentKind::Column
        ) {
            out.push_str(&format!("{indent}{{/* {} */}}\n", child.name));
        }
    }
}

fn emit_column_body(component: &ComponentDescription, out: &mut String) {
    let width = component.prop_text("width").unwrap_or("full");
    out.push_str("  return (\n");
    out.push_str(&format!(
        "    <div className=\"w-full md:w-{width} px-4\">\n"
    ));
    for child in &component.children {
        emit_column_child(child, out);
    }
    out.push_str("    </div>\n  )\n");
}

/// Inline preview of one nested component: headings and paragraphs render
/// directly, markup-bearing children are raw-injected, everything else is a
/// comment placeholder.
fn emit_column_child(child: &ComponentDescription, out: &mut String) {
    match &child.kind {
        ComponentKind::Heading => {
            let tag = child.prop_text("tag").unwrap_or("h2");
            let title = child.prop_text("title").unwrap_or("Heading");
            out.push_str(&format!(
                "      <{tag} className=\"text-2xl font-bold\">{{{}}}</{tag}>\n",
                js_string(title)
            ));
        }
        ComponentKind::Text => {
            let text = child.prop_text("text").unwrap_or("<p>Text</p>");
            out.push_str(&format!(
                "      <div className=\"mt-2 text-gray-700\" dangerouslySetInnerHTML={{{{ __html: {} }}}} />\n",
                js_string(text)
            ));
        }
        ComponentKind::Button => {
            let text = child.prop_text("text").unwrap_or("Learn more");
            let href = child.prop_text("href").unwrap_or("#");
            out.push_str(&format!(
                "      <a href={} className=\"mt-4 inline-block rounded bg-blue-600 px-6 py-3 text-white\">\n        {{{}}}\n      </a>\n",
                js_string(href),
                js_string(text)
            ));
        }
        ComponentKind::Image => {
            let src = match child.props.get("source") {
                Some(PropValue::Image { src, .. }) => src.as_str(),
                _ => PLACEHOLDER_IMAGE,
            };
            let alt = match child.props.get("source") {
                Some(PropValue::Image { alt: Some(alt), .. }) => alt.as_str(),
                _ => "Image",
            };
            out.push_str(&format!(
                "      <img src={} alt={} className=\"mt-4 w-full\" />\n",
                js_string(src),
                js_string(alt)
            ));
        }
        ComponentKind::Video | ComponentKind::Generic(_) => {
            if let Some(content) = child.prop_text("content") {
                out.push_str(&format!(
                    "      <div dangerouslySetInnerHTML={{{{ __html: {} }}}} />\n",
                    js_string(content)
                ));
            } else {
                out.push_str(&format!("      {{/* {} */}}\n", child.name));
            }
        }
        ComponentKind::Section | ComponentKind::Column => {
            out.push_str(&format!("      {{/* {} */}}\n", child.name));
        }
    }
}

fn emit_heading_body(component: &ComponentDescription, out: &mut String) {
    let tag = component.prop_text("tag").unwrap_or("h2");
    let size = component.prop_text("size").unwrap_or("2xl");
    let align_class = align_expression(component);
    out.push_str("  return (\n");
    out.push_str(&format!(
        "    <RichText\n      propName=\"title\"\n      placeholder=\"Heading...\"\n      renderBlock={{(props) => (\n        <{tag}\n          className={{classNames('text-{size}', extraBoldTitle ? 'font-extrabold' : 'font-bold'{align_class})}}\n          {{...props.attributes}}\n        >\n          {{props.children}}\n        </{tag}>\n      )}}\n    />\n  )\n"
    ));
}

fn align_expression(component: &ComponentDescription) -> String {
    match component.prop_text("textAlign") {
        Some(align) => format!(", 'text-{align}'"),
        None => String::new(),
    }
}

fn emit_text_body(out: &mut String) {
    out.push_str("  return (\n");
    out.push_str(
        "    <RichText\n      propName=\"text\"\n      placeholder=\"Text...\"\n      renderBlock={(props) => (\n        <p\n          className={classNames(\n            'text-base leading-relaxed',\n            textAlign === 'center' && 'text-center',\n            textAlign === 'right' && 'text-right'\n          )}\n          {...props.attributes}\n        >\n          {props.children}\n        </p>\n      )}\n    />\n  )\n",
    );
}

fn emit_image_body(component: &ComponentDescription, out: &mut String) {
    let alt = match component.props.get("source") {
        Some(PropValue::Image { alt: Some(alt), .. }) => alt.as_str(),
        _ => "Image",
    };
    out.push_str("  return (\n");
    out.push_str(&format!(
        "    <Image\n      propName=\"source\"\n      alt={}\n      maxWidth={{1200}}\n      imageClassName={{classNames(isRounded && 'rounded-lg', hasShadow && 'shadow-xl')}}\n    />\n  )\n",
        js_string(alt)
    ));
}

fn emit_button_body(out: &mut String) {
    out.push_str("  return (\n");
    out.push_str("    <Link\n      href={href}\n      target={target}\n      className={classNames(\n        'inline-block whitespace-nowrap text-center font-medium',\n        isBigButton ? 'px-8 py-4 text-lg' : 'px-6 py-3',\n        type === 'solid' && `rounded text-white bg-${buttonColor}-600 hover:bg-${buttonColor}-700`,\n        type === 'outline' &&\n          `rounded border-2 border-${buttonColor}-600 bg-transparent text-${buttonColor}-600`,\n        type === 'link' && `p-0 text-${buttonColor}-600 hover:underline`\n      )}\n    >\n      {text}\n    </Link>\n  )\n");
}

fn emit_video_body(component: &ComponentDescription, out: &mut String) {
    if component.prop_text("videoType") == Some("file") {
        let url = match component.props.get("videoFile") {
            Some(PropValue::Map(file)) => file
                .get("url")
                .and_then(PropValue::as_text)
                .unwrap_or_default(),
            _ => "",
        };
        out.push_str("  return (\n");
        out.push_str(&format!(
            "    <video className=\"w-full\" controls src={{videoFile?.url || {}}} />\n  )\n",
            js_string(url)
        ));
        return;
    }

    let platform = component.prop_text("platform").unwrap_or("youtube");
    let template = if platform == "vimeo" {
        "https://player.vimeo.com/video/"
    } else {
        "https://www.youtube.com/embed/"
    };
    out.push_str("  return (\n");
    out.push_str(&format!(
        "    <div className=\"aspect-video\">\n      <iframe\n        className=\"h-full w-full\"\n        src={{`{template}${{videoId || '{FALLBACK_VIDEO_ID}'}}`}}\n        allowFullScreen\n      />\n    </div>\n  )\n"
    ));
}

fn emit_generic_body(component: &ComponentDescription, out: &mut String) {
    out.push_str("  return (\n");
    out.push_str(
        "    <div className=\"rounded border border-dashed border-gray-300 p-4 text-gray-500\">\n",
    );
    out.push_str(&format!(
        "      <p className=\"text-sm font-medium\">{}</p>\n",
        component.name
    ));
    if let Some(content) = component.prop_text("content") {
        out.push_str(&format!(
            "      <div dangerouslySetInnerHTML={{{{ __html: {} }}}} />\n",
            js_string(content)
        ));
    }
    out.push_str("    </div>\n  )\n");
}

// ---------------------------------------------------------------------------
// Schema block

fn emit_schema(component: &ComponentDescription, out: &mut String) {
    let ident = pascal_case(&component.name);
    out.push_str(&format!("{ident}.schema = {{\n"));
    out.push_str(&format!("  name: {},\n", js_string(&component.name)));
    out.push_str(&format!("  label: {},\n", js_string(&component.label)));
    out.push_str(&format!("  category: {},\n", js_string(component.category.as_str())));

    emit_default_props(component, out);
    emit_side_edit_props(component, out);

    if component.kind == ComponentKind::Section {
        emit_buttons_repeater(out);
    }

    out.push_str("}\n");
}

fn emit_default_props(component: &ComponentDescription, out: &mut String) {
    out.push_str("  getDefaultProps: () => ({\n");
    for (key, value) in &component.props {
        out.push_str(&format!("    {key}: {},\n", js_value(value, 2)));
    }
    for (key, fallback) in family_default_fallbacks(component) {
        if !component.props.contains_key(key) {
            out.push_str(&format!("    {key}: {fallback},\n"));
        }
    }
    out.push_str("  }),\n");
}

/// Placeholder defaults for family fields the mapper could not resolve.
fn family_default_fallbacks(component: &ComponentDescription) -> Vec<(&'static str, String)> {
    match &component.kind {
        ComponentKind::Heading => vec![("title", js_string("Lorem ipsum dolor sit amet"))],
        ComponentKind::Text => vec![
            ("text", js_string("<p>Lorem ipsum dolor sit amet.</p>")),
            ("textAlign", js_string("left")),
        ],
        ComponentKind::Image => vec![(
            "source",
            format!(
                "{{ src: {src}, placeholderSrc: {src}, alt: 'Image' }}",
                src = js_string(PLACEHOLDER_IMAGE)
            ),
        )],
        ComponentKind::Button => vec![
            ("text", js_string("Learn more")),
            ("href", js_string("#")),
            ("target", js_string("_self")),
        ],
        ComponentKind::Section => {
            let mut defaults = vec![
                ("imageSide", js_string("right")),
                ("bigImage", "false".to_string()),
                ("mobileImageOnTop", "false".to_string()),
                ("align", js_string("left")),
                ("verticalAlign", js_string("center")),
                ("mediaType", js_string("image")),
                ("title", section_copy_default(component, &ComponentKind::Heading, "title", "Lorem ipsum dolor sit amet")),
                ("text", section_copy_default(component, &ComponentKind::Text, "text", "<p>Lorem ipsum dolor sit amet.</p>")),
            ];
            defaults.push(("buttons", section_buttons_default(component)));
            defaults
        }
        ComponentKind::Column => vec![("width", js_string("full"))],
        ComponentKind::Video => {
            if component.prop_text("videoType") == Some("streaming")
                && !component.props.contains_key("videoId")
            {
                vec![("videoId", js_string(FALLBACK_VIDEO_ID))]
            } else {
                Vec::new()
            }
        }
        ComponentKind::Generic(_) => Vec::new(),
    }
}

/// Literal copy lifted from a descendant, baked in as the seed default; the
/// editable prop wins at render time.
fn section_copy_default(
    component: &ComponentDescription,
    kind: &ComponentKind,
    key: &str,
    placeholder: &str,
) -> String {
    let literal = component
        .find_kind(kind)
        .and_then(|child| child.prop_text(key))
        .unwrap_or(placeholder);
    js_string(literal)
}

fn section_buttons_default(component: &ComponentDescription) -> String {
    match component.find_kind(&ComponentKind::Button) {
        Some(button) => {
            let text = js_string(button.prop_text("text").unwrap_or("Learn more"));
            let href = js_string(button.prop_text("href").unwrap_or("#"));
            let variant = js_string(button.prop_text("type").unwrap_or("solid"));
            let color = js_string(button.prop_text("buttonColor").unwrap_or("gray"));
            format!("[{{ text: {text}, href: {href}, type: {variant}, buttonColor: {color} }}]")
        }
        None => "[]".to_string(),
    }
}

fn js_value(value: &PropValue, indent: usize) -> String {
    match value {
        PropValue::Bool(b) => b.to_string(),
        PropValue::Number(n) => {
            if n.fract() == 0.0 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        PropValue::Text(s) | PropValue::RichText(s) => js_string(s),
        PropValue::Image { src, alt } => {
            let alt = alt.as_deref().unwrap_or("");
            format!(
                "{{ src: {src}, placeholderSrc: {src}, alt: {alt} }}",
                src = js_string(src),
                alt = js_string(alt)
            )
        }
        PropValue::Map(map) => {
            let pad = "  ".repeat(indent + 1);
            let close = "  ".repeat(indent);
            let mut body = String::from("{\n");
            for (key, nested) in map {
                body.push_str(&format!("{pad}{key}: {},\n", js_value(nested, indent + 1)));
            }
            body.push_str(&format!("{close}}}"));
            body
        }
        PropValue::List(items) => {
            let rendered: Vec<String> = items.iter().map(|v| js_value(v, indent)).collect();
            format!("[{}]", rendered.join(", "))
        }
    }
}

fn emit_side_edit_props(component: &ComponentDescription, out: &mut String) {
    out.push_str("  sideEditProps: [\n");
    match &component.kind {
        ComponentKind::Section => {
            emit_group(
                out,
                "Layout",
                &[
                    select_prop(
                        "backgroundColor",
                        "Background color",
                        &[
                            ("bg-white", "White"),
                            ("bg-gray-100", "Light gray"),
                            ("bg-gray-800", "Dark gray"),
                        ],
                    ),
                    text_prop("paddingTop", "Padding top"),
                    text_prop("paddingBottom", "Padding bottom"),
                    bool_prop("borderTop", "Border top"),
                    bool_prop("borderBottom", "Border bottom"),
                ],
            );
        }
        ComponentKind::Heading => {
            emit_group(
                out,
                "Title",
                &[
                    select_prop(
                        "tag",
                        "Tag",
                        &[
                            ("h1", "H1"),
                            ("h2", "H2"),
                            ("h3", "H3"),
                            ("h4", "H4"),
                            ("h5", "H5"),
                            ("h6", "H6"),
                        ],
                    ),
                    bool_prop("extraBoldTitle", "Extra bold"),
                ],
            );
        }
        ComponentKind::Text => {
            emit_group(
                out,
                "Text",
                &[select_prop(
                    "textAlign",
                    "Alignment",
                    &[("left", "Left"), ("center", "Center"), ("right", "Right")],
                )],
            );
        }
        ComponentKind::Image => {
            emit_group(
                out,
                "Image",
                &[bool_prop("isRounded", "Rounded corners"), bool_prop("hasShadow", "Shadow")],
            );
        }
        ComponentKind::Button => {
            emit_group(
                out,
                "Button",
                &[
                    text_prop("text", "Label"),
                    text_prop("href", "Link"),
                    select_prop("target", "Target", &[("_self", "Same tab"), ("_blank", "New tab")]),
                    select_prop(
                        "type",
                        "Variant",
                        &[("solid", "Solid"), ("outline", "Outline"), ("link", "Link")],
                    ),
                    select_prop(
                        "buttonColor",
                        "Color",
                        &[
                            ("pink", "Pink"),
                            ("purple", "Purple"),
                            ("blue", "Blue"),
                            ("green", "Green"),
                            ("yellow", "Yellow"),
                            ("red", "Red"),
                            ("gray", "Gray"),
                        ],
                    ),
                    bool_prop("isBigButton", "Big button"),
                ],
            );
        }
        ComponentKind::Video => {
            emit_group(
                out,
                "Video",
                &[
                    select_prop(
                        "videoType",
                        "Type",
                        &[("streaming", "Streaming"), ("file", "File")],
                    ),
                    select_prop(
                        "platform",
                        "Platform",
                        &[("youtube", "YouTube"), ("vimeo", "Vimeo")],
                    ),
                    text_prop("videoId", "Video id"),
                    text_prop("videoFile", "Video file URL"),
                ],
            );
        }
        ComponentKind::Column | ComponentKind::Generic(_) => {}
    }
    out.push_str("  ],\n");
}

fn emit_group(out: &mut String, group_name: &str, props: &[String]) {
    out.push_str(&format!(
        "    {{\n      groupName: {},\n      defaultOpen: true,\n      props: [\n",
        js_string(group_name)
    ));
    for prop in props {
        out.push_str(prop);
    }
    out.push_str("      ],\n    },\n");
}

fn text_prop(name: &str, label: &str) -> String {
    format!(
        "        {{ name: {}, label: {}, type: types.SideEditPropType.Text }},\n",
        js_string(name),
        js_string(label)
    )
}

fn bool_prop(name: &str, label: &str) -> String {
    format!(
        "        {{ name: {}, label: {}, type: types.SideEditPropType.Boolean }},\n",
        js_string(name),
        js_string(label)
    )
}

fn select_prop(name: &str, label: &str, options: &[(&str, &str)]) -> String {
    let mut out = format!(
        "        {{\n          name: {},\n          label: {},\n          type: types.SideEditPropType.Select,\n          selectOptions: {{\n            display: types.OptionsDisplay.Select,\n            options: [\n",
        js_string(name),
        js_string(label)
    );
    for (value, option_label) in options {
        out.push_str(&format!(
            "              {{ value: {}, label: {} }},\n",
            js_string(value),
            js_string(option_label)
        ));
    }
    out.push_str("            ],\n          },\n        },\n");
    out
}

fn emit_buttons_repeater(out: &mut String) {
    out.push_str("  repeaterItems: [\n    {\n      name: 'buttons',\n      itemType: 'button-block',\n      itemLabel: 'Button',\n      min: 0,\n      max: 2,\n    },\n  ],\n");
}

/// Single-quoted JS string literal with the characters that matter escaped.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::mapper;
    use indexmap::IndexMap;

    fn element(element_type: &str) -> Element {
        Element {
            id: "test".to_string(),
            element_type: element_type.to_string(),
            tag: "div".to_string(),
            settings: IndexMap::new(),
            classes: Vec::new(),
            styles: IndexMap::new(),
            content: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    fn heading_component() -> ComponentDescription {
        let mut el = element("heading");
        el.content = Some("<h2>Big News</h2>".to_string());
        mapper::map(&el)
    }

    #[test]
    fn generation_is_idempotent() {
        let component = heading_component();
        assert_eq!(generate(&component), generate(&component));
    }

    #[test]
    fn exactly_one_name_literal_and_interface() {
        let source = generate(&heading_component());
        assert_eq!(source.matches("name: 'heading-block'").count(), 1);
        assert_eq!(source.matches("interface HeadingBlockProps {").count(), 1);
        assert!(source.contains("const HeadingBlock: types.Brick<HeadingBlockProps>"));
        assert!(source.ends_with("export default HeadingBlock\n"));
    }

    #[test]
    fn pascal_casing_is_stable() {
        assert_eq!(pascal_case("heading-block"), "HeadingBlock");
        assert_eq!(pascal_case("text-editor-block"), "TextEditorBlock");
        assert_eq!(pascal_case("call_to_action"), "CallToAction");
    }

    #[test]
    fn interface_carries_baseline_family_and_leftover_fields() {
        let source = generate(&heading_component());
        assert!(source.contains("  backgroundColor: string\n"));
        assert!(source.contains("  borderTop: boolean\n"));
        assert!(source.contains("  paddingBottom: string\n"));
        assert!(source.contains("  title: string\n"));
        assert!(source.contains("  extraBoldTitle: boolean\n"));
        // `size` is not in the fixed field set; its type is inferred.
        let mut el = element("heading");
        el.styles.insert("font-size".to_string(), "24px".to_string());
        let source = generate(&mapper::map(&el));
        assert!(source.contains("  size: string\n"));
    }

    #[test]
    fn heading_defaults_bake_in_sanitized_literal() {
        let source = generate(&heading_component());
        assert!(source.contains("title: 'Big News',"));
        assert!(source.contains("tag: 'h2',"));
    }

    #[test]
    fn button_body_branches_on_variant_color_and_size() {
        let mut el = element("button");
        el.classes.push("elementor-button-outline".to_string());
        let source = generate(&mapper::map(&el));
        assert!(source.contains("type === 'solid'"));
        assert!(source.contains("type === 'outline'"));
        assert!(source.contains("type === 'link'"));
        assert!(source.contains("isBigButton ?"));
        assert!(source.contains("bg-${buttonColor}-600"));
        assert!(source.contains("type: 'outline',"));
    }

    #[test]
    fn video_streaming_and_file_bodies() {
        let mut yt = element("video");
        yt.content = Some("https://www.youtube.com/embed/abc123".to_string());
        let source = generate(&mapper::map(&yt));
        assert!(source.contains("youtube.com/embed/"));
        assert!(source.contains("videoId || 'dQw4w9WgXcQ'"));
        assert!(source.contains("videoId: 'abc123',"));

        let mut file = element("video");
        file.content = Some("<video src=\"clips/intro.mp4\"></video>".to_string());
        let source = generate(&mapper::map(&file));
        assert!(source.contains("<video className=\"w-full\" controls"));
        assert!(source.contains("'clips/intro.mp4'"));
    }

    #[test]
    fn text_alignment_reaches_defaults_and_render() {
        let mut el = element("text-editor");
        el.content = Some("<p>Centered copy</p>".to_string());
        el.styles.insert("text-align".to_string(), "center".to_string());
        let source = generate(&mapper::map(&el));
        assert!(source.contains("  textAlign,\n"));
        assert!(source.contains("textAlign === 'center' && 'text-center'"));
        assert!(source.contains("textAlign: 'center',"));
        assert!(!source.contains("textAlign: 'left',"));

        // Without an override the fallback default stands.
        let plain = generate(&mapper::map(&element("text-editor")));
        assert!(plain.contains("textAlign: 'left',"));
    }

    #[test]
    fn video_interface_declares_optional_media_fields() {
        let source = generate(&mapper::map(&element("video")));
        assert!(source.contains("  videoType: string\n"));
        assert!(source.contains("  platform?: string\n"));
        assert!(source.contains("  videoId?: string\n"));
        assert!(source.contains("  videoFile?: { url: string }\n"));

        let mut yt = element("video");
        yt.content = Some("https://youtu.be/abc123".to_string());
        let resolved = generate(&mapper::map(&yt));
        // A resolved id is declared once, never re-inferred as a leftover.
        assert_eq!(resolved.matches("videoId?: string").count(), 1);
        assert!(!resolved.contains("  videoId: string\n"));
    }

    #[test]
    fn unknown_type_gets_a_visible_placeholder() {
        let component = mapper::map(&element("testimonial"));
        assert!(!component.name.is_empty());
        assert!(!component.label.is_empty());
        let source = generate(&component);
        assert!(source.contains(">testimonial-block</p>"));
        assert_eq!(source.matches("name: 'testimonial-block'").count(), 1);
    }

    #[test]
    fn section_schema_has_bounded_buttons_repeater() {
        let mut section = element("section");
        section.children.push(element("heading"));
        let source = generate(&mapper::map(&section));
        assert!(source.contains("repeaterItems:"));
        assert!(source.contains("itemType: 'button-block'"));
        assert!(source.contains("min: 0,"));
        assert!(source.contains("max: 2,"));
    }

    #[test]
    fn section_imports_cover_the_whole_subtree() {
        let mut section = element("section");
        let mut column = element("column");
        column.children.push(element("image"));
        column.children.push(element("button"));
        section.children.push(column);

        let source = generate(&mapper::map(&section));
        let import_line = source
            .lines()
            .find(|l| l.contains("react-bricks/frontend"))
            .expect("framework import present");
        for name in ["types", "RichText", "Repeater", "Image", "Link"] {
            assert!(import_line.contains(name), "missing import {name}");
        }
        assert_eq!(source.matches("react-bricks/frontend").count(), 1);
        assert!(source.contains("import classNames from 'classnames'"));
    }

    #[test]
    fn section_with_copy_and_image_uses_two_side_layout() {
        let mut section = element("section");
        let mut column = element("column");
        let mut heading = element("heading");
        heading.content = Some("<h2>Hello</h2>".to_string());
        column.children.push(heading);
        column.children.push(element("image"));
        section.children.push(column);

        let source = generate(&mapper::map(&section));
        assert!(source.contains("md:w-1/2 md:pr-8"));
        assert!(source.contains("propName=\"sideImage\""));
        // Literal copy from the subtree seeds the defaults.
        assert!(source.contains("title: 'Hello',"));
    }

    #[test]
    fn plain_section_falls_back_to_generic_container() {
        let source = generate(&mapper::map(&element("section")));
        assert!(!source.contains("sideImage"));
        assert!(source.contains("<div className=\"flex flex-col\">"));
        assert!(source.contains("buttons: [],"));
    }

    #[test]
    fn column_previews_children_inline() {
        let mut column = element("column");
        column.settings.insert("_column_size".to_string(), serde_json::json!(50));
        let mut heading = element("heading");
        heading.content = Some("<h2>Title</h2>".to_string());
        column.children.push(heading);
        column.children.push(element("testimonial"));

        let source = generate(&mapper::map(&column));
        assert!(source.contains("md:w-1/2"));
        assert!(source.contains("{'Title'}"));
        assert!(source.contains("{/* testimonial-block */}"));
    }

    #[test]
    fn js_strings_are_escaped() {
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("a\nb"), "'a\\nb'");
        assert_eq!(js_string("back\\slash"), "'back\\\\slash'");
    }

    #[test]
    fn shared_import_accumulator_unions_across_calls() {
        let mut imports = ImportSet::default();
        generate_with_imports(&mapper::map(&element("image")), &mut imports);
        let source = generate_with_imports(&mapper::map(&element("button")), &mut imports);
        let import_line = source
            .lines()
            .find(|l| l.contains("react-bricks/frontend"))
            .expect("framework import present");
        assert!(import_line.contains("Image"));
        assert!(import_line.contains("Link"));
    }
}
