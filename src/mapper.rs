use std::sync::LazyLock;

use indexmap::IndexMap;
use regex_lite::Regex;
use serde_json::Value;

use crate::component::{ComponentDescription, ComponentKind, PropValue};
use crate::element::Element;
use crate::style;

static IMG_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]*\ssrc=["']([^"']+)["']"#).expect("hardcoded pattern"));
static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=["']([^"']+)["']"#).expect("hardcoded pattern"));
static ANCHOR_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a[^>]*>(.*?)</a>").expect("hardcoded pattern"));
static BG_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(['"]?([^'")]+)['"]?\)"#).expect("hardcoded pattern"));
static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/embed/|youtu\.be/|[?&]v=)([A-Za-z0-9_-]+)")
        .expect("hardcoded pattern")
});
static VIMEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(?:video/)?(\d+)").expect("hardcoded pattern"));
static VIDEO_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src=["']([^"']+\.(?:mp4|webm|ogv|ogg))["']"#).expect("hardcoded pattern")
});
static MEDIA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^\s"'<>]+\.(?:mp4|webm|ogv|ogg)"#).expect("hardcoded pattern")
});
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("hardcoded pattern"));
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*class=["'][^"']*["']"#).expect("hardcoded pattern"));
static DATA_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s*data-[a-zA-Z0-9_-]+=["'][^"']*["']"#).expect("hardcoded pattern")
});

/// Map one element (and its subtree) into a component description.
///
/// Pure and total: malformed styles or settings leave the defaults standing,
/// and the mapped tree always mirrors the element tree node for node.
pub fn map(element: &Element) -> ComponentDescription {
    map_with_parent(element, None)
}

/// Same as [`map`] with the parent's kind available as a hint. No current
/// refinement consults it, but it is part of the contract so width rules can
/// become parent-sensitive without an API break.
pub fn map_with_parent(
    element: &Element,
    _parent: Option<&ComponentKind>,
) -> ComponentDescription {
    let kind = ComponentKind::from_element_type(&element.element_type);
    let name = format!("{}-block", element.element_type);

    let mut component = ComponentDescription {
        label: label_from_name(&name),
        name,
        category: kind.category(),
        kind: kind.clone(),
        props: baseline_props(element),
        children: Vec::new(),
        repeater_items: IndexMap::new(),
    };

    match &kind {
        ComponentKind::Section => refine_section(element, &mut component),
        ComponentKind::Column => refine_column(element, &mut component),
        ComponentKind::Heading => refine_heading(element, &mut component),
        ComponentKind::Text => refine_text(element, &mut component),
        ComponentKind::Image => refine_image(element, &mut component),
        ComponentKind::Button => refine_button(element, &mut component),
        ComponentKind::Video => refine_video(element, &mut component),
        ComponentKind::Generic(_) => refine_generic(element, &mut component),
    }

    component.children = element
        .children
        .iter()
        .map(|child| map_with_parent(child, Some(&kind)))
        .collect();

    component
}

/// `heading-block` -> `Heading Block`.
fn label_from_name(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Props every component starts from, then overridden per inline style.
fn baseline_props(element: &Element) -> IndexMap<String, PropValue> {
    let mut props = IndexMap::new();
    props.insert("backgroundColor".to_string(), PropValue::text("bg-white"));
    props.insert("borderTop".to_string(), PropValue::Bool(false));
    props.insert("borderBottom".to_string(), PropValue::Bool(false));
    props.insert("paddingTop".to_string(), PropValue::text("normal"));
    props.insert("paddingBottom".to_string(), PropValue::text("normal"));

    if let Some(color) = element.style("background-color") {
        props.insert(
            "backgroundColor".to_string(),
            PropValue::Text(style::background_class(color)),
        );
    }

    if let Some(shorthand) = element.style("padding") {
        if let Some((top, bottom)) = style::map_padding_shorthand(shorthand) {
            props.insert("paddingTop".to_string(), PropValue::Text(top));
            props.insert("paddingBottom".to_string(), PropValue::Text(bottom));
        }
    }
    if let Some(value) = element.style("padding-top") {
        props.insert("paddingTop".to_string(), PropValue::Text(style::map_spacing(value)));
    }
    if let Some(value) = element.style("padding-bottom") {
        props.insert("paddingBottom".to_string(), PropValue::Text(style::map_spacing(value)));
    }

    if let Some(shorthand) = element.style("margin") {
        if let Some((top, bottom)) = style::map_margin_shorthand(shorthand) {
            props.insert("marginTop".to_string(), PropValue::Text(top));
            props.insert("marginBottom".to_string(), PropValue::Text(bottom));
        }
    }
    if let Some(value) = element.style("margin-top") {
        props.insert("marginTop".to_string(), PropValue::Text(style::map_spacing(value)));
    }
    if let Some(value) = element.style("margin-bottom") {
        props.insert("marginBottom".to_string(), PropValue::Text(style::map_spacing(value)));
    }

    if has_visible_border(element, "border-top") {
        props.insert("borderTop".to_string(), PropValue::Bool(true));
    }
    if has_visible_border(element, "border-bottom") {
        props.insert("borderBottom".to_string(), PropValue::Bool(true));
    }

    if let Some(align) = element.style("text-align") {
        props.insert("textAlign".to_string(), PropValue::text(align));
    }

    props
}

fn has_visible_border(element: &Element, property: &str) -> bool {
    element
        .style(property)
        .is_some_and(|v| !v.starts_with('0') && !v.contains("none"))
}

fn refine_section(element: &Element, component: &mut ComponentDescription) {
    if let Some(structure) = section_setting(element, "structure") {
        component.props.insert("structure".to_string(), PropValue::Text(structure));
    }

    if element.has_class_marker("full_width") || element.has_class_marker("full-width") {
        component.props.insert("fullWidth".to_string(), PropValue::Bool(true));
    }

    if let Some(src) = element
        .style("background-image")
        .and_then(|v| BG_URL.captures(v))
        .map(|c| c[1].to_string())
    {
        component
            .props
            .insert("backgroundImage".to_string(), PropValue::Image { src, alt: None });
        let position = element.style("background-position").unwrap_or("center center");
        component
            .props
            .insert("backgroundPosition".to_string(), PropValue::text(position));
    }
}

/// Settings may sit flat on the element or nested inside the builder's
/// structured settings attribute; accept both.
fn section_setting(element: &Element, key: &str) -> Option<String> {
    if let Some(value) = element.settings.get(key) {
        return value_as_string(value);
    }
    element
        .settings
        .get("settings")
        .and_then(|v| v.get(key))
        .and_then(value_as_string)
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn refine_column(element: &Element, component: &mut ComponentDescription) {
    let size = element
        .setting_number("_column_size")
        .or_else(|| element.setting_number("col"))
        .or_else(|| element.setting_number("width"));
    if let Some(size) = size {
        component
            .props
            .insert("width".to_string(), PropValue::text(style::map_column_width(size)));
    }
}

fn refine_heading(element: &Element, component: &mut ComponentDescription) {
    let tag = match element.tag.as_str() {
        t @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => t,
        _ => "h2",
    };
    component.props.insert("tag".to_string(), PropValue::text(tag));

    if let Some(content) = &element.content {
        component
            .props
            .insert("title".to_string(), PropValue::Text(plain_text(content)));
    }

    if let Some(size) = element.style("font-size") {
        component
            .props
            .insert("size".to_string(), PropValue::text(style::map_font_size(size)));
    }

    let extra_bold = element.style("font-weight").is_some_and(|w| {
        w == "bold" || w.trim().parse::<f64>().is_ok_and(|n| n >= 700.0)
    });
    component
        .props
        .insert("extraBoldTitle".to_string(), PropValue::Bool(extra_bold));
}

fn refine_text(element: &Element, component: &mut ComponentDescription) {
    if let Some(content) = &element.content {
        component
            .props
            .insert("text".to_string(), PropValue::RichText(sanitize_markup(content)));
    }
}

fn refine_image(element: &Element, component: &mut ComponentDescription) {
    let src = element
        .content
        .as_deref()
        .and_then(|c| IMG_SRC.captures(c))
        .map(|c| c[1].to_string())
        .or_else(|| {
            element
                .settings
                .get("image")
                .and_then(|v| v.get("url"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .or_else(|| element.setting_str("image").map(str::to_string))
        .or_else(|| element.setting_str("url").map(str::to_string));

    if let Some(src) = src {
        let alt = element
            .settings
            .get("image")
            .and_then(|v| v.get("alt"))
            .and_then(Value::as_str)
            .or_else(|| element.setting_str("alt"))
            .map(str::to_string);
        component.props.insert("source".to_string(), PropValue::Image { src, alt });
    }

    let rounded = element.style("border-radius").is_some() || element.has_class_marker("rounded");
    let shadow = element.style("box-shadow").is_some() || element.has_class_marker("shadow");
    component.props.insert("isRounded".to_string(), PropValue::Bool(rounded));
    component.props.insert("hasShadow".to_string(), PropValue::Bool(shadow));
}

fn refine_button(element: &Element, component: &mut ComponentDescription) {
    if let Some(content) = &element.content {
        let label = ANCHOR_TEXT
            .captures(content)
            .map(|c| plain_text(&c[1]))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| plain_text(content));
        if !label.is_empty() {
            component.props.insert("text".to_string(), PropValue::Text(label));
        }
        if let Some(href) = HREF.captures(content).map(|c| c[1].to_string()) {
            component.props.insert("href".to_string(), PropValue::Text(href));
        }
    }

    // Outline beats link beats the solid default.
    let variant = if element.has_class_marker("outline") {
        "outline"
    } else if element.has_class_marker("link") {
        "link"
    } else {
        "solid"
    };
    component.props.insert("type".to_string(), PropValue::text(variant));

    let color_token = element
        .style("background-color")
        .map(style::map_color)
        .unwrap_or_default();
    component
        .props
        .insert("buttonColor".to_string(), PropValue::text(style::button_color(&color_token)));

    let big = element.has_class_marker("size-lg")
        || element.has_class_marker("size-xl")
        || element.has_class_marker("large")
        || element.has_class_marker("xlarge");
    component.props.insert("isBigButton".to_string(), PropValue::Bool(big));
}

fn refine_video(element: &Element, component: &mut ComponentDescription) {
    // Settings string values join the haystack; video URLs usually live in
    // the builder's structured settings rather than the markup.
    let mut haystack = element.content.clone().unwrap_or_default();
    for value in element.settings.values() {
        append_strings(value, &mut haystack);
    }

    if haystack.contains("youtube") || haystack.contains("youtu.be") {
        if let Some(id) = YOUTUBE_ID.captures(&haystack).map(|c| c[1].to_string()) {
            set_streaming(component, "youtube", Some(id));
            return;
        }
        set_streaming(component, "youtube", None);
        return;
    }

    if haystack.contains("vimeo") {
        if let Some(id) = VIMEO_ID.captures(&haystack).map(|c| c[1].to_string()) {
            set_streaming(component, "vimeo", Some(id));
            return;
        }
        set_streaming(component, "vimeo", None);
        return;
    }

    let hosted = haystack.contains("<video")
        || element.setting_str("video_type") == Some("hosted")
        || section_setting(element, "video_type").as_deref() == Some("hosted");
    if hosted {
        let url = element
            .content
            .as_deref()
            .and_then(|c| VIDEO_SRC.captures(c))
            .map(|c| c[1].to_string())
            .or_else(|| MEDIA_URL.find(&haystack).map(|m| m.as_str().to_string()));
        if let Some(url) = url {
            component.props.insert("videoType".to_string(), PropValue::text("file"));
            let mut file = IndexMap::new();
            file.insert("url".to_string(), PropValue::Text(url));
            component.props.insert("videoFile".to_string(), PropValue::Map(file));
            return;
        }
    }

    // Nothing recognizable: stay on the streaming branch with no id so the
    // generator's fallback keeps the output non-empty.
    set_streaming(component, "youtube", None);
}

fn set_streaming(component: &mut ComponentDescription, platform: &str, id: Option<String>) {
    component.props.insert("videoType".to_string(), PropValue::text("streaming"));
    component.props.insert("platform".to_string(), PropValue::text(platform));
    if let Some(id) = id {
        component.props.insert("videoId".to_string(), PropValue::Text(id));
    }
}

fn append_strings(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => {
            out.push(' ');
            out.push_str(s);
        }
        Value::Object(map) => {
            for v in map.values() {
                append_strings(v, out);
            }
        }
        Value::Array(items) => {
            for v in items {
                append_strings(v, out);
            }
        }
        _ => {}
    }
}

fn refine_generic(element: &Element, component: &mut ComponentDescription) {
    if let Some(content) = &element.content {
        component.props.insert("content".to_string(), PropValue::Text(content.clone()));
    }
}

/// Drop builder class and data attributes from inner markup, keeping the
/// tags themselves for rich-text use.
pub fn sanitize_markup(content: &str) -> String {
    let without_classes = CLASS_ATTR.replace_all(content, "");
    let without_data = DATA_ATTR.replace_all(&without_classes, "");
    without_data.trim().to_string()
}

/// Reduce inner markup to whitespace-normalized plain text.
pub fn plain_text(content: &str) -> String {
    let stripped = HTML_TAG.replace_all(content, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
