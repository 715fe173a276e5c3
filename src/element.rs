use indexmap::IndexMap;
use serde_json::Value;

/// One node of the builder's markup tree.
///
/// Built by the parser, read by the mapper; never mutated after a parse
/// completes.
#[derive(Debug, Clone)]
pub struct Element {
    /// Stable identifier, taken from the builder's id attribute when present,
    /// otherwise synthesized (unique within one parse).
    pub id: String,
    /// Discriminator: `section`, `column`, a widget type such as `heading` or
    /// `text-editor`, or the fallback `widget`.
    pub element_type: String,
    /// Underlying markup tag name, lowercase.
    pub tag: String,
    /// Builder settings decoded from data attributes. Values that decode as
    /// JSON keep their structure; everything else stays a raw string.
    pub settings: IndexMap<String, Value>,
    /// Class tokens in document order.
    pub classes: Vec<String>,
    /// Inline style declarations, property name to raw value.
    pub styles: IndexMap<String, String>,
    /// Raw inner markup, populated only for text-bearing types.
    pub content: Option<String>,
    /// Remaining attributes not consumed as settings, style, class, or id.
    pub attributes: IndexMap<String, String>,
    /// Nested builder elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// True when any class token contains the given marker substring.
    pub fn has_class_marker(&self, marker: &str) -> bool {
        self.classes.iter().any(|c| c.contains(marker))
    }

    /// Inline style value for a property, if set.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Settings value as a string, accepting either a JSON string or a bare
    /// raw value.
    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(Value::as_str)
    }

    /// Settings value as a number, accepting either a JSON number or a
    /// numeric string.
    pub fn setting_number(&self, key: &str) -> Option<f64> {
        match self.settings.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Result of parsing one page.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Document title, empty when the page has none.
    pub title: String,
    /// Top-level builder elements in document order.
    pub elements: Vec<Element>,
    /// Raw `<style>` bodies from the head that mention the builder, keyed
    /// `style-0`, `style-1`, ... Advisory only; no CSS parsing is done.
    pub global_styles: IndexMap<String, String>,
}
