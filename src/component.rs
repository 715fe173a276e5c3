use indexmap::IndexMap;

/// Closed set of component kinds the mapper and generator understand.
///
/// Derived once from an element's type string; everything downstream matches
/// on this exhaustively, so unrecognized widgets travel as `Generic` instead
/// of falling through scattered string checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    Section,
    Column,
    Heading,
    Text,
    Image,
    Button,
    Video,
    Generic(String),
}

impl ComponentKind {
    pub fn from_element_type(element_type: &str) -> Self {
        match element_type {
            "section" => Self::Section,
            "column" => Self::Column,
            t if t.contains("heading") => Self::Heading,
            t if t.contains("text") => Self::Text,
            t if t.contains("image") => Self::Image,
            t if t.contains("button") => Self::Button,
            t if t.contains("video") => Self::Video,
            t => Self::Generic(t.to_string()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Section | Self::Column => Category::Layout,
            Self::Heading | Self::Text => Category::Typography,
            Self::Image | Self::Video => Category::Media,
            Self::Button => Category::CallToAction,
            Self::Generic(t) if t.contains("form") => Category::Forms,
            Self::Generic(_) => Category::Other,
        }
    }
}

/// Coarse grouping used in the generated schema block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Layout,
    Typography,
    Media,
    CallToAction,
    Forms,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Typography => "typography",
            Self::Media => "media",
            Self::CallToAction => "call-to-action",
            Self::Forms => "forms",
            Self::Other => "other",
        }
    }
}

/// A typed prop value on a mapped component.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Rich markup intended for an editable rich-text field.
    RichText(String),
    /// Image reference with an optional alt text.
    Image { src: String, alt: Option<String> },
    Map(IndexMap<String, PropValue>),
    List(Vec<PropValue>),
}

impl PropValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::RichText(s) => Some(s),
            _ => None,
        }
    }
}

/// One component instance in the target framework's schema.
///
/// Mirrors the source element tree one to one: same child arity, same order.
#[derive(Debug, Clone)]
pub struct ComponentDescription {
    /// Canonical identifier, kebab-case with a `-block` suffix.
    pub name: String,
    /// Display name derived from `name`.
    pub label: String,
    pub category: Category,
    pub kind: ComponentKind,
    /// Configuration surface, in the order the mapper produced it.
    pub props: IndexMap<String, PropValue>,
    pub children: Vec<ComponentDescription>,
    /// Bounded repeated-item groups, e.g. a row of buttons on a section.
    pub repeater_items: IndexMap<String, Vec<IndexMap<String, PropValue>>>,
}

impl ComponentDescription {
    /// Prop value as a string, if present and string-shaped.
    pub fn prop_text(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(PropValue::as_text)
    }

    /// Prop value as a bool, defaulting to false.
    pub fn prop_bool(&self, key: &str) -> bool {
        matches!(self.props.get(key), Some(PropValue::Bool(true)))
    }

    /// True when this node or any descendant has one of the given kinds.
    pub fn subtree_has(&self, kinds: &[ComponentKind]) -> bool {
        kinds.contains(&self.kind) || self.children.iter().any(|c| c.subtree_has(kinds))
    }

    /// First node of the given kind in this subtree, pre-order.
    pub fn find_kind(&self, kind: &ComponentKind) -> Option<&ComponentDescription> {
        if &self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_kind(kind))
    }
}
