use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub builder: BuilderConfig,
    pub http: HttpConfig,
}

/// Class and attribute conventions of the source page builder. Defaults
/// describe stock Elementor markup; overridable for white-labeled installs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Builder name, used to pick out its `<style>` blocks.
    pub name: String,
    /// Class of the single root container.
    pub root_class: String,
    /// Marker class carried by every builder element.
    pub element_class: String,
    pub section_class: String,
    pub column_class: String,
    /// Marker class present on widget elements.
    pub widget_class: String,
    /// Prefix stripped from the most specific widget class to get the type.
    pub widget_prefix: String,
    /// Attribute-name prefix for settings attributes.
    pub data_prefix: String,
    /// Attribute holding the builder's own element id.
    pub id_attribute: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            name: "elementor".to_string(),
            root_class: "elementor".to_string(),
            element_class: "elementor-element".to_string(),
            section_class: "elementor-section".to_string(),
            column_class: "elementor-column".to_string(),
            widget_class: "elementor-widget".to_string(),
            widget_prefix: "elementor-widget-".to_string(),
            data_prefix: "data-".to_string(),
            id_attribute: "data-id".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("brickify/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_stock_markup() {
        let config = Config::default();
        assert_eq!(config.builder.root_class, "elementor");
        assert_eq!(config.builder.widget_prefix, "elementor-widget-");
        assert_eq!(config.builder.data_prefix, "data-");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config =
            toml::from_str("[builder]\nroot_class = \"custom\"\n").expect("valid toml");
        assert_eq!(config.builder.root_class, "custom");
        assert_eq!(config.builder.element_class, "elementor-element");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/definitely/not/here.toml"));
        assert_eq!(config.builder.name, "elementor");
    }
}
