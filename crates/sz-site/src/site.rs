//! Root site configuration.

use serde::Serialize;

use crate::theme::ThemeConfig;

/// Name of the engine's built-in theme.
const DEFAULT_THEME: &str = "default";

/// Stylesheet layered on top of the default theme.
const CUSTOM_STYLESHEET: &str = "./styles.css";

/// Theme used by the site: a base theme plus extra stylesheets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeExtension {
    /// Theme being extended.
    pub extends: String,
    /// Stylesheets imported after the base theme, in order.
    pub styles: Vec<String>,
}

impl Default for ThemeExtension {
    fn default() -> Self {
        Self {
            extends: DEFAULT_THEME.to_owned(),
            styles: vec![CUSTOM_STYLESHEET.to_owned()],
        }
    }
}

/// Configuration object handed to the site engine.
///
/// Built once per invocation and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Path the site is served under.
    pub base: String,
    /// Default theme options.
    pub theme_config: ThemeConfig,
    /// Theme composition.
    pub theme: ThemeExtension,
}

/// Build the site configuration.
#[must_use]
pub fn site_config() -> SiteConfig {
    let config = SiteConfig {
        title: "Swift 编程语言".to_owned(),
        description: "官方文档中文翻译".to_owned(),
        base: "/swift-zh/".to_owned(),
        theme_config: ThemeConfig::new(),
        theme: ThemeExtension::default(),
    };

    tracing::debug!(
        nav = config.theme_config.nav.len(),
        sidebars = config.theme_config.sidebar.len(),
        "Built site configuration"
    );
    config
}

impl SiteConfig {
    /// Override the site title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the meta description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Override the base path.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_site_config_fields() {
        let config = site_config();

        assert_eq!(config.title, "Swift 编程语言");
        assert_eq!(config.description, "官方文档中文翻译");
        assert_eq!(config.base, "/swift-zh/");
    }

    #[test]
    fn test_theme_extends_default_with_stylesheet() {
        let theme = site_config().theme;

        assert_eq!(theme.extends, "default");
        assert_eq!(theme.styles, vec!["./styles.css"]);
    }

    #[test]
    fn test_overrides_replace_site_fields() {
        let config = site_config()
            .with_title("Swift")
            .with_description("Docs")
            .with_base("/swift/");

        assert_eq!(config.title, "Swift");
        assert_eq!(config.description, "Docs");
        assert_eq!(config.base, "/swift/");
        assert_eq!(config.theme_config, ThemeConfig::new());
    }

    #[test]
    fn test_to_json_top_level_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&site_config().to_json().unwrap()).unwrap();

        assert_eq!(json["title"], "Swift 编程语言");
        assert_eq!(json["base"], "/swift-zh/");
        assert!(json["themeConfig"].is_object());
        assert_eq!(json["theme"]["extends"], "default");
    }

    #[test]
    fn test_to_json_is_deterministic() {
        assert_eq!(
            site_config().to_json_pretty().unwrap(),
            site_config().to_json_pretty().unwrap()
        );
    }
}
