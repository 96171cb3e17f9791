//! Site configuration for the Swift documentation translation.
//!
//! This crate provides:
//! - [`top_nav`] and [`sidebar`]: the navigation content of the site
//! - [`ThemeConfig`]: UI string tables for the default theme
//! - [`SiteConfig`]: the root configuration value handed to the site engine
//!
//! # Quick Start
//!
//! ```
//! let config = sz_site::site_config();
//!
//! assert_eq!(config.title, "Swift 编程语言");
//! assert_eq!(config.theme_config.nav.len(), 2);
//!
//! let json = config.to_json().unwrap();
//! assert!(json.contains("\"themeConfig\""));
//! ```

mod content;
mod site;
mod theme;

pub use content::{ROUTE_PREFIX, sidebar, top_nav};
pub use site::{SiteConfig, ThemeExtension, site_config};
pub use theme::{
    DocFooter, EditLink, Footer, FormatOptions, LastUpdated, NotFound, Outline, SearchButton,
    SearchConfig, SearchFooter, SearchModal, SearchOptions, SearchTranslations, SocialLink,
    ThemeConfig,
};
