//! Navigation items.
//!
//! A sidebar is a tree of [`SidebarItem`]s: leaves are [`NavLink`]s and
//! inner nodes are [`SidebarSection`]s. Parents own their children; the
//! tree is built once and never mutated afterwards.

use serde::Serialize;

/// Labeled link. Used for both top navigation and sidebar leaves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label.
    pub text: String,
    /// Link target, relative to the enclosing base when inside a sidebar.
    pub link: String,
}

impl NavLink {
    /// Create a new link.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Collapsible group of sidebar items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Display label.
    pub text: String,
    /// Whether the section starts collapsed.
    pub collapsed: bool,
    /// Path prefix prepended to every descendant link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Landing page of the section itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Child items in display order.
    pub items: Vec<SidebarItem>,
}

impl SidebarSection {
    /// Create a collapsed section.
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            collapsed: true,
            base: None,
            link: None,
            items,
        }
    }

    /// Set the path prefix for descendant links.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Set the section landing link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Start the section expanded.
    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.collapsed = false;
        self
    }
}

/// Sidebar tree node.
///
/// Serialized untagged: the engine tells leaves from sections by shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Terminal link.
    Link(NavLink),
    /// Nested section.
    Section(SidebarSection),
}

impl SidebarItem {
    /// Display label.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::Section(section) => &section.text,
        }
    }

    /// Own link target, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(&link.link),
            Self::Section(section) => section.link.as_deref(),
        }
    }

    /// Child items (empty for links).
    #[must_use]
    pub fn children(&self) -> &[SidebarItem] {
        match self {
            Self::Link(_) => &[],
            Self::Section(section) => &section.items,
        }
    }
}

impl From<NavLink> for SidebarItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<SidebarSection> for SidebarItem {
    fn from(section: SidebarSection) -> Self {
        Self::Section(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults_to_collapsed() {
        let section = SidebarSection::new("Guide", Vec::new());

        assert!(section.collapsed);
        assert!(section.base.is_none());
        assert!(section.link.is_none());
    }

    #[test]
    fn test_section_expanded_overrides_default() {
        let section = SidebarSection::new("Guide", Vec::new()).expanded();

        assert!(!section.collapsed);
    }

    #[test]
    fn test_item_accessors() {
        let leaf: SidebarItem = NavLink::new("Basics", "the-basics").into();
        let section: SidebarItem = SidebarSection::new("Guide", vec![leaf.clone()])
            .with_link("/")
            .into();

        assert_eq!(leaf.text(), "Basics");
        assert_eq!(leaf.link(), Some("the-basics"));
        assert!(leaf.children().is_empty());
        assert_eq!(section.text(), "Guide");
        assert_eq!(section.link(), Some("/"));
        assert_eq!(section.children(), &[leaf]);
    }

    #[test]
    fn test_link_serialization() {
        let item: SidebarItem = NavLink::new("Basics", "the-basics").into();

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json, serde_json::json!({"text": "Basics", "link": "the-basics"}));
    }

    #[test]
    fn test_section_serialization_skips_unset_fields() {
        let item: SidebarItem =
            SidebarSection::new("Guide", vec![NavLink::new("Basics", "the-basics").into()])
                .with_base("/docs/guide/")
                .into();

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["text"], "Guide");
        assert_eq!(json["collapsed"], true);
        assert_eq!(json["base"], "/docs/guide/");
        assert!(json.get("link").is_none());
        assert_eq!(json["items"][0]["link"], "the-basics");
    }
}
