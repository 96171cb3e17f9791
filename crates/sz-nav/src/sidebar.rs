//! Sidebar groups keyed by route prefix.
//!
//! The engine picks the group whose route prefix is the longest prefix of
//! the current page path and renders it alongside the page.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::compose::{ResolvedLink, compose_items, resolve_items};
use crate::item::SidebarItem;

/// Sidebar shown for every page under one route prefix.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SidebarGroup {
    /// Path prefix prepended to every link in the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Top-level items in display order.
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    /// Create a group without a base.
    pub fn new(items: Vec<SidebarItem>) -> Self {
        Self { base: None, items }
    }

    /// Set the group base.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Every link in the group, composed, depth-first in display order.
    #[must_use]
    pub fn resolved_links(&self) -> Vec<ResolvedLink> {
        let mut out = Vec::new();
        resolve_items(&self.items, self.base.as_deref(), &mut Vec::new(), &mut out);
        out
    }

    /// Copy of the group with all bases applied to the links.
    #[must_use]
    pub fn composed(&self) -> Self {
        Self {
            base: None,
            items: compose_items(&self.items, self.base.as_deref()),
        }
    }
}

/// Sidebar groups keyed by route prefix, in insertion order.
///
/// Serializes as a JSON object whose keys are the route prefixes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    groups: Vec<(String, SidebarGroup)>,
}

impl Sidebar {
    /// Create an empty sidebar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group, replacing any group with the same route prefix.
    #[must_use]
    pub fn with_group(mut self, prefix: impl Into<String>, group: SidebarGroup) -> Self {
        self.insert(prefix, group);
        self
    }

    /// Add a group, replacing any group with the same route prefix.
    ///
    /// Returns the replaced group.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        group: SidebarGroup,
    ) -> Option<SidebarGroup> {
        let prefix = prefix.into();
        if let Some((_, existing)) = self.groups.iter_mut().find(|(p, _)| *p == prefix) {
            return Some(std::mem::replace(existing, group));
        }
        self.groups.push((prefix, group));
        None
    }

    /// Get the group registered under an exact route prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&SidebarGroup> {
        self.groups
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, group)| group)
    }

    /// Iterate over `(route prefix, group)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SidebarGroup)> {
        self.groups.iter().map(|(p, g)| (p.as_str(), g))
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the sidebar has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Find the group shown for a page.
    ///
    /// Returns the group with the longest route prefix matching `page_path`.
    /// The leading `/` of `page_path` is optional, and a page path equal to
    /// a prefix without its trailing `/` also matches.
    #[must_use]
    pub fn resolve(&self, page_path: &str) -> Option<(&str, &SidebarGroup)> {
        let page_path = if page_path.starts_with('/') {
            page_path.to_owned()
        } else {
            format!("/{page_path}")
        };

        let found = self
            .iter()
            .filter(|(prefix, _)| {
                page_path.starts_with(prefix)
                    || prefix
                        .strip_suffix('/')
                        .is_some_and(|trimmed| trimmed == page_path)
            })
            .max_by_key(|(prefix, _)| prefix.len());

        tracing::debug!(
            page = %page_path,
            prefix = found.map(|(prefix, _)| prefix),
            "Resolved sidebar"
        );
        found
    }

    /// Every link in every group, composed, in display order.
    #[must_use]
    pub fn resolved_links(&self) -> Vec<ResolvedLink> {
        self.groups
            .iter()
            .flat_map(|(_, group)| group.resolved_links())
            .collect()
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (prefix, group) in &self.groups {
            map.serialize_entry(prefix, group)?;
        }
        map.end()
    }
}
