//! Prefix composition.
//!
//! A section's `base` is prepended to every link below it. The nearest
//! `base` wins: a nested section with its own `base` replaces the one it
//! inherited rather than extending it.

use crate::item::SidebarItem;

/// Link prefixes that are never composed with a base.
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:"];

/// Sidebar link after prefix composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Labels from the group root down to the item (inclusive).
    pub trail: Vec<String>,
    /// Composed target.
    pub path: String,
}

/// Check whether a link points outside the site.
#[must_use]
pub fn is_external(link: &str) -> bool {
    EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| link.starts_with(prefix))
}

/// Prepend `base` to `link`.
///
/// External links and links without a base are returned unchanged. A `/`
/// shared by the end of `base` and the start of `link` appears once.
///
/// # Examples
///
/// ```
/// use sz_nav::compose_link;
///
/// assert_eq!(compose_link(Some("/docs/guide/"), "the-basics"), "/docs/guide/the-basics");
/// assert_eq!(compose_link(Some("/docs/reference/"), "/"), "/docs/reference/");
/// assert_eq!(compose_link(None, "the-basics"), "the-basics");
/// ```
#[must_use]
pub fn compose_link(base: Option<&str>, link: &str) -> String {
    let Some(base) = base.filter(|b| !b.is_empty()) else {
        return link.to_owned();
    };
    if is_external(link) {
        return link.to_owned();
    }

    if base.ends_with('/')
        && let Some(rest) = link.strip_prefix('/')
    {
        format!("{base}{rest}")
    } else {
        format!("{base}{link}")
    }
}

/// Effective base for an item given the base it inherits.
pub(crate) fn effective_base<'a>(
    item: &'a SidebarItem,
    inherited: Option<&'a str>,
) -> Option<&'a str> {
    match item {
        SidebarItem::Link(_) => inherited,
        SidebarItem::Section(section) => section.base.as_deref().or(inherited),
    }
}

/// Flatten items depth-first in display order.
pub(crate) fn resolve_items(
    items: &[SidebarItem],
    base: Option<&str>,
    trail: &mut Vec<String>,
    out: &mut Vec<ResolvedLink>,
) {
    for item in items {
        let base = effective_base(item, base);
        trail.push(item.text().to_owned());

        if let Some(link) = item.link() {
            out.push(ResolvedLink {
                trail: trail.clone(),
                path: compose_link(base, link),
            });
        }
        resolve_items(item.children(), base, trail, out);

        trail.pop();
    }
}

/// Copy of `items` with every link composed and every `base` cleared.
pub(crate) fn compose_items(items: &[SidebarItem], base: Option<&str>) -> Vec<SidebarItem> {
    items
        .iter()
        .map(|item| {
            let base = effective_base(item, base);
            match item {
                SidebarItem::Link(link) => {
                    let mut link = link.clone();
                    link.link = compose_link(base, &link.link);
                    SidebarItem::Link(link)
                }
                SidebarItem::Section(section) => {
                    let mut composed = section.clone();
                    composed.base = None;
                    composed.link = section.link.as_deref().map(|l| compose_link(base, l));
                    composed.items = compose_items(&section.items, base);
                    SidebarItem::Section(composed)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{NavLink, SidebarSection};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compose_relative_link() {
        assert_eq!(
            compose_link(Some("/docs/"), "a-swift-tour"),
            "/docs/a-swift-tour"
        );
    }

    #[test]
    fn test_compose_collapses_seam_slash() {
        assert_eq!(
            compose_link(Some("/docs/reference/"), "/"),
            "/docs/reference/"
        );
        assert_eq!(
            compose_link(Some("/docs/"), "/guide/"),
            "/docs/guide/"
        );
    }

    #[test]
    fn test_compose_without_trailing_slash_concatenates() {
        assert_eq!(compose_link(Some("/docs"), "/guide"), "/docs/guide");
    }

    #[test]
    fn test_compose_without_base_returns_link() {
        assert_eq!(compose_link(None, "the-basics"), "the-basics");
        assert_eq!(compose_link(Some(""), "the-basics"), "the-basics");
    }

    #[test]
    fn test_compose_external_link_unchanged() {
        assert_eq!(
            compose_link(Some("/docs/"), "https://swift.org"),
            "https://swift.org"
        );
        assert!(is_external("mailto:someone@example.com"));
        assert!(!is_external("/docs/"));
    }

    #[test]
    fn test_resolve_items_nearest_base_wins() {
        let items = vec![
            NavLink::new("Tour", "a-swift-tour").into(),
            SidebarSection::new(
                "Guide",
                vec![NavLink::new("Basics", "the-basics").into()],
            )
            .with_base("/docs/guide/")
            .into(),
        ];
        let mut out = Vec::new();

        resolve_items(&items, Some("/docs/"), &mut Vec::new(), &mut out);

        assert_eq!(
            out,
            vec![
                ResolvedLink {
                    trail: vec!["Tour".to_owned()],
                    path: "/docs/a-swift-tour".to_owned(),
                },
                ResolvedLink {
                    trail: vec!["Guide".to_owned(), "Basics".to_owned()],
                    path: "/docs/guide/the-basics".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_resolve_items_section_inherits_base() {
        let items = vec![
            SidebarSection::new("Inner", vec![NavLink::new("Page", "page").into()]).into(),
        ];
        let mut out = Vec::new();

        resolve_items(&items, Some("/docs/"), &mut Vec::new(), &mut out);

        assert_eq!(out[0].path, "/docs/page");
    }

    #[test]
    fn test_resolve_items_includes_section_link() {
        let items = vec![
            SidebarSection::new("Reference", vec![NavLink::new("Types", "types").into()])
                .with_base("/docs/reference/")
                .with_link("/")
                .into(),
        ];
        let mut out = Vec::new();

        resolve_items(&items, None, &mut Vec::new(), &mut out);

        let paths: Vec<_> = out.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/docs/reference/", "/docs/reference/types"]);
    }

    #[test]
    fn test_compose_items_clears_base() {
        let items = vec![
            SidebarSection::new("Guide", vec![NavLink::new("Basics", "the-basics").into()])
                .with_base("/docs/guide/")
                .into(),
        ];

        let composed = compose_items(&items, None);

        let SidebarItem::Section(section) = &composed[0] else {
            panic!("expected section");
        };
        assert!(section.base.is_none());
        assert!(section.collapsed);
        assert_eq!(section.items[0].link(), Some("/docs/guide/the-basics"));
    }
}
