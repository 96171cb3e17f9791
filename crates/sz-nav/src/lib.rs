//! Navigation tree model for the documentation site.
//!
//! This crate provides:
//! - [`NavLink`] and [`SidebarItem`]: leaf links and collapsible sections
//! - [`Sidebar`]: sidebar groups keyed by route prefix, with page resolution
//! - Prefix composition of section `base` paths onto descendant links
//! - Structural checks for sibling labels and link targets
//!
//! # Quick Start
//!
//! ```
//! use sz_nav::{NavLink, Sidebar, SidebarGroup, SidebarSection};
//!
//! let sidebar = Sidebar::new().with_group(
//!     "/docs/",
//!     SidebarGroup::new(vec![
//!         SidebarSection::new("Guide", vec![NavLink::new("Basics", "the-basics").into()])
//!             .with_base("/docs/guide/")
//!             .into(),
//!     ]),
//! );
//!
//! let (prefix, group) = sidebar.resolve("/docs/guide/the-basics").unwrap();
//! assert_eq!(prefix, "/docs/");
//! assert_eq!(group.resolved_links()[0].path, "/docs/guide/the-basics");
//! assert!(sz_nav::check_sidebar(&sidebar).is_empty());
//! ```

mod check;
mod compose;
mod documents;
mod item;
mod sidebar;

pub use check::{Issue, IssueKind, check_nav, check_sidebar, validate_reference};
pub use compose::{ResolvedLink, compose_link, is_external};
pub use documents::missing_documents;
pub use item::{NavLink, SidebarItem, SidebarSection};
pub use sidebar::{Sidebar, SidebarGroup};
