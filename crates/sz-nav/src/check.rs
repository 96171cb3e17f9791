//! Structural checks for navigation trees.
//!
//! Labels must be unique among siblings and every composed link must be a
//! well-formed reference. Whether the target document exists is checked
//! separately by [`missing_documents`](crate::missing_documents).

use std::collections::HashSet;
use std::fmt;

use crate::compose::{compose_link, effective_base};
use crate::item::{NavLink, SidebarItem};
use crate::sidebar::Sidebar;

/// Kind of structural problem.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    /// Two siblings share a label.
    #[error("duplicate label \"{label}\" among siblings")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },
    /// Composed link target is empty.
    #[error("empty link target")]
    EmptyTarget,
    /// Composed link target is malformed.
    #[error("invalid link target \"{target}\": {reason}")]
    InvalidTarget {
        /// The composed target.
        target: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Structural problem located in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    /// Route prefix and labels leading to the offending item.
    pub trail: Vec<String>,
    /// What is wrong.
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trail.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.trail.join(" > "), self.kind)
        }
    }
}

/// Check that a composed target is a well-formed reference.
pub fn validate_reference(target: &str) -> Result<(), IssueKind> {
    let invalid = |reason| IssueKind::InvalidTarget {
        target: target.to_owned(),
        reason,
    };

    if target.is_empty() {
        return Err(IssueKind::EmptyTarget);
    }
    if target.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }
    if target.chars().any(char::is_control) {
        return Err(invalid("contains a control character"));
    }
    if target.contains('\\') {
        return Err(invalid("contains a backslash"));
    }
    let path = target.split(['?', '#']).next().unwrap_or_default();
    if path.split('/').any(|segment| segment == "..") {
        return Err(invalid("contains a '..' segment"));
    }
    Ok(())
}

/// Check the top navigation bar.
#[must_use]
pub fn check_nav(nav: &[NavLink]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for link in nav {
        let trail = vec![link.text.clone()];
        if !seen.insert(link.text.as_str()) {
            issues.push(Issue {
                trail: trail.clone(),
                kind: IssueKind::DuplicateLabel {
                    label: link.text.clone(),
                },
            });
        }
        if let Err(kind) = validate_reference(&link.link) {
            issues.push(Issue { trail, kind });
        }
    }

    issues
}

/// Check every group of a sidebar.
#[must_use]
pub fn check_sidebar(sidebar: &Sidebar) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (prefix, group) in sidebar.iter() {
        let mut trail = vec![prefix.to_owned()];
        check_items(&group.items, group.base.as_deref(), &mut trail, &mut issues);
    }

    if !issues.is_empty() {
        tracing::debug!(count = issues.len(), "Sidebar check found issues");
    }
    issues
}

fn check_items(
    items: &[SidebarItem],
    base: Option<&str>,
    trail: &mut Vec<String>,
    issues: &mut Vec<Issue>,
) {
    let mut seen = HashSet::new();

    for item in items {
        if !seen.insert(item.text()) {
            issues.push(Issue {
                trail: trail.clone(),
                kind: IssueKind::DuplicateLabel {
                    label: item.text().to_owned(),
                },
            });
        }

        let base = effective_base(item, base);
        trail.push(item.text().to_owned());

        if let Some(link) = item.link()
            && let Err(kind) = validate_reference(&compose_link(base, link))
        {
            issues.push(Issue {
                trail: trail.clone(),
                kind,
            });
        }
        check_items(item.children(), base, trail, issues);

        trail.pop();
    }
}
