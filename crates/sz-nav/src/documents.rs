//! Dangling link detection against a documentation source tree.

use std::path::{Path, PathBuf};

use crate::compose::{ResolvedLink, is_external};
use crate::sidebar::Sidebar;

/// Find sidebar links with no markdown document under `source_dir`.
///
/// A link `/a/b` is satisfied by `a/b.md` or `a/b/index.md`, and a link
/// `/a/` by `a/index.md`. Query strings and fragments are ignored, and
/// external links are skipped.
#[must_use]
pub fn missing_documents(sidebar: &Sidebar, source_dir: &Path) -> Vec<ResolvedLink> {
    let links = sidebar.resolved_links();
    let total = links.len();

    let missing: Vec<_> = links
        .into_iter()
        .filter(|link| !is_external(&link.path))
        .filter(|link| {
            !document_candidates(source_dir, &link.path)
                .iter()
                .any(|candidate| candidate.is_file())
        })
        .collect();

    tracing::debug!(
        source_dir = %source_dir.display(),
        total,
        missing = missing.len(),
        "Checked sidebar documents"
    );
    missing
}

/// Markdown files that could back a composed link.
fn document_candidates(source_dir: &Path, link: &str) -> Vec<PathBuf> {
    let path = link.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_start_matches('/');

    if path.is_empty() || path.ends_with('/') {
        return vec![source_dir.join(path).join("index.md")];
    }
    let path = path.strip_suffix(".html").unwrap_or(path);
    vec![
        source_dir.join(format!("{path}.md")),
        source_dir.join(path).join("index.md"),
    ]
}
