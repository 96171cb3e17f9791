//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod sidebar;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use sidebar::SidebarArgs;

use sz_config::Config;
use sz_nav::Issue;
use sz_site::SiteConfig;

/// Build the site configuration with config file overrides applied.
pub(crate) fn site_config_from(config: &Config) -> SiteConfig {
    let mut site = sz_site::site_config();
    if let Some(title) = &config.site.title {
        site = site.with_title(title.clone());
    }
    if let Some(description) = &config.site.description {
        site = site.with_description(description.clone());
    }
    if let Some(base) = &config.site.base {
        site = site.with_base(base.clone());
    }
    site
}

/// Structural issues in the top navigation and sidebar.
pub(crate) fn structural_issues(site: &SiteConfig) -> Vec<Issue> {
    let mut issues = sz_nav::check_nav(&site.theme_config.nav);
    issues.extend(sz_nav::check_sidebar(&site.theme_config.sidebar));
    issues
}
