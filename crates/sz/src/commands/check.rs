//! `sz check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sz_config::{CliSettings, Config};

use super::{site_config_from, structural_issues};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sz.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory to check sidebar links against
    /// (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Documents are only checked when a source directory is known, either
    /// from `--source-dir` or from a loaded config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any problem is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let check_documents = self.source_dir.is_some();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = site_config_from(&config);

        let mut problems = 0;

        for issue in structural_issues(&site) {
            output.warning(&issue.to_string());
            problems += 1;
        }

        if check_documents || config.config_path.is_some() {
            let source_dir = &config.docs_resolved.source_dir;
            output.info(&format!("Source directory: {}", source_dir.display()));
            for link in sz_nav::missing_documents(&site.theme_config.sidebar, source_dir) {
                output.warning(&format!(
                    "{}: no document for {}",
                    link.trail.join(" > "),
                    link.path
                ));
                problems += 1;
            }
        }

        if problems > 0 {
            return Err(CliError::Check(format!("{problems} problem(s) found")));
        }

        let links = site.theme_config.sidebar.resolved_links().len();
        tracing::info!(links, "Navigation check passed");
        output.success(&format!("Navigation OK ({links} sidebar links)"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_reports_missing_documents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("sz.toml");
        std::fs::write(&config_path, "").unwrap();
        let args = CheckArgs {
            config: Some(config_path),
            source_dir: None,
        };

        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Check(_)));
    }

    #[test]
    fn test_execute_passes_with_all_documents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("sz.toml");
        std::fs::write(&config_path, "").unwrap();
        for link in sz_site::sidebar().resolved_links() {
            let relative = link.path.trim_start_matches('/');
            let file = if relative.ends_with('/') {
                temp_dir.path().join(relative).join("index.md")
            } else {
                temp_dir.path().join(format!("{relative}.md"))
            };
            std::fs::create_dir_all(file.parent().unwrap()).unwrap();
            std::fs::write(&file, "# Page").unwrap();
        }
        let args = CheckArgs {
            config: Some(config_path),
            source_dir: None,
        };

        args.execute().unwrap();
    }
}
