//! `sz build` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use sz_config::{CliSettings, Config};

use super::{site_config_from, structural_issues};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover sz.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (overrides config; default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long)]
    base: Option<String>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Indent the generated JSON.
    #[arg(long)]
    pretty: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            base: self.base,
            output: self.output,
            source_dir: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let site = site_config_from(&config);
        for issue in structural_issues(&site) {
            tracing::warn!(%issue, "Navigation issue");
            output.warning(&format!("Warning: {issue}"));
        }

        let json = if self.pretty {
            site.to_json_pretty()?
        } else {
            site.to_json()?
        };

        match &config.output_resolved.path {
            Some(path) => {
                write_output(path, &json)?;
                tracing::info!(
                    path = %path.display(),
                    bytes = json.len(),
                    "Wrote site configuration"
                );
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}

/// Write generated configuration, creating parent directories as needed.
fn write_output(path: &Path, json: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
