//! `sz sidebar` command implementation.

use std::io::Write;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path, e.g. `/docs/guide/closures`.
    page_path: String,

    /// Print the composed sidebar group as JSON.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if no sidebar applies to the page.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let sidebar = sz_site::sidebar();

        let Some((prefix, group)) = sidebar.resolve(&self.page_path) else {
            return Err(CliError::Check(format!(
                "No sidebar for page {}",
                self.page_path
            )));
        };

        let mut stdout = std::io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &group.composed())?;
            writeln!(stdout)?;
            return Ok(());
        }

        output.highlight(&format!("Sidebar {prefix}"));
        for link in group.resolved_links() {
            writeln!(
                stdout,
                "{}{}  {}",
                "  ".repeat(link.trail.len().saturating_sub(1)),
                link.trail.last().map_or("", String::as_str),
                link.path
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_unknown_page() {
        let args = SidebarArgs {
            page_path: "/blog/".to_owned(),
            json: false,
        };

        let err = args.execute().unwrap_err();

        assert!(err.to_string().contains("/blog/"));
    }

    #[test]
    fn test_execute_known_page() {
        let args = SidebarArgs {
            page_path: "/docs/guide/closures".to_owned(),
            json: true,
        };

        args.execute().unwrap();
    }
}
