//! CLI subcommands

pub mod init;
pub mod list;
pub mod show;

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Write rendered output to a file, or to stdout when no path is given
pub(crate) fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}
