//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export;
use crate::store::Store;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all data as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export transactions as CSV
    Csv {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all data as YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(store: &Store, cmd: ExportCommands) -> PocketbookResult<()> {
    match cmd {
        ExportCommands::Json { output } => {
            with_writer(output, |w| export::export_full_json(store, w))
        }
        ExportCommands::Csv { output } => {
            with_writer(output, |w| export::export_transactions_csv(store, w))
        }
        ExportCommands::Yaml { output } => {
            with_writer(output, |w| export::export_full_yaml(store, w))
        }
    }
}

fn with_writer<F>(output: Option<PathBuf>, f: F) -> PocketbookResult<()>
where
    F: FnOnce(&mut dyn Write) -> PocketbookResult<()>,
{
    match output {
        Some(path) => {
            let mut file = File::create(&path).map_err(|e| {
                PocketbookError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            f(&mut file)?;
            eprintln!("Exported to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}
