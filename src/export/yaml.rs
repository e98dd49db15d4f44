//! Full-database YAML export (human-readable)

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::store::Store;

use super::json::FullExport;

/// Write a full YAML export to the writer
pub fn export_full_yaml<W: Write + ?Sized>(store: &Store, writer: &mut W) -> PocketbookResult<()> {
    let export = FullExport::gather(store)?;
    serde_yaml::to_writer(writer, &export).map_err(|e| PocketbookError::Export(e.to_string()))
}
