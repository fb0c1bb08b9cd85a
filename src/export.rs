//! CSV export
//!
//! Renders a filtered roster as CSV with the fixed header row
//! `Name,Origin,Location,Image` and standard quoting. The header is written
//! unconditionally, so an empty roster still produces a valid file.

use std::fs::File;
use std::path::Path;

use thiserror::Error;

use crate::models::FilteredCharacter;

/// Fixed CSV column order
const HEADER: [&str; 4] = ["Name", "Origin", "Location", "Image"];

/// Errors that can occur while writing CSV
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failure
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error creating or writing the output file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the roster as in-memory CSV text
pub fn to_csv_string(records: &[FilteredCharacter]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    write_rows(&mut writer, records)?;
    let bytes = writer.into_inner().map_err(|e| ExportError::Csv(e.into_error().into()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the roster to a CSV file, replacing any existing file at `path`
pub fn write_csv_file(path: &Path, records: &[FilteredCharacter]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    write_rows(&mut writer, records)?;
    writer.flush()?;

    Ok(())
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[FilteredCharacter],
) -> Result<(), ExportError> {
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    Ok(())
}
