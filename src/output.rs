//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a batch export run
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Whether the export completed
    pub success: bool,
    /// Number of roster entries written
    pub count: usize,
    /// Path of the CSV file that was written
    pub path: String,
}

impl ExportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Done! Found {} characters matching your criteria.", self.count);
                println!("Saved to {}", self.path);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
