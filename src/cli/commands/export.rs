//! Batch export command
//!
//! One-shot run: fetch every page, filter, write the CSV file, print
//! progress. Overwrites any existing file at the output path.

use std::path::Path;

use earthling::config::Config;
use earthling::export::write_csv_file;
use earthling::models::FilteredCharacter;
use earthling::output::{ExportResult, OutputMode};
use earthling::upstream::UpstreamClient;

/// Fetch, filter, and write the roster to a CSV file
pub fn export(output: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let client = UpstreamClient::new(config.upstream)?;

    if mode == OutputMode::Human {
        println!("Getting characters from the Rick and Morty API...");
    }
    let all = client.fetch_all()?;

    if mode == OutputMode::Human {
        println!("Filtering characters...");
    }
    let roster: Vec<FilteredCharacter> = all
        .iter()
        .filter(|c| FilteredCharacter::matches(c))
        .map(FilteredCharacter::project)
        .collect();

    if mode == OutputMode::Human {
        println!("Saving characters to CSV file...");
    }
    write_csv_file(Path::new(output), &roster)?;

    let result = ExportResult {
        success: true,
        count: roster.len(),
        path: output.to_string(),
    };
    result.render(mode);

    Ok(())
}
