//! Tests for CSV export

use earthling::export::{to_csv_string, write_csv_file};
use earthling::models::FilteredCharacter;
use tempfile::TempDir;

fn entry(name: &str, origin: &str, location: &str, image: &str) -> FilteredCharacter {
    FilteredCharacter {
        name: name.to_string(),
        origin: origin.to_string(),
        location: location.to_string(),
        image: image.to_string(),
    }
}

// =============================================================================
// IN-MEMORY CSV
// =============================================================================

#[test]
fn header_row_is_always_written() {
    let csv = to_csv_string(&[]).unwrap();
    assert_eq!(csv.trim_end(), "Name,Origin,Location,Image");
}

#[test]
fn one_row_per_record_in_order() {
    let records = vec![
        entry("Rick Sanchez", "Earth (C-137)", "Citadel of Ricks", "https://example.com/1.jpeg"),
        entry("Morty Smith", "Earth (C-137)", "Earth (Replacement Dimension)", "https://example.com/2.jpeg"),
    ];
    let csv = to_csv_string(&records).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Name,Origin,Location,Image");
    assert!(lines[1].starts_with("Rick Sanchez,"));
    assert!(lines[2].starts_with("Morty Smith,"));
}

#[test]
fn fields_with_commas_and_quotes_are_quoted() {
    let records = vec![entry(
        "Mr. Meeseeks, \"Look at me\"",
        "Mr. Meeseeks Box",
        "Earth, somewhere",
        "https://example.com/meeseeks.jpeg",
    )];
    let csv = to_csv_string(&records).unwrap();

    // Standard CSV quoting survives a reader round-trip
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let parsed: Vec<FilteredCharacter> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(parsed, records);
}

// =============================================================================
// FILE EXPORT
// =============================================================================

#[test]
fn writes_utf8_file_with_header() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("characters.csv");

    let records = vec![entry("Beth Smith", "Earth", "Earth", "https://example.com/beth.jpeg")];
    write_csv_file(&path, &records).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Name,Origin,Location,Image"));
    assert!(content.contains("Beth Smith"));
}

#[test]
fn overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("characters.csv");
    std::fs::write(&path, "stale contents from a previous run").unwrap();

    write_csv_file(&path, &[]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), "Name,Origin,Location,Image");
}
