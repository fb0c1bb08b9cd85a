//! Filtered roster entries
//!
//! The four-field projection of a character that passed every inclusion
//! predicate. Field names are PascalCase on the wire - both in the JSON
//! `data` array and as the CSV header row.

use serde::{Deserialize, Serialize};

use super::Character;

/// A projected character that passed the roster filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilteredCharacter {
    /// Character name, copied verbatim
    pub name: String,

    /// Origin location name (the `name` sub-field, not the nested object)
    pub origin: String,

    /// Current location name
    pub location: String,

    /// Portrait URL
    pub image: String,
}

impl FilteredCharacter {
    /// Whether a character belongs on the roster.
    ///
    /// Species and status match exactly (case-sensitive); the origin check
    /// is a case-insensitive substring match, so "Earth", "Earth (C-137)",
    /// and "Post-Apocalyptic Earth" all qualify.
    #[must_use]
    pub fn matches(character: &Character) -> bool {
        character.species == "Human"
            && character.status == "Alive"
            && character.origin.name.to_lowercase().contains("earth")
    }

    /// Project a matching character into its roster entry
    #[must_use]
    pub fn project(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            origin: character.origin.name.clone(),
            location: character.location.name.clone(),
            image: character.image.clone(),
        }
    }
}
