//! Domain models
//!
//! Typed shapes for the upstream character API and the projected roster
//! entries this tool produces.

mod character;
mod filtered;

pub use character::{Character, LocationRef, PageEnvelope, PageInfo};
pub use filtered::FilteredCharacter;
