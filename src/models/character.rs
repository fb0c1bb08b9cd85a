//! Upstream character shapes
//!
//! Typed mirror of the fields this tool consumes from the character API.
//! Deserialization is fail-fast: a page missing `info` or `results`, or a
//! record missing any consumed field, is a parse error rather than a
//! silently defaulted value. Fields the API sends but we never read are
//! ignored.

use serde::Deserialize;

/// A single character record as returned by the upstream API
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    /// Character name
    pub name: String,

    /// Species (e.g., "Human", "Alien")
    pub species: String,

    /// Life status (e.g., "Alive", "Dead", "unknown")
    pub status: String,

    /// Where the character is from
    pub origin: LocationRef,

    /// Where the character was last seen
    pub location: LocationRef,

    /// URL of the character portrait
    pub image: String,
}

/// A named location reference nested inside a character record
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRef {
    /// Location name (e.g., "Earth (C-137)")
    pub name: String,
}

/// One page of the upstream collection plus its pagination metadata
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    /// Pagination metadata
    pub info: PageInfo,

    /// The records on this page, in upstream order
    pub results: Vec<Character>,
}

/// Pagination metadata for a page
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    /// URL of the next page; `None` on the last page
    pub next: Option<String>,
}
