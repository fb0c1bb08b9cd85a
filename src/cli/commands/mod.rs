//! Command implementations

mod export;
mod serve;

pub use export::export;
pub use serve::serve;
