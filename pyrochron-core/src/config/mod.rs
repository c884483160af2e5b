//! Configuration types
//!
//! Animation timing constants and the user preferences that decide when
//! bursts fire. Preferences are stored as postcard binary data by the host.

pub mod animation;
pub mod preferences;

pub use animation::*;
pub use preferences::*;
