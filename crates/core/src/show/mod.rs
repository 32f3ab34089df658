//! Show descriptors - normalized requests describing the media being searched for.

mod types;

pub use types::*;
