//! Combination matrix enumeration

pub mod enumerator;

pub use enumerator::{combination_count, enumerate};
