//! Target search.
//!
//! Finds the base each owned base should measure itself against.

pub mod target;

pub use target::nearest_non_owned_base;
