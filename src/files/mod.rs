//! File naming helpers.

pub mod filename;
