//! Core data types and structures
//!
//! This module contains the fundamental data types used throughout rogvibe,
//! separated from the selection and animation logic that consumes them.

pub mod types;

pub use types::*;
