//! In-memory INI data model.
//!
//! This module handles:
//! - Key identity policies (case-insensitive by default)
//! - The generic key/value store both levels are built on
//! - Sections, configurations, merging and text rendering
//! - Nested (dotted) section resolution

pub mod comparer;
pub mod configuration;
pub mod map;
pub mod nested;
pub mod section;

pub use comparer::{IgnoreCase, KeyComparer, Ordinal, StringComparer};
pub use configuration::{Configuration, GLOBAL};
pub use map::{Iter, KeyValueMap};
pub use section::Section;

/// Line terminator used when rendering text.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };
