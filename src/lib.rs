//! ini-strata - INI configuration parser with layered merging and nested section lookup.
//!
//! This library provides:
//! - A data model of sections and key/value strings with pluggable key
//!   comparison (case-insensitive by default)
//! - A line-oriented parser with line-numbered errors
//! - Deterministic, column-aligned rendering back to text
//! - Right-biased, non-mutating merges of sections and configurations
//! - Dotted section names (`a.b.c`) that inherit from their ancestors
//! - File, stream, TOML and directory-cascade plumbing around the above
//!
//! # Example
//!
//! ```
//! use ini_strata::{Configuration, parse};
//!
//! let base = parse("[server]\nhost = localhost\nport = 8080\n").unwrap();
//! let local = parse("[server]\nport = 9090 # dev\n[server.tls]\ncert = dev.pem\n").unwrap();
//!
//! let merged: Configuration = base.merge(&local);
//! assert_eq!(merged.value("SERVER", "port").map(String::as_str), Some("9090"));
//! assert_eq!(
//!     merged.get_nested_value("server.tls", "host").map(String::as_str),
//!     Some("localhost")
//! );
//! ```

pub mod error;
pub mod io;
pub mod model;
pub mod parser;
pub mod query;

pub use error::{IniError, ParseError, Result};
pub use model::{Configuration, GLOBAL, KeyComparer, KeyValueMap, LINE_ENDING, Section, StringComparer};
pub use parser::{check_entry, parse, parse_with};
