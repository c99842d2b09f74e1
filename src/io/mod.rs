//! File and stream plumbing around the pure parser and renderer.
//!
//! This module handles:
//! - Reading, appending and writing INI files and streams
//! - TOML import/export
//! - Layered discovery of files up the directory tree

pub mod cascade;
pub mod file;
pub mod interchange;

pub use cascade::{
	DEFAULT_FILE_NAME, LoadedFile, NO_USER_CONFIG_ENV, discover_files, load_layered, merge_layers,
	user_file_path,
};
pub use file::{append_from_file, read_file, read_file_with, read_from, write_file, write_to};
pub use interchange::{from_toml, from_toml_with, read_toml_file, read_toml_file_with, to_toml};
