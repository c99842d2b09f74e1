use crate::error::{IniError, Result};
use crate::model::{Configuration, KeyComparer};
use indexmap::IndexMap;
use std::path::Path;

type Tables = IndexMap<String, IndexMap<String, String>>;

/// Render a configuration as a TOML document of string tables.
pub fn to_toml(configuration: &Configuration) -> Result<String> {
	Ok(toml::to_string(configuration)?)
}

/// Parse a TOML document whose top-level values are tables of strings.
pub fn from_toml(content: &str, path: &Path) -> Result<Configuration> {
	from_toml_with(content, path, KeyComparer::default())
}

/// Parse a TOML document of string tables, comparing section names and keys
/// with `comparer`.
///
/// Entries that INI text cannot hold are refused.
pub fn from_toml_with(content: &str, path: &Path, comparer: KeyComparer) -> Result<Configuration> {
	let tables: Tables = toml::from_str(content).map_err(|source| IniError::TomlParse {
		path: path.to_path_buf(),
		source,
	})?;

	let mut configuration = Configuration::with_comparer(comparer);
	for (name, entries) in tables {
		for (key, value) in entries {
			configuration.try_set_value(&name, key, Some(value))?;
		}
	}

	Ok(configuration)
}

/// Read a TOML file of string tables.
pub fn read_toml_file(path: &Path) -> Result<Configuration> {
	read_toml_file_with(path, KeyComparer::default())
}

pub fn read_toml_file_with(path: &Path, comparer: KeyComparer) -> Result<Configuration> {
	let content = std::fs::read_to_string(path).map_err(|source| IniError::ReadFile {
		path: path.to_path_buf(),
		source,
	})?;

	from_toml_with(&content, path, comparer)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_to_toml_writes_tables() {
		let configuration = Configuration::from_entries([("server", "host", "localhost"), ("server", "port", "8080")]);

		let rendered = to_toml(&configuration).unwrap();

		assert!(rendered.contains("[server]"));
		assert!(rendered.contains("host = \"localhost\""));
		assert!(rendered.contains("port = \"8080\""));
	}

	#[test]
	fn test_toml_round_trip_preserves_sections() {
		let configuration = Configuration::from_entries([("a", "x", "1"), ("b.c", "y", "2")]);

		let rendered = to_toml(&configuration).unwrap();
		let restored = from_toml(&rendered, &PathBuf::from("test.toml")).unwrap();

		assert_eq!(restored, configuration);
	}

	#[test]
	fn test_from_toml_is_case_insensitive() {
		let content = "[Server]\nHost = \"example.com\"\n";
		let configuration = from_toml(content, &PathBuf::from("test.toml")).unwrap();

		assert_eq!(configuration.value("server", "host").map(String::as_str), Some("example.com"));
	}

	#[test]
	fn test_from_toml_rejects_non_string_values() {
		let content = "[server]\nport = 8080\n";
		let result = from_toml(content, &PathBuf::from("test.toml"));

		match result.unwrap_err() {
			IniError::TomlParse { path, .. } => assert_eq!(path, PathBuf::from("test.toml")),
			other => panic!("Expected TomlParse error, got {other:?}"),
		}
	}

	#[test]
	fn test_from_toml_with_ordinal_keeps_distinct_cases() {
		let content = "[Server]\nHost = \"a\"\nhost = \"b\"\n";
		let configuration = from_toml_with(content, &PathBuf::from("test.toml"), KeyComparer::ordinal()).unwrap();

		assert_eq!(configuration.comparer().name(), "ordinal");
		assert_eq!(configuration.value("Server", "Host").map(String::as_str), Some("a"));
		assert_eq!(configuration.value("Server", "host").map(String::as_str), Some("b"));
		assert_eq!(configuration.value("server", "host"), None);
	}

	#[test]
	fn test_from_toml_refuses_values_ini_cannot_hold() {
		let content = "[server]\nnote = \"a # b\"\n";
		let result = from_toml(content, &PathBuf::from("test.toml"));

		assert!(matches!(result, Err(IniError::Unrepresentable { part: "value", .. })));
	}
}
