use crate::error::{IniError, Result};
use crate::model::{Configuration, KeyComparer};
use crate::parser::{parse, parse_with};
use std::io::{Read, Write};
use std::path::Path;

/// Read and parse an INI file with the default comparer.
pub fn read_file(path: &Path) -> Result<Configuration> {
	read_file_with(path, KeyComparer::default())
}

/// Read and parse an INI file, comparing names and keys with `comparer`.
pub fn read_file_with(path: &Path, comparer: KeyComparer) -> Result<Configuration> {
	let content = read_text(path)?;

	parse_with(&content, comparer).map_err(|source| IniError::Parse {
		path: path.to_path_buf(),
		source,
	})
}

/// Fold the contents of an INI file into an existing configuration.
///
/// On error the configuration is left unchanged.
pub fn append_from_file(configuration: &mut Configuration, path: &Path) -> Result<()> {
	let content = read_text(path)?;

	configuration
		.append_str(&content)
		.map_err(|source| IniError::Parse {
			path: path.to_path_buf(),
			source,
		})
}

/// Read all of `reader` and parse it with the default comparer.
pub fn read_from<R: Read>(mut reader: R) -> Result<Configuration> {
	let mut content = String::new();
	reader.read_to_string(&mut content)?;
	Ok(parse(&content)?)
}

/// Write the rendered configuration to a file, replacing its contents.
pub fn write_file(configuration: &Configuration, path: &Path) -> Result<()> {
	std::fs::write(path, configuration.to_text()).map_err(|source| IniError::WriteFile {
		path: path.to_path_buf(),
		source,
	})
}

/// Write the rendered configuration to a stream and flush it.
pub fn write_to<W: Write>(configuration: &Configuration, mut writer: W) -> Result<()> {
	writer.write_all(configuration.to_text().as_bytes())?;
	writer.flush()?;
	Ok(())
}

fn read_text(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| IniError::ReadFile {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	const CONTENTS: &str = "a=b\n[foo]\nc=d\n[bar]\ne=f\n";

	fn temp_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("test.ini");
		fs::write(&path, contents).unwrap();
		(dir, path)
	}

	#[test]
	fn test_read_file() {
		let (_dir, path) = temp_file(CONTENTS);
		let configuration = read_file(&path).unwrap();

		assert_eq!(configuration.global_value("A").map(String::as_str), Some("b"));
		assert_eq!(configuration.value("foo", "c").map(String::as_str), Some("d"));
		assert_eq!(configuration.value("bar", "e").map(String::as_str), Some("f"));
	}

	#[test]
	fn test_read_file_with_ordinal_comparer() {
		let (_dir, path) = temp_file(CONTENTS);
		let configuration = read_file_with(&path, KeyComparer::ordinal()).unwrap();

		assert!(configuration.global_value("A").is_none());
		assert_eq!(configuration.global_value("a").map(String::as_str), Some("b"));
	}

	#[test]
	fn test_read_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.ini");

		match read_file(&path).unwrap_err() {
			IniError::ReadFile { path: reported, .. } => assert_eq!(reported, path),
			other => panic!("Expected ReadFile error, got {other:?}"),
		}
	}

	#[test]
	fn test_read_file_parse_error_carries_path() {
		let (_dir, path) = temp_file("[s]\nA=1\nxxx\n");

		match read_file(&path).unwrap_err() {
			IniError::Parse { path: reported, source } => {
				assert_eq!(reported, path);
				assert_eq!(source.line_number, 3);
			}
			other => panic!("Expected Parse error, got {other:?}"),
		}
	}

	#[test]
	fn test_append_from_file() {
		let (_dir, path) = temp_file(CONTENTS);
		let mut configuration = Configuration::new();
		configuration.set_global_value("x", Some("y".to_string()));
		configuration.set_value("x", "y", Some("z".to_string()));

		append_from_file(&mut configuration, &path).unwrap();

		assert_eq!(configuration.global_value("a").map(String::as_str), Some("b"));
		assert_eq!(configuration.global_value("x").map(String::as_str), Some("y"));
		assert_eq!(configuration.value("x", "y").map(String::as_str), Some("z"));
		assert_eq!(configuration.value("bar", "e").map(String::as_str), Some("f"));
	}

	#[test]
	fn test_read_from_stream() {
		let configuration = read_from(CONTENTS.as_bytes()).unwrap();
		assert_eq!(configuration.value("foo", "c").map(String::as_str), Some("d"));
	}

	#[test]
	fn test_read_from_stream_parse_error() {
		let error = read_from("bad\n".as_bytes()).unwrap_err();
		assert_eq!(error.to_string(), "Cannot parse line 1: bad.");
	}

	#[test]
	fn test_write_file_round_trips() {
		let (_dir, path) = temp_file(CONTENTS);
		let configuration = read_file(&path).unwrap();

		let out = path.with_file_name("out.ini");
		write_file(&configuration, &out).unwrap();

		assert_eq!(fs::read_to_string(&out).unwrap(), configuration.to_text());
		assert_eq!(read_file(&out).unwrap(), configuration);
	}

	#[test]
	fn test_write_file_to_directory_fails() {
		let dir = tempfile::tempdir().unwrap();

		match write_file(&Configuration::new(), dir.path()).unwrap_err() {
			IniError::WriteFile { path, .. } => assert_eq!(path, dir.path()),
			other => panic!("Expected WriteFile error, got {other:?}"),
		}
	}

	#[test]
	fn test_write_to_stream() {
		let configuration = Configuration::from_entries([("s", "k", "v")]);
		let mut buffer = Vec::new();

		write_to(&configuration, &mut buffer).unwrap();

		assert_eq!(String::from_utf8(buffer).unwrap(), configuration.to_text());
	}
}
