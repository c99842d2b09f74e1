//! Line-oriented INI parsing.
//!
//! This module handles:
//! - Comment stripping and line classification
//! - Folding classified lines into a [`Configuration`]
//! - Line-numbered error reporting (the first bad line aborts the parse)

pub mod line;

pub use line::{Line, classify};

use crate::error::{IniError, ParseError};
use crate::model::{Configuration, GLOBAL, KeyComparer, KeyValueMap, Section};
use std::str::FromStr;

/// Parse INI text using the default (case-insensitive) comparer.
pub fn parse(text: &str) -> Result<Configuration, ParseError> {
	parse_with(text, KeyComparer::default())
}

/// Parse INI text, comparing section names and keys with `comparer`.
pub fn parse_with(text: &str, comparer: KeyComparer) -> Result<Configuration, ParseError> {
	let mut configuration = Configuration::with_comparer(comparer);
	fold_lines(&mut configuration, text)?;
	Ok(configuration)
}

/// Apply each line of `text` to `configuration`.
///
/// Parameters before the first header land in the global section. A header
/// installs a fresh empty section, replacing any section of the same name.
fn fold_lines(configuration: &mut Configuration, text: &str) -> Result<(), ParseError> {
	let mut current = GLOBAL.to_string();

	// `lines` accepts both `\n` and `\r\n`.
	for (index, raw) in text.lines().enumerate() {
		match classify(raw) {
			Ok(Line::SectionHeader(name)) => {
				let fresh = configuration.new_section();
				configuration.add(name, fresh);
				current = name.to_string();
			}
			Ok(Line::Parameter { key, value }) => {
				configuration.set_value(&current, key, Some(value.to_string()));
			}
			Ok(Line::Comment(_) | Line::Blank) => {}
			Err(line) => {
				return Err(ParseError {
					line_number: index + 1,
					line: line.to_string(),
				});
			}
		}
	}

	Ok(())
}

/// Check that an entry reads back unchanged once rendered.
///
/// There is no quoting or escaping: a `#` always starts a comment, a line
/// break ends the entry, surrounding whitespace is trimmed, and a key ends
/// at its first `=`.
pub fn check_entry(section: &str, key: &str, value: &str) -> crate::error::Result<()> {
	check_part("section name", section, line_reason(section))?;
	check_part("key", key, line_reason(key).or_else(|| key_reason(key)))?;
	check_part("value", value, line_reason(value))
}

fn check_part(part: &'static str, text: &str, reason: Option<&'static str>) -> crate::error::Result<()> {
	match reason {
		Some(reason) => Err(IniError::Unrepresentable {
			part,
			text: text.to_string(),
			reason,
		}),
		None => Ok(()),
	}
}

fn line_reason(text: &str) -> Option<&'static str> {
	if text.contains('#') {
		Some("contains `#`")
	} else if text.contains(['\n', '\r']) {
		Some("contains a line break")
	} else if text.trim() != text {
		Some("has leading or trailing whitespace")
	} else {
		None
	}
}

fn key_reason(key: &str) -> Option<&'static str> {
	if key.contains('=') {
		Some("contains `=`")
	} else if key.starts_with('[') {
		Some("starts with `[`")
	} else {
		None
	}
}

impl KeyValueMap<Section> {
	/// [`set_value`](Self::set_value) that refuses entries the text format
	/// cannot hold (see [`check_entry`]). Removal is never refused.
	pub fn try_set_value(
		&mut self,
		section: &str,
		key: impl Into<String>,
		value: Option<String>,
	) -> crate::error::Result<Option<&String>> {
		let key: String = key.into();
		if let Some(value) = &value {
			check_entry(section, &key, value)?;
		}
		Ok(self.set_value(section, key, value))
	}

	/// Fold more INI text into this configuration.
	///
	/// All or nothing: on error the configuration is left as it was.
	pub fn append_str(&mut self, text: &str) -> Result<(), ParseError> {
		let mut working = self.clone();
		fold_lines(&mut working, text)?;
		*self = working;
		Ok(())
	}
}

impl FromStr for KeyValueMap<Section> {
	type Err = ParseError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		parse(text)
	}
}
