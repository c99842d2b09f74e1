use crate::model::LINE_ENDING;
use crate::model::map::KeyValueMap;
use std::fmt;

/// A named bag of key/value string pairs.
pub type Section = KeyValueMap<String>;

impl KeyValueMap<String> {
	/// Right-biased merge into a new section.
	///
	/// Starts from a copy of `self` (keeping its comparer) and writes every
	/// entry of `other` over it. Neither input is modified.
	pub fn merge(&self, other: &Section) -> Section {
		let mut merged = self.clone();
		for (key, value) in other {
			merged.add(key, value.clone());
		}
		merged
	}

	/// Render as `key = value` lines, keys padded to the widest key.
	///
	/// An empty section renders as the empty string. Keys and values are
	/// written verbatim, with no escaping.
	pub fn to_text(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for KeyValueMap<String> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Some(width) = self.keys().map(|key| key.chars().count()).max() else {
			return Ok(());
		};

		for (key, value) in self {
			write!(f, "{key:<width$} = {value}{LINE_ENDING}")?;
		}

		Ok(())
	}
}
