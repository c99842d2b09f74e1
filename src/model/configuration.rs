use crate::model::LINE_ENDING;
use crate::model::map::KeyValueMap;
use crate::model::section::Section;
use std::fmt;

/// A named bag of sections: the whole document.
pub type Configuration = KeyValueMap<Section>;

/// Name of the global section, active before any `[header]` is seen.
pub const GLOBAL: &str = "";

impl KeyValueMap<Section> {
	/// Build a configuration from `(section, key, value)` triples using the
	/// default comparer.
	pub fn from_entries<S, K, V>(entries: impl IntoIterator<Item = (S, K, V)>) -> Self
	where
		S: AsRef<str>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut configuration = Self::new();
		for (section, key, value) in entries {
			configuration.set_value(section.as_ref(), key, Some(value.into()));
		}
		configuration
	}

	/// A new, empty section sharing this configuration's comparer.
	pub fn new_section(&self) -> Section {
		Section::with_comparer(self.comparer().clone())
	}

	pub fn value(&self, section: &str, key: &str) -> Option<&String> {
		self.get(section)?.get(key)
	}

	/// Upsert-or-delete a single value.
	///
	/// `Some` on a missing section creates it holding only that key. `None`
	/// removes the key but leaves the section in place, even if it is now empty.
	pub fn set_value(
		&mut self,
		section: &str,
		key: impl Into<String>,
		value: Option<String>,
	) -> Option<&String> {
		let key: String = key.into();
		let Some(value) = value else {
			self.remove_value(section, &key);
			return None;
		};

		if !self.contains_key(section) {
			let fresh = self.new_section();
			self.add(section, fresh);
		}

		self.get_mut(section).map(|entries| &*entries.add(key, value))
	}

	pub fn remove_value(&mut self, section: &str, key: &str) -> Option<String> {
		self.get_mut(section)?.remove(key)
	}

	pub fn contains_value(&self, section: &str, key: &str) -> bool {
		self.get(section).is_some_and(|entries| entries.contains_key(key))
	}

	pub fn global_section(&self) -> Option<&Section> {
		self.get(GLOBAL)
	}

	pub fn global_value(&self, key: &str) -> Option<&String> {
		self.value(GLOBAL, key)
	}

	pub fn set_global_value(&mut self, key: impl Into<String>, value: Option<String>) -> Option<&String> {
		self.set_value(GLOBAL, key, value)
	}

	/// Every `(section, key, value)` in document order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
		self.iter().flat_map(|(section, entries)| {
			entries
				.iter()
				.map(move |(key, value)| (section, key, value.as_str()))
		})
	}

	/// Right-biased merge into a new configuration.
	///
	/// Sections present on both sides are merged key by key; sections only
	/// in `other` are adopted as they are. Neither input is modified.
	pub fn merge(&self, other: &Configuration) -> Configuration {
		let mut merged = self.clone();
		for (name, section) in other {
			let next = match merged.get(name) {
				Some(existing) => existing.merge(section),
				None => section.clone(),
			};
			merged.add(name, next);
		}
		merged
	}

	/// Render the document.
	///
	/// Empty sections are skipped. The global section comes first without a
	/// header; every other section gets a `[name]` header and a blank line,
	/// and blocks are separated by one blank line.
	///
	/// Names, keys and values are written verbatim. Text that contains a `#`
	/// or a line break, or that has surrounding whitespace, does not read back
	/// unchanged; [`try_set_value`](Self::try_set_value) refuses such entries.
	pub fn to_text(&self) -> String {
		self.to_string()
	}

	fn is_global(&self, name: &str) -> bool {
		self.comparer().equals(name, GLOBAL)
	}
}

impl fmt::Display for KeyValueMap<Section> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut separate = false;

		if let Some(global) = self.global_section().filter(|section| !section.is_empty()) {
			write!(f, "{global}")?;
			separate = true;
		}

		let named = self
			.iter()
			.filter(|(name, section)| !section.is_empty() && !self.is_global(name));

		for (name, section) in named {
			if separate {
				f.write_str(LINE_ENDING)?;
			}
			write!(f, "[{name}]{LINE_ENDING}{LINE_ENDING}{section}")?;
			separate = true;
		}

		Ok(())
	}
}
