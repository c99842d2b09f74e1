//! Lookup across dotted section hierarchies.
//!
//! A section named `a.b.c` inherits from `a.b`, which inherits from `a`.
//! Ancestors that do not exist are skipped.

use crate::model::map::KeyValueMap;
use crate::model::section::Section;

/// `a.b.c`, `a.b`, `a`: most specific first.
pub fn ancestors_outward(section: &str) -> impl Iterator<Item = &str> {
	std::iter::successors(Some(section), |&current: &&str| {
		current.rfind('.').map(|index| &current[..index])
	})
}

/// `a`, `a.b`, `a.b.c`: least specific first.
pub fn ancestors_inward(section: &str) -> impl Iterator<Item = &str> {
	section
		.match_indices('.')
		.map(move |(index, _)| &section[..index])
		.chain(std::iter::once(section))
}

impl KeyValueMap<Section> {
	/// First value of `key` found walking from `section` out to its root.
	pub fn get_nested_value(&self, section: &str, key: &str) -> Option<&String> {
		ancestors_outward(section).find_map(|name| self.value(name, key))
	}

	/// Merge of every existing ancestor of `section`, root first, so that
	/// descendants override their ancestors.
	///
	/// Empty when no section of the chain exists.
	pub fn get_nested_section(&self, section: &str) -> Section {
		ancestors_inward(section)
			.filter_map(|name| self.get(name))
			.fold(self.new_section(), |merged, next| merged.merge(next))
	}
}
