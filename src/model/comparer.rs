use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Equality policy for section names and keys.
///
/// Two keys are the same entry when their folds are equal, and a key
/// hashes as its fold.
pub trait StringComparer: fmt::Debug + Send + Sync {
	/// Canonical identity of `key` under this policy.
	fn fold<'a>(&self, key: &'a str) -> Cow<'a, str>;

	/// Short name used in debug output.
	fn name(&self) -> &str;
}

/// Case-insensitive comparison (the default).
///
/// Lowercases one `char` at a time, without the context rules of
/// [`str::to_lowercase`], so a key folds the same wherever a letter sits.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreCase;

impl StringComparer for IgnoreCase {
	fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
		if key.chars().all(folds_to_itself) {
			Cow::Borrowed(key)
		} else {
			Cow::Owned(key.chars().flat_map(char::to_lowercase).collect())
		}
	}

	fn name(&self) -> &str {
		"ignore-case"
	}
}

fn folds_to_itself(c: char) -> bool {
	let mut lower = c.to_lowercase();
	lower.next() == Some(c) && lower.next().is_none()
}

/// Exact, byte-for-byte comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordinal;

impl StringComparer for Ordinal {
	fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
		Cow::Borrowed(key)
	}

	fn name(&self) -> &str {
		"ordinal"
	}
}

/// Shared handle to a [`StringComparer`].
///
/// A container stores one of these at construction and keeps it for its
/// whole lifetime. Cloning is cheap.
#[derive(Clone)]
pub struct KeyComparer(Arc<dyn StringComparer>);

impl KeyComparer {
	pub fn ignore_case() -> Self {
		Self(Arc::new(IgnoreCase))
	}

	pub fn ordinal() -> Self {
		Self(Arc::new(Ordinal))
	}

	/// Wrap a user-supplied policy.
	pub fn custom(comparer: impl StringComparer + 'static) -> Self {
		Self(Arc::new(comparer))
	}

	pub fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
		self.0.fold(key)
	}

	pub fn equals(&self, a: &str, b: &str) -> bool {
		self.fold(a) == self.fold(b)
	}

	pub fn hash<H: Hasher>(&self, key: &str, state: &mut H) {
		self.fold(key).hash(state);
	}

	pub fn name(&self) -> &str {
		self.0.name()
	}
}

impl Default for KeyComparer {
	fn default() -> Self {
		Self::ignore_case()
	}
}

impl fmt::Debug for KeyComparer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("KeyComparer").field(&self.name()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::hash_map::DefaultHasher;

	fn hash_of(comparer: &KeyComparer, key: &str) -> u64 {
		let mut hasher = DefaultHasher::new();
		comparer.hash(key, &mut hasher);
		hasher.finish()
	}

	#[test]
	fn test_default_is_ignore_case() {
		let comparer = KeyComparer::default();
		assert_eq!(comparer.name(), "ignore-case");
		assert!(comparer.equals("Foo", "FOO"));
		assert_eq!(hash_of(&comparer, "Foo"), hash_of(&comparer, "fOO"));
	}

	#[test]
	fn test_ordinal_is_exact() {
		let comparer = KeyComparer::ordinal();
		assert!(comparer.equals("Foo", "Foo"));
		assert!(!comparer.equals("Foo", "FOO"));
	}

	#[test]
	fn test_ignore_case_borrows_lowercase_keys() {
		assert!(matches!(IgnoreCase.fold("abc"), Cow::Borrowed("abc")));
		assert_eq!(IgnoreCase.fold("ÄBC"), "äbc");
	}

	#[test]
	fn test_ignore_case_folds_titlecase_letters() {
		let comparer = KeyComparer::ignore_case();

		// U+01C5 is titlecase, not uppercase.
		assert_eq!(IgnoreCase.fold("\u{01C5}"), "\u{01C6}");
		assert!(comparer.equals("\u{01C4}", "\u{01C5}"));
		assert!(comparer.equals("\u{01C5}", "\u{01C6}"));
	}

	#[test]
	fn test_ignore_case_ignores_final_sigma_context() {
		let comparer = KeyComparer::ignore_case();

		assert_eq!(IgnoreCase.fold("ΑΣ"), "ασ");
		assert!(comparer.equals("ΑΣ", "ασ"));
		assert_eq!(hash_of(&comparer, "ΑΣ"), hash_of(&comparer, "ασ"));
	}

	#[test]
	fn test_custom_comparer() {
		#[derive(Debug)]
		struct IgnoreDashes;

		impl StringComparer for IgnoreDashes {
			fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
				Cow::Owned(key.replace('-', ""))
			}

			fn name(&self) -> &str {
				"ignore-dashes"
			}
		}

		let comparer = KeyComparer::custom(IgnoreDashes);
		assert!(comparer.equals("log-level", "loglevel"));
		assert!(!comparer.equals("log-level", "LogLevel"));
		assert_eq!(format!("{comparer:?}"), "KeyComparer(\"ignore-dashes\")");
	}
}
