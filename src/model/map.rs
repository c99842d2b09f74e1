use crate::model::comparer::KeyComparer;
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A stored entry: the key as first spelled, and its value.
#[derive(Debug, Clone)]
struct Slot<V> {
	key: String,
	value: V,
}

/// String-keyed store whose key identity is decided by a [`KeyComparer`].
///
/// Entries keep first-insertion order. Overwriting an existing key keeps
/// its original spelling and position; removing a key keeps the order of
/// the remaining entries.
///
/// "Not found" is always an absent `Option`, never an error.
#[derive(Clone)]
pub struct KeyValueMap<V> {
	comparer: KeyComparer,
	entries: IndexMap<String, Slot<V>>,
}

impl<V> KeyValueMap<V> {
	/// Create an empty map using the default (case-insensitive) comparer.
	pub fn new() -> Self {
		Self::with_comparer(KeyComparer::default())
	}

	pub fn with_comparer(comparer: KeyComparer) -> Self {
		Self {
			comparer,
			entries: IndexMap::new(),
		}
	}

	pub fn comparer(&self) -> &KeyComparer {
		&self.comparer
	}

	pub fn get(&self, key: &str) -> Option<&V> {
		self.entries
			.get(&*self.comparer.fold(key))
			.map(|slot| &slot.value)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
		let folded = self.comparer.fold(key);
		self.entries
			.get_mut(&*folded)
			.map(|slot| &mut slot.value)
	}

	/// Upsert-or-delete: `Some` inserts or overwrites, `None` removes.
	///
	/// Returns the state at `key` afterwards.
	pub fn set(&mut self, key: impl Into<String>, value: Option<V>) -> Option<&V> {
		let key = key.into();
		match value {
			Some(value) => Some(self.add(key, value)),
			None => {
				self.remove(&key);
				None
			}
		}
	}

	/// Insert or overwrite, returning the stored (new) value.
	pub fn add(&mut self, key: impl Into<String>, value: V) -> &V {
		let key = key.into();
		let folded = self.comparer.fold(&key).into_owned();

		let slot = match self.entries.entry(folded) {
			indexmap::map::Entry::Occupied(entry) => {
				let slot = entry.into_mut();
				slot.value = value;
				slot
			}
			indexmap::map::Entry::Vacant(entry) => entry.insert(Slot { key, value }),
		};

		&slot.value
	}

	/// Remove `key`, returning the removed value if it was present.
	pub fn remove(&mut self, key: &str) -> Option<V> {
		let folded = self.comparer.fold(key);
		self.entries
			.shift_remove(&*folded)
			.map(|slot| slot.value)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(&*self.comparer.fold(key))
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Keys as first spelled, in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.values().map(|slot| slot.key.as_str())
	}

	pub fn values(&self) -> impl Iterator<Item = &V> {
		self.entries.values().map(|slot| &slot.value)
	}

	pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
		self.entries.values_mut().map(|slot| &mut slot.value)
	}

	pub fn iter(&self) -> Iter<'_, V> {
		Iter {
			inner: self.entries.values(),
		}
	}
}

impl<V: Clone> KeyValueMap<V> {
	/// Copy this map under another comparer.
	///
	/// Key identity is recomputed; key spelling is not. Entries that collide
	/// under the new comparer collapse into the first one, holding the last value.
	pub fn rekeyed(&self, comparer: KeyComparer) -> Self {
		let mut copy = Self::with_comparer(comparer);
		for (key, value) in self {
			copy.add(key, value.clone());
		}
		copy
	}
}

impl<V> Default for KeyValueMap<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V: fmt::Debug> fmt::Debug for KeyValueMap<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

/// Order-insensitive: same size, and every entry of `other` is found in
/// `self` (under `self`'s comparer) with an equal value.
impl<V: PartialEq> PartialEq for KeyValueMap<V> {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && other.iter().all(|(key, value)| self.get(key) == Some(value))
	}
}

/// Iterator over `(key, value)` pairs in insertion order.
pub struct Iter<'a, V> {
	inner: indexmap::map::Values<'a, String, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
	type Item = (&'a str, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.next()
			.map(|slot| (slot.key.as_str(), &slot.value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a KeyValueMap<V> {
	type Item = (&'a str, &'a V);
	type IntoIter = Iter<'a, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K: Into<String>, V> Extend<(K, V)> for KeyValueMap<V> {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.add(key, value);
		}
	}
}

impl<K: Into<String>, V> FromIterator<(K, V)> for KeyValueMap<V> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<V: Serialize> Serialize for KeyValueMap<V> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter())
	}
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for KeyValueMap<V> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_map(MapVisitor(PhantomData))
	}
}

struct MapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
	type Value = KeyValueMap<V>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a map with string keys")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
		let mut map = KeyValueMap::new();
		while let Some((key, value)) = access.next_entry::<String, V>()? {
			map.add(key, value);
		}
		Ok(map)
	}
}
