//! Keyed argument collections.
//!
//! [`Kwargs`] is the uniform input and output shape of the normalization
//! functions: an insertion-ordered, unique-keyed map from parameter name to
//! [`Arg`], where each slot holds either a concrete [`Value`] or one of the two
//! [`Sentinel`]s.

use core::fmt;

use indexmap::IndexMap;

use crate::sentinel::{OPTIONAL, REQUIRED, Sentinel};
use crate::value::Value;


/// One argument slot: a concrete value or a sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
	/// A concrete value supplied by the caller or by a default.
	Value(Value),
	/// A placeholder, compared by identity.
	Sentinel(&'static Sentinel),
}

impl Arg {
	/// Slot holding the [`REQUIRED`] marker.
	pub fn required() -> Self {
		Arg::Sentinel(REQUIRED)
	}

	/// Slot holding the [`OPTIONAL`] marker.
	pub fn optional() -> Self {
		Arg::Sentinel(OPTIONAL)
	}

	/// Returns `true` if this slot holds the [`REQUIRED`] marker.
	pub fn is_required(&self) -> bool {
		matches!(self, Arg::Sentinel(s) if s.is_required())
	}

	/// Returns `true` if this slot holds the [`OPTIONAL`] marker.
	pub fn is_optional(&self) -> bool {
		matches!(self, Arg::Sentinel(s) if s.is_optional())
	}

	/// Returns `true` if this slot holds either marker.
	pub fn is_sentinel(&self) -> bool {
		matches!(self, Arg::Sentinel(_))
	}

	/// Returns the marker if this slot holds one.
	pub fn as_sentinel(&self) -> Option<&'static Sentinel> {
		match self {
			Arg::Sentinel(s) => Some(*s),
			Arg::Value(_) => None,
		}
	}

	/// Returns the concrete value, if any.
	pub fn as_value(&self) -> Option<&Value> {
		match self {
			Arg::Value(v) => Some(v),
			Arg::Sentinel(_) => None,
		}
	}

	/// Returns the concrete value mutably, if any.
	pub fn as_value_mut(&mut self) -> Option<&mut Value> {
		match self {
			Arg::Value(v) => Some(v),
			Arg::Sentinel(_) => None,
		}
	}

	/// Consumes the slot, returning the concrete value if any.
	pub fn into_value(self) -> Option<Value> {
		match self {
			Arg::Value(v) => Some(v),
			Arg::Sentinel(_) => None,
		}
	}

	/// Returns the boolean value if this slot holds a `Bool`.
	pub fn as_bool(&self) -> Option<bool> {
		self.as_value().and_then(Value::as_bool)
	}

	/// Returns the integer value if this slot holds an `Int`.
	pub fn as_int(&self) -> Option<i64> {
		self.as_value().and_then(Value::as_int)
	}

	/// Returns the string value if this slot holds a `String`.
	pub fn as_str(&self) -> Option<&str> {
		self.as_value().and_then(Value::as_str)
	}

	/// Returns the items if this slot holds a `List`.
	pub fn as_list(&self) -> Option<&[Value]> {
		self.as_value().and_then(Value::as_list)
	}

	/// Describes the slot contents for diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			Arg::Value(v) => v.type_name(),
			Arg::Sentinel(s) => s.name(),
		}
	}
}

impl From<&'static Sentinel> for Arg {
	fn from(s: &'static Sentinel) -> Self {
		Arg::Sentinel(s)
	}
}

macro_rules! arg_from_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Arg {
				fn from(v: $ty) -> Self {
					Arg::Value(v.into())
				}
			}
		)*
	};
}

arg_from_value!(Value, bool, i32, i64, u32, f64, String, &str, &[u8], IndexMap<String, Value>, ());

impl<const N: usize> From<&[u8; N]> for Arg {
	fn from(v: &[u8; N]) -> Self {
		Arg::Value(v.into())
	}
}

impl<T: Into<Value>> From<Vec<T>> for Arg {
	fn from(v: Vec<T>) -> Self {
		Arg::Value(v.into())
	}
}

impl<T: Into<Value>> From<Option<T>> for Arg {
	fn from(v: Option<T>) -> Self {
		Arg::Value(v.into())
	}
}

/// Insertion-ordered map from argument name to [`Arg`].
///
/// Equality compares entries as a map and ignores order; use [`Kwargs::keys`]
/// to assert on ordering.
#[derive(Clone, Default, PartialEq)]
pub struct Kwargs {
	entries: IndexMap<String, Arg>,
}

impl Kwargs {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty collection with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: IndexMap::with_capacity(capacity),
		}
	}

	/// Adds an entry, builder style.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts an entry, returning the previous value for `key`.
	///
	/// Replacing an existing key keeps its original position.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Arg>) -> Option<Arg> {
		self.entries.insert(key.into(), value.into())
	}

	/// Removes an entry, preserving the order of the remaining keys.
	pub fn remove(&mut self, key: &str) -> Option<Arg> {
		self.entries.shift_remove(key)
	}

	/// Returns the slot for `key`.
	pub fn get(&self, key: &str) -> Option<&Arg> {
		self.entries.get(key)
	}

	/// Returns the slot for `key` mutably.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Arg> {
		self.entries.get_mut(key)
	}

	/// Returns the concrete value for `key`, skipping sentinels.
	pub fn value(&self, key: &str) -> Option<&Value> {
		self.get(key).and_then(Arg::as_value)
	}

	/// Returns `true` if `key` is present, whatever it holds.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, Arg> {
		self.entries.iter()
	}

	/// Iterates keys in insertion order.
	pub fn keys(&self) -> indexmap::map::Keys<'_, String, Arg> {
		self.entries.keys()
	}

	/// Iterates slots in insertion order.
	pub fn values(&self) -> indexmap::map::Values<'_, String, Arg> {
		self.entries.values()
	}

	/// Iterates the keys whose slot holds [`REQUIRED`], in insertion order.
	pub fn required_keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries
			.iter()
			.filter(|(_, arg)| arg.is_required())
			.map(|(key, _)| key.as_str())
	}

	/// Keeps only the entries for which `keep` returns `true`.
	pub fn retain(&mut self, mut keep: impl FnMut(&str, &Arg) -> bool) {
		self.entries.retain(|key, arg| keep(key, arg));
	}

	/// Converts into a map of concrete values.
	///
	/// Returns `None` if any slot still holds a sentinel.
	pub fn into_values(self) -> Option<IndexMap<String, Value>> {
		self.entries
			.into_iter()
			.map(|(key, arg)| arg.into_value().map(|v| (key, v)))
			.collect()
	}
}

impl fmt::Debug for Kwargs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.entries.iter()).finish()
	}
}

impl<K: Into<String>, V: Into<Arg>> FromIterator<(K, V)> for Kwargs {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut kwargs = Kwargs::new();
		kwargs.extend(iter);
		kwargs
	}
}

impl<K: Into<String>, V: Into<Arg>> Extend<(K, V)> for Kwargs {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl IntoIterator for Kwargs {
	type Item = (String, Arg);
	type IntoIter = indexmap::map::IntoIter<String, Arg>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a Kwargs {
	type Item = (&'a String, &'a Arg);
	type IntoIter = indexmap::map::Iter<'a, String, Arg>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl core::ops::Index<&str> for Kwargs {
	type Output = Arg;

	fn index(&self, key: &str) -> &Arg {
		&self.entries[key]
	}
}

/// Builds a [`Kwargs`] from `key => value` pairs.
///
/// Values go through `Into<Arg>`, so plain values and the sentinel statics mix
/// freely:
///
/// ```
/// use funcargs_args::{OPTIONAL, REQUIRED, kwargs};
///
/// let args = kwargs! {
///     "bucket" => "my-bucket",
///     "body" => REQUIRED,
///     "tags" => OPTIONAL,
/// };
/// assert_eq!(args.len(), 3);
/// assert!(args["body"].is_required());
/// ```
#[macro_export]
macro_rules! kwargs {
	() => {
		$crate::Kwargs::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut kwargs = $crate::Kwargs::new();
		$(
			kwargs.insert($key, $value);
		)+
		kwargs
	}};
}
