//! Concrete argument values.

use indexmap::IndexMap;

/// An ordinary, concrete argument value.
///
/// Sentinels are deliberately not representable here; a slot that may hold
/// one is an [`Arg`](crate::Arg).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum Value {
	/// Explicit "no value", distinct from both sentinels.
	Null,
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
	/// String value.
	String(String),
	/// Ordered list of values.
	List(Vec<Value>),
	/// Ordered string-keyed map of values.
	Map(IndexMap<String, Value>),
	/// Raw bytes.
	///
	/// Has no serde encoding: serializing it is an error, and input never
	/// deserializes into it.
	#[cfg_attr(feature = "serde", serde(skip_deserializing))]
	Bytes(Vec<u8>),
}

impl Value {
	/// Factory for a fresh empty list, usable as a field default.
	pub fn empty_list() -> Value {
		Value::List(Vec::new())
	}

	/// Factory for a fresh empty map, usable as a field default.
	pub fn empty_map() -> Value {
		Value::Map(IndexMap::new())
	}

	/// Returns true for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the bytes if this is a `Bytes` variant.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Value::Bytes(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the items if this is a `List` variant.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the items mutably if this is a `List` variant.
	pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
		match self {
			Value::List(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the entries if this is a `Map` variant.
	pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
		match self {
			Value::Map(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the entries mutably if this is a `Map` variant.
	pub fn as_map_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
		match self {
			Value::Map(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::String(_) => "string",
			Value::List(_) => "list",
			Value::Map(_) => "map",
			Value::Bytes(_) => "bytes",
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v.into())
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::Int(v.into())
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

impl From<&[u8]> for Value {
	fn from(v: &[u8]) -> Self {
		Value::Bytes(v.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Value {
	fn from(v: &[u8; N]) -> Self {
		Value::Bytes(v.to_vec())
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(v: Vec<T>) -> Self {
		Value::List(v.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map_or(Value::Null, Into::into)
	}
}

impl From<IndexMap<String, Value>> for Value {
	fn from(v: IndexMap<String, Value>) -> Self {
		Value::Map(v)
	}
}

impl From<()> for Value {
	fn from((): ()) -> Self {
		Value::Null
	}
}
