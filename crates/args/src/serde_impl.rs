//! `serde` support for [`Kwargs`] and [`Value`].
//!
//! Raw external input deserializes into a collection of concrete values.
//! Serialization refuses collections that still hold a sentinel, since a
//! marker is not data, and [`Value::Bytes`], which would otherwise come back
//! as a list of integers.

use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kwargs::{Arg, Kwargs};
use crate::value::Value;

impl Serialize for Kwargs {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (key, arg) in self {
			match arg {
				Arg::Value(value) => map.serialize_entry(key, value)?,
				Arg::Sentinel(marker) => {
					return Err(S::Error::custom(format!(
						"argument '{key}' holds the {marker} marker"
					)));
				}
			}
		}
		map.end()
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Int(i) => serializer.serialize_i64(*i),
			Value::Float(f) => serializer.serialize_f64(*f),
			Value::String(s) => serializer.serialize_str(s),
			Value::List(items) => serializer.collect_seq(items),
			Value::Map(map) => serializer.collect_map(map),
			Value::Bytes(_) => Err(S::Error::custom("bytes values have no serialized form")),
		}
	}
}

struct KwargsVisitor;

impl<'de> Visitor<'de> for KwargsVisitor {
	type Value = Kwargs;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a map of argument names to values")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Kwargs, A::Error> {
		let mut kwargs = Kwargs::with_capacity(access.size_hint().unwrap_or(0));
		while let Some((key, value)) = access.next_entry::<String, Value>()? {
			kwargs.insert(key, value);
		}
		Ok(kwargs)
	}
}

impl<'de> Deserialize<'de> for Kwargs {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(KwargsVisitor)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use crate::{OPTIONAL, REQUIRED, Value, kwargs};

	#[test]
	fn deserializes_in_document_order() {
		let kwargs: crate::Kwargs =
			serde_json::from_str(r#"{"name": "Dave", "age": 30, "tags": ["admin"], "note": null}"#)
				.unwrap();

		assert_eq!(kwargs.keys().collect::<Vec<_>>(), ["name", "age", "tags", "note"]);
		assert_eq!(kwargs.value("age"), Some(&Value::Int(30)));
		assert_eq!(kwargs.value("note"), Some(&Value::Null));
		assert_eq!(
			kwargs.value("tags"),
			Some(&Value::List(vec![Value::String("admin".into())]))
		);
	}

	#[test]
	fn serializes_concrete_values() {
		let kwargs = kwargs! { "a" => 1, "b" => "x", "c" => () };
		assert_eq!(
			serde_json::to_string(&kwargs).unwrap(),
			r#"{"a":1,"b":"x","c":null}"#
		);
	}

	#[test]
	fn refuses_to_serialize_sentinels() {
		let err = serde_json::to_string(&kwargs! { "a" => 1, "b" => OPTIONAL }).unwrap_err();
		assert!(err.to_string().contains("argument 'b' holds the OPTIONAL marker"));

		assert!(serde_json::to_string(&kwargs! { "c" => REQUIRED }).is_err());
	}

	#[test]
	fn refuses_to_serialize_bytes() {
		let err = serde_json::to_string(&kwargs! { "body" => b"hi" }).unwrap_err();
		assert!(err.to_string().contains("bytes values have no serialized form"));

		let nested = kwargs! { "parts" => Value::List(vec![Value::from("a"), Value::from(b"hi")]) };
		assert!(serde_json::to_string(&nested).is_err());
	}

	#[test]
	fn round_trip_keeps_value_types() {
		let kwargs = kwargs! {
			"body" => vec![104, 105],
			"name" => "Dave",
			"ratio" => 0.5,
			"flag" => true,
			"note" => (),
		};
		let json = serde_json::to_string(&kwargs).unwrap();
		let back: crate::Kwargs = serde_json::from_str(&json).unwrap();

		assert_eq!(back, kwargs);
		assert_eq!(back.value("body"), Some(&Value::List(vec![Value::Int(104), Value::Int(105)])));
		assert_eq!(back.value("ratio"), Some(&Value::Float(0.5)));
	}
}
