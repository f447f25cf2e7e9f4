//! Static field tables for record types.
//!
//! A [`Schema`] is built once per record type, as a `const`, and is the only
//! source of field-default information: construction, validation and
//! [`Schema::split_req_opt`] read it instead of inspecting instances.

use core::fmt;

use funcargs_args::{Arg, Kwargs, Value};

use crate::error::ParamError;

#[cfg(test)]
mod tests;

/// Declared default of a record field.
///
/// Concrete defaults are always factories, invoked once per record, so two
/// records never share a default container.
#[derive(Clone, Copy)]
pub enum FieldDefault {
	/// The caller must supply a value.
	Required,
	/// The field may be left unset; it then holds [`OPTIONAL`](funcargs_args::OPTIONAL).
	Optional,
	/// Default value factory.
	Factory(fn() -> Value),
}

impl FieldDefault {
	/// Produces the initial slot for a fresh record.
	pub fn to_arg(self) -> Arg {
		match self {
			FieldDefault::Required => Arg::required(),
			FieldDefault::Optional => Arg::optional(),
			FieldDefault::Factory(f) => Arg::Value(f()),
		}
	}
}

impl fmt::Debug for FieldDefault {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldDefault::Required => f.write_str("FieldDefault::Required"),
			FieldDefault::Optional => f.write_str("FieldDefault::Optional"),
			FieldDefault::Factory(_) => f.write_str("FieldDefault::Factory(..)"),
		}
	}
}

/// Declaration of one record field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
	/// Field name, also its key in constructor input and exported collections.
	pub name: &'static str,
	/// Declared default.
	pub default: FieldDefault,
	/// Whether the field is accepted as constructor input.
	///
	/// Fields with `init == false` are computed by the record's post-init hook.
	pub init: bool,
}

impl FieldDef {
	/// A constructor field that must be supplied.
	pub const fn required(name: &'static str) -> Self {
		Self {
			name,
			default: FieldDefault::Required,
			init: true,
		}
	}

	/// A constructor field that may be left unset.
	pub const fn optional(name: &'static str) -> Self {
		Self {
			name,
			default: FieldDefault::Optional,
			init: true,
		}
	}

	/// A constructor field with a concrete default produced by `factory`.
	pub const fn factory(name: &'static str, factory: fn() -> Value) -> Self {
		Self {
			name,
			default: FieldDefault::Factory(factory),
			init: true,
		}
	}

	/// A field excluded from constructor input and assigned by the post-init hook.
	pub const fn computed(name: &'static str) -> Self {
		Self {
			name,
			default: FieldDefault::Required,
			init: false,
		}
	}

	/// Returns true if the field is declared with the `REQUIRED` default.
	pub fn is_required(&self) -> bool {
		matches!(self.default, FieldDefault::Required)
	}

	/// Returns true if the field is assigned by the post-init hook.
	pub fn is_computed(&self) -> bool {
		!self.init
	}
}

/// Field table of a record type, in declaration order.
#[derive(Debug)]
pub struct Schema {
	name: &'static str,
	fields: &'static [FieldDef],
}

impl Schema {
	/// Creates the schema for record type `name`.
	pub const fn new(name: &'static str, fields: &'static [FieldDef]) -> Self {
		Self { name, fields }
	}

	/// Record type name, used in error messages.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// All fields in declaration order.
	pub fn fields(&self) -> &'static [FieldDef] {
		self.fields
	}

	/// Looks up a field by name.
	pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Fields declared with the `REQUIRED` default, constructor fields only.
	pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
		self.fields.iter().filter(|f| f.init && f.is_required())
	}

	/// Fields assigned by the post-init hook.
	pub fn computed_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
		self.fields.iter().filter(|f| f.is_computed())
	}

	/// Partitions raw input against the declared required fields.
	///
	/// Returns `(required, rest)`: `required` holds the entries whose key names
	/// a field declared `REQUIRED`, `rest` holds every other input entry,
	/// including keys the schema does not know. Both keep input order.
	///
	/// # Errors
	///
	/// [`ParamError::MissingRequiredField`] if a `REQUIRED` field is absent from
	/// `kwargs`, whatever its position among the declarations.
	pub fn split_req_opt(&self, kwargs: &Kwargs) -> Result<(Kwargs, Kwargs), ParamError> {
		if let Some(missing) = self.required_fields().find(|f| !kwargs.contains_key(f.name)) {
			tracing::debug!(model = self.name, field = missing.name, "missing required field");
			return Err(ParamError::MissingRequiredField {
				model: self.name,
				field: missing.name,
			});
		}

		let mut required = Kwargs::new();
		let mut rest = Kwargs::new();
		for (key, arg) in kwargs {
			let target = match self.field(key) {
				Some(def) if def.init && def.is_required() => &mut required,
				_ => &mut rest,
			};
			target.insert(key.clone(), arg.clone());
		}
		Ok((required, rest))
	}
}
