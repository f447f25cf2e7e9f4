//! Two-phase record construction.
//!
//! Input is populated into a [`Staging`] area, validated, handed to the
//! record type's post-init hook for computed fields, and only then sealed into
//! a [`Record`](crate::Record) or [`FrozenRecord`](crate::FrozenRecord).

use std::collections::HashSet;

use funcargs_args::{Arg, Kwargs, Value};
use indexmap::IndexMap;

use crate::error::ParamError;
use crate::schema::{FieldDef, Schema};

/// Post-init hook signature: derives computed fields from validated input.
pub type PostInit = fn(&mut Staging<'_>) -> Result<(), ParamError>;

/// Mutable pre-seal representation of a record.
///
/// The post-init hook receives this after required-field validation has
/// passed. It is the only place computed fields can be written.
pub struct Staging<'s> {
	schema: &'s Schema,
	values: IndexMap<&'static str, Arg>,
	assigned: HashSet<&'static str>,
}

impl<'s> Staging<'s> {
	/// Populates every field from `kwargs` or its declared default.
	fn populate(schema: &'s Schema, kwargs: Kwargs) -> Result<Self, ParamError> {
		let mut input = kwargs;
		let mut values = IndexMap::with_capacity(schema.fields().len());
		for def in schema.fields() {
			let supplied = input.remove(def.name);
			let arg = match supplied {
				Some(_) if !def.init => {
					return Err(ParamError::NotInitField {
						model: schema.name(),
						field: def.name,
					});
				}
				Some(arg) => arg,
				None => def.default.to_arg(),
			};
			values.insert(def.name, arg);
		}

		if let Some(unknown) = input.keys().next() {
			return Err(ParamError::UnknownField {
				model: schema.name(),
				field: unknown.clone(),
			});
		}

		Ok(Self {
			schema,
			values,
			assigned: HashSet::new(),
		})
	}

	/// Fails on the first constructor field still holding `REQUIRED`.
	fn validate(&self) -> Result<(), ParamError> {
		let missing = self
			.schema
			.fields()
			.iter()
			.filter(|def| def.init)
			.find(|def| self.values.get(def.name).is_some_and(Arg::is_required));
		match missing {
			Some(def) => Err(ParamError::MissingRequiredField {
				model: self.schema.name(),
				field: def.name,
			}),
			None => Ok(()),
		}
	}

	/// Runs populate, validate, `post_init`, and the unset-computed check.
	pub(crate) fn run(
		schema: &'s Schema,
		kwargs: Kwargs,
		post_init: PostInit,
	) -> Result<IndexMap<&'static str, Arg>, ParamError> {
		let result = Self::populate(schema, kwargs).and_then(|mut staging| {
			staging.validate()?;
			post_init(&mut staging)?;
			staging.seal()
		});
		match result {
			Ok(values) => {
				tracing::trace!(model = schema.name(), fields = values.len(), "record sealed");
				Ok(values)
			}
			Err(err) => {
				tracing::debug!(model = schema.name(), field = err.field(), error = %err, "record rejected");
				Err(err)
			}
		}
	}

	fn seal(self) -> Result<IndexMap<&'static str, Arg>, ParamError> {
		if let Some(def) = self
			.schema
			.computed_fields()
			.find(|def| self.values.get(def.name).is_some_and(Arg::is_required))
		{
			return Err(ParamError::ComputedFieldUnset {
				model: self.schema.name(),
				field: def.name,
			});
		}
		Ok(self.values)
	}

	/// Schema of the record under construction.
	pub fn schema(&self) -> &'s Schema {
		self.schema
	}

	/// Current slot of field `name`.
	pub fn get(&self, name: &str) -> Option<&Arg> {
		self.values.get(name)
	}

	/// Concrete value of field `name`.
	///
	/// # Errors
	///
	/// [`ParamError::UnknownField`] if the schema has no such field,
	/// [`ParamError::NoValue`] if it holds a sentinel (an unset optional field,
	/// or a computed field not assigned yet).
	pub fn value(&self, name: &str) -> Result<&Value, ParamError> {
		let def = self.field(name)?;
		self.values
			.get(def.name)
			.and_then(Arg::as_value)
			.ok_or(ParamError::NoValue {
				model: self.schema.name(),
				field: def.name,
			})
	}

	/// Assigns computed field `name`, exactly once.
	///
	/// # Errors
	///
	/// [`ParamError::UnknownField`] for undeclared names,
	/// [`ParamError::NotComputedField`] for constructor fields and
	/// [`ParamError::ComputedFieldReassigned`] on a second assignment.
	pub fn set_computed(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ParamError> {
		let def = self.field(name)?;
		if !def.is_computed() {
			return Err(ParamError::NotComputedField {
				model: self.schema.name(),
				field: def.name,
			});
		}
		if !self.assigned.insert(def.name) {
			return Err(ParamError::ComputedFieldReassigned {
				model: self.schema.name(),
				field: def.name,
			});
		}
		self.values.insert(def.name, Arg::Value(value.into()));
		Ok(())
	}

	fn field(&self, name: &str) -> Result<&'static FieldDef, ParamError> {
		self.schema.field(name).ok_or_else(|| ParamError::UnknownField {
			model: self.schema.name(),
			field: name.to_string(),
		})
	}
}
