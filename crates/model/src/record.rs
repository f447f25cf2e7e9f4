//! Mutable record base.

use core::ops::Index;

use funcargs_args::{Arg, Kwargs, Value, remove_optional};
use indexmap::IndexMap;

use crate::error::ParamError;
use crate::schema::Schema;
use crate::staging::{PostInit, Staging};

#[cfg(test)]
mod tests;

/// Static description of a record type: its field table and post-init hook.
///
/// Usually implemented by [`model!`](crate::model) or
/// [`frozen_model!`](crate::frozen_model).
pub trait ModelSchema {
	/// Field table, built once for the type.
	const SCHEMA: &'static Schema;

	/// Derives computed fields.
	///
	/// Called with validated input: every constructor field already holds a
	/// value or `OPTIONAL`. Computed fields are written with
	/// [`Staging::set_computed`].
	fn post_init(staging: &mut Staging<'_>) -> Result<(), ParamError> {
		let _ = staging;
		Ok(())
	}

	/// Splits raw input into required and remaining entries.
	///
	/// See [`Schema::split_req_opt`].
	fn split_req_opt(kwargs: &Kwargs) -> Result<(Kwargs, Kwargs), ParamError> {
		Self::SCHEMA.split_req_opt(kwargs)
	}
}

/// A record type backed by a mutable [`Record`].
pub trait Model: ModelSchema + Sized {
	/// Wraps a validated record.
	fn from_record(record: Record) -> Self;

	/// Underlying record.
	fn record(&self) -> &Record;

	/// Underlying record, mutably.
	fn record_mut(&mut self) -> &mut Record;

	/// Builds the record from constructor input.
	///
	/// # Errors
	///
	/// [`ParamError`] if a required field is missing, the input names an
	/// unknown or computed field, or the post-init hook fails.
	fn new(kwargs: Kwargs) -> Result<Self, ParamError> {
		Record::build(Self::SCHEMA, kwargs, Self::post_init).map(Self::from_record)
	}

	/// Every field, verbatim.
	fn to_dict(&self) -> Kwargs {
		self.record().to_dict()
	}

	/// Every field except those still holding `OPTIONAL`.
	fn to_kwargs(&self) -> Kwargs {
		self.record().to_kwargs()
	}
}

/// Field values of a record, in declaration order.
///
/// No field holds `REQUIRED` once built: [`Record::set`] only accepts concrete
/// values, [`Record::unset`] only writes `OPTIONAL`, and [`Record::get_mut`]
/// only exposes concrete values.
#[derive(Debug, Clone)]
pub struct Record {
	schema: &'static Schema,
	values: IndexMap<&'static str, Arg>,
}

impl Record {
	/// Validates `kwargs` against `schema`, runs `post_init`, and builds the record.
	///
	/// # Errors
	///
	/// See [`Model::new`].
	pub fn build(schema: &'static Schema, kwargs: Kwargs, post_init: PostInit) -> Result<Self, ParamError> {
		let values = Staging::run(schema, kwargs, post_init)?;
		Ok(Self { schema, values })
	}

	/// Schema this record was built from.
	pub fn schema(&self) -> &'static Schema {
		self.schema
	}

	/// Slot of field `name`.
	pub fn get(&self, name: &str) -> Option<&Arg> {
		self.values.get(name)
	}

	/// Concrete value of field `name`, for in-place edits.
	///
	/// Returns `None` for unknown fields and fields holding `OPTIONAL`.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
		self.values.get_mut(name).and_then(Arg::as_value_mut)
	}

	/// Assigns field `name`, returning its previous slot.
	///
	/// # Errors
	///
	/// [`ParamError::UnknownField`] if the schema has no such field.
	pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<Arg, ParamError> {
		match self.values.get_mut(name) {
			Some(slot) => Ok(core::mem::replace(slot, Arg::Value(value.into()))),
			None => Err(ParamError::UnknownField {
				model: self.schema.name(),
				field: name.to_string(),
			}),
		}
	}

	/// Puts field `name` back to `OPTIONAL`, returning its previous slot.
	///
	/// The field is then dropped again by [`Record::to_kwargs`].
	///
	/// # Errors
	///
	/// [`ParamError::UnknownField`] if the schema has no such field.
	pub fn unset(&mut self, name: &str) -> Result<Arg, ParamError> {
		match self.values.get_mut(name) {
			Some(slot) => Ok(core::mem::replace(slot, Arg::optional())),
			None => Err(ParamError::UnknownField {
				model: self.schema.name(),
				field: name.to_string(),
			}),
		}
	}

	/// Iterates fields in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Arg)> {
		self.values.iter().map(|(name, arg)| (*name, arg))
	}

	/// Every field, verbatim, including `OPTIONAL` ones.
	///
	/// The result is a fresh collection; editing it does not affect the record.
	pub fn to_dict(&self) -> Kwargs {
		self.iter().map(|(name, arg)| (name, arg.clone())).collect()
	}

	/// Every field except those still holding `OPTIONAL`.
	pub fn to_kwargs(&self) -> Kwargs {
		remove_optional(&self.to_dict())
	}
}

impl PartialEq for Record {
	fn eq(&self, other: &Self) -> bool {
		self.schema.name() == other.schema.name() && self.values == other.values
	}
}

impl Index<&str> for Record {
	type Output = Arg;

	/// # Panics
	///
	/// Panics if the schema has no field `name`.
	fn index(&self, name: &str) -> &Arg {
		&self.values[name]
	}
}
