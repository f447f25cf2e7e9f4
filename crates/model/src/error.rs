//! Record validation errors.

use thiserror::Error;

/// Errors raised while constructing or splitting input for a record type.
///
/// Kept separate from [`MissingRequiredArgument`](funcargs_args::MissingRequiredArgument)
/// so record validation failures can be handled apart from ad hoc argument
/// normalization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
	/// A field declared `REQUIRED` received no value.
	#[error("{model}: missing required field '{field}'")]
	MissingRequiredField {
		/// Record type name.
		model: &'static str,
		/// Field name.
		field: &'static str,
	},

	/// Input named a field the record does not declare.
	#[error("{model}: unknown field '{field}'")]
	UnknownField {
		/// Record type name.
		model: &'static str,
		/// The unrecognized key.
		field: String,
	},

	/// Input supplied a computed field, which is not accepted at construction.
	#[error("{model}: field '{field}' is computed and cannot be passed in")]
	NotInitField {
		/// Record type name.
		model: &'static str,
		/// Field name.
		field: &'static str,
	},

	/// The post-construction hook left a computed field unassigned.
	#[error("{model}: computed field '{field}' was never assigned")]
	ComputedFieldUnset {
		/// Record type name.
		model: &'static str,
		/// Field name.
		field: &'static str,
	},

	/// A computed field was assigned more than once.
	#[error("{model}: computed field '{field}' already assigned")]
	ComputedFieldReassigned {
		/// Record type name.
		model: &'static str,
		/// Field name.
		field: &'static str,
	},

	/// The post-construction hook tried to assign a constructor field.
	#[error("{model}: field '{field}' is not computed")]
	NotComputedField {
		/// Record type name.
		model: &'static str,
		/// Field name.
		field: &'static str,
	},

	/// A field read during construction holds a sentinel instead of a value.
	#[error("{model}: field '{field}' has no value")]
	NoValue {
		/// Record type name.
		model: &'static str,
		/// Field name.
		field: &'static str,
	},

	/// A post-construction hook rejected a field value.
	#[error("{model}: invalid value for field '{field}': {reason}")]
	Invalid {
		/// Record type name.
		model: &'static str,
		/// Field name.
		field: &'static str,
		/// Why the value was rejected.
		reason: String,
	},
}

impl ParamError {
	/// Name of the field the error concerns.
	pub fn field(&self) -> &str {
		match self {
			Self::UnknownField { field, .. } => field,
			Self::MissingRequiredField { field, .. }
			| Self::NotInitField { field, .. }
			| Self::ComputedFieldUnset { field, .. }
			| Self::ComputedFieldReassigned { field, .. }
			| Self::NotComputedField { field, .. }
			| Self::NoValue { field, .. }
			| Self::Invalid { field, .. } => field,
		}
	}
}
