//! Argument normalization errors.

use thiserror::Error;

/// A keyed argument collection still holds [`REQUIRED`](crate::REQUIRED).
///
/// Only the first offending key, in insertion order, is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required argument: '{name}'")]
pub struct MissingRequiredArgument {
	/// Name of the argument that was never supplied.
	pub name: String,
}

impl MissingRequiredArgument {
	/// Creates the error for argument `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}
