//! Normalization of declarative calls.
//!
//! A wrapper declares its parameters with [`REQUIRED`](crate::REQUIRED) and
//! [`OPTIONAL`](crate::OPTIONAL) defaults, collects them into a [`Kwargs`], and
//! calls [`prepare_kwargs`] to obtain the clean argument set it forwards
//! downstream.

use crate::error::MissingRequiredArgument;
use crate::kwargs::Kwargs;


/// Fails if any argument still holds [`REQUIRED`](crate::REQUIRED).
///
/// Keys are checked in insertion order and the first offender is reported.
/// Succeeds with no effect otherwise, including for an empty collection.
pub fn check_required(kwargs: &Kwargs) -> Result<(), MissingRequiredArgument> {
	match kwargs.required_keys().next() {
		Some(key) => {
			tracing::debug!(argument = key, "missing required argument");
			Err(MissingRequiredArgument::new(key))
		}
		None => Ok(()),
	}
}

/// Returns a copy without the arguments holding [`OPTIONAL`](crate::OPTIONAL).
///
/// Order is preserved and the input is left untouched. `REQUIRED` entries are
/// kept; see [`prepare_kwargs`] to reject them.
pub fn remove_optional(kwargs: &Kwargs) -> Kwargs {
	kwargs
		.iter()
		.filter(|(_, arg)| !arg.is_optional())
		.map(|(key, arg)| (key.clone(), arg.clone()))
		.collect()
}

/// [`check_required`] followed by [`remove_optional`].
///
/// # Errors
///
/// Returns [`MissingRequiredArgument`] for the first key still holding
/// `REQUIRED`, even when `OPTIONAL` entries are present as well.
pub fn prepare_kwargs(kwargs: &Kwargs) -> Result<Kwargs, MissingRequiredArgument> {
	check_required(kwargs)?;
	Ok(remove_optional(kwargs))
}
