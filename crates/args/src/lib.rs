#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Required/optional sentinel markers and keyword-argument normalization.
//!
//! Declare a parameter's default as [`REQUIRED`] or [`OPTIONAL`], gather the
//! parameters into a [`Kwargs`], and let [`prepare_kwargs`] reject the missing
//! ones and drop the unset ones before forwarding:
//!
//! ```
//! use funcargs_args::{OPTIONAL, REQUIRED, kwargs, prepare_kwargs};
//!
//! let args = kwargs! { "bucket" => "logs", "key" => "a.txt", "tags" => OPTIONAL };
//! let ready = prepare_kwargs(&args).unwrap();
//! assert_eq!(ready.keys().collect::<Vec<_>>(), ["bucket", "key"]);
//!
//! let err = prepare_kwargs(&kwargs! { "bucket" => "logs", "body" => REQUIRED }).unwrap_err();
//! assert_eq!(err.to_string(), "Missing required argument: 'body'");
//! ```

/// Argument normalization functions.
pub mod arg;
/// Normalization error type.
pub mod error;
/// Keyed argument collections and argument slots.
pub mod kwargs;
/// The two identity-compared markers.
pub mod sentinel;
#[cfg(feature = "serde")]
mod serde_impl;
/// Concrete argument values.
pub mod value;

pub use arg::{check_required, prepare_kwargs, remove_optional};
pub use error::MissingRequiredArgument;
pub use kwargs::{Arg, Kwargs};
pub use sentinel::{OPT, OPTIONAL, REQ, REQUIRED, Sentinel};
pub use value::Value;
