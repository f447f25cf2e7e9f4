#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Required/optional argument markers and validated record types.
//!
//! Two layers, usable separately:
//!
//! * Argument normalization: declare wrapper parameters with [`REQUIRED`] or
//!   [`OPTIONAL`] defaults and pass the collected [`Kwargs`] through
//!   [`prepare_kwargs`] before forwarding them downstream.
//! * Records: [`model!`] and [`frozen_model!`] declare types whose fields use
//!   the same markers, validated at construction and exported with
//!   `to_dict`/`to_kwargs`.
//!
//! ```
//! use funcargs::prelude::*;
//!
//! model! {
//!     pub struct Upload {
//!         bucket: required,
//!         key: required,
//!         tags: optional,
//!     }
//! }
//!
//! let upload = Upload::new(kwargs! { "bucket" => "logs", "key" => "a.txt" }).unwrap();
//! assert_eq!(upload.to_kwargs(), kwargs! { "bucket" => "logs", "key" => "a.txt" });
//! ```

pub use funcargs_args::{
	Arg, Kwargs, MissingRequiredArgument, OPT, OPTIONAL, REQ, REQUIRED, Sentinel, Value, check_required, kwargs,
	prepare_kwargs, remove_optional,
};
pub use funcargs_model::{
	FieldDef, FieldDefault, FrozenModel, FrozenRecord, Model, ModelSchema, ParamError, PostInit, Record, Schema,
	Staging, frozen_model, model,
};

/// Everything needed to declare wrappers and records.
pub mod prelude {
	pub use crate::{
		Arg, FrozenModel, Kwargs, MissingRequiredArgument, Model, ModelSchema, OPT, OPTIONAL, ParamError, REQ,
		REQUIRED, Staging, Value, check_required, frozen_model, kwargs, model, prepare_kwargs, remove_optional,
	};
}
