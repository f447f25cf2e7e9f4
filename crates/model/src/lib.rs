#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Record types whose fields are declared with `REQUIRED`/`OPTIONAL` defaults.
//!
//! A record type owns a static [`Schema`]. Construction populates a
//! [`Staging`] area from caller input and declared defaults, rejects any
//! constructor field still holding `REQUIRED`, runs the type's post-init hook
//! for computed fields, and seals the result into a mutable [`Record`] or an
//! immutable [`FrozenRecord`]. Both export their contents with `to_dict`
//! (every field) and `to_kwargs` (`OPTIONAL` fields dropped).

/// Record validation errors.
pub mod error;
/// Immutable records.
pub mod frozen;
mod macros;
/// Mutable records and the record traits.
pub mod record;
/// Field declarations and schemas.
pub mod schema;
/// Pre-seal construction area.
pub mod staging;

pub use error::ParamError;
pub use frozen::{FrozenModel, FrozenRecord};
pub use funcargs_args::{Arg, Kwargs, OPT, OPTIONAL, REQ, REQUIRED, Value};
pub use record::{Model, ModelSchema, Record};
pub use schema::{FieldDef, FieldDefault, Schema};
pub use staging::{PostInit, Staging};

#[doc(hidden)]
pub mod __private {
	pub use paste::paste;
}
