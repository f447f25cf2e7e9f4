//! Frozen record base.
//!
//! A [`FrozenRecord`] is sealed from a [`Staging`](crate::Staging) area once
//! validation and the post-init hook are done. It offers no way to write a
//! field afterwards:
//!
//! ```compile_fail
//! use funcargs_args::kwargs;
//! use funcargs_model::{FieldDef, FrozenRecord, Schema};
//!
//! static NOTE: Schema = Schema::new("Note", &[FieldDef::required("title")]);
//!
//! let mut note = FrozenRecord::build(&NOTE, kwargs! { "title" => "a" }, |_| Ok(())).unwrap();
//! note.set("title", "b");
//! ```
//!
//! Types declared with [`frozen_model!`](crate::frozen_model) get read
//! accessors only, computed fields included:
//!
//! ```compile_fail
//! use funcargs_args::kwargs;
//! use funcargs_model::{FrozenModel, ParamError, Staging, frozen_model};
//!
//! fn derive_slug(staging: &mut Staging<'_>) -> Result<(), ParamError> {
//!     let slug = staging.value("title")?.as_str().unwrap_or_default().to_lowercase();
//!     staging.set_computed("slug", slug)
//! }
//!
//! frozen_model! {
//!     pub struct Page {
//!         title: required,
//!         slug: computed,
//!     }
//!     post_init = derive_slug;
//! }
//!
//! let mut page = Page::new(kwargs! { "title" => "Home" }).unwrap();
//! page.set_slug("other");
//! ```
//!
//! ```compile_fail
//! # use funcargs_args::kwargs;
//! # use funcargs_model::{FrozenModel, frozen_model};
//! frozen_model! {
//!     pub struct Page {
//!         title: required,
//!     }
//! }
//!
//! let mut page = Page::new(kwargs! { "title" => "Home" }).unwrap();
//! let _ = page.title_mut();
//! ```

use core::ops::Index;

use funcargs_args::{Arg, Kwargs, remove_optional};
use indexmap::IndexMap;

use crate::error::ParamError;
use crate::record::ModelSchema;
use crate::schema::Schema;
use crate::staging::{PostInit, Staging};


/// A record type backed by an immutable [`FrozenRecord`].
pub trait FrozenModel: ModelSchema + Sized {
	/// Wraps a sealed record.
	fn from_frozen(record: FrozenRecord) -> Self;

	/// Underlying record.
	fn record(&self) -> &FrozenRecord;

	/// Builds and seals the record from constructor input.
	///
	/// # Errors
	///
	/// [`ParamError`] if a required field is missing, the input names an
	/// unknown or computed field, the post-init hook fails, or it leaves a
	/// computed field unassigned.
	fn new(kwargs: Kwargs) -> Result<Self, ParamError> {
		FrozenRecord::build(Self::SCHEMA, kwargs, Self::post_init).map(Self::from_frozen)
	}

	/// Every field, verbatim, computed fields included.
	fn to_dict(&self) -> Kwargs {
		self.record().to_dict()
	}

	/// Every field except those still holding `OPTIONAL`.
	fn to_kwargs(&self) -> Kwargs {
		self.record().to_kwargs()
	}
}

/// Sealed field values of a record, in declaration order.
#[derive(Debug, Clone)]
pub struct FrozenRecord {
	schema: &'static Schema,
	values: IndexMap<&'static str, Arg>,
}

impl FrozenRecord {
	/// Validates `kwargs` against `schema`, runs `post_init`, and seals the result.
	///
	/// # Errors
	///
	/// See [`FrozenModel::new`].
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

	/// Iterates fields in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Arg)> {
		self.values.iter().map(|(name, arg)| (*name, arg))
	}

	/// Every field, verbatim, including `OPTIONAL` ones.
	pub fn to_dict(&self) -> Kwargs {
		self.iter().map(|(name, arg)| (name, arg.clone())).collect()
	}

	/// Every field except those still holding `OPTIONAL`.
	pub fn to_kwargs(&self) -> Kwargs {
		remove_optional(&self.to_dict())
	}
}

impl PartialEq for FrozenRecord {
	fn eq(&self, other: &Self) -> bool {
		self.schema.name() == other.schema.name() && self.values == other.values
	}
}

impl Index<&str> for FrozenRecord {
	type Output = Arg;

	fn index(&self, name: &str) -> &Arg {
		&self.values[name]
	}
}
