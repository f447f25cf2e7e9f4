//! Declaration macros for record types.

/// Expands one field declaration into a [`FieldDef`](crate::FieldDef).
#[doc(hidden)]
#[macro_export]
macro_rules! __field_def {
	($field:ident, required) => {
		$crate::FieldDef::required(stringify!($field))
	};
	($field:ident, optional) => {
		$crate::FieldDef::optional(stringify!($field))
	};
	($field:ident, computed) => {
		$crate::FieldDef::computed(stringify!($field))
	};
	($field:ident, default($value:expr)) => {
		$crate::FieldDef::factory(stringify!($field), || $crate::Value::from($value))
	};
	($field:ident, factory($factory:path)) => {
		$crate::FieldDef::factory(stringify!($field), $factory)
	};
}

/// Shared `ModelSchema` impl and read accessors.
#[doc(hidden)]
#[macro_export]
macro_rules! __model_schema {
	(
		$vis:vis $name:ident {
			$($(#[$field_meta:meta])* $field:ident : $kind:ident $(($($arg:tt)*))?),*
		}
		$($hook:path)?
	) => {
		impl $crate::ModelSchema for $name {
			const SCHEMA: &'static $crate::Schema = {
				const FIELDS: &[$crate::FieldDef] = &[
					$($crate::__field_def!($field, $kind $(($($arg)*))?)),*
				];
				&$crate::Schema::new(stringify!($name), FIELDS)
			};

			$(
				fn post_init(
					staging: &mut $crate::Staging<'_>,
				) -> ::core::result::Result<(), $crate::ParamError> {
					$hook(staging)
				}
			)?
		}

		impl $name {
			$(
				$(#[$field_meta])*
				$vis fn $field(&self) -> &$crate::Arg {
					&self.0[stringify!($field)]
				}
			)*
		}
	};
}

/// Declares a mutable record type.
///
/// Each field is declared as `name: required`, `name: optional`,
/// `name: default(<expr>)`, `name: factory(<fn path>)` or `name: computed`.
/// `default` wraps the expression in a factory, so it is evaluated for every
/// record. Computed fields are assigned by the optional `post_init` hook.
///
/// The macro generates a newtype over [`Record`](crate::Record) implementing
/// [`Model`](crate::Model), plus `name()`, `set_name()`, `unset_name()` and
/// `name_mut()` accessors per field.
///
/// ```
/// use funcargs_args::{Value, kwargs};
/// use funcargs_model::{Model, model};
///
/// model! {
///     #[derive(Debug)]
///     pub struct Person {
///         name: required,
///         age: optional,
///         active: default(true),
///         tags: factory(Value::empty_list),
///     }
/// }
///
/// let mut person = Person::new(kwargs! { "name" => "Alice" }).unwrap();
/// assert!(person.age().is_optional());
/// person.set_age(30);
/// assert_eq!(person.age().as_int(), Some(30));
/// assert!(Person::new(kwargs! {}).is_err());
/// ```
#[macro_export]
macro_rules! model {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$($(#[$field_meta:meta])* $field:ident : $kind:ident $(($($arg:tt)*))?),* $(,)?
		}
		$(post_init = $hook:path;)?
	) => {
		$(#[$meta])*
		$vis struct $name($crate::Record);

		$crate::__model_schema! {
			$vis $name {
				$($(#[$field_meta])* $field : $kind $(($($arg)*))?),*
			}
			$($hook)?
		}

		impl $crate::Model for $name {
			fn from_record(record: $crate::Record) -> Self {
				Self(record)
			}

			fn record(&self) -> &$crate::Record {
				&self.0
			}

			fn record_mut(&mut self) -> &mut $crate::Record {
				&mut self.0
			}
		}

		$crate::__private::paste! {
			impl $name {
				$(
					#[doc = concat!("Assigns `", stringify!($field), "`, returning the previous slot.")]
					$vis fn [<set_ $field>](
						&mut self,
						value: impl ::core::convert::Into<$crate::Value>,
					) -> $crate::Arg {
						match self.0.set(stringify!($field), value) {
							::core::result::Result::Ok(previous) => previous,
							::core::result::Result::Err(_) => {
								::core::unreachable!("field is declared in the schema")
							}
						}
					}

					#[doc = concat!("Puts `", stringify!($field), "` back to `OPTIONAL`, returning the previous slot.")]
					$vis fn [<unset_ $field>](&mut self) -> $crate::Arg {
						match self.0.unset(stringify!($field)) {
							::core::result::Result::Ok(previous) => previous,
							::core::result::Result::Err(_) => {
								::core::unreachable!("field is declared in the schema")
							}
						}
					}

					#[doc = concat!("Concrete value of `", stringify!($field), "` for in-place edits.")]
					$vis fn [<$field _mut>](&mut self) -> ::core::option::Option<&mut $crate::Value> {
						self.0.get_mut(stringify!($field))
					}
				)*
			}
		}
	};
}

/// Declares a frozen record type.
///
/// Takes the same field syntax as [`model!`](crate::model). The generated
/// newtype wraps a [`FrozenRecord`](crate::FrozenRecord), implements
/// [`FrozenModel`](crate::FrozenModel), and only has read accessors.
///
/// ```
/// use funcargs_args::kwargs;
/// use funcargs_model::{FrozenModel, ParamError, Staging, frozen_model};
///
/// fn derive_len(staging: &mut Staging<'_>) -> Result<(), ParamError> {
///     let len = staging.value("title")?.as_str().map_or(0, str::len);
///     staging.set_computed("title_length", len as i64)
/// }
///
/// frozen_model! {
///     pub struct Document {
///         title: required,
///         title_length: computed,
///     }
///     post_init = derive_len;
/// }
///
/// let doc = Document::new(kwargs! { "title" => "Hello" }).unwrap();
/// assert_eq!(doc.title_length().as_int(), Some(5));
/// ```
#[macro_export]
macro_rules! frozen_model {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$($(#[$field_meta:meta])* $field:ident : $kind:ident $(($($arg:tt)*))?),* $(,)?
		}
		$(post_init = $hook:path;)?
	) => {
		$(#[$meta])*
		$vis struct $name($crate::FrozenRecord);

		$crate::__model_schema! {
			$vis $name {
				$($(#[$field_meta])* $field : $kind $(($($arg)*))?),*
			}
			$($hook)?
		}

		impl $crate::FrozenModel for $name {
			fn from_frozen(record: $crate::FrozenRecord) -> Self {
				Self(record)
			}

			fn record(&self) -> &$crate::FrozenRecord {
				&self.0
			}
		}
	};
}
