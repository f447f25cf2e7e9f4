use funcargs_args::{OPTIONAL, kwargs};
use pretty_assertions::assert_eq;

use super::*;
use crate::schema::FieldDef;

static PERSON: Schema = Schema::new(
	"Person",
	&[
		FieldDef::required("name"),
		FieldDef::optional("age"),
		FieldDef::factory("active", || Value::Bool(true)),
		FieldDef::factory("tags", Value::empty_list),
	],
);

static COUNTER: Schema = Schema::new("Counter", &[FieldDef::required("items"), FieldDef::computed("count")]);

fn no_hook(_: &mut Staging<'_>) -> Result<(), ParamError> {
	Ok(())
}

fn count_items(staging: &mut Staging<'_>) -> Result<(), ParamError> {
	let count = staging.value("items")?.as_list().map_or(0, <[Value]>::len);
	staging.set_computed("count", count as i64)
}

fn person(kwargs: Kwargs) -> Result<Record, ParamError> {
	Record::build(&PERSON, kwargs, no_hook)
}

#[test]
fn build_fills_defaults() {
	let record = person(kwargs! { "name" => "Alice" }).unwrap();

	assert_eq!(record["name"].as_str(), Some("Alice"));
	assert!(record["age"].is_optional());
	assert_eq!(record["active"].as_bool(), Some(true));
	assert_eq!(record["tags"].as_list(), Some(&[][..]));
}

#[test]
fn build_rejects_missing_required() {
	let err = person(kwargs! { "age" => 30 }).unwrap_err();
	assert_eq!(
		err,
		ParamError::MissingRequiredField {
			model: "Person",
			field: "name",
		}
	);
	assert_eq!(err.to_string(), "Person: missing required field 'name'");
}

#[test]
fn build_rejects_explicit_required_marker() {
	let err = person(kwargs! { "name" => funcargs_args::REQUIRED }).unwrap_err();
	assert_eq!(err.field(), "name");
}

#[test]
fn build_rejects_unknown_fields() {
	let err = person(kwargs! { "name" => "Bob", "nickname" => "B" }).unwrap_err();
	assert_eq!(
		err,
		ParamError::UnknownField {
			model: "Person",
			field: "nickname".to_string(),
		}
	);
}

#[test]
fn build_rejects_computed_input() {
	let err = Record::build(&COUNTER, kwargs! { "items" => vec![1], "count" => 9 }, count_items).unwrap_err();
	assert_eq!(
		err,
		ParamError::NotInitField {
			model: "Counter",
			field: "count",
		}
	);
}

#[test]
fn post_init_assigns_computed_fields() {
	let record = Record::build(&COUNTER, kwargs! { "items" => vec![1, 2, 3] }, count_items).unwrap();
	assert_eq!(record["count"].as_int(), Some(3));
}

#[test]
fn factory_defaults_are_not_shared() {
	let mut first = person(kwargs! { "name" => "Carol" }).unwrap();
	let second = person(kwargs! { "name" => "Dan" }).unwrap();

	first.get_mut("tags").and_then(Value::as_list_mut).unwrap().push(Value::from("x"));

	assert_eq!(first["tags"].as_list().map(<[Value]>::len), Some(1));
	assert_eq!(second["tags"].as_list().map(<[Value]>::len), Some(0));
}

#[test]
fn set_replaces_slot() {
	let mut record = person(kwargs! { "name" => "Eve" }).unwrap();

	let previous = record.set("age", 41).unwrap();
	assert!(previous.is_optional());
	assert_eq!(record["age"].as_int(), Some(41));

	let err = record.set("height", 180).unwrap_err();
	assert_eq!(err.field(), "height");
}

#[test]
fn unset_restores_optional_marker() {
	let mut record = person(kwargs! { "name" => "Eve", "age" => 41 }).unwrap();
	assert!(record.to_kwargs().contains_key("age"));

	let previous = record.unset("age").unwrap();
	assert_eq!(previous.as_int(), Some(41));
	assert!(record["age"].is_optional());
	assert!(!record.to_kwargs().contains_key("age"));
	assert!(record.to_dict()["age"].is_optional());

	let err = record.unset("height").unwrap_err();
	assert_eq!(err.field(), "height");
}

#[test]
fn get_mut_skips_sentinels() {
	let mut record = person(kwargs! { "name" => "Frank" }).unwrap();
	assert!(record.get_mut("age").is_none());
	assert!(record.get_mut("missing").is_none());
	assert!(record.get_mut("name").is_some());
}

#[test]
fn exports_follow_declaration_order() {
	let record = person(kwargs! { "tags" => vec!["a"], "name" => "Grace" }).unwrap();

	assert_eq!(
		record.to_dict(),
		kwargs! { "name" => "Grace", "age" => OPTIONAL, "active" => true, "tags" => vec!["a"] }
	);
	assert_eq!(
		record.to_dict().keys().collect::<Vec<_>>(),
		["name", "age", "active", "tags"]
	);
	assert_eq!(
		record.to_kwargs(),
		kwargs! { "name" => "Grace", "active" => true, "tags" => vec!["a"] }
	);
}

#[test]
fn to_dict_is_detached() {
	let record = person(kwargs! { "name" => "Heidi" }).unwrap();
	let mut exported = record.to_dict();
	exported.insert("name", "changed");
	assert_eq!(record["name"].as_str(), Some("Heidi"));
}

#[test]
fn records_compare_by_values() {
	let a = person(kwargs! { "name" => "Ivan" }).unwrap();
	let b = person(kwargs! { "name" => "Ivan" }).unwrap();
	let c = person(kwargs! { "name" => "Judy" }).unwrap();
	assert_eq!(a, b);
	assert_ne!(a, c);
}
