use funcargs_args::{OPTIONAL, kwargs};
use pretty_assertions::assert_eq;

use super::*;

static PERSON: Schema = Schema::new(
	"Person",
	&[
		FieldDef::required("name"),
		FieldDef::optional("age"),
		FieldDef::factory("active", || Value::Bool(true)),
		FieldDef::factory("tags", Value::empty_list),
	],
);

static OPTIONAL_FIRST: Schema = Schema::new("OptionalFirst", &[FieldDef::optional("field1"), FieldDef::required("field2")]);

static WITH_COMPUTED: Schema = Schema::new(
	"WithComputed",
	&[FieldDef::required("title"), FieldDef::computed("slug")],
);

#[test]
fn split_separates_required_fields() {
	let input = kwargs! { "name" => "Dave", "age" => 30, "active" => false, "tags" => vec!["admin"] };
	let (req, opt) = PERSON.split_req_opt(&input).unwrap();

	assert_eq!(req, kwargs! { "name" => "Dave" });
	assert_eq!(opt, kwargs! { "age" => 30, "active" => false, "tags" => vec!["admin"] });
}

#[test]
fn split_keeps_input_order() {
	let input = kwargs! { "tags" => vec!["x"], "name" => "Eve", "age" => 1 };
	let (_, opt) = PERSON.split_req_opt(&input).unwrap();
	assert_eq!(opt.keys().collect::<Vec<_>>(), ["tags", "age"]);
}

#[test]
fn split_rejects_missing_required() {
	let err = PERSON.split_req_opt(&kwargs! { "age" => 30, "active" => false }).unwrap_err();
	assert_eq!(
		err,
		ParamError::MissingRequiredField {
			model: "Person",
			field: "name",
		}
	);
}

#[test]
fn split_checks_required_declared_after_optional() {
	let err = OPTIONAL_FIRST.split_req_opt(&kwargs! { "in_valid_field" => () }).unwrap_err();
	assert_eq!(err.field(), "field2");
}

#[test]
fn split_passes_unknown_keys_through() {
	let (req, rest) = OPTIONAL_FIRST
		.split_req_opt(&kwargs! { "field2" => 1, "extra" => OPTIONAL })
		.unwrap();
	assert_eq!(req, kwargs! { "field2" => 1 });
	assert_eq!(rest, kwargs! { "extra" => OPTIONAL });
}

#[test]
fn split_ignores_computed_fields() {
	let (req, rest) = WITH_COMPUTED.split_req_opt(&kwargs! { "title" => "t" }).unwrap();
	assert_eq!(req, kwargs! { "title" => "t" });
	assert!(rest.is_empty());
}

#[test]
fn field_lookup() {
	assert!(PERSON.field("name").unwrap().is_required());
	assert!(matches!(PERSON.field("age").unwrap().default, FieldDefault::Optional));
	assert!(PERSON.field("missing").is_none());
	assert_eq!(PERSON.required_fields().map(|f| f.name).collect::<Vec<_>>(), ["name"]);
	assert_eq!(WITH_COMPUTED.computed_fields().map(|f| f.name).collect::<Vec<_>>(), ["slug"]);
}

#[test]
fn factories_build_fresh_values() {
	let FieldDefault::Factory(factory) = PERSON.field("tags").unwrap().default else {
		panic!("tags has a factory default");
	};
	let mut first = factory();
	first.as_list_mut().unwrap().push(Value::from("x"));
	assert_eq!(factory(), Value::empty_list());
}

fn arb_input() -> impl proptest::strategy::Strategy<Value = Kwargs> {
	use proptest::prelude::*;

	let key = prop_oneof![
		Just("name".to_string()),
		Just("age".to_string()),
		Just("tags".to_string()),
		"[a-z]{1,6}",
	];
	proptest::collection::vec((key, any::<i64>()), 0..8).prop_map(|entries| entries.into_iter().collect())
}

proptest::proptest! {
	#[test]
	fn split_partitions_every_entry(input in arb_input()) {
		match PERSON.split_req_opt(&input) {
			Ok((req, rest)) => {
				proptest::prop_assert_eq!(req.len() + rest.len(), input.len());
				proptest::prop_assert!(req.keys().all(|k| k == "name"));
				proptest::prop_assert!(rest.keys().all(|k| input.contains_key(k) && k != "name"));
			}
			Err(err) => {
				proptest::prop_assert!(!input.contains_key("name"));
				proptest::prop_assert_eq!(err.field(), "name");
			}
		}
	}
}
