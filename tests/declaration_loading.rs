//! Declaration loading tests
//!
//! Property declarations read from JSON and TOML configuration.

use reinhardt_property::prelude::*;
use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
struct ModelConfig {
	name: String,
	properties: indexmap::IndexMap<String, PropertyOptions>,
}

const POST_TOML: &str = r#"
name = "Post"

[properties.title]
description = "Headline"

[properties.tags]
name = "tagList"
optional = true

[properties.tags.shape]
kind = "array"
default = ["general"]
size = { minLength = 1, maxLength = 5 }

[properties.version]

[properties.version.shape]
kind = "singular"
constant = 2

[properties.flags]
nullable = true

[properties.flags.shape]
kind = "array"
constant = { each = true }
"#;

fn build(config: &ModelConfig) -> ModelDescriptor {
	let mut model = ModelDescriptor::new(config.name.clone());
	for (key, options) in &config.properties {
		let combined = compose(PropertyMetadata::new(), options, []).unwrap();
		model.bind(key.clone(), &combined).unwrap();
	}
	model
}

#[rstest]
fn test_toml_declarations() {
	let config: ModelConfig = toml::from_str(POST_TOML).unwrap();

	assert_eq!(config.properties.len(), 4);
	assert_eq!(config.properties["title"], PropertyOptions::new().with_description("Headline"));
	assert_eq!(
		config.properties["tags"],
		PropertyOptions::array(
			ArrayOptions::bounded(SizeBounds::new().with_min_length(1).with_max_length(5))
				.with_default(vec![json!("general")])
		)
		.with_name("tagList")
		.optional()
	);
	assert_eq!(
		config.properties["version"].shape,
		PropertyShape::Singular(SingularOptions::new().with_constant(json!(2)))
	);
	assert_eq!(
		config.properties["flags"].shape,
		PropertyShape::Array(ArrayOptions::new().with_each_constant(json!(true)))
	);
}

#[rstest]
fn test_toml_model_end_to_end() {
	let config: ModelConfig = toml::from_str(POST_TOML).unwrap();
	let model = build(&config);

	let input = json!({"title": "Hello", "version": 2, "flags": null});
	let loaded = model.load(input.as_object().unwrap()).unwrap();
	assert_eq!(
		Value::Object(loaded),
		json!({"title": "Hello", "tags": ["general"], "version": 2, "flags": null})
	);

	let input = json!({"title": "Hello", "tagList": ["a"], "version": 3, "flags": [true, false]});
	let error = model.load(input.as_object().unwrap()).unwrap_err();
	assert_eq!(error.properties().collect::<Vec<_>>(), vec!["version", "flags"]);

	let schema = model.metadata().to_json().unwrap();
	assert_eq!(schema["required"], json!(["title", "version", "flags"]));
	assert_eq!(schema["properties"]["tagList"]["maxItems"], json!(5));
	assert_eq!(schema["properties"]["version"]["enum"], json!([2]));
	assert_eq!(schema["properties"]["flags"]["nullable"], json!(true));
}

#[rstest]
fn test_toml_keeps_declaration_order() {
	let config: ModelConfig = toml::from_str(
		r#"
name = "Ordered"

[properties.zeta]

[properties.alpha]

[properties.mid]
optional = true
"#,
	)
	.unwrap();

	let keys: Vec<&str> = config.properties.keys().map(String::as_str).collect();
	assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

	let metadata = build(&config).metadata();
	let names: Vec<&str> = metadata.properties.keys().map(String::as_str).collect();
	assert_eq!(names, vec!["zeta", "alpha", "mid"]);
	assert_eq!(metadata.required, vec!["zeta".to_string(), "alpha".to_string()]);
}

#[rstest]
#[case(json!({}), PropertyOptions::new())]
#[case(json!({"shape": {"kind": "array"}}), PropertyOptions::array(ArrayOptions::new()))]
#[case(
	json!({"shape": {"kind": "array", "size": null}}),
	PropertyOptions::array(ArrayOptions::new())
)]
#[case(
	json!({"shape": {"kind": "array", "size": {"length": 4}}}),
	PropertyOptions::array(ArrayOptions::bounded(SizeBounds::exact(4)))
)]
#[case(
	json!({"shape": {"kind": "array", "constant": {"sequence": [1, 2]}}}),
	PropertyOptions::array(ArrayOptions::new().with_constant(vec![json!(1), json!(2)]))
)]
fn test_json_declarations(#[case] input: Value, #[case] expected: PropertyOptions) {
	let options: PropertyOptions = serde_json::from_value(input).unwrap();
	assert_eq!(options, expected);
}

#[rstest]
fn test_explicit_null_default_is_present() {
	let options: PropertyOptions =
		serde_json::from_value(json!({"shape": {"kind": "singular", "default": null}})).unwrap();
	let missing: PropertyOptions =
		serde_json::from_value(json!({"shape": {"kind": "singular"}})).unwrap();

	let combined = compose(PropertyMetadata::new(), &options, []).unwrap();
	assert!(combined.kinds().contains(&AttachmentKind::Transform));

	let combined = compose(PropertyMetadata::new(), &missing, []).unwrap();
	assert!(!combined.kinds().contains(&AttachmentKind::Transform));
}

#[rstest]
fn test_declaration_serializes_back() {
	let options = PropertyOptions::array(
		ArrayOptions::bounded(SizeBounds::exact(2)).with_each_constant(json!("x")),
	)
	.with_name("pair")
	.optional();

	assert_eq!(
		serde_json::to_value(&options).unwrap(),
		json!({
			"name": "pair",
			"optional": true,
			"nullable": false,
			"shape": {
				"kind": "array",
				"constant": {"each": "x"},
				"size": {"length": 2},
			},
		})
	);
}
