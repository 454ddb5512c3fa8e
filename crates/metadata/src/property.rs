//! Per-property schema metadata

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Documentation facts published for a single property
///
/// Every fact is optional so that partial metadata (for example the base
/// facts a caller supplies before options are applied) can be merged with
/// [`PropertyMetadata::merge`]. Facts the publisher does not model directly,
/// such as `type` or `format`, travel in [`PropertyMetadata::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetadata {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "crate::present::deserialize"
	)]
	pub example: Option<Value>,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "crate::present::deserialize"
	)]
	pub default: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub required: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nullable: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_array: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_items: Option<usize>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_items: Option<usize>,
	#[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
	pub enum_values: Option<Vec<Value>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl PropertyMetadata {
	/// Create empty metadata
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_property_metadata::PropertyMetadata;
	///
	/// let metadata = PropertyMetadata::new();
	/// assert!(metadata.name.is_none());
	/// assert!(metadata.extra.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_example(mut self, example: Value) -> Self {
		self.example = Some(example);
		self
	}

	pub fn with_default(mut self, default: Value) -> Self {
		self.default = Some(default);
		self
	}

	pub fn with_required(mut self, required: bool) -> Self {
		self.required = Some(required);
		self
	}

	pub fn with_nullable(mut self, nullable: bool) -> Self {
		self.nullable = Some(nullable);
		self
	}

	pub fn with_is_array(mut self, is_array: bool) -> Self {
		self.is_array = Some(is_array);
		self
	}

	pub fn with_min_items(mut self, min_items: usize) -> Self {
		self.min_items = Some(min_items);
		self
	}

	pub fn with_max_items(mut self, max_items: usize) -> Self {
		self.max_items = Some(max_items);
		self
	}

	pub fn with_enum(mut self, values: Vec<Value>) -> Self {
		self.enum_values = Some(values);
		self
	}

	/// Attach a fact the publisher does not model directly
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_property_metadata::PropertyMetadata;
	/// use serde_json::json;
	///
	/// let metadata = PropertyMetadata::new().with_extra("format", json!("uuid"));
	/// assert_eq!(metadata.extra["format"], json!("uuid"));
	/// ```
	pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
		self.extra.insert(key.into(), value);
		self
	}

	/// Overlay `overrides` on top of `self`
	///
	/// Facts present in `overrides` replace the corresponding facts in `self`;
	/// facts absent from `overrides` keep their current value. Extra facts are
	/// merged key by key.
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_property_metadata::PropertyMetadata;
	///
	/// let base = PropertyMetadata::new()
	///     .with_description("from base")
	///     .with_required(true);
	/// let merged = base.merge(PropertyMetadata::new().with_required(false));
	///
	/// assert_eq!(merged.description.as_deref(), Some("from base"));
	/// assert_eq!(merged.required, Some(false));
	/// ```
	pub fn merge(mut self, overrides: PropertyMetadata) -> Self {
		let PropertyMetadata {
			name,
			description,
			example,
			default,
			required,
			nullable,
			is_array,
			min_items,
			max_items,
			enum_values,
			extra,
		} = overrides;

		overlay(&mut self.name, name);
		overlay(&mut self.description, description);
		overlay(&mut self.example, example);
		overlay(&mut self.default, default);
		overlay(&mut self.required, required);
		overlay(&mut self.nullable, nullable);
		overlay(&mut self.is_array, is_array);
		overlay(&mut self.min_items, min_items);
		overlay(&mut self.max_items, max_items);
		overlay(&mut self.enum_values, enum_values);
		self.extra.extend(extra);
		self
	}

	/// Whether the property must be supplied
	///
	/// Metadata that never stated a requirement is treated as not required.
	pub fn is_required(&self) -> bool {
		self.required.unwrap_or(false)
	}
}

fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
	if value.is_some() {
		*slot = value;
	}
}
