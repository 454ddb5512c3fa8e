//! Model-level metadata document

use crate::PropertyMetadata;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Published metadata for every property of a model
///
/// Properties keep their declaration order. `required` lists the exposed
/// names of properties whose metadata marks them as required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
	pub properties: IndexMap<String, PropertyMetadata>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub required: Vec<String>,
}

impl ModelMetadata {
	/// Build a document from `(exposed name, metadata)` pairs
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_property_metadata::{ModelMetadata, PropertyMetadata};
	///
	/// let document = ModelMetadata::from_properties([
	///     ("id".to_string(), PropertyMetadata::new().with_required(true)),
	///     ("tags".to_string(), PropertyMetadata::new().with_required(false)),
	/// ]);
	///
	/// assert_eq!(document.properties.len(), 2);
	/// assert_eq!(document.required, vec!["id".to_string()]);
	/// ```
	pub fn from_properties<I>(properties: I) -> Self
	where
		I: IntoIterator<Item = (String, PropertyMetadata)>,
	{
		let properties: IndexMap<String, PropertyMetadata> = properties.into_iter().collect();
		let required = properties
			.iter()
			.filter(|(_, metadata)| metadata.is_required())
			.map(|(name, _)| name.clone())
			.collect();

		Self {
			properties,
			required,
		}
	}

	pub fn get(&self, name: &str) -> Option<&PropertyMetadata> {
		self.properties.get(name)
	}

	pub fn to_json(&self) -> serde_json::Result<Value> {
		serde_json::to_value(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_preserves_declaration_order() {
		let document = ModelMetadata::from_properties([
			("zeta".to_string(), PropertyMetadata::new()),
			("alpha".to_string(), PropertyMetadata::new()),
		]);

		let names: Vec<&str> = document.properties.keys().map(String::as_str).collect();
		assert_eq!(names, vec!["zeta", "alpha"]);
	}

	#[rstest]
	fn test_to_json_omits_empty_required() {
		let document = ModelMetadata::from_properties([(
			"note".to_string(),
			PropertyMetadata::new().with_required(false),
		)]);

		assert_eq!(
			document.to_json().unwrap(),
			json!({"properties": {"note": {"required": false}}})
		);
	}
}
