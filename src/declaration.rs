//! Declarative property options
//!
//! A [`PropertyOptions`] value describes, once, how a single model property
//! behaves: whether it may be absent or `null`, how it is documented, what it
//! defaults to, what it must always equal and, for array properties, how many
//! items it may hold.
//!
//! Every option is independently optional. `PropertyOptions::default()`
//! describes a plain, required, non-nullable, singular property with no
//! documentation, no default and no constant.
//!
//! # Examples
//!
//! ```
//! use reinhardt_property::{ArrayOptions, PropertyOptions, SizeBounds};
//! use serde_json::json;
//!
//! let options = PropertyOptions::array(
//!     ArrayOptions::bounded(SizeBounds::new().with_min_length(1).with_max_length(5))
//!         .with_default(vec![json!("general")]),
//! )
//! .with_name("tagList")
//! .optional()
//! .with_description("Labels attached to the post");
//!
//! assert!(options.is_array());
//! assert_eq!(options.name.as_deref(), Some("tagList"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declarative options for one model property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOptions {
	/// Name the property is exposed under; `None` keeps the declared name
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// The property may be absent
	#[serde(default)]
	pub optional: bool,
	/// The property may be an explicit `null`
	#[serde(default)]
	pub nullable: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default)]
	pub shape: PropertyShape,
}

impl PropertyOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn singular(options: SingularOptions) -> Self {
		Self {
			shape: PropertyShape::Singular(options),
			..Self::default()
		}
	}

	pub fn array(options: ArrayOptions) -> Self {
		Self {
			shape: PropertyShape::Array(options),
			..Self::default()
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn optional(mut self) -> Self {
		self.optional = true;
		self
	}

	pub fn nullable(mut self) -> Self {
		self.nullable = true;
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn is_array(&self) -> bool {
		matches!(self.shape, PropertyShape::Array(_))
	}
}

/// Singular or array shape of a property
///
/// Shape-specific options are only reachable through the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyShape {
	Singular(SingularOptions),
	Array(ArrayOptions),
}

impl Default for PropertyShape {
	fn default() -> Self {
		PropertyShape::Singular(SingularOptions::default())
	}
}

/// Options of a property holding a single value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingularOptions {
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "reinhardt_property_metadata::present::deserialize"
	)]
	pub example: Option<Value>,
	/// Value substituted when the property is absent
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "reinhardt_property_metadata::present::deserialize"
	)]
	pub default: Option<Value>,
	/// Value the property must always equal
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "reinhardt_property_metadata::present::deserialize"
	)]
	pub constant: Option<Value>,
}

impl SingularOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_example(mut self, example: Value) -> Self {
		self.example = Some(example);
		self
	}

	pub fn with_default(mut self, default: Value) -> Self {
		self.default = Some(default);
		self
	}

	pub fn with_constant(mut self, constant: Value) -> Self {
		self.constant = Some(constant);
		self
	}
}

/// Options of a property holding a sequence of values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayOptions {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub example: Option<Vec<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<Vec<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub constant: Option<ArrayConstant>,
	#[serde(default)]
	pub size: ArraySize,
}

impl ArrayOptions {
	/// Array of any size
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bounded(bounds: SizeBounds) -> Self {
		Self {
			size: ArraySize::Bounded(bounds),
			..Self::default()
		}
	}

	pub fn with_example(mut self, example: Vec<Value>) -> Self {
		self.example = Some(example);
		self
	}

	pub fn with_default(mut self, default: Vec<Value>) -> Self {
		self.default = Some(default);
		self
	}

	/// The whole array must equal `items`
	pub fn with_constant(mut self, items: Vec<Value>) -> Self {
		self.constant = Some(ArrayConstant::Sequence(items));
		self
	}

	/// Every item of the array must equal `item`
	pub fn with_each_constant(mut self, item: Value) -> Self {
		self.constant = Some(ArrayConstant::Each(item));
		self
	}
}

/// Constant constraint of an array property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayConstant {
	/// The whole array equals this sequence
	Sequence(Vec<Value>),
	/// Every item equals this value
	Each(Value),
}

impl ArrayConstant {
	/// Value the equality rule compares against
	pub fn expected(&self) -> Value {
		match self {
			ArrayConstant::Sequence(items) => Value::Array(items.clone()),
			ArrayConstant::Each(item) => item.clone(),
		}
	}

	pub fn is_each(&self) -> bool {
		matches!(self, ArrayConstant::Each(_))
	}
}

/// Size constraint of an array property
///
/// Deserializes from a missing key or `null` (any size) or from a bounds
/// object such as `{"minLength": 1}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<SizeBounds>", into = "Option<SizeBounds>")]
pub enum ArraySize {
	#[default]
	Any,
	Bounded(SizeBounds),
}

impl ArraySize {
	/// Resolved `(min, max)` item counts
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_property::{ArraySize, SizeBounds};
	///
	/// assert_eq!(ArraySize::Any.effective(), (None, None));
	///
	/// let exact = SizeBounds::new().with_length(5).with_min_length(1).with_max_length(10);
	/// assert_eq!(ArraySize::Bounded(exact).effective(), (Some(5), Some(5)));
	/// ```
	pub fn effective(&self) -> (Option<usize>, Option<usize>) {
		match self {
			ArraySize::Any => (None, None),
			ArraySize::Bounded(bounds) => bounds.effective(),
		}
	}
}

impl From<Option<SizeBounds>> for ArraySize {
	fn from(bounds: Option<SizeBounds>) -> Self {
		bounds.map_or(ArraySize::Any, ArraySize::Bounded)
	}
}

impl From<ArraySize> for Option<SizeBounds> {
	fn from(size: ArraySize) -> Self {
		match size {
			ArraySize::Any => None,
			ArraySize::Bounded(bounds) => Some(bounds),
		}
	}
}

/// Item count bounds of an array property
///
/// An exact `length` takes precedence over `min_length` and `max_length`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeBounds {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub length: Option<usize>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_length: Option<usize>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<usize>,
}

impl SizeBounds {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn exact(length: usize) -> Self {
		Self::new().with_length(length)
	}

	pub fn with_length(mut self, length: usize) -> Self {
		self.length = Some(length);
		self
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn effective(&self) -> (Option<usize>, Option<usize>) {
		match self.length {
			Some(length) => (Some(length), Some(length)),
			None => (self.min_length, self.max_length),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(SizeBounds::new(), (None, None))]
	#[case(SizeBounds::new().with_min_length(2), (Some(2), None))]
	#[case(SizeBounds::new().with_max_length(4), (None, Some(4)))]
	#[case(SizeBounds::new().with_min_length(1).with_max_length(3), (Some(1), Some(3)))]
	#[case(SizeBounds::exact(0), (Some(0), Some(0)))]
	#[case(
		SizeBounds::exact(5).with_min_length(1).with_max_length(10),
		(Some(5), Some(5))
	)]
	fn test_effective_bounds(
		#[case] bounds: SizeBounds,
		#[case] expected: (Option<usize>, Option<usize>),
	) {
		assert_eq!(bounds.effective(), expected);
	}

	#[rstest]
	fn test_default_options_are_plain_singular() {
		let options = PropertyOptions::default();

		assert!(options.name.is_none());
		assert!(!options.optional);
		assert!(!options.nullable);
		assert!(!options.is_array());
		assert_eq!(options.shape, PropertyShape::Singular(SingularOptions::default()));
	}

	#[rstest]
	fn test_array_constant_expected_value() {
		assert_eq!(
			ArrayConstant::Sequence(vec![json!(1), json!(2)]).expected(),
			json!([1, 2])
		);
		assert_eq!(ArrayConstant::Each(json!("x")).expected(), json!("x"));
		assert!(ArrayConstant::Each(json!("x")).is_each());
	}

	#[rstest]
	fn test_deserialize_empty_object() {
		let options: PropertyOptions = serde_json::from_value(json!({})).unwrap();
		assert_eq!(options, PropertyOptions::default());
	}

	#[rstest]
	fn test_deserialize_singular_keeps_explicit_null() {
		let options: PropertyOptions = serde_json::from_value(json!({
			"nullable": true,
			"shape": {"kind": "singular", "default": null, "constant": false}
		}))
		.unwrap();

		match options.shape {
			PropertyShape::Singular(singular) => {
				assert_eq!(singular.default, Some(Value::Null));
				assert_eq!(singular.constant, Some(json!(false)));
				assert_eq!(singular.example, None);
			}
			PropertyShape::Array(_) => panic!("Expected singular shape"),
		}
	}

	#[rstest]
	fn test_deserialize_array_shape() {
		let options: PropertyOptions = serde_json::from_value(json!({
			"name": "ids",
			"optional": true,
			"shape": {
				"kind": "array",
				"size": {"length": 3, "minLength": 1},
				"constant": {"each": 0},
				"default": []
			}
		}))
		.unwrap();

		assert_eq!(options.name.as_deref(), Some("ids"));
		assert!(options.optional);
		match options.shape {
			PropertyShape::Array(array) => {
				assert_eq!(
					array.size,
					ArraySize::Bounded(SizeBounds::exact(3).with_min_length(1))
				);
				assert_eq!(array.constant, Some(ArrayConstant::Each(json!(0))));
				assert_eq!(array.default, Some(vec![]));
			}
			PropertyShape::Singular(_) => panic!("Expected array shape"),
		}
	}

	#[rstest]
	fn test_deserialize_array_without_size_is_any() {
		let options: PropertyOptions =
			serde_json::from_value(json!({"shape": {"kind": "array"}})).unwrap();

		assert_eq!(options.shape, PropertyShape::Array(ArrayOptions::new()));
	}

	#[rstest]
	fn test_serialize_round_trip_of_bounds() {
		let size = ArraySize::Bounded(SizeBounds::new().with_max_length(2));
		let json = serde_json::to_value(size).unwrap();
		assert_eq!(json, json!({"maxLength": 2}));
		assert_eq!(serde_json::to_value(ArraySize::Any).unwrap(), Value::Null);
	}
}
