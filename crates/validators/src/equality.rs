//! Equality validator
//!
//! Compares the incoming value against a fixed expected value using JSON
//! structural equality. With `each` enabled, an array value is compared item
//! by item instead of as a whole.

use crate::{ValidationError, ValidationResult, Validator};
use serde_json::Value;

/// Requires the value (or every item of it) to equal a fixed value
///
/// # Examples
///
/// ```
/// use reinhardt_property_validators::{EqualsValidator, Validator};
/// use serde_json::json;
///
/// let whole = EqualsValidator::new(json!([1, 2]));
/// assert!(whole.validate(Some(&json!([1, 2]))).is_ok());
/// assert!(whole.validate(Some(&json!([2, 1]))).is_err());
///
/// let each = EqualsValidator::each(json!("x"));
/// assert!(each.validate(Some(&json!(["x", "x"]))).is_ok());
/// assert!(each.validate(Some(&json!(["x", "y"]))).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EqualsValidator {
	expected: Value,
	each: bool,
}

impl EqualsValidator {
	/// Compare the whole value
	pub fn new(expected: Value) -> Self {
		Self {
			expected,
			each: false,
		}
	}

	/// Compare every item of an array value
	pub fn each(expected: Value) -> Self {
		Self {
			expected,
			each: true,
		}
	}

	pub fn expected(&self) -> &Value {
		&self.expected
	}

	pub fn is_each(&self) -> bool {
		self.each
	}

	fn check_whole(&self, value: Option<&Value>) -> ValidationResult<()> {
		if value == Some(&self.expected) {
			Ok(())
		} else {
			Err(ValidationError::NotEqual {
				expected: self.expected.clone(),
			})
		}
	}
}

impl Validator for EqualsValidator {
	fn validate(&self, value: Option<&Value>) -> ValidationResult<()> {
		match value {
			Some(Value::Array(items)) if self.each => {
				match items.iter().position(|item| item != &self.expected) {
					Some(index) => Err(ValidationError::ItemNotEqual {
						index,
						expected: self.expected.clone(),
					}),
					None => Ok(()),
				}
			}
			// Non-array values fall back to a whole-value comparison
			_ => self.check_whole(value),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(false))]
	#[case(json!(0))]
	#[case(json!(""))]
	#[case(json!([]))]
	#[case(Value::Null)]
	fn test_whole_value_matches_falsy_constants(#[case] constant: Value) {
		let validator = EqualsValidator::new(constant.clone());
		assert!(validator.validate(Some(&constant)).is_ok());
	}

	#[rstest]
	fn test_whole_value_rejects_absent() {
		let validator = EqualsValidator::new(json!("fixed"));
		assert_eq!(
			validator.validate(None),
			Err(ValidationError::NotEqual {
				expected: json!("fixed")
			})
		);
	}

	#[rstest]
	fn test_whole_value_is_structural() {
		let validator = EqualsValidator::new(json!({"a": [1, 2]}));
		assert!(validator.validate(Some(&json!({"a": [1, 2]}))).is_ok());
		assert!(validator.validate(Some(&json!({"a": [1]}))).is_err());
	}

	#[rstest]
	fn test_each_reports_first_mismatch() {
		let validator = EqualsValidator::each(json!(7));
		assert_eq!(
			validator.validate(Some(&json!([7, 7, 8, 9]))),
			Err(ValidationError::ItemNotEqual {
				index: 2,
				expected: json!(7)
			})
		);
	}

	#[rstest]
	fn test_each_accepts_empty_array() {
		let validator = EqualsValidator::each(json!(7));
		assert!(validator.validate(Some(&json!([]))).is_ok());
	}

	#[rstest]
	fn test_each_on_scalar_compares_whole() {
		let validator = EqualsValidator::each(json!(7));
		assert!(validator.validate(Some(&json!(7))).is_ok());
		assert!(validator.validate(Some(&json!(8))).is_err());
	}
}
