//! Validation errors

use serde_json::Value;
use thiserror::Error;

/// Failure reported by a single property validator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
	#[error("Value must be an array")]
	NotAnArray,

	#[error("Array must contain at least {min} items (got {length})")]
	TooFewItems { length: usize, min: usize },

	#[error("Array must contain at most {max} items (got {length})")]
	TooManyItems { length: usize, max: usize },

	#[error("Value must be equal to {expected}")]
	NotEqual { expected: Value },

	#[error("Item {index} must be equal to {expected}")]
	ItemNotEqual { index: usize, expected: Value },
}

impl ValidationError {
	/// Stable machine-readable code for the failure
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_property_validators::ValidationError;
	///
	/// assert_eq!(ValidationError::NotAnArray.code(), "is_array");
	/// assert_eq!(
	///     ValidationError::TooFewItems { length: 1, min: 2 }.code(),
	///     "array_min_size"
	/// );
	/// ```
	pub fn code(&self) -> &'static str {
		match self {
			ValidationError::NotAnArray => "is_array",
			ValidationError::TooFewItems { .. } => "array_min_size",
			ValidationError::TooManyItems { .. } => "array_max_size",
			ValidationError::NotEqual { .. } | ValidationError::ItemNotEqual { .. } => "equals",
		}
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_too_few_items_message() {
		let error = ValidationError::TooFewItems { length: 1, min: 3 };
		assert_eq!(
			error.to_string(),
			"Array must contain at least 3 items (got 1)"
		);
	}

	#[rstest]
	fn test_not_equal_message_renders_json() {
		let error = ValidationError::NotEqual {
			expected: json!("fixed"),
		};
		assert_eq!(error.to_string(), "Value must be equal to \"fixed\"");
	}

	#[rstest]
	#[case(ValidationError::ItemNotEqual { index: 0, expected: json!(1) }, "equals")]
	#[case(ValidationError::TooManyItems { length: 4, max: 3 }, "array_max_size")]
	#[case(ValidationError::NotEqual { expected: json!(null) }, "equals")]
	fn test_codes(#[case] error: ValidationError, #[case] code: &str) {
		assert_eq!(error.code(), code);
	}
}
