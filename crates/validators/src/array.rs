//! Collection shape and size validators
//!
//! These validators operate on the incoming JSON value of a property. A value
//! that is absent or not a JSON array fails every rule in this module with
//! [`ValidationError::NotAnArray`].
//!
//! # Examples
//!
//! ```
//! use reinhardt_property_validators::{ArrayMinSizeValidator, IsArrayValidator, Validator};
//! use serde_json::json;
//!
//! let shape = IsArrayValidator::new();
//! assert!(shape.validate(Some(&json!([1, 2]))).is_ok());
//! assert!(shape.validate(Some(&json!("nope"))).is_err());
//!
//! let min = ArrayMinSizeValidator::new(2);
//! assert!(min.validate(Some(&json!([1, 2]))).is_ok());
//! assert!(min.validate(Some(&json!([1]))).is_err());
//! ```

use crate::{ValidationError, ValidationResult, Validator};
use serde_json::Value;

fn as_array(value: Option<&Value>) -> ValidationResult<&Vec<Value>> {
	match value {
		Some(Value::Array(items)) => Ok(items),
		_ => Err(ValidationError::NotAnArray),
	}
}

/// Requires the value to be a JSON array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsArrayValidator;

impl IsArrayValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator for IsArrayValidator {
	fn validate(&self, value: Option<&Value>) -> ValidationResult<()> {
		as_array(value).map(|_| ())
	}
}

/// Minimum item count validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayMinSizeValidator {
	min: usize,
}

impl ArrayMinSizeValidator {
	/// Creates a validator requiring at least `min` items.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_property_validators::{ArrayMinSizeValidator, Validator};
	/// use serde_json::json;
	///
	/// let validator = ArrayMinSizeValidator::new(1);
	/// assert_eq!(validator.min(), 1);
	/// assert!(validator.validate(Some(&json!([]))).is_err());
	/// ```
	pub fn new(min: usize) -> Self {
		Self { min }
	}

	pub fn min(&self) -> usize {
		self.min
	}
}

impl Validator for ArrayMinSizeValidator {
	fn validate(&self, value: Option<&Value>) -> ValidationResult<()> {
		let items = as_array(value)?;
		if items.len() >= self.min {
			Ok(())
		} else {
			Err(ValidationError::TooFewItems {
				length: items.len(),
				min: self.min,
			})
		}
	}
}

/// Maximum item count validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayMaxSizeValidator {
	max: usize,
}

impl ArrayMaxSizeValidator {
	/// Creates a validator allowing at most `max` items.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_property_validators::{ArrayMaxSizeValidator, Validator};
	/// use serde_json::json;
	///
	/// let validator = ArrayMaxSizeValidator::new(2);
	/// assert!(validator.validate(Some(&json!([1, 2]))).is_ok());
	/// assert!(validator.validate(Some(&json!([1, 2, 3]))).is_err());
	/// ```
	pub fn new(max: usize) -> Self {
		Self { max }
	}

	pub fn max(&self) -> usize {
		self.max
	}
}

impl Validator for ArrayMaxSizeValidator {
	fn validate(&self, value: Option<&Value>) -> ValidationResult<()> {
		let items = as_array(value)?;
		if items.len() <= self.max {
			Ok(())
		} else {
			Err(ValidationError::TooManyItems {
				length: items.len(),
				max: self.max,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(Some(json!([])))]
	#[case(Some(json!([1, "two", null])))]
	fn test_is_array_accepts_arrays(#[case] value: Option<Value>) {
		assert!(IsArrayValidator::new().validate(value.as_ref()).is_ok());
	}

	#[rstest]
	#[case(None)]
	#[case(Some(Value::Null))]
	#[case(Some(json!({"0": 1})))]
	#[case(Some(json!("[1, 2]")))]
	fn test_is_array_rejects_non_arrays(#[case] value: Option<Value>) {
		assert_eq!(
			IsArrayValidator::new().validate(value.as_ref()),
			Err(ValidationError::NotAnArray)
		);
	}

	#[rstest]
	fn test_min_size_boundary() {
		let validator = ArrayMinSizeValidator::new(2);
		assert!(validator.validate(Some(&json!([1, 2]))).is_ok());
		assert_eq!(
			validator.validate(Some(&json!([1]))),
			Err(ValidationError::TooFewItems { length: 1, min: 2 })
		);
	}

	#[rstest]
	fn test_min_size_zero_accepts_empty() {
		let validator = ArrayMinSizeValidator::new(0);
		assert!(validator.validate(Some(&json!([]))).is_ok());
	}

	#[rstest]
	fn test_max_size_boundary() {
		let validator = ArrayMaxSizeValidator::new(3);
		assert!(validator.validate(Some(&json!([1, 2, 3]))).is_ok());
		assert_eq!(
			validator.validate(Some(&json!([1, 2, 3, 4]))),
			Err(ValidationError::TooManyItems { length: 4, max: 3 })
		);
	}

	#[rstest]
	fn test_size_validators_reject_absent() {
		assert_eq!(
			ArrayMinSizeValidator::new(0).validate(None),
			Err(ValidationError::NotAnArray)
		);
		assert_eq!(
			ArrayMaxSizeValidator::new(10).validate(None),
			Err(ValidationError::NotAnArray)
		);
	}
}
