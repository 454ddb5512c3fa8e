//! Property validators for Reinhardt
//!
//! This crate provides the validation rules that declarative property options
//! compile down to. Every validator inspects the incoming JSON value of a
//! single property, where `None` means the property was not supplied and
//! `Some(Value::Null)` means it was supplied as an explicit `null`.
//!
//! - [`IsArrayValidator`], [`ArrayMinSizeValidator`], [`ArrayMaxSizeValidator`]
//!   enforce collection shape and size
//! - [`EqualsValidator`] pins a value (or every item of it) to a constant
//! - [`ValidationCondition`] gates whether a property's validators run at all

pub mod array;
pub mod conditional;
pub mod equality;
pub mod errors;

pub use array::{ArrayMaxSizeValidator, ArrayMinSizeValidator, IsArrayValidator};
pub use conditional::ValidationCondition;
pub use equality::EqualsValidator;
pub use errors::{ValidationError, ValidationResult};

use serde_json::Value;
use std::fmt::Debug;

/// Re-export commonly used types
pub mod prelude {
	pub use super::Validator;
	pub use super::array::{ArrayMaxSizeValidator, ArrayMinSizeValidator, IsArrayValidator};
	pub use super::conditional::ValidationCondition;
	pub use super::equality::EqualsValidator;
	pub use super::errors::{ValidationError, ValidationResult};
}

/// Trait for property validators
pub trait Validator: Debug + Send + Sync {
	fn validate(&self, value: Option<&Value>) -> ValidationResult<()>;
}

/// Runs every validator in order and collects all failures
///
/// # Examples
///
/// ```
/// use reinhardt_property_validators::{
///     ArrayMinSizeValidator, IsArrayValidator, Validator, validate_all,
/// };
/// use serde_json::json;
///
/// let validators: Vec<Box<dyn Validator>> = vec![
///     Box::new(IsArrayValidator::new()),
///     Box::new(ArrayMinSizeValidator::new(2)),
/// ];
///
/// assert!(validate_all(&validators, Some(&json!([1, 2]))).is_ok());
/// assert_eq!(validate_all(&validators, None).unwrap_err().len(), 2);
/// ```
pub fn validate_all<V>(validators: &[V], value: Option<&Value>) -> Result<(), Vec<ValidationError>>
where
	V: std::ops::Deref,
	V::Target: Validator,
{
	let errors: Vec<ValidationError> = validators
		.iter()
		.filter_map(|validator| validator.validate(value).err())
		.collect();

	if errors.is_empty() {
		Ok(())
	} else {
		Err(errors)
	}
}
