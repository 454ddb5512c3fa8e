//! Conditions deciding whether a property's validators run at all
//!
//! A property may carry several conditions. Its validator chain runs only
//! when every condition allows it; a single refusal short-circuits the whole
//! chain and the value is accepted as-is.
//!
//! # Examples
//!
//! ## Skip validation when the value is absent
//!
//! ```
//! use reinhardt_property_validators::ValidationCondition;
//! use serde_json::json;
//!
//! let condition = ValidationCondition::unless(|value| value.is_none());
//!
//! assert!(!condition.should_validate(None));
//! assert!(condition.should_validate(Some(&json!(null))));
//! assert!(condition.should_validate(Some(&json!(0))));
//! ```
//!
//! ## Validate only when the value is a string
//!
//! ```
//! use reinhardt_property_validators::ValidationCondition;
//! use serde_json::json;
//!
//! let condition = ValidationCondition::when(|value| matches!(value, Some(v) if v.is_string()));
//!
//! assert!(condition.should_validate(Some(&json!("text"))));
//! assert!(!condition.should_validate(Some(&json!(1))));
//! ```

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(Option<&Value>) -> bool + Send + Sync;

/// Condition gating a property's validator chain
///
/// The predicate is evaluated against the incoming value, and validation
/// proceeds when the result matches the expected state
/// (`validate_when_true`).
#[derive(Clone)]
pub struct ValidationCondition {
	predicate: Arc<Predicate>,
	validate_when_true: bool,
}

impl ValidationCondition {
	/// Validate only when the predicate holds
	pub fn when<F>(predicate: F) -> Self
	where
		F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
	{
		Self {
			predicate: Arc::new(predicate),
			validate_when_true: true,
		}
	}

	/// Validate unless the predicate holds
	pub fn unless<F>(predicate: F) -> Self
	where
		F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
	{
		Self {
			predicate: Arc::new(predicate),
			validate_when_true: false,
		}
	}

	/// Skip validation when the value is absent
	pub fn unless_absent() -> Self {
		Self::unless(|value| value.is_none())
	}

	/// Skip validation when the value is an explicit `null`
	pub fn unless_null() -> Self {
		Self::unless(|value| matches!(value, Some(Value::Null)))
	}

	pub fn should_validate(&self, value: Option<&Value>) -> bool {
		(self.predicate)(value) == self.validate_when_true
	}
}

impl fmt::Debug for ValidationCondition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValidationCondition")
			.field("validate_when_true", &self.validate_when_true)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(None, false)]
	#[case(Some(Value::Null), true)]
	#[case(Some(json!(false)), true)]
	#[case(Some(json!(0)), true)]
	#[case(Some(json!("")), true)]
	#[case(Some(json!([])), true)]
	fn test_unless_absent(#[case] value: Option<Value>, #[case] validates: bool) {
		let condition = ValidationCondition::unless_absent();
		assert_eq!(condition.should_validate(value.as_ref()), validates);
	}

	#[rstest]
	#[case(None, true)]
	#[case(Some(Value::Null), false)]
	#[case(Some(json!(false)), true)]
	#[case(Some(json!(0)), true)]
	#[case(Some(json!([])), true)]
	fn test_unless_null(#[case] value: Option<Value>, #[case] validates: bool) {
		let condition = ValidationCondition::unless_null();
		assert_eq!(condition.should_validate(value.as_ref()), validates);
	}

	#[rstest]
	fn test_when_condition() {
		let condition =
			ValidationCondition::when(|value| matches!(value, Some(v) if v.is_number()));

		assert!(condition.should_validate(Some(&json!(3))));
		assert!(!condition.should_validate(Some(&json!("3"))));
		assert!(!condition.should_validate(None));
	}

	#[rstest]
	fn test_clone_shares_predicate() {
		let condition = ValidationCondition::unless_absent();
		let cloned = condition.clone();

		assert_eq!(
			condition.should_validate(None),
			cloned.should_validate(None)
		);
	}
}
