//! Ingestion-time value transforms for Reinhardt properties
//!
//! A transform rewrites the incoming value of a single property before it is
//! validated. The incoming value is `None` when the property was not supplied
//! at all, which is distinct from an explicit `null`.
//!
//! ## Example
//!
//! ```
//! use reinhardt_property_transform::{DefaultTransform, Transform, TransformChain};
//! use serde_json::json;
//!
//! let mut chain = TransformChain::new();
//! chain.push(DefaultTransform::new(json!([])));
//!
//! assert_eq!(chain.apply(None), Some(json!([])));
//! assert_eq!(chain.apply(Some(json!(null))), Some(json!(null)));
//! ```

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Rewrites a property value during ingestion
pub trait Transform: fmt::Debug + Send + Sync {
	fn transform(&self, value: Option<Value>) -> Option<Value>;
}

/// Replaces an absent value with a fixed default
///
/// Only the absent case is rewritten. Explicit `null`, `false`, `0` and empty
/// collections are values in their own right and pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultTransform {
	default: Value,
}

impl DefaultTransform {
	pub fn new(default: Value) -> Self {
		Self { default }
	}
}

impl Transform for DefaultTransform {
	fn transform(&self, value: Option<Value>) -> Option<Value> {
		match value {
			None => Some(self.default.clone()),
			present => present,
		}
	}
}

type TransformFn = dyn Fn(Option<Value>) -> Option<Value> + Send + Sync;

/// Transform backed by a closure
#[derive(Clone)]
pub struct FnTransform {
	func: Arc<TransformFn>,
}

impl FnTransform {
	/// Wrap a closure as a transform
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_property_transform::{FnTransform, Transform};
	/// use serde_json::{Value, json};
	///
	/// let trim = FnTransform::new(|value| match value {
	///     Some(Value::String(s)) => Some(Value::String(s.trim().to_string())),
	///     other => other,
	/// });
	///
	/// assert_eq!(trim.transform(Some(json!("  hi "))), Some(json!("hi")));
	/// assert_eq!(trim.transform(None), None);
	/// ```
	pub fn new<F>(func: F) -> Self
	where
		F: Fn(Option<Value>) -> Option<Value> + Send + Sync + 'static,
	{
		Self {
			func: Arc::new(func),
		}
	}
}

impl Transform for FnTransform {
	fn transform(&self, value: Option<Value>) -> Option<Value> {
		(self.func)(value)
	}
}

impl fmt::Debug for FnTransform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnTransform").finish_non_exhaustive()
	}
}

/// Ordered list of transforms applied one after another
#[derive(Debug, Clone, Default)]
pub struct TransformChain {
	transforms: Vec<Arc<dyn Transform>>,
}

impl TransformChain {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push<T: Transform + 'static>(&mut self, transform: T) {
		self.transforms.push(Arc::new(transform));
	}

	pub fn push_shared(&mut self, transform: Arc<dyn Transform>) {
		self.transforms.push(transform);
	}

	pub fn len(&self) -> usize {
		self.transforms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transforms.is_empty()
	}

	pub fn apply(&self, value: Option<Value>) -> Option<Value> {
		self.transforms
			.iter()
			.fold(value, |current, transform| transform.transform(current))
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
	#[case(json!([]))]
	#[case(json!(""))]
	#[case(Value::Null)]
	fn test_default_keeps_present_values(#[case] incoming: Value) {
		let transform = DefaultTransform::new(json!("fallback"));
		assert_eq!(transform.transform(Some(incoming.clone())), Some(incoming));
	}

	#[rstest]
	#[case(json!(false))]
	#[case(json!(0))]
	#[case(json!([]))]
	fn test_falsy_default_fills_absent(#[case] default: Value) {
		let transform = DefaultTransform::new(default.clone());
		assert_eq!(transform.transform(None), Some(default));
	}

	#[rstest]
	fn test_chain_applies_in_order() {
		let mut chain = TransformChain::new();
		chain.push(DefaultTransform::new(json!(1)));
		chain.push(FnTransform::new(|value| {
			value.map(|v| json!(v.as_i64().unwrap_or_default() * 10))
		}));

		assert_eq!(chain.len(), 2);
		assert_eq!(chain.apply(None), Some(json!(10)));
		assert_eq!(chain.apply(Some(json!(4))), Some(json!(40)));
	}

	#[rstest]
	fn test_empty_chain_is_identity() {
		let chain = TransformChain::new();
		assert!(chain.is_empty());
		assert_eq!(chain.apply(None), None);
		assert_eq!(chain.apply(Some(json!("x"))), Some(json!("x")));
	}
}
