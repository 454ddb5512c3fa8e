//! Serde helper keeping an explicit `null` distinct from a missing key
//!
//! Use together with `#[serde(default)]`: a missing key stays `None`, while a
//! key present with value `null` becomes `Some(Value::Null)`.
//!
//! ```
//! use serde::Deserialize;
//! use serde_json::{Value, json};
//!
//! #[derive(Deserialize)]
//! struct Options {
//!     #[serde(default, deserialize_with = "reinhardt_property_metadata::present::deserialize")]
//!     default: Option<Value>,
//! }
//!
//! let missing: Options = serde_json::from_value(json!({})).unwrap();
//! assert_eq!(missing.default, None);
//!
//! let null: Options = serde_json::from_value(json!({"default": null})).unwrap();
//! assert_eq!(null.default, Some(Value::Null));
//! ```

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}
