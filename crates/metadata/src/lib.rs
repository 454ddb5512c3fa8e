//! # Reinhardt Property Metadata
//!
//! Schema metadata facts published for declarative properties.
//!
//! This crate records documentation facts (name, description, example,
//! default, requiredness, nullability, array shape, item bounds, enumeration)
//! for each property and assembles them into a per-model document. Rendering
//! those facts into an OpenAPI schema is left to the consumer.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_property_metadata::{ModelMetadata, PropertyMetadata};
//! use serde_json::json;
//!
//! let tags = PropertyMetadata::new()
//!     .with_description("Free-form labels")
//!     .with_is_array(true)
//!     .with_max_items(5)
//!     .with_required(false);
//!
//! let document = ModelMetadata::from_properties([("tags".to_string(), tags)]);
//! assert_eq!(document.to_json().unwrap()["properties"]["tags"]["maxItems"], json!(5));
//! ```

pub mod document;
pub mod present;
pub mod property;

pub use document::ModelMetadata;
pub use property::PropertyMetadata;
