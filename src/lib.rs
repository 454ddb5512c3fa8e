//! # Reinhardt Property
//!
//! Declarative field behavior for Reinhardt models.
//!
//! A single [`PropertyOptions`] declaration describes how one model property
//! is validated, defaulted and documented. [`compose`] turns that declaration
//! into a [`CombinedAttachment`]: an ordered sequence of small, independent
//! attachments that, once bound to a property, give it the declared behavior.
//!
//! ## Core Principles
//!
//! - **Declare once**: requiredness, nullability, array shape and size,
//!   defaults, constants and documentation all come from one options value
//! - **Presence, not truthiness**: a default of `false`, `0` or `[]` is still
//!   a default; an absent value is distinct from an explicit `null`
//! - **Composition**: every behavior is a [`PropertyAttachment`], and callers
//!   may add their own ahead of the computed ones
//!
//! ## Binding Order
//!
//! caller attachments → expose → skip-if-absent → skip-if-null → array shape
//! → minimum size → maximum size → default → constant → metadata
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_property::prelude::*;
//! use serde_json::json;
//!
//! let options = PropertyOptions::array(
//!     ArrayOptions::bounded(SizeBounds::new().with_min_length(1)).with_default(vec![json!("misc")]),
//! )
//! .with_name("tagList")
//! .with_description("Labels attached to the post");
//!
//! let tags = compose(PropertyMetadata::new(), &options, []).unwrap();
//!
//! let mut model = ModelDescriptor::new("Post");
//! model.bind("tags", &tags).unwrap();
//!
//! let loaded = model.load(&json!({}).as_object().cloned().unwrap()).unwrap();
//! assert_eq!(loaded["tags"], json!(["misc"]));
//!
//! let schema = model.metadata().to_json().unwrap();
//! assert_eq!(schema["properties"]["tagList"]["minItems"], json!(1));
//! assert_eq!(schema["required"], json!(["tagList"]));
//! ```
//!
//! ## Loading Declarations
//!
//! Declarations are plain serde data and can be read from configuration:
//!
//! ```rust
//! use reinhardt_property::{PropertyOptions, PropertyShape};
//! use serde_json::json;
//!
//! let options: PropertyOptions = serde_json::from_value(json!({
//!     "name": "ids",
//!     "optional": true,
//!     "shape": {"kind": "array", "size": {"length": 3}, "constant": {"each": 0}}
//! }))
//! .unwrap();
//!
//! assert!(matches!(options.shape, PropertyShape::Array(_)));
//! ```

pub mod attachment;
pub mod attachments;
pub mod compose;
pub mod declaration;
pub mod descriptor;
pub mod error;

pub use attachment::{AttachmentKind, CombinedAttachment, PropertyAttachment, SharedAttachment};
pub use compose::compose;
pub use declaration::{
	ArrayConstant, ArrayOptions, ArraySize, PropertyOptions, PropertyShape, SingularOptions,
	SizeBounds,
};
pub use descriptor::{ModelDescriptor, PropertyDescriptor};
pub use error::{AttachError, AttachResult, ModelValidationError};

// Re-export the engine crates
pub use reinhardt_property_metadata as metadata;
pub use reinhardt_property_transform as transform;
pub use reinhardt_property_validators as validators;

pub use reinhardt_property_metadata::{ModelMetadata, PropertyMetadata};
pub use reinhardt_property_validators::ValidationError;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::attachments::{
		api_property, array_max_size, array_min_size, default_value, equals, expose, is_array,
		marker, skip_absent, skip_null, transform, validate_if,
	};
	pub use crate::{
		ArrayConstant, ArrayOptions, ArraySize, AttachError, AttachResult, AttachmentKind,
		CombinedAttachment, ModelDescriptor, ModelMetadata, ModelValidationError,
		PropertyAttachment, PropertyDescriptor, PropertyMetadata, PropertyOptions, PropertyShape,
		SharedAttachment, SingularOptions, SizeBounds, ValidationError, compose,
	};
}
