//! Primitive attachments
//!
//! One constructor per capability of the collaborator engines:
//!
//! | Constructor | Engine | Effect when bound |
//! |-------------|--------|-------------------|
//! | [`expose`] | descriptor | read and publish the property under a name |
//! | [`validate_if`], [`skip_absent`], [`skip_null`] | validators | gate the validator chain |
//! | [`is_array`], [`array_min_size`], [`array_max_size`] | validators | collection shape and size |
//! | [`transform`], [`default_value`] | transform | rewrite the value on ingest |
//! | [`equals`] | validators | pin the value (or each item) to a constant |
//! | [`api_property`] | metadata | publish documentation facts |
//! | [`marker`] | descriptor | record a free-form fact |

use crate::attachment::{AttachmentKind, PropertyAttachment, SharedAttachment};
use crate::descriptor::PropertyDescriptor;
use crate::error::{AttachError, AttachResult};
use reinhardt_property_metadata::PropertyMetadata;
use reinhardt_property_transform::{DefaultTransform, FnTransform, Transform};
use reinhardt_property_validators::{
	ArrayMaxSizeValidator, ArrayMinSizeValidator, EqualsValidator, IsArrayValidator,
	ValidationCondition,
};
use serde_json::Value;
use std::sync::Arc;

/// Exposes a property under a different name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expose {
	name: Option<String>,
}

impl PropertyAttachment for Expose {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::Expose {
			name: self.name.clone(),
		}
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.set_exposed_name(self.name.clone());
		Ok(())
	}
}

/// Expose the property under `name`, or under its own key when `None`
///
/// # Errors
///
/// Returns [`AttachError::InvalidName`] when `name` is blank.
///
/// # Examples
///
/// ```
/// use reinhardt_property::attachments::expose;
/// use reinhardt_property::{AttachError, AttachmentKind, PropertyAttachment};
///
/// let renamed = expose(Some("userId".to_string())).unwrap();
/// assert_eq!(
///     renamed.kind(),
///     AttachmentKind::Expose { name: Some("userId".to_string()) }
/// );
///
/// assert!(matches!(expose(Some("  ".to_string())), Err(AttachError::InvalidName(_))));
/// ```
pub fn expose(name: Option<String>) -> AttachResult<SharedAttachment> {
	if let Some(blank) = name.as_deref().filter(|n| n.trim().is_empty()) {
		return Err(AttachError::InvalidName(blank.to_string()));
	}
	Ok(Arc::new(Expose { name }))
}

/// Gates the property's validators behind a condition
#[derive(Debug, Clone)]
pub struct ValidateIf {
	condition: ValidationCondition,
}

impl PropertyAttachment for ValidateIf {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::ValidateIf
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.add_condition(self.condition.clone());
		Ok(())
	}
}

/// Validate the property only while `predicate` holds for the incoming value
pub fn validate_if<F>(predicate: F) -> SharedAttachment
where
	F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
{
	Arc::new(ValidateIf {
		condition: ValidationCondition::when(predicate),
	})
}

/// Skip validation when the value is absent
pub fn skip_absent() -> SharedAttachment {
	Arc::new(ValidateIf {
		condition: ValidationCondition::unless_absent(),
	})
}

/// Skip validation when the value is an explicit `null`
pub fn skip_null() -> SharedAttachment {
	Arc::new(ValidateIf {
		condition: ValidationCondition::unless_null(),
	})
}

/// Requires the value to be an array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsArray;

impl PropertyAttachment for IsArray {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::IsArray
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.add_validator(IsArrayValidator::new());
		Ok(())
	}
}

pub fn is_array() -> SharedAttachment {
	Arc::new(IsArray)
}

/// Requires at least `n` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayMinSize(usize);

impl PropertyAttachment for ArrayMinSize {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::ArrayMinSize(self.0)
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.add_validator(ArrayMinSizeValidator::new(self.0));
		Ok(())
	}
}

pub fn array_min_size(min: usize) -> SharedAttachment {
	Arc::new(ArrayMinSize(min))
}

/// Allows at most `n` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayMaxSize(usize);

impl PropertyAttachment for ArrayMaxSize {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::ArrayMaxSize(self.0)
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.add_validator(ArrayMaxSizeValidator::new(self.0));
		Ok(())
	}
}

pub fn array_max_size(max: usize) -> SharedAttachment {
	Arc::new(ArrayMaxSize(max))
}

/// Rewrites the value during ingestion
#[derive(Debug, Clone)]
pub struct Rewrite {
	transform: Arc<dyn Transform>,
}

impl PropertyAttachment for Rewrite {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::Transform
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.add_transform(Arc::clone(&self.transform));
		Ok(())
	}
}

/// Rewrite the incoming value with `func` on ingest
pub fn transform<F>(func: F) -> SharedAttachment
where
	F: Fn(Option<Value>) -> Option<Value> + Send + Sync + 'static,
{
	Arc::new(Rewrite {
		transform: Arc::new(FnTransform::new(func)),
	})
}

/// Substitute `default` for an absent value on ingest
///
/// # Examples
///
/// ```
/// use reinhardt_property::attachments::default_value;
/// use reinhardt_property::{PropertyAttachment, PropertyDescriptor};
/// use serde_json::json;
///
/// let mut property = PropertyDescriptor::new("enabled");
/// default_value(json!(false)).attach(&mut property).unwrap();
///
/// assert_eq!(property.ingest(None), Some(json!(false)));
/// assert_eq!(property.ingest(Some(json!(true))), Some(json!(true)));
/// ```
pub fn default_value(default: Value) -> SharedAttachment {
	Arc::new(Rewrite {
		transform: Arc::new(DefaultTransform::new(default)),
	})
}

/// Requires the value (or each of its items) to equal a constant
#[derive(Debug, Clone, PartialEq)]
pub struct Equals {
	expected: Value,
	each: bool,
}

impl PropertyAttachment for Equals {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::Equals {
			expected: self.expected.clone(),
			each: self.each,
		}
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		let validator = if self.each {
			EqualsValidator::each(self.expected.clone())
		} else {
			EqualsValidator::new(self.expected.clone())
		};
		property.add_validator(validator);
		Ok(())
	}
}

pub fn equals(expected: Value, each: bool) -> SharedAttachment {
	Arc::new(Equals { expected, each })
}

/// Publishes documentation facts for the property
#[derive(Debug, Clone, PartialEq)]
pub struct ApiProperty {
	metadata: PropertyMetadata,
}

impl PropertyAttachment for ApiProperty {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::ApiProperty(Box::new(self.metadata.clone()))
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.publish_metadata(self.metadata.clone());
		Ok(())
	}
}

pub fn api_property(metadata: PropertyMetadata) -> SharedAttachment {
	Arc::new(ApiProperty { metadata })
}

/// Records a free-form fact on the property
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
	key: String,
	value: Value,
}

impl PropertyAttachment for Marker {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::Custom(self.key.clone())
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		property.set_marker(self.key.clone(), self.value.clone());
		Ok(())
	}
}

/// Record `value` under `key` on the property
///
/// # Examples
///
/// ```
/// use reinhardt_property::attachments::marker;
/// use reinhardt_property::{PropertyAttachment, PropertyDescriptor};
/// use serde_json::json;
///
/// let mut property = PropertyDescriptor::new("salary");
/// marker("roles", json!(["admin"])).attach(&mut property).unwrap();
///
/// assert_eq!(property.marker("roles"), Some(&json!(["admin"])));
/// ```
pub fn marker(key: impl Into<String>, value: Value) -> SharedAttachment {
	Arc::new(Marker {
		key: key.into(),
		value,
	})
}
