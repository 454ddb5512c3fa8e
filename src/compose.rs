//! Composition of declarative options into a single attachment
//!
//! [`compose`] turns one [`PropertyOptions`] declaration into the ordered
//! sequence of primitive attachments implementing it:
//!
//! 1. caller-supplied attachments, in the order given
//! 2. expose under the declared name (always bound)
//! 3. skip validation when absent, if `optional`
//! 4. skip validation when `null`, if `nullable`
//! 5. array shape check, for array properties
//! 6. minimum item count, when a lower bound is in effect
//! 7. maximum item count, when an upper bound is in effect
//! 8. default substitution, when a default is declared
//! 9. constant equality, when a constant is declared
//! 10. metadata publication
//!
//! Options that are not declared contribute nothing; no placeholder
//! attachments are bound.

use crate::attachment::{CombinedAttachment, SharedAttachment};
use crate::attachments::{
	api_property, array_max_size, array_min_size, default_value, equals, expose, is_array,
	skip_absent, skip_null,
};
use crate::declaration::{PropertyOptions, PropertyShape};
use crate::error::AttachResult;
use reinhardt_property_metadata::PropertyMetadata;
use serde_json::Value;

/// Shape-specific facts shared by the attachments and the published metadata
struct ShapeFacts {
	is_array: bool,
	min_items: Option<usize>,
	max_items: Option<usize>,
	example: Option<Value>,
	default: Option<Value>,
	/// Expected value and whether it applies per item
	constant: Option<(Value, bool)>,
}

impl ShapeFacts {
	fn resolve(shape: &PropertyShape) -> Self {
		match shape {
			PropertyShape::Singular(options) => Self {
				is_array: false,
				min_items: None,
				max_items: None,
				example: options.example.clone(),
				default: options.default.clone(),
				constant: options
					.constant
					.as_ref()
					.map(|constant| (constant.clone(), false)),
			},
			PropertyShape::Array(options) => {
				let (min_items, max_items) = options.size.effective();
				Self {
					is_array: true,
					min_items,
					max_items,
					example: options.example.clone().map(Value::Array),
					default: options.default.clone().map(Value::Array),
					constant: options
						.constant
						.as_ref()
						.map(|constant| (constant.expected(), constant.is_each())),
				}
			}
		}
	}
}

/// Compose `options` into a single attachment
///
/// `base` carries caller-supplied documentation facts; the facts computed
/// from `options` are merged over it and published last. A base fact
/// survives whenever the matching option is absent, so an undeclared
/// description, example, default, bound, enumeration or nullability never
/// clears what `base` already states. `extra` attachments are bound first,
/// in the order given.
///
/// # Errors
///
/// Returns [`AttachError::InvalidName`](crate::AttachError::InvalidName)
/// when `options.name` is blank.
///
/// # Examples
///
/// ```
/// use reinhardt_property::attachments::marker;
/// use reinhardt_property::{
///     AttachmentKind, ArrayOptions, PropertyOptions, SizeBounds, compose,
/// };
/// use reinhardt_property_metadata::PropertyMetadata;
/// use serde_json::json;
///
/// let options = PropertyOptions::array(
///     ArrayOptions::bounded(SizeBounds::new().with_min_length(2)).with_default(vec![]),
/// )
/// .with_name("n")
/// .optional();
///
/// let combined = compose(PropertyMetadata::new(), &options, [marker("role", json!("admin"))])
///     .unwrap();
///
/// let kinds = combined.kinds();
/// assert_eq!(kinds[0], AttachmentKind::Custom("role".to_string()));
/// assert_eq!(kinds[1], AttachmentKind::Expose { name: Some("n".to_string()) });
/// assert_eq!(kinds[2], AttachmentKind::ValidateIf);
/// assert_eq!(kinds[3], AttachmentKind::IsArray);
/// assert_eq!(kinds[4], AttachmentKind::ArrayMinSize(2));
/// assert_eq!(kinds[5], AttachmentKind::Transform);
/// assert!(matches!(kinds[6], AttachmentKind::ApiProperty(_)));
/// assert_eq!(kinds.len(), 7);
/// ```
pub fn compose<I>(
	base: PropertyMetadata,
	options: &PropertyOptions,
	extra: I,
) -> AttachResult<CombinedAttachment>
where
	I: IntoIterator<Item = SharedAttachment>,
{
	let facts = ShapeFacts::resolve(&options.shape);

	let mut attachments: Vec<SharedAttachment> = extra.into_iter().collect();
	let extra_count = attachments.len();

	attachments.push(expose(options.name.clone())?);
	if options.optional {
		attachments.push(skip_absent());
	}
	if options.nullable {
		attachments.push(skip_null());
	}
	if facts.is_array {
		attachments.push(is_array());
	}
	if let Some(min) = facts.min_items {
		attachments.push(array_min_size(min));
	}
	if let Some(max) = facts.max_items {
		attachments.push(array_max_size(max));
	}
	if let Some(default) = &facts.default {
		attachments.push(default_value(default.clone()));
	}
	if let Some((expected, each)) = &facts.constant {
		attachments.push(equals(expected.clone(), *each));
	}
	attachments.push(api_property(base.merge(published_metadata(options, facts))));

	tracing::debug!(
		exposed = options.name.as_deref().unwrap_or("<key>"),
		extra = extra_count,
		attachments = attachments.len(),
		"composed property options"
	);

	Ok(CombinedAttachment::new(attachments))
}

fn published_metadata(options: &PropertyOptions, facts: ShapeFacts) -> PropertyMetadata {
	PropertyMetadata {
		name: options.name.clone(),
		description: options.description.clone(),
		example: facts.example,
		default: facts.default,
		required: Some(!options.optional),
		nullable: options.nullable.then_some(true),
		is_array: Some(facts.is_array),
		min_items: facts.min_items,
		max_items: facts.max_items,
		enum_values: facts.constant.map(|(expected, _)| vec![expected]),
		extra: Default::default(),
	}
}
