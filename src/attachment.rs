//! Property attachments
//!
//! An attachment is one unit of behavior bound to a property: a validation
//! rule, an ingestion transform, a documentation fact, or anything a caller
//! wants to record. Attachments are immutable once built and are bound by
//! applying them to a [`PropertyDescriptor`].

use crate::descriptor::PropertyDescriptor;
use crate::error::AttachResult;
use reinhardt_property_metadata::PropertyMetadata;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

/// A unit of behavior that can be bound to a property
pub trait PropertyAttachment: Debug + Send + Sync {
	/// What this attachment does, for introspection
	fn kind(&self) -> AttachmentKind;

	/// Apply this attachment to `property`
	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()>;
}

/// Shared handle to an attachment
pub type SharedAttachment = Arc<dyn PropertyAttachment>;

/// Introspectable description of an attachment
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentKind {
	/// Expose the property under `name`, or under its own key when `None`
	Expose { name: Option<String> },
	/// Condition gating the property's validators
	ValidateIf,
	IsArray,
	ArrayMinSize(usize),
	ArrayMaxSize(usize),
	/// Ingestion-time rewrite of the value
	Transform,
	Equals { expected: Value, each: bool },
	/// Published schema metadata
	ApiProperty(Box<PropertyMetadata>),
	/// A sequence of attachments applied as one
	Combined(Vec<AttachmentKind>),
	/// Caller-defined attachment
	Custom(String),
}

/// Attachments applied in a fixed order as a single unit
///
/// Binding a combined attachment has the same effect as binding each of its
/// constituents one after another. A failing constituent stops the sequence
/// and its error is returned unchanged.
///
/// # Examples
///
/// ```
/// use reinhardt_property::attachments::{array_min_size, is_array};
/// use reinhardt_property::{AttachmentKind, CombinedAttachment, PropertyAttachment};
///
/// let combined = CombinedAttachment::new(vec![is_array(), array_min_size(1)]);
///
/// assert_eq!(
///     combined.kinds(),
///     vec![AttachmentKind::IsArray, AttachmentKind::ArrayMinSize(1)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CombinedAttachment {
	attachments: Vec<SharedAttachment>,
}

impl CombinedAttachment {
	pub fn new(attachments: Vec<SharedAttachment>) -> Self {
		Self { attachments }
	}

	/// Kinds of the constituents, in binding order
	pub fn kinds(&self) -> Vec<AttachmentKind> {
		self.attachments.iter().map(|a| a.kind()).collect()
	}

	pub fn len(&self) -> usize {
		self.attachments.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attachments.is_empty()
	}
}

impl PropertyAttachment for CombinedAttachment {
	fn kind(&self) -> AttachmentKind {
		AttachmentKind::Combined(self.kinds())
	}

	fn attach(&self, property: &mut PropertyDescriptor) -> AttachResult<()> {
		for attachment in &self.attachments {
			tracing::trace!(
				property = property.key(),
				kind = ?attachment.kind(),
				"applying attachment"
			);
			attachment.attach(property)?;
		}
		Ok(())
	}
}

impl FromIterator<SharedAttachment> for CombinedAttachment {
	fn from_iter<I: IntoIterator<Item = SharedAttachment>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
