//! Property and model descriptors
//!
//! A [`PropertyDescriptor`] is what attachments bind to: it accumulates the
//! exposed name, validation conditions, validators, ingestion transforms,
//! published metadata and free-form markers of one property. A
//! [`ModelDescriptor`] groups bound properties and runs them over whole JSON
//! objects.
//!
//! # Examples
//!
//! ```
//! use reinhardt_property::{
//!     ArrayOptions, ModelDescriptor, PropertyOptions, SizeBounds, compose,
//! };
//! use reinhardt_property_metadata::PropertyMetadata;
//! use serde_json::json;
//!
//! let tags = compose(
//!     PropertyMetadata::new(),
//!     &PropertyOptions::array(
//!         ArrayOptions::bounded(SizeBounds::new().with_max_length(2)).with_default(vec![]),
//!     )
//!     .with_name("tagList"),
//!     [],
//! )
//! .unwrap();
//!
//! let mut model = ModelDescriptor::new("Post");
//! model.bind("tags", &tags).unwrap();
//!
//! let input = json!({}).as_object().cloned().unwrap();
//! let loaded = model.load(&input).unwrap();
//! assert_eq!(loaded["tags"], json!([]));
//!
//! let too_many = json!({"tagList": ["a", "b", "c"]}).as_object().cloned().unwrap();
//! assert!(model.load(&too_many).is_err());
//! ```

use crate::attachment::PropertyAttachment;
use crate::error::{AttachError, AttachResult, ModelValidationError};
use indexmap::IndexMap;
use reinhardt_property_metadata::{ModelMetadata, PropertyMetadata};
use reinhardt_property_transform::{Transform, TransformChain};
use reinhardt_property_validators::{
	ValidationCondition, ValidationError, Validator, validate_all,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Accumulated behavior of a single property
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
	key: String,
	exposed_name: Option<String>,
	conditions: Vec<ValidationCondition>,
	validators: Vec<Arc<dyn Validator>>,
	transforms: TransformChain,
	metadata: Option<PropertyMetadata>,
	markers: IndexMap<String, Value>,
}

impl PropertyDescriptor {
	/// Create an empty descriptor for the property declared as `key`
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			exposed_name: None,
			conditions: Vec::new(),
			validators: Vec::new(),
			transforms: TransformChain::new(),
			metadata: None,
			markers: IndexMap::new(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	/// Name the property is read and published under
	pub fn exposed_name(&self) -> &str {
		self.exposed_name.as_deref().unwrap_or(&self.key)
	}

	pub fn set_exposed_name(&mut self, name: Option<String>) {
		self.exposed_name = name;
	}

	pub fn add_condition(&mut self, condition: ValidationCondition) {
		self.conditions.push(condition);
	}

	pub fn add_validator<V: Validator + 'static>(&mut self, validator: V) {
		self.validators.push(Arc::new(validator));
	}

	pub fn add_transform(&mut self, transform: Arc<dyn Transform>) {
		self.transforms.push_shared(transform);
	}

	/// Merge `metadata` over anything published before
	pub fn publish_metadata(&mut self, metadata: PropertyMetadata) {
		self.metadata = Some(match self.metadata.take() {
			Some(existing) => existing.merge(metadata),
			None => metadata,
		});
	}

	pub fn metadata(&self) -> Option<&PropertyMetadata> {
		self.metadata.as_ref()
	}

	pub fn set_marker(&mut self, key: impl Into<String>, value: Value) {
		self.markers.insert(key.into(), value);
	}

	pub fn marker(&self, key: &str) -> Option<&Value> {
		self.markers.get(key)
	}

	pub fn markers(&self) -> &IndexMap<String, Value> {
		&self.markers
	}

	pub fn validator_count(&self) -> usize {
		self.validators.len()
	}

	/// Apply the ingestion transforms, in bind order
	pub fn ingest(&self, value: Option<Value>) -> Option<Value> {
		self.transforms.apply(value)
	}

	/// Run the validators against `value`
	///
	/// When any condition refuses the value, validation is skipped and the
	/// value is accepted. Otherwise every validator runs and all failures are
	/// returned together.
	pub fn validate(&self, value: Option<&Value>) -> Result<(), Vec<ValidationError>> {
		if let Some(index) = self
			.conditions
			.iter()
			.position(|condition| !condition.should_validate(value))
		{
			tracing::trace!(
				property = %self.key,
				condition = index,
				"validation skipped by condition"
			);
			return Ok(());
		}
		validate_all(&self.validators, value)
	}
}

/// A set of bound properties
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
	name: String,
	properties: IndexMap<String, PropertyDescriptor>,
}

impl ModelDescriptor {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			properties: IndexMap::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Bind `attachment` to a new property declared as `key`
	///
	/// # Errors
	///
	/// - [`AttachError::DuplicateProperty`] when `key` is already bound
	/// - [`AttachError::NameCollision`] when the resulting exposed name is
	///   already used by another property
	/// - any error returned by the attachment itself
	pub fn bind(
		&mut self,
		key: impl Into<String>,
		attachment: &dyn PropertyAttachment,
	) -> AttachResult<&mut Self> {
		let key = key.into();
		if self.properties.contains_key(&key) {
			return Err(AttachError::DuplicateProperty(key));
		}

		let mut property = PropertyDescriptor::new(key.clone());
		attachment.attach(&mut property)?;

		if let Some(existing) = self
			.properties
			.values()
			.find(|other| other.exposed_name() == property.exposed_name())
		{
			tracing::warn!(
				model = %self.name,
				property = %key,
				exposed = property.exposed_name(),
				existing = existing.key(),
				"exposed name collision"
			);
			return Err(AttachError::NameCollision {
				name: property.exposed_name().to_string(),
				property: key,
				existing: existing.key().to_string(),
			});
		}

		tracing::debug!(
			model = %self.name,
			property = %key,
			exposed = property.exposed_name(),
			validators = property.validator_count(),
			"bound property"
		);
		self.properties.insert(key, property);
		Ok(self)
	}

	pub fn property(&self, key: &str) -> Option<&PropertyDescriptor> {
		self.properties.get(key)
	}

	pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
		self.properties.values()
	}

	/// Read every property from `input` under its exposed name, apply its
	/// transforms, and write the result under its key
	///
	/// Properties that remain absent after transformation are left out.
	/// Input entries that do not belong to any property are dropped.
	pub fn ingest(&self, input: &Map<String, Value>) -> Map<String, Value> {
		let mut output = Map::new();
		for property in self.properties.values() {
			let incoming = input.get(property.exposed_name()).cloned();
			if let Some(value) = property.ingest(incoming) {
				output.insert(property.key().to_string(), value);
			}
		}
		output
	}

	/// Validate an ingested object, keyed by property key
	pub fn validate(&self, instance: &Map<String, Value>) -> Result<(), ModelValidationError> {
		let mut failures = ModelValidationError::new();
		for property in self.properties.values() {
			if let Err(errors) = property.validate(instance.get(property.key())) {
				failures.insert(property.key(), errors);
			}
		}

		if failures.is_empty() {
			Ok(())
		} else {
			Err(failures)
		}
	}

	/// Ingest then validate
	pub fn load(&self, input: &Map<String, Value>) -> Result<Map<String, Value>, ModelValidationError> {
		let instance = self.ingest(input);
		self.validate(&instance)?;
		Ok(instance)
	}

	/// Published metadata of every property, keyed by exposed name
	///
	/// Properties that never published metadata are omitted.
	pub fn metadata(&self) -> ModelMetadata {
		ModelMetadata::from_properties(self.properties.values().filter_map(|property| {
			property
				.metadata()
				.map(|metadata| (property.exposed_name().to_string(), metadata.clone()))
		}))
	}
}
