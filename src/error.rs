//! Error types for property attachments and model validation

use indexmap::IndexMap;
use reinhardt_property_validators::ValidationError;
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing or binding attachments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
	#[error("Invalid exposed name {0:?}: names must not be blank")]
	InvalidName(String),

	#[error("Property '{0}' is already bound on this model")]
	DuplicateProperty(String),

	#[error("Exposed name '{name}' of property '{property}' is already used by property '{existing}'")]
	NameCollision {
		name: String,
		property: String,
		existing: String,
	},
}

pub type AttachResult<T> = Result<T, AttachError>;

/// Validation failures of a whole model, grouped by property key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelValidationError {
	errors: IndexMap<String, Vec<ValidationError>>,
}

impl ModelValidationError {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, property: impl Into<String>, errors: Vec<ValidationError>) {
		self.errors.insert(property.into(), errors);
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn get(&self, property: &str) -> Option<&[ValidationError]> {
		self.errors.get(property).map(Vec::as_slice)
	}

	/// Property keys that failed, in declaration order
	pub fn properties(&self) -> impl Iterator<Item = &str> {
		self.errors.keys().map(String::as_str)
	}
}

impl fmt::Display for ModelValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Validation failed")?;
		for (property, errors) in &self.errors {
			for error in errors {
				write!(f, "; {}: {}", property, error)?;
			}
		}
		Ok(())
	}
}

impl std::error::Error for ModelValidationError {}
