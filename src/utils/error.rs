use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Validation error on field '{field}': {reason}")]
    ValidationError { field: String, reason: String },
}

impl TransformError {
    pub fn missing_field(field: &str) -> Self {
        TransformError::ValidationError {
            field: field.to_string(),
            reason: "required field is missing".to_string(),
        }
    }

    pub fn invalid_type(field: &str, expected: &str, found: &str) -> Self {
        TransformError::ValidationError {
            field: field.to_string(),
            reason: format!("expected {}, found {}", expected, found),
        }
    }

    /// Dotted path of the field that failed validation (e.g. `address.zipCode`).
    pub fn field(&self) -> &str {
        match self {
            TransformError::ValidationError { field, .. } => field,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TransformError::ValidationError { field, reason } => {
                format!("Input record rejected at '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TransformError::ValidationError { field, .. } => format!(
                "Check that the source record carries '{}' with the type listed in the input schema",
                field
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
