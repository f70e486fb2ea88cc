//! Error types for form construction

use thiserror::Error;

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors that can occur while building form configuration
#[derive(Debug, Error)]
pub enum FormError {
    /// Field was registered without a declared widget type. This is a
    /// configuration error on the caller's side, not a runtime condition.
    #[error("please define a type for field '{field}' in '{admin}'")]
    MissingFieldType { field: String, admin: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormError {
    /// Create a missing-field-type error.
    pub fn missing_field_type(field: impl Into<String>, admin: impl Into<String>) -> Self {
        Self::MissingFieldType {
            field: field.into(),
            admin: admin.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::missing_field_type("title", "PostAdmin");
        assert_eq!(
            err.to_string(),
            "please define a type for field 'title' in 'PostAdmin'"
        );
    }

    #[test]
    fn test_error_names_field_and_admin() {
        let err = FormError::missing_field_type("comments", "App\\Admin\\PostAdmin");
        let msg = err.to_string();
        assert!(msg.contains("comments"));
        assert!(msg.contains("App\\Admin\\PostAdmin"));
    }
}
