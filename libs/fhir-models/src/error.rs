//! Error types for FHIR models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required element: '{path}' in {type_name}")]
    MissingRequiredField {
        type_name: &'static str,
        path: String,
    },

    #[error("Invalid cardinality for element: '{path}' in {type_name}: {reason}")]
    InvalidCardinality {
        type_name: &'static str,
        path: String,
        reason: String,
    },

    #[error(
        "Resource type found in Reference.type: '{found}' for element: '{path}' in {type_name} must be one of: {allowed:?}"
    )]
    InvalidReferenceTargetType {
        type_name: &'static str,
        path: String,
        found: String,
        allowed: Vec<&'static str>,
    },

    #[error("{type_name} must contain either '{first}' or '{second}' but not both ({reason})")]
    ChoiceExclusivityViolation {
        type_name: &'static str,
        first: &'static str,
        second: &'static str,
        reason: &'static str,
    },

    #[error("ele-1: {type_name} must have a value or children")]
    EmptyComposite { type_name: &'static str },

    #[error("Invalid type: {found} for choice element: '{path}' in {type_name} must be one of: {allowed:?}")]
    InvalidChoiceType {
        type_name: &'static str,
        path: String,
        found: &'static str,
        allowed: Vec<&'static str>,
    },

    #[error("Invalid {type_name} value: {reason}")]
    InvalidPrimitiveValue {
        type_name: &'static str,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was raised by a builder rule (as opposed to
    /// configuration or serialization problems).
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            Error::InvalidConfig(_) | Error::Yaml(_) | Error::SerializationError(_)
        )
    }

    /// Name of the type whose builder rejected the node.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Error::MissingRequiredField { type_name, .. }
            | Error::InvalidCardinality { type_name, .. }
            | Error::InvalidReferenceTargetType { type_name, .. }
            | Error::ChoiceExclusivityViolation { type_name, .. }
            | Error::EmptyComposite { type_name }
            | Error::InvalidChoiceType { type_name, .. }
            | Error::InvalidPrimitiveValue { type_name, .. } => Some(*type_name),
            _ => None,
        }
    }

    /// Offending field path (`field` or `field[index]`), when the rule is field-specific.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::MissingRequiredField { path, .. }
            | Error::InvalidCardinality { path, .. }
            | Error::InvalidReferenceTargetType { path, .. }
            | Error::InvalidChoiceType { path, .. } => Some(path.as_str()),
            Error::ChoiceExclusivityViolation { first, .. } => Some(*first),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        let missing = Error::MissingRequiredField {
            type_name: "Encounter",
            path: "status".to_string(),
        };
        assert!(missing.is_structural());
        assert_eq!(missing.type_name(), Some("Encounter"));
        assert_eq!(missing.path(), Some("status"));

        let config = Error::InvalidConfig("max_string_length must be positive".to_string());
        assert!(!config.is_structural());
        assert_eq!(config.type_name(), None);
    }

    #[test]
    fn test_messages_name_type_and_path() {
        let err = Error::InvalidReferenceTargetType {
            type_name: "Encounter",
            path: "subject".to_string(),
            found: "Practitioner".to_string(),
            allowed: vec!["Patient", "Group"],
        };
        let message = err.to_string();
        assert!(message.contains("Encounter"));
        assert!(message.contains("subject"));
        assert!(message.contains("Practitioner"));
    }
}
