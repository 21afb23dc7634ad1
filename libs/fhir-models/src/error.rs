//! Error types for FHIR models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object at {0}")]
    ExpectedObject(String),

    #[error("Missing resourceType property")]
    MissingResourceType,

    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("Resource type mismatch: expected {expected}, found {found}")]
    ResourceTypeMismatch { expected: String, found: String },

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Invalid value at {path}: {message}")]
    InvalidValue { path: String, message: String },

    #[error("Unknown code '{code}' at {path} (value set {value_set})")]
    UnknownCode {
        path: String,
        code: String,
        value_set: &'static str,
    },

    #[error("More than one value given for choice element {0}")]
    MultipleChoiceValues(String),

    #[error("Empty array at {0}")]
    EmptyArray(String),

    #[error("Null value at {0}")]
    NullValue(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl Error {
    /// Path of the offending element, when the error is tied to one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::ExpectedObject(path)
            | Error::MissingElement(path)
            | Error::UnknownElement(path)
            | Error::MultipleChoiceValues(path)
            | Error::EmptyArray(path)
            | Error::NullValue(path) => Some(path),
            Error::InvalidValue { path, .. } | Error::UnknownCode { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
