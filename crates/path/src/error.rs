use dotwalk_types::Document;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PathError {
    #[error("Path is empty")]
    EmptyPath,

    #[error("Path '{path}' has {count} segments, exceeding the limit of {limit}")]
    TooManySegments {
        path: String,
        count: usize,
        limit: usize,
    },

    #[error("Transform failed at key '{path}': {source}")]
    Transform {
        path: String,
        #[source]
        source: TransformError,
    },

    #[error("Drop level {level} at '{path}' reaches past the document root")]
    InvalidDropLevel { path: String, level: i32 },

    #[error("Failed to delete '{path}': {reason} (input: {document})")]
    Delete {
        path: String,
        reason: String,
        document: Box<Document>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("'{transform}' expects a {expected}, found {found}")]
    TypeMismatch {
        transform: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("'{transform}' failed: {message}")]
    Failed { transform: String, message: String },

    #[error("Unknown transform '{0}'")]
    Unknown(String),
}
