//! Build-time error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Front-matter validation errors
///
/// Every variant names the offending field and the expected type; a malformed
/// document aborts its build instead of being patched with defaults.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("missing required field `{field}` (expected {expected})")]
    MissingField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` has the wrong type (expected {expected})")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("field `date` is not a recognizable date: `{0}`")]
    UnparsableDate(String),

    #[error("front-matter block is missing or unterminated")]
    MissingFrontMatter,

    #[error("front-matter is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A markdown body could not be compiled
#[derive(Error, Debug)]
#[error("{0}")]
pub struct CompileError(pub String);

/// Errors that abort a collection build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("{path}: {source}")]
    Validation {
        path: String,
        source: ValidationError,
    },

    #[error("{path}: markdown failed to compile: {source}")]
    Compile { path: String, source: CompileError },

    #[error("documents `{first}` and `{second}` resolve to the same slug `{slug}`")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("invalid include pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("content directory {0:?} does not exist")]
    MissingContentDir(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
