//! Error types for Pset Inspector.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a property mapping file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the mapping file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The line structure violates the mapping format.
    #[error("line {line}: malformed mapping: {message}")]
    MalformedMapping { line: usize, message: String },

    /// A property declares a data type outside the fixed IFC set.
    #[error("line {line}: unknown data type '{token}'")]
    InvalidDataType { line: usize, token: String },

    /// Two properties in the same set share a name.
    #[error("line {line}: duplicate property '{name}' in set '{set}'")]
    DuplicatePropertyName {
        line: usize,
        set: String,
        name: String,
    },

    /// Two property sets in the same file share a name.
    #[error("line {line}: duplicate property set '{name}'")]
    DuplicatePropertySetName { line: usize, name: String },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
