//! # Pset Inspector
//!
//! A terminal-based inspector for Revit-to-IFC property mapping files.
//!
//! ## Features
//!
//! - Parse tab-separated property mapping files (user-defined Psets)
//! - Validate set structure, data types and name uniqueness
//! - Resolve properties per element category and applicability mode
//! - Export to CSV and JSON, re-serialize to the native format
//!
//! ## Example
//!
//! ```no_run
//! use pset_inspector::parser::parse_mapping_file;
//!
//! let mapping = parse_mapping_file("revit_mapping.txt").expect("Failed to parse");
//! println!("File: {}", mapping.file_path);
//! println!("Sets: {}", mapping.total_sets());
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod ui;
