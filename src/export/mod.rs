pub mod csv;
pub mod json;
pub mod text;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;
pub use text::{export_text, mapping_to_string};
