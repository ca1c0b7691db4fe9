use crate::error::ExportError;
use crate::model::MappingFile;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(mapping: &MappingFile, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Property Set",
        "Applicability",
        "Categories",
        "Property",
        "Data Type",
        "Source Field",
    ])?;

    for set in &mapping.sets {
        for property in &set.properties {
            writer.write_record([
                set.name.as_str(),
                set.applicability.label(),
                &set.categories.join(","),
                &property.name,
                property.data_type.as_str(),
                property.source_field(),
            ])?;
        }
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
