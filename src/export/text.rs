use crate::error::ExportError;
use crate::model::MappingFile;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serialize a model back to the native tab-separated mapping format.
///
/// Output is deterministic: sets and properties come out in model order,
/// property lines get the canonical leading tab, comments and blank lines
/// from the source are not reproduced.
#[must_use]
pub fn mapping_to_string(mapping: &MappingFile) -> String {
    let mut out = String::new();

    for set in &mapping.sets {
        out.push_str(&format!(
            "PropertySet:\t{}\t{}\t{}\n",
            set.name,
            set.applicability.code(),
            set.categories.join(",")
        ));

        for property in &set.properties {
            match &property.alias {
                Some(alias) => out.push_str(&format!(
                    "\t{}\t{}\t{}\n",
                    property.name,
                    property.data_type.as_str(),
                    alias
                )),
                None => out.push_str(&format!(
                    "\t{}\t{}\n",
                    property.name,
                    property.data_type.as_str()
                )),
            }
        }
    }

    out
}

pub fn export_text<P: AsRef<Path>>(mapping: &MappingFile, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(mapping_to_string(mapping).as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_mapping;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_canonical_lines() {
        let content = "PropertySet:\tPset\tI\tIfcWall,IfcDoor\n\tCategory\tText\tКатегория\n\tLevel\tLength\n";
        let mapping = parse_mapping(content).unwrap();

        assert_eq!(mapping_to_string(&mapping), content);
    }

    #[test]
    fn round_trip_preserves_the_model() {
        let content = "\
# comment noise should not matter
PropertySet:\tPset_Walls\tinstance\tIfcWall

\tLevel\tLength
\tComments\ttext\tПримечания
PropertySet:\tPset_WallTypes\tT\tIfcWall
\tFireRating\tLabel
";
        let parsed = parse_mapping(content).unwrap();
        let reparsed = parse_mapping(&mapping_to_string(&parsed)).unwrap();

        assert_eq!(reparsed.sets, parsed.sets);
    }
}
