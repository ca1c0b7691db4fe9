use crate::error::ParseError;
use crate::model::{MappingFile, PropertyDef, PropertySet};
use crate::parser::line::{classify_line, MappingLine};
use std::collections::HashSet;
use std::path::Path;

/// Parses a property mapping file from disk.
///
/// The file is line-oriented UTF-8 with tab-separated fields. Extracts:
/// - Property set declarations (name, Instance/Type applicability,
///   applicable element categories)
/// - Property declarations (name, IFC data type, optional source alias)
///
/// Loading stops at the first violation; there is no partial recovery, the
/// caller either gets the whole model or an error with line context.
///
/// # Arguments
///
/// * `path` - Path to the mapping file
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read.
/// Returns [`ParseError::MalformedMapping`], [`ParseError::InvalidDataType`],
/// [`ParseError::DuplicatePropertyName`] or
/// [`ParseError::DuplicatePropertySetName`] for format violations.
///
/// # Example
///
/// ```no_run
/// use pset_inspector::parser::parse_mapping_file;
///
/// let mapping = parse_mapping_file("revit_mapping.txt")?;
/// for set in &mapping.sets {
///     println!("{}: {} properties", set.name, set.properties.len());
/// }
/// # Ok::<(), pset_inspector::error::ParseError>(())
/// ```
pub fn parse_mapping_file<P: AsRef<Path>>(path: P) -> Result<MappingFile, ParseError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    let mut mapping = parse_mapping(&content)?;
    mapping.file_path = path.as_ref().to_string_lossy().to_string();

    Ok(mapping)
}

/// Parses mapping text into an ordered model.
///
/// Parser state is the set currently being filled: a property line outside
/// any set is a structural error, a new set header closes the previous set.
pub fn parse_mapping(content: &str) -> Result<MappingFile, ParseError> {
    let mut mapping = MappingFile::new(String::new());
    let mut seen_sets: HashSet<String> = HashSet::new();
    let mut current: Option<(PropertySet, HashSet<String>)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;

        match classify_line(raw, line_no)? {
            None => {}
            Some(MappingLine::SetHeader {
                name,
                applicability,
                categories,
            }) => {
                if !seen_sets.insert(name.clone()) {
                    return Err(ParseError::DuplicatePropertySetName { line: line_no, name });
                }

                if let Some((finished, _)) = current.take() {
                    mapping.sets.push(finished);
                }

                current = Some((
                    PropertySet {
                        name,
                        applicability,
                        categories,
                        properties: Vec::new(),
                    },
                    HashSet::new(),
                ));
            }
            Some(MappingLine::Property {
                name,
                data_type,
                alias,
            }) => match current.as_mut() {
                None => {
                    return Err(ParseError::MalformedMapping {
                        line: line_no,
                        message: format!("property '{name}' declared before any PropertySet: line"),
                    });
                }
                Some((set, seen_props)) => {
                    if !seen_props.insert(name.clone()) {
                        return Err(ParseError::DuplicatePropertyName {
                            line: line_no,
                            set: set.name.clone(),
                            name,
                        });
                    }

                    set.properties.push(PropertyDef {
                        name,
                        data_type,
                        alias,
                    });
                }
            },
        }
    }

    if let Some((finished, _)) = current.take() {
        mapping.sets.push(finished);
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Applicability, IfcDataType};
    use pretty_assertions::assert_eq;

    #[test]
    fn single_set_with_aliased_property() {
        let content = "PropertySet:\tRevit_mapping\tI\tIfcElement\n\tCategory\tText\tКатегория\n";
        let mapping = parse_mapping(content).unwrap();

        assert_eq!(
            mapping,
            MappingFile {
                file_path: String::new(),
                sets: vec![PropertySet {
                    name: "Revit_mapping".to_string(),
                    applicability: Applicability::Instance,
                    categories: vec!["IfcElement".to_string()],
                    properties: vec![PropertyDef {
                        name: "Category".to_string(),
                        data_type: IfcDataType::Text,
                        alias: Some("Категория".to_string()),
                    }],
                }],
            }
        );
    }

    #[test]
    fn set_and_property_counts_follow_the_file() {
        let content = "\
# Revit user defined psets
PropertySet:\tPset_Walls\tI\tIfcWall
\tLevel\tLength
\tIsExternal\tBoolean

# type-level data
PropertySet:\tPset_WallTypes\tT\tIfcWall
\tFireRating\tLabel\tОгнестойкость
";
        let mapping = parse_mapping(content).unwrap();

        assert_eq!(mapping.total_sets(), 2);
        assert_eq!(mapping.sets[0].properties.len(), 2);
        assert_eq!(mapping.sets[1].properties.len(), 1);
        assert_eq!(mapping.sets[0].name, "Pset_Walls");
        assert_eq!(mapping.sets[1].applicability, Applicability::Type);
    }

    #[test]
    fn property_without_alias_resolves_to_its_name() {
        let content = "PropertySet:\tPset\tI\tIfcWall\n\tLevel\tLength\n";
        let mapping = parse_mapping(content).unwrap();

        assert_eq!(mapping.sets[0].properties[0].source_field(), "Level");
    }

    #[test]
    fn property_before_any_set_is_malformed() {
        let err = parse_mapping("\tLevel\tLength\n").unwrap_err();
        match err {
            ParseError::MalformedMapping { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_set_name_is_rejected() {
        let content = "\
PropertySet:\tPset\tI\tIfcWall
\tLevel\tLength
PropertySet:\tPset\tT\tIfcDoor
";
        let err = parse_mapping(content).unwrap_err();
        match err {
            ParseError::DuplicatePropertySetName { line, name } => {
                assert_eq!(line, 3);
                assert_eq!(name, "Pset");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_property_name_within_a_set_is_rejected() {
        let content = "\
PropertySet:\tPset\tI\tIfcWall
\tLevel\tLength
\tLevel\tText
";
        let err = parse_mapping(content).unwrap_err();
        match err {
            ParseError::DuplicatePropertyName { line, set, name } => {
                assert_eq!(line, 3);
                assert_eq!(set, "Pset");
                assert_eq!(name, "Level");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn same_property_name_in_different_sets_is_fine() {
        let content = "\
PropertySet:\tA\tI\tIfcWall
\tLevel\tLength
PropertySet:\tB\tI\tIfcDoor
\tLevel\tLength
";
        let mapping = parse_mapping(content).unwrap();
        assert_eq!(mapping.total_properties(), 2);
    }

    #[test]
    fn invalid_data_type_reports_its_line() {
        let content = "\
PropertySet:\tPset\tI\tIfcWall
\tLevel\tLength
\tFoo\tBogusType
";
        let err = parse_mapping(content).unwrap_err();
        match err {
            ParseError::InvalidDataType { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "BogusType");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_model() {
        let mapping = parse_mapping("# only comments\n\n").unwrap();
        assert_eq!(mapping.total_sets(), 0);
        assert_eq!(mapping.total_properties(), 0);
    }

    #[test]
    fn missing_file_reports_file_read() {
        let err = parse_mapping_file("/nonexistent/revit_mapping.txt").unwrap_err();
        assert!(matches!(err, ParseError::FileRead { .. }));
    }
}
