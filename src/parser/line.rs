use crate::error::ParseError;
use crate::model::{Applicability, IfcDataType};

/// Marker token opening a set declaration line.
pub const SET_MARKER: &str = "PropertySet:";

/// One meaningful line of a mapping file.
///
/// The format has exactly two line shapes besides comments and blanks, so a
/// tagged variant per shape keeps the assembly loop a plain match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingLine {
    /// `PropertySet:\t<Name>\t<I|T>\t<Category1>,<Category2>,...`
    SetHeader {
        name: String,
        applicability: Applicability,
        categories: Vec<String>,
    },
    /// `\t<PropertyName>\t<DataType>\t[<SourceAlias>]`
    Property {
        name: String,
        data_type: IfcDataType,
        alias: Option<String>,
    },
}

/// Classify one raw line.
///
/// Returns `None` for blank lines and `#` comments (leading whitespace
/// allowed). Field separator is a tab; the leading tab of a property line is
/// presentation and carries no data. There is no escaping mechanism, so an
/// empty field produced by splitting is a structural error, not a quoted
/// value.
pub fn classify_line(raw: &str, line_no: usize) -> Result<Option<MappingLine>, ParseError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    if trimmed.starts_with(SET_MARKER) {
        return parse_set_header(trimmed, line_no).map(Some);
    }

    parse_property(trimmed, line_no).map(Some)
}

fn parse_set_header(line: &str, line_no: usize) -> Result<MappingLine, ParseError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

    if fields.len() != 4 {
        return Err(ParseError::MalformedMapping {
            line: line_no,
            message: format!(
                "set declaration has {} fields, expected 4 (marker, name, I|T, categories)",
                fields.len()
            ),
        });
    }

    if fields[0] != SET_MARKER {
        return Err(ParseError::MalformedMapping {
            line: line_no,
            message: format!("expected '{SET_MARKER}' marker, got '{}'", fields[0]),
        });
    }

    let name = fields[1];
    if name.is_empty() {
        return Err(ParseError::MalformedMapping {
            line: line_no,
            message: "empty property set name".to_string(),
        });
    }

    let applicability =
        Applicability::from_code(fields[2]).ok_or_else(|| ParseError::MalformedMapping {
            line: line_no,
            message: format!("applicability must be I or T, got '{}'", fields[2]),
        })?;

    let mut categories = Vec::new();
    for category in fields[3].split(',') {
        let category = category.trim();
        if category.is_empty() {
            return Err(ParseError::MalformedMapping {
                line: line_no,
                message: "empty category name in category list".to_string(),
            });
        }
        categories.push(category.to_string());
    }

    Ok(MappingLine::SetHeader {
        name: name.to_string(),
        applicability,
        categories,
    })
}

fn parse_property(line: &str, line_no: usize) -> Result<MappingLine, ParseError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

    if !(2..=3).contains(&fields.len()) {
        return Err(ParseError::MalformedMapping {
            line: line_no,
            message: format!(
                "property declaration has {} fields, expected 2-3 (name, type, optional alias)",
                fields.len()
            ),
        });
    }

    if fields.iter().any(|f| f.is_empty()) {
        return Err(ParseError::MalformedMapping {
            line: line_no,
            message: "empty field in property declaration".to_string(),
        });
    }

    let data_type =
        IfcDataType::from_token(fields[1]).ok_or_else(|| ParseError::InvalidDataType {
            line: line_no,
            token: fields[1].to_string(),
        })?;

    Ok(MappingLine::Property {
        name: fields[0].to_string(),
        data_type,
        alias: fields.get(2).map(|a| (*a).to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comments_and_blanks_are_skipped() {
        assert_eq!(classify_line("", 1).unwrap(), None);
        assert_eq!(classify_line("   \t ", 2).unwrap(), None);
        assert_eq!(classify_line("# user defined psets", 3).unwrap(), None);
        assert_eq!(classify_line("  # indented comment", 4).unwrap(), None);
    }

    #[test]
    fn set_header_line_is_classified() {
        let line = "PropertySet:\tRevit_mapping\tI\tIfcElement,IfcWall";
        assert_eq!(
            classify_line(line, 1).unwrap(),
            Some(MappingLine::SetHeader {
                name: "Revit_mapping".to_string(),
                applicability: Applicability::Instance,
                categories: vec!["IfcElement".to_string(), "IfcWall".to_string()],
            })
        );
    }

    #[test]
    fn property_line_keeps_optional_alias() {
        assert_eq!(
            classify_line("\tCategory\tText\tКатегория", 2).unwrap(),
            Some(MappingLine::Property {
                name: "Category".to_string(),
                data_type: IfcDataType::Text,
                alias: Some("Категория".to_string()),
            })
        );
        assert_eq!(
            classify_line("\tLevel\tLength", 3).unwrap(),
            Some(MappingLine::Property {
                name: "Level".to_string(),
                data_type: IfcDataType::Length,
                alias: None,
            })
        );
    }

    #[test]
    fn data_type_token_is_case_insensitive() {
        assert_eq!(
            classify_line("\tIsExternal\tBOOLEAN", 5).unwrap(),
            Some(MappingLine::Property {
                name: "IsExternal".to_string(),
                data_type: IfcDataType::Boolean,
                alias: None,
            })
        );
    }

    #[test]
    fn unknown_data_type_reports_line_and_token() {
        let err = classify_line("\tFoo\tBogusType", 7).unwrap_err();
        match err {
            ParseError::InvalidDataType { line, token } => {
                assert_eq!(line, 7);
                assert_eq!(token, "BogusType");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_field_counts_are_malformed() {
        assert!(matches!(
            classify_line("PropertySet:\tOnlyName\tI", 1),
            Err(ParseError::MalformedMapping { line: 1, .. })
        ));
        assert!(matches!(
            classify_line("\tNameOnly", 2),
            Err(ParseError::MalformedMapping { line: 2, .. })
        ));
        assert!(matches!(
            classify_line("\tName\tText\tAlias\tExtra", 3),
            Err(ParseError::MalformedMapping { line: 3, .. })
        ));
    }

    #[test]
    fn empty_fields_are_malformed() {
        // Doubled tab leaves an empty data type field
        assert!(matches!(
            classify_line("\tName\t\tAlias", 4),
            Err(ParseError::MalformedMapping { line: 4, .. })
        ));
        // Trailing comma leaves an empty category
        assert!(matches!(
            classify_line("PropertySet:\tPset\tI\tIfcWall,", 5),
            Err(ParseError::MalformedMapping { line: 5, .. })
        ));
    }

    #[test]
    fn bad_applicability_code_is_malformed() {
        assert!(matches!(
            classify_line("PropertySet:\tPset\tX\tIfcWall", 6),
            Err(ParseError::MalformedMapping { line: 6, .. })
        ));
    }
}
