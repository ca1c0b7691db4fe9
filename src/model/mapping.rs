use super::{Applicability, IfcDataType, PropertySet};
use serde::Serialize;
use std::collections::HashSet;

/// A fully loaded property mapping file.
///
/// Sets keep the order they have in the file; the whole model is rebuilt
/// from scratch on every load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingFile {
    pub file_path: String,
    pub sets: Vec<PropertySet>,
}

/// One property to populate for a concrete category/mode query, with the
/// source field already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProperty {
    pub set: String,
    pub name: String,
    pub data_type: IfcDataType,
    pub source_field: String,
}

impl MappingFile {
    #[must_use]
    pub fn new(file_path: String) -> Self {
        Self {
            file_path,
            sets: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn total_properties(&self) -> usize {
        self.sets.iter().map(|s| s.properties.len()).sum()
    }

    /// Distinct categories across all sets, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut result = Vec::new();
        for set in &self.sets {
            for category in &set.categories {
                if seen.insert(category) {
                    result.push(category.clone());
                }
            }
        }
        result
    }

    /// Sets matching an optional applicability filter (None = all).
    #[must_use]
    pub fn sets_for(&self, filter: Option<Applicability>) -> Vec<&PropertySet> {
        self.sets
            .iter()
            .filter(|s| filter.is_none_or(|mode| s.applicability == mode))
            .collect()
    }

    /// Properties to populate for one element category in one mode.
    ///
    /// Walks sets in file order, keeps those applicable to the category and
    /// mode, and resolves each property to its effective source field.
    /// Reading actual field values off a Revit element is the export
    /// pipeline's job, not this model's.
    ///
    /// # Example
    ///
    /// ```
    /// use pset_inspector::model::Applicability;
    /// use pset_inspector::parser::parse_mapping;
    ///
    /// let mapping = parse_mapping("PropertySet:\tPset_Doors\tI\tIfcDoor\n\tFireRating\tLabel\n")?;
    /// let resolved = mapping.resolve("IfcDoor", Applicability::Instance);
    /// assert_eq!(resolved.len(), 1);
    /// assert_eq!(resolved[0].source_field, "FireRating");
    /// # Ok::<(), pset_inspector::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, category: &str, applicability: Applicability) -> Vec<ResolvedProperty> {
        self.sets
            .iter()
            .filter(|s| s.applies_to(category, applicability))
            .flat_map(|s| {
                s.properties.iter().map(|p| ResolvedProperty {
                    set: s.name.clone(),
                    name: p.name.clone(),
                    data_type: p.data_type,
                    source_field: p.source_field().to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyDef;
    use pretty_assertions::assert_eq;

    fn sample() -> MappingFile {
        MappingFile {
            file_path: String::new(),
            sets: vec![
                PropertySet {
                    name: "Pset_Common".to_string(),
                    applicability: Applicability::Instance,
                    categories: vec!["IfcWall".to_string(), "IfcDoor".to_string()],
                    properties: vec![
                        PropertyDef {
                            name: "Level".to_string(),
                            data_type: IfcDataType::Length,
                            alias: None,
                        },
                        PropertyDef {
                            name: "Comments".to_string(),
                            data_type: IfcDataType::Text,
                            alias: Some("Примечания".to_string()),
                        },
                    ],
                },
                PropertySet {
                    name: "Pset_WallType".to_string(),
                    applicability: Applicability::Type,
                    categories: vec!["IfcWall".to_string()],
                    properties: vec![PropertyDef {
                        name: "Width".to_string(),
                        data_type: IfcDataType::PositiveLength,
                        alias: None,
                    }],
                },
            ],
        }
    }

    #[test]
    fn counters_cover_all_sets() {
        let mapping = sample();
        assert_eq!(mapping.total_sets(), 2);
        assert_eq!(mapping.total_properties(), 3);
    }

    #[test]
    fn categories_are_deduplicated_in_file_order() {
        let mapping = sample();
        assert_eq!(
            mapping.categories(),
            vec!["IfcWall".to_string(), "IfcDoor".to_string()]
        );
    }

    #[test]
    fn sets_for_filters_by_mode() {
        let mapping = sample();
        assert_eq!(mapping.sets_for(None).len(), 2);

        let instance_sets = mapping.sets_for(Some(Applicability::Instance));
        assert_eq!(instance_sets.len(), 1);
        assert_eq!(instance_sets[0].name, "Pset_Common");
    }

    #[test]
    fn resolve_filters_by_category_and_mode() {
        let mapping = sample();

        let resolved = mapping.resolve("IfcWall", Applicability::Instance);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].set, "Pset_Common");
        assert_eq!(resolved[0].source_field, "Level");
        assert_eq!(resolved[1].source_field, "Примечания");

        let type_resolved = mapping.resolve("IfcWall", Applicability::Type);
        assert_eq!(type_resolved.len(), 1);
        assert_eq!(type_resolved[0].set, "Pset_WallType");

        assert!(mapping.resolve("IfcDoor", Applicability::Type).is_empty());
        assert!(mapping.resolve("IfcSlab", Applicability::Instance).is_empty());
    }
}
