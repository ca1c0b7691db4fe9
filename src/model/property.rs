use super::IfcDataType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDef {
    pub name: String,
    pub data_type: IfcDataType,
    pub alias: Option<String>,
}

impl PropertyDef {
    /// The source field the exporter reads the value from: the alias when
    /// one is declared, otherwise the property name itself.
    #[must_use]
    pub fn source_field(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_field_falls_back_to_property_name() {
        let prop = PropertyDef {
            name: "Level".to_string(),
            data_type: IfcDataType::Length,
            alias: None,
        };
        assert_eq!(prop.source_field(), "Level");
    }

    #[test]
    fn source_field_prefers_alias() {
        let prop = PropertyDef {
            name: "Category".to_string(),
            data_type: IfcDataType::Text,
            alias: Some("Категория".to_string()),
        };
        assert_eq!(prop.source_field(), "Категория");
    }
}
