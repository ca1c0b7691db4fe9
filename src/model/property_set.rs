use super::PropertyDef;
use serde::Serialize;

/// Whether a property set attaches to element instances or to the element
/// type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Applicability {
    Instance,
    Type,
}

impl Applicability {
    /// Parse the applicability code from a set header.
    ///
    /// Accepts `I`/`T` and any longer case-insensitive prefix of
    /// "Instance"/"Type" (`inst`, `TYPE`, ...).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        if code.is_empty() {
            return None;
        }
        let lower = code.to_ascii_lowercase();
        if "instance".starts_with(&lower) {
            Some(Applicability::Instance)
        } else if "type".starts_with(&lower) {
            Some(Applicability::Type)
        } else {
            None
        }
    }

    /// One-letter code as written in mapping files.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Applicability::Instance => "I",
            Applicability::Type => "T",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Applicability::Instance => "Instance",
            Applicability::Type => "Type",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySet {
    pub name: String,
    pub applicability: Applicability,
    pub categories: Vec<String>,
    pub properties: Vec<PropertyDef>,
}

impl PropertySet {
    /// Whether this set should populate elements of the given category in
    /// the given mode.
    #[must_use]
    pub fn applies_to(&self, category: &str, applicability: Applicability) -> bool {
        self.applicability == applicability && self.categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applicability_codes_parse_by_prefix() {
        assert_eq!(Applicability::from_code("I"), Some(Applicability::Instance));
        assert_eq!(Applicability::from_code("i"), Some(Applicability::Instance));
        assert_eq!(
            Applicability::from_code("inst"),
            Some(Applicability::Instance)
        );
        assert_eq!(
            Applicability::from_code("Instance"),
            Some(Applicability::Instance)
        );
        assert_eq!(Applicability::from_code("T"), Some(Applicability::Type));
        assert_eq!(Applicability::from_code("TYPE"), Some(Applicability::Type));
    }

    #[test]
    fn applicability_rejects_unknown_codes() {
        assert_eq!(Applicability::from_code(""), None);
        assert_eq!(Applicability::from_code("X"), None);
        assert_eq!(Applicability::from_code("Instances"), None);
        assert_eq!(Applicability::from_code("typo"), None);
    }

    #[test]
    fn applies_to_checks_category_and_mode() {
        let set = PropertySet {
            name: "Pset_Walls".to_string(),
            applicability: Applicability::Instance,
            categories: vec!["IfcWall".to_string(), "IfcCurtainWall".to_string()],
            properties: Vec::new(),
        };

        assert!(set.applies_to("IfcWall", Applicability::Instance));
        assert!(set.applies_to("IfcCurtainWall", Applicability::Instance));
        assert!(!set.applies_to("IfcWall", Applicability::Type));
        assert!(!set.applies_to("IfcDoor", Applicability::Instance));
    }
}
