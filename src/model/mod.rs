pub mod data_type;
pub mod mapping;
pub mod property;
pub mod property_set;

pub use data_type::IfcDataType;
pub use mapping::{MappingFile, ResolvedProperty};
pub use property::PropertyDef;
pub use property_set::{Applicability, PropertySet};
