//! Built-in entity declarations and their store identifiers.

use crate::{
    entity,
    schema::{
        self,
        id::Id,
        mapping::{Mapping, TypeMapping},
        node::{NodeError, Schema},
        registry::Registry,
    },
};

entity! {
    /// An academic discipline.
    pub struct AcademicField {
        name: Text,
        description: Text,
    }
}

impl AcademicField {
    pub const DEFAULT_DESCRIPTION: &'static str = "Beautiful academicField";

    /// New field with a fresh id and the default description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::generate(),
            name: name.into(),
            description: Self::DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

entity! {
    pub struct Project {
        name: Text,
    }
}

impl Project {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::generate(),
            name: name.into(),
        }
    }
}

//
// Identifiers
// changing any of these breaks compatibility with stored data
//

pub const ACADEMIC_FIELD_TYPE: Id = Id::from_u128(0x37d2167f_b64a_4b68_be26_55b3608050e7);
pub const ACADEMIC_FIELD_NAME: Id = Id::from_u128(0xa126ca53_0c8e_48d5_b888_82c734c38935);
pub const ACADEMIC_FIELD_DESCRIPTION: Id = Id::from_u128(0x9b1f76ff_9711_404c_861e_59dc3fa7d037);

// TODO: replace with the published Project type and property ids once the
// public space schema is registered; these are placeholders.
pub const PROJECT_TYPE: Id = Id::from_u128(0x12345678_1234_4567_8901_123456789012);
pub const PROJECT_NAME: Id = Id::from_u128(0x87654321_4321_4567_8901_210987654321);

/// Every built-in entity shape.
pub fn schema() -> Result<Schema, NodeError> {
    use crate::entity::EntityKind;

    Schema::from_entities([AcademicField::SHAPE, Project::SHAPE])
}

/// The built-in identifier mapping.
#[must_use]
pub fn mapping() -> Mapping {
    Mapping::new()
        .with_type(
            "AcademicField",
            TypeMapping::new([ACADEMIC_FIELD_TYPE])
                .with_property("name", ACADEMIC_FIELD_NAME)
                .with_property("description", ACADEMIC_FIELD_DESCRIPTION),
        )
        .with_type(
            "Project",
            TypeMapping::new([PROJECT_TYPE]).with_property("name", PROJECT_NAME),
        )
}

/// Validated registry over the built-in schema and mapping.
pub fn registry() -> Result<Registry, schema::Error> {
    Registry::new(schema()?, mapping())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;

    #[test]
    fn built_in_declarations_are_consistent() {
        let registry = registry().unwrap();

        assert!(registry.resolver().check_consistency().is_empty());
        assert_eq!(registry.schema().len(), 2);
    }

    #[test]
    fn shapes_match_entity_structs() {
        assert_eq!(
            AcademicField::SHAPE.field_idents().collect::<Vec<_>>(),
            vec!["name", "description"]
        );
        assert_eq!(
            Project::SHAPE.field_idents().collect::<Vec<_>>(),
            vec!["name"]
        );
    }

    #[test]
    fn new_academic_field_has_default_description() {
        let field = AcademicField::new("History");

        assert_eq!(field.name, "History");
        assert_eq!(field.description, "Beautiful academicField");
        assert!(!field.id.is_nil());
    }
}
