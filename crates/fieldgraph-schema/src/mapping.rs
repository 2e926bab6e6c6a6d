use crate::{node::ValidateNode, prelude::*};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error as ThisError;

///
/// MappingError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum MappingError {
    #[error("no identifier mapped for '{entity}.{field}'")]
    UnknownProperty { entity: String, field: String },

    #[error("no identifier mapping for entity type '{0}'")]
    UnknownType(String),
}

///
/// TypeMapping
///
/// Store identifiers for one entity type: one or more equivalent type ids,
/// plus one property id per local field name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMapping {
    pub type_ids: Vec<Id>,

    #[serde(default)]
    pub properties: BTreeMap<String, Id>,
}

impl TypeMapping {
    #[must_use]
    pub fn new(type_ids: impl IntoIterator<Item = Id>) -> Self {
        Self {
            type_ids: type_ids.into_iter().collect(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, field: impl Into<String>, id: Id) -> Self {
        self.properties.insert(field.into(), id);
        self
    }

    #[must_use]
    pub fn property(&self, field: &str) -> Option<Id> {
        self.properties.get(field).copied()
    }

    #[must_use]
    pub fn primary_type_id(&self) -> Option<Id> {
        self.type_ids.first().copied()
    }
}

impl ValidateNode for TypeMapping {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.type_ids.is_empty() {
            err!(errs, "typeIds must not be empty");
        }

        let mut seen = BTreeSet::new();
        for id in &self.type_ids {
            if id.is_nil() {
                err!(errs, "type id must not be nil");
            }
            if !seen.insert(*id) {
                err!(errs, "type id '{id}' is listed more than once");
            }
        }

        for (field, id) in &self.properties {
            if id.is_nil() {
                errs.add_for(field, "property id must not be nil");
            }
        }

        errs.result()
    }
}

///
/// Mapping
///
/// Entity type name to `TypeMapping`. Built once, then only read.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    types: BTreeMap<String, TypeMapping>,
}

impl Mapping {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, entity: impl Into<String>, mapping: TypeMapping) -> Self {
        self.insert(entity, mapping);
        self
    }

    /// Insert or replace the mapping for an entity type.
    pub fn insert(&mut self, entity: impl Into<String>, mapping: TypeMapping) -> Option<TypeMapping> {
        self.types.insert(entity.into(), mapping)
    }

    #[must_use]
    pub fn get(&self, entity: &str) -> Option<&TypeMapping> {
        self.types.get(entity)
    }

    pub fn try_get(&self, entity: &str) -> Result<&TypeMapping, MappingError> {
        self.get(entity)
            .ok_or_else(|| MappingError::UnknownType(entity.to_string()))
    }

    /// Property id for `entity.field`, straight from the table.
    pub fn property(&self, entity: &str, field: &str) -> Result<Id, MappingError> {
        self.try_get(entity)?
            .property(field)
            .ok_or_else(|| MappingError::UnknownProperty {
                entity: entity.to_string(),
                field: field.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeMapping)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE: Id = Id::from_u128(0x37d2167f_b64a_4b68_be26_55b3608050e7);
    const NAME: Id = Id::from_u128(0xa126ca53_0c8e_48d5_b888_82c734c38935);

    fn mapping() -> Mapping {
        Mapping::new().with_type(
            "AcademicField",
            TypeMapping::new([TYPE]).with_property("name", NAME),
        )
    }

    #[test]
    fn property_lookup() {
        let mapping = mapping();

        assert_eq!(mapping.property("AcademicField", "name"), Ok(NAME));
        assert_eq!(
            mapping.property("AcademicField", "title"),
            Err(MappingError::UnknownProperty {
                entity: "AcademicField".to_string(),
                field: "title".to_string(),
            })
        );
        assert_eq!(
            mapping.property("Project", "name"),
            Err(MappingError::UnknownType("Project".to_string()))
        );
    }

    #[test]
    fn json_shape_matches_store_contract() {
        let json = serde_json::to_value(mapping()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "AcademicField": {
                    "typeIds": ["37d2167f-b64a-4b68-be26-55b3608050e7"],
                    "properties": { "name": "a126ca53-0c8e-48d5-b888-82c734c38935" }
                }
            })
        );
    }

    #[test]
    fn empty_and_repeated_type_ids_fail_validation() {
        let errs = TypeMapping::default().validate().unwrap_err();
        assert!(errs.contains("", "typeIds must not be empty"));

        let errs = TypeMapping::new([TYPE, TYPE]).validate().unwrap_err();
        assert!(errs.contains("", "listed more than once"));
    }

    #[test]
    fn nil_property_id_fails_validation() {
        let errs = TypeMapping::new([TYPE])
            .with_property("name", Id::from_u128(0))
            .validate()
            .unwrap_err();

        assert!(errs.contains("name", "must not be nil"));
    }
}
