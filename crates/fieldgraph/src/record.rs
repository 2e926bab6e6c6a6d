use crate::{
    entity::EntityKind,
    schema::{
        id::Id,
        registry::{Registry, ResolveError},
        types::Primitive,
    },
    value::{FieldValues, Value},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RecordError
///

#[derive(Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum RecordError {
    #[error("field '{entity}.{field}' holds {found}, expected {expected}")]
    KindMismatch {
        entity: String,
        field: String,
        expected: Primitive,
        found: Primitive,
    },

    #[error("record has no value for '{entity}.{field}'")]
    MissingValue { entity: String, field: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("record '{id}' is not of entity type '{entity}'")]
    TypeMismatch { entity: String, id: Id },
}

///
/// Record
///
/// Store-facing form of an entity: its id, type ids and values keyed by
/// property id. Local field names never reach the store.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Id,
    pub type_ids: Vec<Id>,
    pub values: BTreeMap<Id, Value>,
}

impl Record {
    /// Translate a typed entity into property-id space. Only the primary
    /// type id is written.
    pub fn encode<E: EntityKind>(entity: &E, registry: &Registry) -> Result<Self, RecordError> {
        let resolved = registry.resolve_entity(E::ENTITY)?;

        let mut values = BTreeMap::new();
        for (field, value) in entity.to_values() {
            values.insert(resolved.field_id(field)?, value);
        }

        Ok(Self {
            id: entity.id(),
            type_ids: vec![resolved.primary_type_id()],
            values,
        })
    }

    /// Translate back into a typed entity. The record must carry at least
    /// one of the entity's type ids.
    pub fn decode<E: EntityKind>(&self, registry: &Registry) -> Result<E, RecordError> {
        let resolved = registry.resolve_entity(E::ENTITY)?;

        if !self.has_any_type(resolved.type_ids()) {
            return Err(RecordError::TypeMismatch {
                entity: E::ENTITY.to_string(),
                id: self.id,
            });
        }

        let mut fields = FieldValues::new(E::ENTITY);
        for field in E::SHAPE.fields {
            let property = resolved.field_id(field.ident)?;
            if let Some(value) = self.values.get(&property) {
                fields.insert(field.ident, value.clone());
            }
        }

        E::from_values(self.id, &fields)
    }

    #[must_use]
    pub fn has_type(&self, type_id: Id) -> bool {
        self.type_ids.contains(&type_id)
    }

    /// Does the record carry any of `type_ids`?
    #[must_use]
    pub fn has_any_type(&self, type_ids: &[Id]) -> bool {
        type_ids.iter().any(|id| self.has_type(*id))
    }
}
