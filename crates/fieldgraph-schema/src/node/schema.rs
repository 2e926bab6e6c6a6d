use crate::{node::NodeError, prelude::*};
use std::collections::BTreeMap;

///
/// Schema
///
/// Every entity shape the application works with, keyed by entity name.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    entities: BTreeMap<&'static str, EntityShape>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
        }
    }

    /// Build a schema from a list of shapes, rejecting duplicate names.
    pub fn from_entities(
        shapes: impl IntoIterator<Item = EntityShape>,
    ) -> Result<Self, NodeError> {
        let mut schema = Self::new();
        for shape in shapes {
            schema.insert_entity(shape)?;
        }

        Ok(schema)
    }

    pub fn insert_entity(&mut self, shape: EntityShape) -> Result<(), NodeError> {
        if self.entities.contains_key(shape.name) {
            return Err(NodeError::DuplicateEntity(shape.name.to_string()));
        }
        self.entities.insert(shape.name, shape);

        Ok(())
    }

    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntityShape> {
        self.entities.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityShape> {
        self.entities.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
