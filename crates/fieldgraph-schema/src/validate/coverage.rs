use crate::{error::ErrorTree, mapping::Mapping, node::Schema};
use std::fmt;

///
/// Drift
///
/// One disagreement between the schema and the identifier mapping.
///

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum Drift {
    /// Declared field with no property id.
    MissingProperty { entity: String, field: String },

    /// Declared entity with no mapping entry.
    MissingType { entity: String },

    /// Property id for a field the entity does not declare.
    OrphanProperty { entity: String, field: String },

    /// Mapping entry for an entity the schema does not declare.
    OrphanType { entity: String },
}

impl Drift {
    #[must_use]
    pub fn entity(&self) -> &str {
        match self {
            Self::MissingProperty { entity, .. }
            | Self::MissingType { entity }
            | Self::OrphanProperty { entity, .. }
            | Self::OrphanType { entity } => entity,
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingProperty { field, .. } | Self::OrphanProperty { field, .. } => {
                Some(field)
            }
            Self::MissingType { .. } | Self::OrphanType { .. } => None,
        }
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProperty { field, .. } => {
                write!(f, "declared field '{field}' has no mapped identifier")
            }
            Self::MissingType { .. } => write!(f, "declared entity has no identifier mapping"),
            Self::OrphanProperty { field, .. } => {
                write!(f, "mapped field '{field}' is not declared on the entity")
            }
            Self::OrphanType { .. } => write!(f, "mapped entity type is not declared in the schema"),
        }
    }
}

/// Every coverage disagreement in both directions, in a stable order.
#[must_use]
pub fn find_drift(schema: &Schema, mapping: &Mapping) -> Vec<Drift> {
    let mut drift = Vec::new();

    // schema -> mapping
    for shape in schema.entities() {
        let Some(type_mapping) = mapping.get(shape.name) else {
            drift.push(Drift::MissingType {
                entity: shape.name.to_string(),
            });
            continue;
        };

        for field in shape.fields {
            if type_mapping.property(field.ident).is_none() {
                drift.push(Drift::MissingProperty {
                    entity: shape.name.to_string(),
                    field: field.ident.to_string(),
                });
            }
        }

        for field in type_mapping.properties.keys() {
            if !shape.has_field(field) {
                drift.push(Drift::OrphanProperty {
                    entity: shape.name.to_string(),
                    field: field.clone(),
                });
            }
        }
    }

    // mapping -> schema
    for entity in mapping.type_names() {
        if !schema.contains(entity) {
            drift.push(Drift::OrphanType {
                entity: entity.to_string(),
            });
        }
    }

    drift.sort();
    drift
}

pub fn validate_coverage(schema: &Schema, mapping: &Mapping, errs: &mut ErrorTree) {
    for drift in find_drift(schema, mapping) {
        errs.add_for(drift.entity(), &drift);
    }
}
