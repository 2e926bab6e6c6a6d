use crate::{
    Error,
    prelude::*,
    validate::{Drift, find_drift, validate},
};
use thiserror::Error as ThisError;

///
/// ResolveError
///
/// Raised where a local name is turned into a store identifier and the
/// schema or mapping cannot back it.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ResolveError {
    #[error("field '{entity}.{field}' is declared but has no mapped identifier")]
    MissingField { entity: String, field: String },

    #[error("entity type '{0}' is declared but has no mapped type id")]
    MissingType(String),

    #[error("field '{field}' is not declared on entity type '{entity}'")]
    UndeclaredField { entity: String, field: String },

    #[error("entity type '{0}' is not declared")]
    UnknownEntity(String),
}

///
/// Resolver
///
/// Schema-aware name resolution over a borrowed schema + mapping pair.
/// Names must be declared in the schema before the mapping is consulted,
/// so a stale mapping entry for an undeclared field never resolves.
///

#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    schema: &'a Schema,
    mapping: &'a Mapping,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(schema: &'a Schema, mapping: &'a Mapping) -> Self {
        Self { schema, mapping }
    }

    pub fn resolve_entity(&self, entity: &str) -> Result<ResolvedEntity<'a>, ResolveError> {
        let shape = self
            .schema
            .entity(entity)
            .ok_or_else(|| ResolveError::UnknownEntity(entity.to_string()))?;

        let mapping = self
            .mapping
            .get(entity)
            .ok_or_else(|| ResolveError::MissingType(entity.to_string()))?;
        let primary = mapping
            .primary_type_id()
            .ok_or_else(|| ResolveError::MissingType(entity.to_string()))?;

        Ok(ResolvedEntity {
            shape,
            mapping,
            primary,
        })
    }

    pub fn resolve_field(&self, entity: &str, field: &str) -> Result<Id, ResolveError> {
        self.resolve_entity(entity)?.field_id(field)
    }

    /// All drift between the two declarations, without failing.
    #[must_use]
    pub fn check_consistency(&self) -> Vec<Drift> {
        find_drift(self.schema, self.mapping)
    }
}

///
/// ResolvedEntity
///

#[derive(Clone, Copy, Debug)]
pub struct ResolvedEntity<'a> {
    pub shape: &'a EntityShape,
    pub mapping: &'a TypeMapping,
    primary: Id,
}

impl ResolvedEntity<'_> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.shape.name
    }

    #[must_use]
    pub const fn primary_type_id(&self) -> Id {
        self.primary
    }

    #[must_use]
    pub fn type_ids(&self) -> &[Id] {
        &self.mapping.type_ids
    }

    pub fn field_id(&self, field: &str) -> Result<Id, ResolveError> {
        if !self.shape.has_field(field) {
            return Err(ResolveError::UndeclaredField {
                entity: self.shape.name.to_string(),
                field: field.to_string(),
            });
        }

        self.mapping
            .property(field)
            .ok_or_else(|| ResolveError::MissingField {
                entity: self.shape.name.to_string(),
                field: field.to_string(),
            })
    }

    /// Declared fields paired with their property ids.
    pub fn fields(&self) -> impl Iterator<Item = Result<(&Field, Id), ResolveError>> + '_ {
        self.shape
            .fields
            .iter()
            .map(move |f| self.field_id(f.ident).map(|id| (f, id)))
    }
}

///
/// Registry
///
/// The validated schema + mapping pair. Built once at start-up, then handed
/// out by reference to everything that resolves names.
///

#[derive(Clone, Debug)]
pub struct Registry {
    schema: Schema,
    mapping: Mapping,
}

impl Registry {
    pub fn new(schema: Schema, mapping: Mapping) -> Result<Self, Error> {
        validate(&schema, &mapping).map_err(Error::Validation)?;

        Ok(Self { schema, mapping })
    }

    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub const fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    #[must_use]
    pub const fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.schema, &self.mapping)
    }

    pub fn resolve_entity(&self, entity: &str) -> Result<ResolvedEntity<'_>, ResolveError> {
        self.resolver().resolve_entity(entity)
    }

    pub fn resolve_field(&self, entity: &str, field: &str) -> Result<Id, ResolveError> {
        self.resolver().resolve_field(entity, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE: Id = Id::from_u128(0x37d2167f_b64a_4b68_be26_55b3608050e7);
    const NAME: Id = Id::from_u128(0xa126ca53_0c8e_48d5_b888_82c734c38935);
    const ALT_TYPE: Id = Id::from_u128(0x5c2f1a7e_6b0d_4c59_9e3a_0d1f2b3c4d5e);

    const FIELD: EntityShape = EntityShape::new("AcademicField", &[Field::text("name")]);

    fn schema() -> Schema {
        Schema::from_entities([FIELD]).unwrap()
    }

    #[test]
    fn registry_rejects_drift() {
        let mapping = Mapping::new().with_type("AcademicField", TypeMapping::new([TYPE]));

        match Registry::new(schema(), mapping) {
            Err(Error::Validation(errs)) => {
                assert!(errs.contains("AcademicField", "'name' has no mapped identifier"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn resolves_equivalent_type_ids_in_order() {
        let mapping = Mapping::new().with_type(
            "AcademicField",
            TypeMapping::new([TYPE, ALT_TYPE]).with_property("name", NAME),
        );
        let registry = Registry::new(schema(), mapping).unwrap();

        let resolved = registry.resolve_entity("AcademicField").unwrap();

        assert_eq!(resolved.name(), "AcademicField");
        assert_eq!(resolved.primary_type_id(), TYPE);
        assert_eq!(resolved.type_ids(), &[TYPE, ALT_TYPE]);
        assert_eq!(
            resolved.fields().collect::<Result<Vec<_>, _>>().unwrap(),
            vec![(&Field::text("name"), NAME)]
        );
    }

    #[test]
    fn unvalidated_resolver_reports_each_failure_kind() {
        let schema = schema();
        let empty = Mapping::new();
        let resolver = Resolver::new(&schema, &empty);

        assert_eq!(
            resolver.resolve_entity("Project").unwrap_err(),
            ResolveError::UnknownEntity("Project".to_string())
        );
        assert_eq!(
            resolver.resolve_entity("AcademicField").unwrap_err(),
            ResolveError::MissingType("AcademicField".to_string())
        );

        let partial = Mapping::new().with_type("AcademicField", TypeMapping::new([TYPE]));
        let resolver = Resolver::new(&schema, &partial);

        assert_eq!(
            resolver.resolve_field("AcademicField", "name"),
            Err(ResolveError::MissingField {
                entity: "AcademicField".to_string(),
                field: "name".to_string(),
            })
        );
        assert_eq!(resolver.check_consistency().len(), 1);
    }
}
