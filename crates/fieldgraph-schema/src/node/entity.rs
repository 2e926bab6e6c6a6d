use crate::{prelude::*, validate::naming::validate_entity_name};
use std::collections::BTreeSet;

///
/// EntityShape
///
/// Logical shape of one entity type: its name and typed fields. Carries no
/// store identifiers; those live in the mapping and are linked by name.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct EntityShape {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl EntityShape {
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    #[must_use]
    pub fn field(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn has_field(&self, ident: &str) -> bool {
        self.field(ident).is_some()
    }

    pub fn field_idents(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.ident)
    }
}

impl ValidateNode for EntityShape {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(msg) = validate_entity_name(self.name) {
            errs.add(msg);
        }

        let mut seen = BTreeSet::new();
        for field in self.fields {
            if let Err(e) = field.validate() {
                errs.merge_for(field.ident, e);
            }
            if !seen.insert(field.ident) {
                err!(errs, "duplicate field '{}'", field.ident);
            }
        }

        errs.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: EntityShape =
        EntityShape::new("AcademicField", &[Field::text("name"), Field::text("description")]);

    #[test]
    fn field_lookup() {
        assert_eq!(SHAPE.field("name"), Some(&Field::text("name")));
        assert!(SHAPE.field("title").is_none());
        assert_eq!(
            SHAPE.field_idents().collect::<Vec<_>>(),
            vec!["name", "description"]
        );
    }

    #[test]
    fn valid_shape_passes() {
        assert!(SHAPE.validate().is_ok());
    }

    #[test]
    fn duplicate_and_bad_fields_are_reported_together() {
        const SHAPE: EntityShape = EntityShape::new(
            "Project",
            &[Field::text("name"), Field::text("name"), Field::text("")],
        );

        let errs = SHAPE.validate().unwrap_err();

        assert!(errs.contains("", "duplicate field 'name'"));
        assert!(errs.contains("", "field ident is empty"));
        assert_eq!(errs.len(), 2);
    }

    #[test]
    fn bad_entity_name_is_reported() {
        let shape = EntityShape::new("Academic Field", &[]);

        assert!(shape.validate().unwrap_err().contains("", "Academic Field"));
    }
}
