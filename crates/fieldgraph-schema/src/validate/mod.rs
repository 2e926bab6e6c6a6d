//! Schema/mapping consistency checks.

pub mod coverage;
pub mod identity;
pub mod naming;

pub use coverage::{Drift, find_drift};

use crate::{
    error::ErrorTree,
    mapping::Mapping,
    node::{Schema, ValidateNode},
};

/// Run full validation in a staged, deterministic order.
pub fn validate(schema: &Schema, mapping: &Mapping) -> Result<(), ErrorTree> {
    // Phase 1: validate each declaration on its own.
    let mut errors = validate_nodes(schema, mapping);

    // Phase 2: invariants that need both sides in view.
    validate_global(schema, mapping, &mut errors);

    errors.result()
}

// Local invariants, routed by entity name.
fn validate_nodes(schema: &Schema, mapping: &Mapping) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for shape in schema.entities() {
        if let Err(e) = shape.validate() {
            errors.merge_for(shape.name, e);
        }
    }

    for (entity, type_mapping) in mapping.iter() {
        if let Err(e) = type_mapping.validate() {
            errors.merge_for(entity, e);
        }
    }

    errors
}

fn validate_global(schema: &Schema, mapping: &Mapping, errors: &mut ErrorTree) {
    coverage::validate_coverage(schema, mapping, errors);
    identity::validate_identifiers(mapping, errors);
}
