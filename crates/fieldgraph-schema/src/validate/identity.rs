use crate::{error::ErrorTree, id::Id, mapping::Mapping};
use std::collections::BTreeMap;

/// Identifier uniqueness across the mapping.
///
/// - property ids are unique within one entity type
/// - type ids are unique across all entity types
/// - no id serves as both a type id and a property id
pub fn validate_identifiers(mapping: &Mapping, errs: &mut ErrorTree) {
    let mut type_owners: BTreeMap<Id, &str> = BTreeMap::new();

    for (entity, type_mapping) in mapping.iter() {
        for id in &type_mapping.type_ids {
            match type_owners.get(id) {
                Some(prev) if *prev != entity => errs.add_for(
                    entity,
                    format!("type id '{id}' is already used by entity type '{prev}'"),
                ),
                Some(_) => {}
                None => {
                    type_owners.insert(*id, entity);
                }
            }
        }

        let mut property_owners: BTreeMap<Id, &str> = BTreeMap::new();
        for (field, id) in &type_mapping.properties {
            if let Some(prev) = property_owners.insert(*id, field) {
                errs.add_for(
                    entity,
                    format!("fields '{prev}' and '{field}' share property id '{id}'"),
                );
            }
        }
    }

    for (entity, type_mapping) in mapping.iter() {
        for (field, id) in &type_mapping.properties {
            if let Some(owner) = type_owners.get(id) {
                errs.add_for(
                    entity,
                    format!("property id '{id}' of field '{field}' is the type id of '{owner}'"),
                );
            }
        }
    }
}
