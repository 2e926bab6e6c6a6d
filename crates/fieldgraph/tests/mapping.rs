use fieldgraph::{
    config::AppConfig,
    design::{self, AcademicField, Project},
    entity::EntityKind,
    schema::{
        self,
        config::mapping_from_path,
        id::Id,
        mapping::{Mapping, TypeMapping},
        registry::{Registry, ResolveError, Resolver},
        validate::Drift,
    },
};
use proptest::prelude::*;
use std::{collections::BTreeSet, path::PathBuf};

fn shipped_mapping_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/mapping.toml")
}

#[test]
fn every_declared_entity_has_a_mapping_entry() {
    let registry = design::registry().unwrap();

    for shape in registry.schema().entities() {
        assert!(
            registry.mapping().get(shape.name).is_some(),
            "no mapping for {}",
            shape.name
        );
    }
}

#[test]
fn field_coverage_is_bidirectional() {
    let registry = design::registry().unwrap();

    for shape in registry.schema().entities() {
        let declared: BTreeSet<&str> = shape.field_idents().collect();
        let mapped: BTreeSet<&str> = registry
            .mapping()
            .get(shape.name)
            .unwrap()
            .properties
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(declared, mapped, "coverage drift on {}", shape.name);
    }
}

#[test]
fn identifiers_are_valid_and_unique_per_type() {
    let registry = design::registry().unwrap();

    for (entity, type_mapping) in registry.mapping().iter() {
        for id in type_mapping.type_ids.iter().chain(type_mapping.properties.values()) {
            assert_eq!(Id::parse(&id.to_string()).unwrap(), *id, "{entity}");
        }

        let unique: BTreeSet<Id> = type_mapping.properties.values().copied().collect();
        assert_eq!(unique.len(), type_mapping.properties.len(), "{entity}");
    }
}

#[test]
fn academic_field_identifiers() {
    let registry = design::registry().unwrap();

    assert_eq!(
        registry
            .resolve_field("AcademicField", "name")
            .unwrap()
            .to_string(),
        "a126ca53-0c8e-48d5-b888-82c734c38935"
    );
    assert_eq!(
        registry
            .resolve_field("AcademicField", "description")
            .unwrap()
            .to_string(),
        "9b1f76ff-9711-404c-861e-59dc3fa7d037"
    );
}

#[test]
fn project_description_is_undeclared() {
    let registry = design::registry().unwrap();

    assert_eq!(
        registry.resolve_field("Project", "description"),
        Err(ResolveError::UndeclaredField {
            entity: "Project".to_string(),
            field: "description".to_string(),
        })
    );
}

// The other version of the mapping also binds `Project.description`; the
// consistency check must flag it instead of resolving it.
#[test]
fn divergent_project_mapping_is_flagged() {
    let schema = design::schema().unwrap();
    let divergent = design::mapping().with_type(
        Project::ENTITY,
        TypeMapping::new([design::PROJECT_TYPE])
            .with_property("name", design::PROJECT_NAME)
            .with_property(
                "description",
                Id::parse("11223344-5566-4789-9012-345678901234").unwrap(),
            ),
    );

    let resolver = Resolver::new(&schema, &divergent);
    assert_eq!(
        resolver.check_consistency(),
        vec![Drift::OrphanProperty {
            entity: "Project".to_string(),
            field: "description".to_string(),
        }]
    );
    assert!(matches!(
        resolver.resolve_field("Project", "description"),
        Err(ResolveError::UndeclaredField { .. })
    ));

    match Registry::new(schema, divergent) {
        Err(schema::Error::Validation(errs)) => {
            assert!(errs.contains("Project", "mapped field 'description' is not declared"));
        }
        other => panic!("divergent mapping accepted: {other:?}"),
    }
}

#[test]
fn mapping_without_project_is_flagged() {
    let schema = design::schema().unwrap();
    let mut only_fields = Mapping::new();
    only_fields.insert(
        AcademicField::ENTITY,
        design::mapping().get(AcademicField::ENTITY).unwrap().clone(),
    );

    let resolver = Resolver::new(&schema, &only_fields);

    assert_eq!(
        resolver.check_consistency(),
        vec![Drift::MissingType {
            entity: "Project".to_string()
        }]
    );
    assert_eq!(
        resolver.resolve_field("Project", "name"),
        Err(ResolveError::MissingType("Project".to_string()))
    );
}

#[test]
fn shipped_mapping_file_matches_built_in() {
    let mapping = mapping_from_path(shipped_mapping_path()).unwrap();

    assert_eq!(mapping, design::mapping());
}

#[test]
fn config_can_substitute_the_mapping() {
    let config = AppConfig {
        mapping_path: Some(shipped_mapping_path()),
        ..AppConfig::default()
    };

    let registry = config.registry().unwrap();

    assert_eq!(
        registry.resolve_field("Project", "name"),
        Ok(design::PROJECT_NAME)
    );
}

proptest! {
    #[test]
    fn lookups_are_deterministic(
        entity in prop::sample::select(vec!["AcademicField", "Project", "Address"]),
        field in prop::sample::select(vec!["name", "description", "title"]),
    ) {
        let registry = design::registry().unwrap();

        let first = registry.resolve_field(entity, field);
        for _ in 0..3 {
            prop_assert_eq!(&registry.resolve_field(entity, field), &first);
        }
    }
}
