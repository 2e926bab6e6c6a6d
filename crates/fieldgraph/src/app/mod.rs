//! Logic behind the application's pages, free of any rendering.

pub mod explore;
pub mod login;
pub mod private;
pub mod public;

use crate::{
    entity::EntityKind,
    record::{Record, RecordError},
    schema::registry::{Registry, ResolveError},
    space::{Mode, SpaceId},
    store::{Query, SpaceStore, StoreError},
};
use thiserror::Error as ThisError;

///
/// AppError
///

#[derive(Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum AppError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("missing session client")]
    MissingSession,

    #[error("no public space selected")]
    NoSpaceSelected,

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("{mode} space '{space}' is not ready")]
    SpaceNotReady { space: SpaceId, mode: Mode },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load every entity of kind `E` from a space, decoded through the registry.
pub fn query<E, S>(
    store: &S,
    registry: &Registry,
    space: &SpaceId,
    mode: Mode,
    first: Option<usize>,
) -> Result<Vec<E>, AppError>
where
    E: EntityKind,
    S: SpaceStore + ?Sized,
{
    let resolved = registry.resolve_entity(E::ENTITY)?;

    let mut query = Query::new(space.clone(), mode, resolved.type_ids().iter().copied());
    query.first = first;

    let entities = store
        .records(&query)?
        .iter()
        .map(|record| record.decode::<E>(registry))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        entity = E::ENTITY,
        space = %space,
        %mode,
        count = entities.len(),
        "queried entities"
    );

    Ok(entities)
}

/// Encode and store one entity.
pub fn create<E, S>(
    store: &mut S,
    registry: &Registry,
    space: &SpaceId,
    mode: Mode,
    entity: &E,
) -> Result<(), AppError>
where
    E: EntityKind,
    S: SpaceStore + ?Sized,
{
    let record = Record::encode(entity, registry)?;
    store.insert(space, mode, record)?;

    tracing::info!(
        entity = E::ENTITY,
        id = %entity.id(),
        space = %space,
        %mode,
        "created entity"
    );

    Ok(())
}
