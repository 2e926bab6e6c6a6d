use crate::{
    app::{AppError, query},
    design::Project,
    schema::registry::Registry,
    space::{Mode, SpaceId},
    store::SpaceStore,
};

/// Maximum number of projects shown when exploring.
pub const EXPLORE_LIMIT: usize = 40;

/// Projects in a public space. Needs no session; an empty result is valid.
pub fn explore<S>(store: &S, registry: &Registry, space: &SpaceId) -> Result<Vec<Project>, AppError>
where
    S: SpaceStore + ?Sized,
{
    query(store, registry, space, Mode::Public, Some(EXPLORE_LIMIT))
}
