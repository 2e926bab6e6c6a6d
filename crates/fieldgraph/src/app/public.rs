use crate::{
    app::{AppError, query},
    design::AcademicField,
    entity::EntityKind,
    schema::registry::Registry,
    space::{Mode, Space, SpaceId},
    store::SpaceStore,
};

///
/// PublicSpace
/// read-only view over a public space
///

pub struct PublicSpace<'a, S: ?Sized> {
    store: &'a S,
    registry: &'a Registry,
    space: Space,
}

impl<'a, S> PublicSpace<'a, S>
where
    S: SpaceStore + ?Sized,
{
    pub fn open(store: &'a S, registry: &'a Registry, id: &SpaceId) -> Result<Self, AppError> {
        let space = store
            .space(id, Mode::Public)?
            .ok_or_else(|| AppError::SpaceNotReady {
                space: id.clone(),
                mode: Mode::Public,
            })?;

        Ok(Self {
            store,
            registry,
            space,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.space.name
    }

    pub fn entities<E: EntityKind>(&self) -> Result<Vec<E>, AppError> {
        query(self.store, self.registry, &self.space.id, Mode::Public, None)
    }

    pub fn academic_fields(&self) -> Result<Vec<AcademicField>, AppError> {
        self.entities()
    }
}
