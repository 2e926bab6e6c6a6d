use crate::{
    app::{AppError, create, query},
    design::AcademicField,
    record::Record,
    schema::registry::Registry,
    space::{Mode, Space, SpaceId},
    store::{PublishReceipt, PublishRequest, SessionProvider, SpaceStore, StoreError},
};

/// Name attached to every publish submitted from a private space.
pub const PUBLISH_NAME: &str = "Publish AcademicField";

///
/// PrivateSpace
///
/// Manage academic fields in one private space and publish them to a
/// public space.
///

pub struct PrivateSpace<'a, S> {
    store: &'a mut S,
    registry: &'a Registry,
    space: Space,
}

impl<'a, S> PrivateSpace<'a, S>
where
    S: SpaceStore + SessionProvider,
{
    /// Open a private space; fails until the store knows about it.
    pub fn open(store: &'a mut S, registry: &'a Registry, id: &SpaceId) -> Result<Self, AppError> {
        let space = store
            .space(id, Mode::Private)?
            .ok_or_else(|| AppError::SpaceNotReady {
                space: id.clone(),
                mode: Mode::Private,
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

    #[must_use]
    pub const fn space(&self) -> &Space {
        &self.space
    }

    pub fn academic_fields(&self) -> Result<Vec<AcademicField>, AppError> {
        query(&*self.store, self.registry, &self.space.id, Mode::Private, None)
    }

    /// Public spaces available as publish targets.
    pub fn public_spaces(&self) -> Result<Vec<Space>, AppError> {
        Ok(self.store.spaces(Mode::Public)?)
    }

    /// Create an academic field from a submitted name. Surrounding
    /// whitespace is dropped; a blank name is rejected.
    pub fn create_academic_field(&mut self, name: &str) -> Result<AcademicField, AppError> {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!(space = %self.space.id, "rejected academic field with empty name");
            return Err(AppError::EmptyName);
        }

        let field = AcademicField::new(name);
        create(&mut *self.store, self.registry, &self.space.id, Mode::Private, &field)?;

        Ok(field)
    }

    /// Publish one academic field to the selected public space.
    pub fn publish(
        &mut self,
        field: &AcademicField,
        target: Option<&SpaceId>,
    ) -> Result<PublishReceipt, AppError> {
        let Some(target) = target else {
            tracing::warn!(id = %field.id, "publish attempted without a selected space");
            return Err(AppError::NoSpaceSelected);
        };

        if self.store.space(target, Mode::Public)?.is_none() {
            return Err(StoreError::SpaceNotFound {
                space: target.clone(),
                mode: Mode::Public,
            }
            .into());
        }

        let record = Record::encode(field, self.registry)?;

        let publisher = self.store.publisher().ok_or(AppError::MissingSession)?;
        let receipt = publisher
            .publish(PublishRequest {
                space: target.clone(),
                name: PUBLISH_NAME.to_string(),
                record,
            })
            .inspect_err(|e| {
                tracing::error!(id = %field.id, space = %target, error = %e, "publish failed");
            })?;

        tracing::info!(
            id = %field.id,
            space = %target,
            reference = %receipt.reference,
            "academic field published"
        );

        Ok(receipt)
    }
}
