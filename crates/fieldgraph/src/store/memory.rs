use crate::{
    app::login::{Authenticator, ConnectRequest},
    record::Record,
    space::{Mode, Space, SpaceId},
    store::{
        PublishReceipt, PublishRequest, Publisher, Query, SessionProvider, SpaceStore, StoreError,
    },
};
use std::collections::BTreeMap;

///
/// MemoryStore
///
/// Spaces and records held in process memory. Signing in through the
/// `Authenticator` impl opens a session; publishing copies the record into
/// the target public space.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    spaces: BTreeMap<(Mode, SpaceId), MemorySpace>,
    session: Option<ConnectRequest>,
    published: u64,
}

#[derive(Debug, Default)]
struct MemorySpace {
    name: String,
    records: Vec<Record>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_space(mut self, id: SpaceId, name: impl Into<String>, mode: Mode) -> Self {
        self.add_space(id, name, mode);
        self
    }

    pub fn add_space(&mut self, id: SpaceId, name: impl Into<String>, mode: Mode) {
        self.spaces.insert(
            (mode, id),
            MemorySpace {
                name: name.into(),
                records: Vec::new(),
            },
        );
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub const fn published(&self) -> u64 {
        self.published
    }

    fn space_mut(&mut self, id: &SpaceId, mode: Mode) -> Result<&mut MemorySpace, StoreError> {
        self.spaces
            .get_mut(&(mode, id.clone()))
            .ok_or_else(|| StoreError::SpaceNotFound {
                space: id.clone(),
                mode,
            })
    }
}

impl SpaceStore for MemoryStore {
    fn spaces(&self, mode: Mode) -> Result<Vec<Space>, StoreError> {
        Ok(self
            .spaces
            .iter()
            .filter(|((m, _), _)| *m == mode)
            .map(|((m, id), space)| Space {
                id: id.clone(),
                name: space.name.clone(),
                mode: *m,
            })
            .collect())
    }

    fn space(&self, id: &SpaceId, mode: Mode) -> Result<Option<Space>, StoreError> {
        Ok(self.spaces.get(&(mode, id.clone())).map(|space| Space {
            id: id.clone(),
            name: space.name.clone(),
            mode,
        }))
    }

    fn insert(&mut self, space: &SpaceId, mode: Mode, record: Record) -> Result<(), StoreError> {
        let space = self.space_mut(space, mode)?;

        match space.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => space.records.push(record),
        }

        Ok(())
    }

    fn records(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        let space = self
            .spaces
            .get(&(query.mode, query.space.clone()))
            .ok_or_else(|| StoreError::SpaceNotFound {
                space: query.space.clone(),
                mode: query.mode,
            })?;

        let matches = space
            .records
            .iter()
            .filter(|r| r.has_any_type(&query.type_ids))
            .take(query.first.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(matches)
    }
}

impl Publisher for MemoryStore {
    fn publish(&mut self, request: PublishRequest) -> Result<PublishReceipt, StoreError> {
        if request.record.values.is_empty() {
            return Err(StoreError::Rejected(format!(
                "'{}' has no values to publish",
                request.name
            )));
        }

        let entity = request.record.id;
        self.insert(&request.space, Mode::Public, request.record)?;
        self.published += 1;

        Ok(PublishReceipt {
            space: request.space,
            entity,
            reference: format!("memory:{}", self.published),
        })
    }
}

impl SessionProvider for MemoryStore {
    fn publisher(&mut self) -> Option<&mut dyn Publisher> {
        if self.session.is_some() {
            Some(self as &mut dyn Publisher)
        } else {
            None
        }
    }
}

impl Authenticator for MemoryStore {
    fn redirect_to_connect(
        &mut self,
        request: &ConnectRequest,
    ) -> Result<(), crate::app::AppError> {
        self.session = Some(request.clone());

        Ok(())
    }
}
