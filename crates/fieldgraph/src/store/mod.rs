//! Data-access and publishing seams.
//!
//! The real implementations live in the external knowledge-graph client;
//! this crate only calls them. `MemoryStore` backs tests and local runs.

mod memory;

pub use memory::MemoryStore;

use crate::{
    record::Record,
    schema::id::Id,
    space::{Mode, Space, SpaceId},
};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum StoreError {
    #[error("store rejected the request: {0}")]
    Rejected(String),

    #[error("{mode} space '{space}' not found")]
    SpaceNotFound { space: SpaceId, mode: Mode },
}

///
/// Query
///
/// One entity-kind query against one space. A record matches when it
/// carries any of `type_ids`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Query {
    pub space: SpaceId,
    pub mode: Mode,
    pub type_ids: Vec<Id>,
    pub first: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new(space: SpaceId, mode: Mode, type_ids: impl IntoIterator<Item = Id>) -> Self {
        Self {
            space,
            mode,
            type_ids: type_ids.into_iter().collect(),
            first: None,
        }
    }

    #[must_use]
    pub const fn first(mut self, n: usize) -> Self {
        self.first = Some(n);
        self
    }
}

///
/// SpaceStore
///

pub trait SpaceStore {
    fn spaces(&self, mode: Mode) -> Result<Vec<Space>, StoreError>;

    fn space(&self, id: &SpaceId, mode: Mode) -> Result<Option<Space>, StoreError>;

    /// Insert a record, replacing any record with the same id.
    fn insert(&mut self, space: &SpaceId, mode: Mode, record: Record) -> Result<(), StoreError>;

    fn records(&self, query: &Query) -> Result<Vec<Record>, StoreError>;
}

///
/// PublishRequest
///

#[derive(Clone, Debug, PartialEq)]
pub struct PublishRequest {
    pub space: SpaceId,
    pub name: String,
    pub record: Record,
}

///
/// PublishReceipt
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublishReceipt {
    pub space: SpaceId,
    pub entity: Id,

    /// Opaque reference returned by the publisher (transaction hash or similar).
    pub reference: String,
}

///
/// Publisher
/// prepares, signs and submits a record to a public space
///

pub trait Publisher {
    fn publish(&mut self, request: PublishRequest) -> Result<PublishReceipt, StoreError>;
}

///
/// SessionProvider
/// hands out the signing publisher of the current session, if there is one
///

pub trait SessionProvider {
    fn publisher(&mut self) -> Option<&mut dyn Publisher>;
}
