//! ## Crate layout
//! - `entity`: typed entities and the `entity!` declaration macro.
//! - `design`: the built-in schema and identifier mapping.
//! - `value`, `record`: field values and the store-facing record form.
//! - `space`, `store`: spaces, the data-access and publishing seams, and an
//!   in-memory store.
//! - `app`: the logic behind the private space, public space, explore and
//!   login pages.
//! - `config`, `logging`: application configuration and tracing setup.

pub use fieldgraph_schema as schema;

pub mod app;
pub mod config;
pub mod design;
pub mod entity;
pub mod logging;
pub mod record;
pub mod space;
pub mod store;
pub mod value;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        app::{AppError, explore::explore, private::PrivateSpace, public::PublicSpace},
        design::{self, AcademicField, Project},
        entity::EntityKind,
        record::Record,
        schema::{id::Id, registry::Registry},
        space::{Mode, Space, SpaceId},
        store::{MemoryStore, Publisher, SessionProvider, SpaceStore},
        value::Value,
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    AppError(#[from] app::AppError),

    #[error(transparent)]
    ConfigError(#[from] schema::config::ConfigError),

    #[error(transparent)]
    LoggingError(#[from] logging::LoggingError),

    #[error(transparent)]
    SchemaError(#[from] schema::Error),

    #[error(transparent)]
    SpaceError(#[from] space::SpaceError),
}
