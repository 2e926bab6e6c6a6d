//! ## Crate layout
//! - `id`: store identifiers (UUID newtype).
//! - `types`: primitive value kinds a field can carry.
//! - `node`: entity shape declarations and the schema that groups them.
//! - `mapping`: identifier mapping from local names to store identifiers.
//! - `validate`: staged consistency checks between schema and mapping.
//! - `registry`: the validated, immutable schema + mapping pair and
//!   name resolution against it.
//! - `config`: TOML loading for mappings and other configuration.

pub mod config;
pub mod error;
pub mod id;
pub mod mapping;
pub mod node;
pub mod registry;
pub mod types;
pub mod validate;

/// Maximum length for entity schema identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::{
    config::ConfigError, error::ErrorTree, mapping::MappingError, node::NodeError,
    registry::ResolveError,
};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        id::Id,
        mapping::{Mapping, TypeMapping},
        node::*,
        registry::{Registry, ResolveError, ResolvedEntity, Resolver},
        types::Primitive,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    MappingError(#[from] MappingError),

    #[error(transparent)]
    NodeError(#[from] NodeError),

    #[error(transparent)]
    ResolveError(#[from] ResolveError),

    #[error("validation failed:\n{0}")]
    Validation(ErrorTree),
}
