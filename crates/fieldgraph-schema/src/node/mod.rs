mod entity;
mod field;
mod schema;

pub use entity::*;
pub use field::*;
pub use schema::*;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum NodeError {
    #[error("duplicate entity '{0}' in schema")]
    DuplicateEntity(String),
}

///
/// ValidateNode
/// local invariants of a single declaration, checked before cross-node passes
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}
