use derive_more::{Deref, Display};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::str::FromStr;
use thiserror::Error as ThisError;
use uuid::Uuid;

///
/// IdError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum IdError {
    #[error("invalid identifier '{0}'")]
    Invalid(String),

    #[error("identifier must not be nil")]
    Nil,
}

///
/// Id
///
/// Globally-unique identifier in the knowledge-graph store. Used for entity
/// type ids, property ids and entity ids alike. Always rendered as lowercase
/// hyphenated UUID text.
///

#[derive(Clone, Copy, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Id(Uuid);

impl Id {
    /// Build an id from its 128-bit value. Used for compile-time declarations.
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(Uuid::from_u128(n))
    }

    /// Generate a fresh random id for a new entity.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(encoded: &str) -> Result<Self, IdError> {
        let uuid = Uuid::try_parse(encoded).map_err(|_| IdError::Invalid(encoded.to_string()))?;
        if uuid.is_nil() {
            return Err(IdError::Nil);
        }

        Ok(Self(uuid))
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for Id {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Self::parse(&s).map_err(de::Error::custom)
    }
}
