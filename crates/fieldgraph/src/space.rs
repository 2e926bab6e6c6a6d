use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// SpaceError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SpaceError {
    #[error("space id is empty")]
    Empty,

    #[error("space id '{0}' contains whitespace")]
    Whitespace(String),
}

///
/// Mode
///
/// Which side of the store a space lives on.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    #[display("private")]
    Private,

    #[display("public")]
    Public,
}

///
/// SpaceId
///
/// Opaque space token issued by the store. Usually UUID-shaped, but only
/// required to be non-empty and free of whitespace.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct SpaceId(String);

impl SpaceId {
    pub fn parse(token: impl AsRef<str>) -> Result<Self, SpaceError> {
        let token = token.as_ref().trim();

        if token.is_empty() {
            return Err(SpaceError::Empty);
        }
        if token.chars().any(char::is_whitespace) {
            return Err(SpaceError::Whitespace(token.to_string()));
        }

        Ok(Self(token.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SpaceId {
    type Error = SpaceError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(token)
    }
}

impl From<SpaceId> for String {
    fn from(id: SpaceId) -> Self {
        id.0
    }
}

///
/// Space
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
    pub mode: Mode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_id_is_trimmed_and_checked() {
        let id = SpaceId::parse("  b2565802-3118-47be-91f2-e59170735bac ").unwrap();

        assert_eq!(id.as_str(), "b2565802-3118-47be-91f2-e59170735bac");
        assert_eq!(SpaceId::parse("   "), Err(SpaceError::Empty));
        assert_eq!(
            SpaceId::parse("a b"),
            Err(SpaceError::Whitespace("a b".to_string()))
        );
    }

    #[test]
    fn serde_validates_space_ids() {
        let space: Space =
            serde_json::from_str(r#"{"id":"s-1","name":"Lab","mode":"public"}"#).unwrap();

        assert_eq!(space.mode, Mode::Public);
        assert_eq!(space.id.to_string(), "s-1");
        assert!(serde_json::from_str::<SpaceId>(r#""""#).is_err());
    }

    #[test]
    fn mode_displays_lowercase() {
        assert_eq!(Mode::Private.to_string(), "private");
        assert_eq!(Mode::Public.to_string(), "public");
    }
}
