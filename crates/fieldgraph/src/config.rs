use crate::{
    Error, design,
    logging::LogConfig,
    schema::{
        config::{ConfigError, from_toml_path, from_toml_str, mapping_from_path},
        id::Id,
        registry::Registry,
    },
    space::SpaceId,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Public space queried by the explore page.
pub const DEFAULT_EXPLORE_SPACE: &str = "b2565802-3118-47be-91f2-e59170735bac";

pub const DEFAULT_CONNECT_URL: &str = "https://hypergraph-connect.vercel.app/";

pub const DEFAULT_APP_ID: Id = Id::from_u128(0x93bb8907_085a_4a0e_83dd_62b0dc98e793);

///
/// ConnectConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ConnectConfig {
    pub url: String,
    pub app_id: Id,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CONNECT_URL.to_string(),
            app_id: DEFAULT_APP_ID,
        }
    }
}

///
/// AppConfig
///
/// Every key is optional:
///
/// ```toml
/// mapping_path = "mapping.toml"
/// explore_space = "b2565802-3118-47be-91f2-e59170735bac"
///
/// [log]
/// level = "debug"
/// format = "compact"
///
/// [connect]
/// url = "https://hypergraph-connect.vercel.app/"
/// app_id = "93bb8907-085a-4a0e-83dd-62b0dc98e793"
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,

    /// Identifier mapping file; the built-in mapping is used when unset.
    /// When loaded from a file, a relative path is taken from that file's
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_path: Option<PathBuf>,

    pub explore_space: String,
    pub connect: ConnectConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            mapping_path: None,
            explore_space: DEFAULT_EXPLORE_SPACE.to_string(),
            connect: ConnectConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config: Self = from_toml_path(path)?;

        if let Some(base) = path.parent()
            && let Some(mapping) = config.mapping_path.as_mut()
            && mapping.is_relative()
        {
            *mapping = base.join(&*mapping);
        }

        Ok(config)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        from_toml_str(source)
    }

    pub fn explore_space(&self) -> Result<SpaceId, Error> {
        Ok(SpaceId::parse(&self.explore_space)?)
    }

    /// Built-in schema plus the configured (or built-in) mapping, validated.
    pub fn registry(&self) -> Result<Registry, Error> {
        let schema = design::schema().map_err(crate::schema::Error::from)?;
        let mapping = match &self.mapping_path {
            Some(path) => mapping_from_path(path)?,
            None => design::mapping(),
        };

        Ok(Registry::new(schema, mapping)?)
    }
}
