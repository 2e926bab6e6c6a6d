use crate::mapping::Mapping;
use serde::de::DeserializeOwned;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse any TOML-backed configuration value.
pub fn from_toml_str<T: DeserializeOwned>(source: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Read and parse a TOML file.
pub fn from_toml_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    from_toml_str(&source)
}

///
/// Mapping files
///
/// ```toml
/// [AcademicField]
/// typeIds = ["37d2167f-b64a-4b68-be26-55b3608050e7"]
///
/// [AcademicField.properties]
/// name = "a126ca53-0c8e-48d5-b888-82c734c38935"
/// ```
///

pub fn mapping_from_str(source: &str) -> Result<Mapping, ConfigError> {
    from_toml_str(source)
}

pub fn mapping_from_path(path: impl AsRef<Path>) -> Result<Mapping, ConfigError> {
    from_toml_path(path)
}
