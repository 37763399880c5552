use std::{io, path::PathBuf};
use tablecraft_schema::LoadError;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("invalid build config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
