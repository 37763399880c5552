//! Build-script configuration and the file-to-file driver behind `build!`.

use crate::{BuildError, SchemaFingerprint, generate_with_fingerprint};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tablecraft_schema::node::Database;
use tracing::info;

pub const DEFAULT_OUTPUT_FILE: &str = "tablecraft.rs";

///
/// BuildConfig
///
/// `schema_file` is resolved relative to the directory holding the config
/// file; `output_file` is a file name under `OUT_DIR`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    pub schema_file: PathBuf,

    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl BuildConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, BuildError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;

        Self::from_toml_str(&text)
    }
}

///
/// BuildOutput
///

#[derive(Clone, Debug)]
pub struct BuildOutput {
    pub schema_file: PathBuf,
    pub output_file: PathBuf,
    pub fingerprint: SchemaFingerprint,
}

/// Load the config at `config_path`, compile its schema file and write the
/// generated source into `out_dir`.
pub fn run(
    config_path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<BuildOutput, BuildError> {
    let config_path = config_path.as_ref();
    let config = BuildConfig::from_path(config_path)?;

    let schema_file = config_path
        .parent()
        .map_or_else(|| config.schema_file.clone(), |dir| dir.join(&config.schema_file));
    let schema_text =
        fs::read_to_string(&schema_file).map_err(|e| BuildError::io(&schema_file, e))?;
    let database = Database::from_toml_str(&schema_text)?;

    let (source, fingerprint) = generate_with_fingerprint(&database);

    let output_file = out_dir.as_ref().join(&config.output_file);
    fs::write(&output_file, source).map_err(|e| BuildError::io(&output_file, e))?;

    info!(
        schema = %schema_file.display(),
        output = %output_file.display(),
        %fingerprint,
        "generated database source"
    );

    Ok(BuildOutput {
        schema_file,
        output_file,
        fingerprint,
    })
}
