use crate::utils::{get_config_dir, PROJECT_NAME};
use crate::view::options::ProgressSpecs;
use color_eyre::eyre;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Tuning of the simulated transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSettings {
    /// Bytes read per progress event
    pub chunk_size: u64,
    /// Pause between two chunks in milliseconds
    pub tick_ms: u64,
    /// Probability in `[0, 1]` that a chunk fails the whole upload
    pub failure_rate: f64,
    /// Pause between the last byte and the server confirmation in milliseconds
    pub processing_ms: u64,
}

impl Default for TransferSettings {
    fn default() -> Self {
        TransferSettings {
            chunk_size: 64 * 1024,
            tick_ms: 50,
            failure_rate: 0.0,
            processing_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub progress: ProgressSpecs,
    pub transfer: TransferSettings,
}

/// Loads settings from `config_file` (or the default location) and the
/// `<PROJECT_NAME>__*` environment variables. A missing file yields defaults.
pub fn load_settings(config_file: Option<PathBuf>) -> eyre::Result<AppSettings> {
    let path = config_file.unwrap_or_else(|| get_config_dir().join(CONFIG_FILE));
    load_settings_from(&path, PROJECT_NAME.as_str())
}

fn load_settings_from(path: &Path, env_prefix: &str) -> eyre::Result<AppSettings> {
    let settings = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<AppSettings>()?;
    tracing::debug!("Loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings.sanitized())
}

impl AppSettings {
    fn sanitized(self) -> Self {
        AppSettings {
            transfer: TransferSettings {
                chunk_size: self.transfer.chunk_size.max(1),
                failure_rate: self.transfer.failure_rate.clamp(0.0, 1.0),
                ..self.transfer
            },
            ..self
        }
    }
}
