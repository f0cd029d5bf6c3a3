//! Service configuration
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `config/default.toml`, or the file named by `INVOICE_SERVICE_CONFIG`
//! 3. `INVOICE_SERVICE__*` environment variables, e.g. `INVOICE_SERVICE__SERVER__PORT=9000`

use config::{Environment, File};
use invoice_layout::Branding;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "INVOICE_SERVICE";
const CONFIG_PATH_VAR: &str = "INVOICE_SERVICE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config/default";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory holding logo.png, qr-code.png and signature.png.
    /// Relative paths are resolved against the executable's directory.
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    #[serde(default)]
    pub branding: Branding,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let file = std::env::var(CONFIG_PATH_VAR).ok();
        Self::load_from(file.as_deref())
    }

    /// Load with an explicit config file; `None` falls back to the optional default file
    pub fn load_from(file: Option<&str>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("assets.dir", "assets")?;

        let builder = match file {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Asset directory with relative paths anchored at the executable
    pub fn assets_dir(&self) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        resolve_dir(&self.assets.dir, exe_dir.as_deref())
    }
}

fn resolve_dir(dir: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) if dir.is_relative() => base.join(dir),
        _ => dir.to_path_buf(),
    }
}
