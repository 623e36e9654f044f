//! Settings file loading and initialisation

use std::path::{Path, PathBuf};

use storefront_core::prelude::*;

use super::types::Settings;

const STOREFRONT_DIR: &str = ".storefront";
const CONFIG_FILENAME: &str = "config.toml";

/// Path of the settings file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(STOREFRONT_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .storefront/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create .storefront/config.toml with commented defaults.
///
/// An existing file is left alone. Returns the path of the settings file.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let storefront_dir = base_dir.join(STOREFRONT_DIR);

    if !storefront_dir.exists() {
        std::fs::create_dir_all(&storefront_dir)
            .map_err(|e| Error::config(format!("Failed to create .storefront dir: {}", e)))?;
    }

    let config_path = storefront_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
        return Ok(config_path);
    }

    let default_content = r#"# GREEN Storefront Configuration

[order]
endpoint = "http://localhost:8080/api/checkout"   # Order service URL (POST, JSON)

[checkout]
total_price = 1549.0            # Order total in major units
currency = "LKR"
require_payment_method = false  # Block Place Order until a method is picked

[ui]
notification_timeout_ms = 6000  # How long the order confirmation stays up
"#;

    std::fs::write(&config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(config_path)
}
