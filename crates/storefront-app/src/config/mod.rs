//! Configuration file parsing for the storefront
//!
//! Supports `.storefront/config.toml` under the base directory.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
