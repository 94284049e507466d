use super::*;

mod build_config;
mod config_key;
mod master_config;

pub use build_config::build_config;
pub use master_config::MasterConfig;

#[cfg(test)]
use build_config::{help_text, DEFAULT_TOML_PATH};
use config_key::ConfigKey;
