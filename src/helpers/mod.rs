//! General useful bits and bobs

use super::*;

mod config;
mod console;
mod filesystem;
mod formatting;
mod key_trigger;
mod or_log;
#[cfg(test)]
mod test_helpers;
mod thin_ptr;

pub use config::{build_config, MasterConfig};
pub use console::{real_console, Console, ConsoleTrait};
pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
pub use formatting::{clock_time, format_currency, log_timestamp};
#[cfg(test)]
pub use key_trigger::KeySourceTrait;
pub use key_trigger::{real_key_source, wait_for_key, KeySource, TriggerKey};
pub use or_log::OrLog;
#[cfg(test)]
pub use test_helpers::*;
pub use thin_ptr::ThinPtr;
