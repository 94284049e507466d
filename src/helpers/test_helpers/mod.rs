use super::*;

use std::{
    any::Any,
    collections::{HashMap, VecDeque},
    sync::mpsc::{
        channel,
        RecvTimeoutError::{Disconnected, Timeout},
    },
};

mod mock_console;
mod mock_filesystem;
mod mock_key_source;
mod mock_subscriber;
mod run_with_timeout;

pub use mock_console::*;
pub use mock_filesystem::*;
pub use mock_key_source::*;
pub use mock_subscriber::*;
pub use run_with_timeout::*;
