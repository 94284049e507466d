//! Things that react to notifications: the clock and counter on the timer, and the logger on the
//! bank account

use super::*;

use chrono::Local;

mod account_logger;
mod clock;
mod counter;

pub use account_logger::AccountLogger;
pub use clock::Clock;
pub use counter::Counter;
