//! The publish/subscribe primitives everything else is wired together with

use super::*;

mod bounded_notifier;
mod notifier;
mod periodic_source;
mod subscriber;

pub use bounded_notifier::BoundedNotifier;
pub use notifier::Notifier;
use notifier::{SubscribeReport, UnsubscribeReport};
pub use periodic_source::{PeriodicSource, DEFAULT_TICK_INTERVAL};
pub use subscriber::{subscriber_fn, Subscriber};
