use log::Level;
use std::fmt::Display;

/// Used to easily log and otherwise ignore an error, for places nothing can be done about it
pub trait OrLog {
    fn or_log(&self, level: Level, context: &str);

    fn or_log_warn(&self, context: &str) {
        self.or_log(Level::Warn, context);
    }

    fn or_log_error(&self, context: &str) {
        self.or_log(Level::Error, context);
    }
}

impl<T, E: Display> OrLog for Result<T, E> {
    fn or_log(&self, level: Level, context: &str) {
        if let Err(e) = self {
            log!(level, "{}: {}", context, e);
        }
    }
}
