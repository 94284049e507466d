use super::*;

use std::io::Write;

/// Where the demo's user-facing lines go. Mockable so tests can check exactly what was printed.
pub trait ConsoleTrait: Send + Sync {
    fn print_line(&self, line: &str);
}

pub type Console = Arc<dyn ConsoleTrait>;

pub fn real_console() -> Console {
    Arc::new(ConsoleImpl)
}

struct ConsoleImpl;

impl ConsoleTrait for ConsoleImpl {
    fn print_line(&self, line: &str) {
        // The tick thread can print while the main thread has the terminal in raw mode, where a
        // bare \n doesn't return the cursor
        let raw = crossterm::terminal::is_raw_mode_enabled().unwrap_or(false);
        let ending = if raw { "\r\n" } else { "\n" };
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write!(out, "{}{}", line, ending)
            .and_then(|()| out.flush())
            .or_log_warn("failed to write to stdout");
    }
}
