use super::*;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};

/// The keys the demo cares about. Everything else reads as Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKey {
    Space,
    Enter,
    /// Ctrl+C, which raw mode delivers as a key instead of a signal
    Interrupt,
    Other,
}

impl TriggerKey {
    /// How the key is named in prompts
    pub fn name(&self) -> &'static str {
        match self {
            Self::Space => "Space",
            Self::Enter => "Enter",
            Self::Interrupt => "Ctrl+C",
            Self::Other => "any other key",
        }
    }
}

/// A mockable source of key presses
pub trait KeySourceTrait {
    /// Blocks until the next key press
    fn next_key(&mut self) -> io::Result<TriggerKey>;
}

pub type KeySource = Box<dyn KeySourceTrait>;

/// Reads key presses from the terminal. Raw mode is turned on by the first next_key() and turned
/// back off when the source is dropped.
pub fn real_key_source() -> KeySource {
    Box::new(TerminalKeySource { raw_mode: None })
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to read key presses (is stdin a terminal?): {}", e),
            )
        })?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        terminal::disable_raw_mode().or_log_error("failed to restore terminal");
    }
}

struct TerminalKeySource {
    raw_mode: Option<RawModeGuard>,
}

impl KeySourceTrait for TerminalKeySource {
    fn next_key(&mut self) -> io::Result<TriggerKey> {
        if self.raw_mode.is_none() {
            self.raw_mode = Some(RawModeGuard::enable()?);
        }
        loop {
            if let Event::Key(key) = event::read()? {
                // some terminals report releases too, only presses count
                if key.kind != KeyEventKind::Release {
                    return Ok(classify(key));
                }
            }
        }
    }
}

fn classify(key: KeyEvent) -> TriggerKey {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            TriggerKey::Interrupt
        }
        KeyCode::Char(' ') => TriggerKey::Space,
        KeyCode::Enter => TriggerKey::Enter,
        _ => TriggerKey::Other,
    }
}

/// Block until target is pressed, ignoring every other key. Ctrl+C aborts the wait with an
/// Interrupted error.
pub fn wait_for_key(source: &mut dyn KeySourceTrait, target: TriggerKey) -> io::Result<()> {
    loop {
        match source.next_key()? {
            key if key == target => {
                debug!("{} pressed", key.name());
                return Ok(());
            }
            TriggerKey::Interrupt => {
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    format!("interrupted while waiting for {}", target.name()),
                ))
            }
            key => trace!("ignoring {:?} while waiting for {}", key, target.name()),
        }
    }
}
