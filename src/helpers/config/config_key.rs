use super::*;

use toml::Value;

/// Everything that can be configured. Each option has the same name in the toml file and on the
/// command line (where dashes may be used instead of underscores).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Help,
    TickInterval,
    BalanceLog,
    Trigger,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Help,
        ConfigKey::TickInterval,
        ConfigKey::BalanceLog,
        ConfigKey::Trigger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::TickInterval => "tick_interval_ms",
            Self::BalanceLog => "balance_log_path",
            Self::Trigger => "trigger_key",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Self::Help => "show this help and exit",
            Self::TickInterval => "milliseconds between timer ticks (default 1000)",
            Self::BalanceLog => "file balance changes are appended to (default balance_log.txt)",
            Self::Trigger => "key that clicks the button: space (default) or enter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }

    /// Turns a command line value into what the same setting looks like in the toml file, so both
    /// sources go through apply(). Only help may be given without a value.
    pub fn arg_value(self, value: Option<&str>) -> Result<Value, String> {
        match (self, value) {
            (Self::Help, None) | (Self::Help, Some("true")) => Ok(Value::Boolean(true)),
            (Self::Help, Some("false")) => Ok(Value::Boolean(false)),
            (Self::TickInterval, Some(ms)) => ms
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| format!("{} is not valid for --{} (expected: int)", ms, self.name())),
            (Self::BalanceLog, Some(s)) | (Self::Trigger, Some(s)) => {
                Ok(Value::String(s.to_string()))
            }
            (Self::Help, Some(s)) => Err(format!("{} is not valid for --help (expected: bool)", s)),
            (_, None) => Err(format!("a value is required for --{}", self.name())),
        }
    }

    /// Source describes where the value came from, for error messages
    pub fn apply(
        self,
        conf: &mut MasterConfig,
        value: Value,
        source: &str,
    ) -> Result<(), Box<dyn Error>> {
        match (self, value) {
            (Self::Help, Value::Boolean(help)) => conf.happy_exit = help,
            (Self::TickInterval, Value::Integer(ms)) if ms > 0 => {
                conf.tick_interval = Duration::from_millis(ms as u64)
            }
            (Self::TickInterval, Value::Integer(_)) => {
                return Err(format!("{} should be greater than 0", source).into())
            }
            (Self::BalanceLog, Value::String(path)) if !path.is_empty() => {
                conf.balance_log_path = path
            }
            (Self::BalanceLog, Value::String(_)) => {
                return Err(format!("{} should not be empty", source).into())
            }
            (Self::Trigger, Value::String(key)) => {
                conf.trigger_key = match key.as_str() {
                    "space" => TriggerKey::Space,
                    "enter" => TriggerKey::Enter,
                    _ => {
                        return Err(format!(
                            "{} has invalid value {}, valid options are space, enter",
                            source, key
                        )
                        .into())
                    }
                }
            }
            (_, value) => {
                return Err(format!(
                    "{} is not valid for {} (expected: {})",
                    value,
                    source,
                    self.expected_type()
                )
                .into())
            }
        }
        Ok(())
    }

    fn expected_type(self) -> &'static str {
        match self {
            Self::Help => "bool",
            Self::TickInterval => "int",
            Self::BalanceLog | Self::Trigger => "string",
        }
    }
}
