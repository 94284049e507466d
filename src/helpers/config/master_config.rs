use super::*;

/// Configuration for the whole observer-demo program
#[derive(Debug, Clone, PartialEq)]
pub struct MasterConfig {
    /// If to exit with success right away (for example, after showing --help)
    pub happy_exit: bool,
    /// Time the periodic source sleeps between ticks
    pub tick_interval: Duration,
    /// File the account logger appends balance changes to
    pub balance_log_path: String,
    /// Key that clicks the button
    pub trigger_key: TriggerKey,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            happy_exit: false,
            tick_interval: DEFAULT_TICK_INTERVAL,
            balance_log_path: "balance_log.txt".to_string(),
            trigger_key: TriggerKey::Space,
        }
    }
}
