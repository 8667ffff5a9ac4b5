//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Random seed for the dice.
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,

    /// Keep a log of every successful command.
    pub record_history: bool,

    /// How long a driver should let the dice settle between `roll`
    /// and `complete_roll`, in milliseconds. The engine itself never waits.
    pub settle_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_history: true,
            settle_delay_ms: 1000,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with history recording on or off.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Create a new config with a custom settle delay.
    pub fn with_settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    pub fn settle_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.settle_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.record_history);
        assert_eq!(config.settle_delay_ms, 1000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_history(false)
            .with_settle_delay_ms(0);

        assert_eq!(config.seed, Some(123));
        assert!(!config.record_history);
        assert_eq!(config.settle_delay(), std::time::Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
