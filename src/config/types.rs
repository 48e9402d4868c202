use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub ui: UiConfig,
}

/// Settings for the itinerary producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Simulated generation latency in milliseconds (default: 2000).
    pub delay_ms: u64,
    /// Prepend a destination heading to the sample itinerary (default: false).
    pub personalize: bool,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll and spinner cadence in milliseconds (default: 250).
    pub tick_rate_ms: u64,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            personalize: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
