/*!
 * Simulation Configuration
 * Timing parameters with defaults from `core::limits` and env overrides
 */

use crate::core::limits::{BLOCK_DURATION, DEFAULT_TICK_INTERVAL, MIN_TICK_INTERVAL, SWITCH_COOLDOWN};
use crate::core::SimTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const ENV_BLOCK_DURATION: &str = "BURST_SIM_BLOCK_DURATION";
pub const ENV_SWITCH_COOLDOWN: &str = "BURST_SIM_SWITCH_COOLDOWN";
pub const ENV_TICK_MILLIS: &str = "BURST_SIM_TICK_MILLIS";

/// Timing parameters of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated seconds a blocked process waits before resuming (≥ 1)
    pub block_duration: SimTime,
    /// Idle engine ticks after each process switch
    pub switch_cooldown: SimTime,
    /// Wall-clock milliseconds per simulated second in the runtime task
    pub tick_millis: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            block_duration: BLOCK_DURATION,
            switch_cooldown: SWITCH_COOLDOWN,
            tick_millis: DEFAULT_TICK_INTERVAL.as_millis() as u64,
        }
    }
}

impl SimulationConfig {
    /// Defaults overridden by `BURST_SIM_*` environment variables
    ///
    /// Unparseable or out-of-range values are logged and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            block_duration: env_override(ENV_BLOCK_DURATION, defaults.block_duration, |v| *v >= 1),
            switch_cooldown: env_override(ENV_SWITCH_COOLDOWN, defaults.switch_cooldown, |_| true),
            tick_millis: env_override(ENV_TICK_MILLIS, defaults.tick_millis, |v| {
                *v >= MIN_TICK_INTERVAL.as_millis() as u64
            }),
        }
    }

    pub fn with_block_duration(mut self, block_duration: SimTime) -> Self {
        self.block_duration = block_duration.max(1);
        self
    }

    pub fn with_switch_cooldown(mut self, switch_cooldown: SimTime) -> Self {
        self.switch_cooldown = switch_cooldown;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_millis = interval.max(MIN_TICK_INTERVAL).as_millis() as u64;
        self
    }

    /// Wall time per simulated second
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis).max(MIN_TICK_INTERVAL)
    }
}

fn env_override<T>(key: &str, default: T, valid: impl Fn(&T) -> bool) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!(key, value = %raw, default = %default, "Ignoring invalid configuration value");
            default
        }
    }
}
