/*!
 * Simulation Builder
 * Builder pattern for Simulation construction
 */

use super::config::SimulationConfig;
use super::Simulation;
use crate::sinks::{SimulationObserver, TracingObserver};

/// Builder for Simulation
pub struct SimulationBuilder {
    config: Option<SimulationConfig>,
    observer: Option<Box<dyn SimulationObserver>>,
}

impl SimulationBuilder {
    /// Create a new Simulation builder
    pub fn new() -> Self {
        Self {
            config: None,
            observer: None,
        }
    }

    /// Override timing parameters
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Attach the observer receiving rows, timeline segments, and indicator flips
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: SimulationObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build the Simulation; defaults to `SimulationConfig::default()` and a tracing observer
    pub fn build(self) -> Simulation {
        let config = self.config.unwrap_or_default();
        let observer = self
            .observer
            .unwrap_or_else(|| Box::new(TracingObserver));
        Simulation::from_parts(config, observer)
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
