/*!
 * Burst Simulator Library
 * Tick-driven shortest-burst CPU scheduling simulation with a blocking path
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod runtime;
pub mod scheduler;
pub mod simulation;
pub mod sinks;

// Re-exports
pub use crate::core::errors::{SimulationError, SubmitError, SubmitField, SubmitResult};
pub use crate::core::{Indicator, ProcessName, SimTime, Slot};
pub use monitoring::init_tracing;
pub use process::{Metrics, Origin, ProcessRecord, SubmitRequest};
pub use runtime::{ConsoleCommand, SimulationTask};
pub use scheduler::{ArrivalQueue, BlockedEntry, BlockedQueue};
pub use simulation::{
    Simulation, SimulationBuilder, SimulationConfig, SimulationStats, Tick, TickOutcome,
};
pub use sinks::{
    IndicatorSink, NullObserver, ProcessSink, RecordingObserver, SimEvent, SimulationObserver,
    TracingObserver,
};
