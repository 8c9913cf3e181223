/*!
 * Sinks Module
 * Observer interfaces for rendering collaborators and two built-in observers
 */

pub mod logging;
pub mod recording;
pub mod traits;

pub use logging::TracingObserver;
pub use recording::{RecordingObserver, SimEvent};
pub use traits::{IndicatorSink, NullObserver, ProcessSink, SimulationObserver};
