/*!
 * Sink Traits
 * Interfaces the simulation calls out to for table rows, diagram segments,
 * and the busy/free indicator
 */

use crate::core::{Indicator, Slot};
use crate::process::ProcessRecord;

/// Receives every finalized process (completed or blocked)
pub trait ProcessSink: Send {
    /// Table-row sink
    fn on_process_finalized(&mut self, process: &ProcessRecord);

    /// Diagram sink; `slot` increments once per finalized process
    fn on_process_timeline(&mut self, process: &ProcessRecord, slot: Slot);
}

/// Receives critical-section indicator flips
pub trait IndicatorSink: Send {
    fn on_indicator_change(&mut self, state: Indicator);
}

/// Combined observer interface
pub trait SimulationObserver: ProcessSink + IndicatorSink {}

// Blanket implementation for any type that implements all component traits
impl<T> SimulationObserver for T where T: ProcessSink + IndicatorSink {}

/// Observer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ProcessSink for NullObserver {
    fn on_process_finalized(&mut self, _process: &ProcessRecord) {}

    fn on_process_timeline(&mut self, _process: &ProcessRecord, _slot: Slot) {}
}

impl IndicatorSink for NullObserver {
    fn on_indicator_change(&mut self, _state: Indicator) {}
}

// Pairs fan out to both observers in order
impl<A: SimulationObserver, B: SimulationObserver> ProcessSink for (A, B) {
    fn on_process_finalized(&mut self, process: &ProcessRecord) {
        self.0.on_process_finalized(process);
        self.1.on_process_finalized(process);
    }

    fn on_process_timeline(&mut self, process: &ProcessRecord, slot: Slot) {
        self.0.on_process_timeline(process, slot);
        self.1.on_process_timeline(process, slot);
    }
}

impl<A: SimulationObserver, B: SimulationObserver> IndicatorSink for (A, B) {
    fn on_indicator_change(&mut self, state: Indicator) {
        self.0.on_indicator_change(state);
        self.1.on_indicator_change(state);
    }
}
