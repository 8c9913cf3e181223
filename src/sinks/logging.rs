/*!
 * Tracing Observer
 * Emits table rows and timeline segments as structured log events
 */

use super::traits::{IndicatorSink, ProcessSink};
use crate::core::{Indicator, Slot};
use crate::process::ProcessRecord;
use tracing::{debug, info};

/// Observer that writes every sink call to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProcessSink for TracingObserver {
    fn on_process_finalized(&mut self, process: &ProcessRecord) {
        let Some(m) = process.metrics else {
            return;
        };
        info!(
            name = %process.name,
            arrival = process.arrival,
            burst = process.burst,
            start = m.start,
            finish = m.finish,
            turnaround = m.turnaround,
            wait = m.wait,
            "process row"
        );
    }

    fn on_process_timeline(&mut self, process: &ProcessRecord, slot: Slot) {
        let Some(m) = process.metrics else {
            return;
        };
        debug!(
            name = %process.name,
            slot,
            arrival = process.effective_arrival(),
            start = m.start,
            finish = m.finish,
            "timeline segment"
        );
    }
}

impl IndicatorSink for TracingObserver {
    fn on_indicator_change(&mut self, state: Indicator) {
        debug!(state = %state, "critical section");
    }
}
