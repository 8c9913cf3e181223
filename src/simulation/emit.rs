/*!
 * Sink Dispatch
 * Slot numbering and indicator de-duplication in front of the observer
 */

use crate::core::{Indicator, Slot};
use crate::process::ProcessRecord;
use crate::sinks::SimulationObserver;

pub(super) struct Emitter {
    observer: Box<dyn SimulationObserver>,
    next_slot: Slot,
    indicator: Indicator,
}

impl Emitter {
    pub(super) fn new(observer: Box<dyn SimulationObserver>) -> Self {
        Self {
            observer,
            next_slot: 0,
            indicator: Indicator::Free,
        }
    }

    /// Draw then tabulate a finalized process; each call takes the next slot
    pub(super) fn finalized(&mut self, process: &ProcessRecord) {
        self.observer.on_process_timeline(process, self.next_slot);
        self.observer.on_process_finalized(process);
        self.next_slot += 1;
    }

    /// Forward only actual flips
    pub(super) fn indicator(&mut self, state: Indicator) {
        if state != self.indicator {
            self.indicator = state;
            self.observer.on_indicator_change(state);
        }
    }

    pub(super) fn current_indicator(&self) -> Indicator {
        self.indicator
    }
}
