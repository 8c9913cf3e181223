/*!
 * Recording Observer
 * Captures sink calls into a shared, serializable event log
 */

use super::traits::{IndicatorSink, ProcessSink};
use crate::core::{Indicator, Slot};
use crate::process::ProcessRecord;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One sink invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    Finalized { process: ProcessRecord },
    Timeline { name: String, slot: Slot },
    Indicator { state: Indicator },
}

/// Observer whose log can be read through any clone
///
/// Hand one clone to the simulation and keep another to inspect.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<SimEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded event
    pub fn events(&self) -> Vec<SimEvent> {
        self.events.lock().clone()
    }

    /// Finalized processes in emission order
    pub fn finalized(&self) -> Vec<ProcessRecord> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                SimEvent::Finalized { process } => Some(process.clone()),
                _ => None,
            })
            .collect()
    }

    /// Indicator states in emission order
    pub fn indicators(&self) -> Vec<Indicator> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                SimEvent::Indicator { state } => Some(*state),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl ProcessSink for RecordingObserver {
    fn on_process_finalized(&mut self, process: &ProcessRecord) {
        self.events.lock().push(SimEvent::Finalized {
            process: process.clone(),
        });
    }

    fn on_process_timeline(&mut self, process: &ProcessRecord, slot: Slot) {
        self.events.lock().push(SimEvent::Timeline {
            name: process.name.to_string(),
            slot,
        });
    }
}

impl IndicatorSink for RecordingObserver {
    fn on_indicator_change(&mut self, state: Indicator) {
        self.events.lock().push(SimEvent::Indicator { state });
    }
}
