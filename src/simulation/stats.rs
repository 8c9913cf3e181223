/*!
 * Simulation Statistics
 * Point-in-time snapshot of queues, counters, and averages
 */

use super::Simulation;
use crate::core::{Indicator, SimTime};
use serde::{Deserialize, Serialize};

/// Snapshot returned by [`Simulation::stats`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub run_id: String,
    pub clock: SimTime,
    pub running: bool,
    pub has_work: bool,
    pub indicator: Indicator,
    pub queued: usize,
    pub blocked: usize,
    /// Rows emitted so far (completions and blocks)
    pub finalized: usize,
    pub completed: u64,
    pub blocked_total: u64,
    pub resumed_total: u64,
    pub context_switches: u64,
    /// Averages over completed processes; blocked rows are left out
    pub avg_turnaround: f64,
    pub avg_wait: f64,
}

impl Simulation {
    pub fn stats(&self) -> SimulationStats {
        let average = |total: u64| {
            if self.completed == 0 {
                0.0
            } else {
                total as f64 / self.completed as f64
            }
        };

        SimulationStats {
            run_id: self.run_id.to_string(),
            clock: self.clock,
            running: self.running,
            has_work: self.has_work,
            indicator: self.emitter.current_indicator(),
            queued: self.arrivals.len(),
            blocked: self.blocked.len(),
            finalized: self.timeline.len(),
            completed: self.completed,
            blocked_total: self.blocked_total,
            resumed_total: self.resumed_total,
            context_switches: self.context_switches,
            avg_turnaround: average(self.completed_turnaround),
            avg_wait: average(self.completed_wait),
        }
    }
}
