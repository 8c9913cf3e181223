/*!
 * Execution Engine
 * Per-second tick of the critical section: run the head, finish it, or idle
 */

use super::Simulation;
use crate::core::{Indicator, ProcessName, SimTime};
use crate::process::ProcessRecord;
use tracing::{debug, info, trace};

/// What one execution tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, cooling down after a switch, or nothing queued
    Idle,
    /// The head consumed one second of CPU
    Executed {
        name: ProcessName,
        executed: SimTime,
    },
    /// The head had already consumed its burst and was finalized
    Completed(ProcessRecord),
}

impl Simulation {
    /// Execution tick; fires once per simulated second
    pub fn tick_execution(&mut self) -> TickOutcome {
        let eligible = self.has_work && self.running;
        self.advance_cooldown();

        if !eligible {
            trace!(run_id = %self.run_id, "Execution tick idle");
            return TickOutcome::Idle;
        }

        let Some(head) = self.arrivals.head_mut() else {
            self.has_work = false;
            return TickOutcome::Idle;
        };

        if !head.is_complete() {
            head.execute_one();
            let outcome = TickOutcome::Executed {
                name: head.name.clone(),
                executed: head.executed,
            };
            self.clock = self.clock.saturating_add(1);
            self.emitter.indicator(Indicator::Busy);
            debug!(run_id = %self.run_id, clock = self.clock, ?outcome, "Execution tick");
            return outcome;
        }

        let Some(process) = self.arrivals.pop_head() else {
            return TickOutcome::Idle;
        };
        let process = self.finalize(process);
        self.arrivals.reorder(self.clock);
        self.switch();
        self.completed += 1;
        if let Some(m) = process.metrics {
            self.completed_turnaround += u64::from(m.turnaround);
            self.completed_wait += u64::from(m.wait);
        }

        info!(
            run_id = %self.run_id,
            name = %process.name,
            clock = self.clock,
            queued = self.arrivals.len(),
            "Process completed"
        );
        TickOutcome::Completed(process)
    }

    /// Compute metrics, record the row, notify sinks, and remember as last finished
    pub(super) fn finalize(&mut self, mut process: ProcessRecord) -> ProcessRecord {
        let metrics = super::metrics::compute(&process, self.last_finished.as_ref());
        process.finalize(metrics);

        self.emitter.finalized(&process);
        self.timeline.push(process.clone());
        self.last_finished = Some(process.clone());
        process
    }

    /// Leave the CPU free and re-arm after the cooldown if work remains
    pub(super) fn switch(&mut self) {
        self.has_work = false;
        self.context_switches += 1;
        self.emitter.indicator(Indicator::Free);

        if self.arrivals.is_empty() {
            self.cooldown = None;
        } else if self.config.switch_cooldown == 0 {
            self.has_work = true;
        } else {
            self.cooldown = Some(self.config.switch_cooldown);
        }
    }

    fn advance_cooldown(&mut self) {
        let Some(remaining) = self.cooldown else {
            return;
        };
        if remaining > 1 {
            self.cooldown = Some(remaining - 1);
            return;
        }
        self.cooldown = None;
        if !self.arrivals.is_empty() {
            self.has_work = true;
        }
    }
}
