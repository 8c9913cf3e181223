/*!
 * Blocking Subsystem
 * Pull the eligible process into simulated I/O wait and re-inject it later
 */

use super::Simulation;
use crate::process::ProcessRecord;
use tracing::{debug, info};

impl Simulation {
    /// Block the head of the arrival queue
    ///
    /// Only valid while a process is eligible to run; otherwise a no-op
    /// returning `None`. The blocked record is finalized with whatever it
    /// executed so far.
    pub fn block(&mut self) -> Option<ProcessRecord> {
        if !self.has_work {
            debug!(run_id = %self.run_id, "Block ignored: no eligible process");
            return None;
        }

        let Some(process) = self.arrivals.pop_head() else {
            self.has_work = false;
            return None;
        };

        let process = self.finalize(process);
        self.blocked.push(process.clone());
        self.switch();
        self.blocked_total += 1;

        info!(
            run_id = %self.run_id,
            name = %process.name,
            executed = process.executed,
            burst = process.burst,
            "Process blocked"
        );
        Some(process)
    }

    /// Blocked-queue tick; fires once per simulated second regardless of `running`
    ///
    /// Returns the resumed instance when the head's wait expires.
    pub fn tick_blocked(&mut self) -> Option<ProcessRecord> {
        let entry = self.blocked.tick(self.config.block_duration)?;
        let resumed = entry.process.resumed(entry.elapsed)?;

        self.arrivals.push_resumed(resumed.clone());
        self.has_work = true;
        self.resumed_total += 1;

        info!(
            run_id = %self.run_id,
            name = %resumed.name,
            burst = resumed.burst,
            effective_arrival = resumed.effective_arrival(),
            "Process resumed"
        );
        Some(resumed)
    }
}
