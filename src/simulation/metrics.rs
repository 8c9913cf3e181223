/*!
 * Metrics Calculator
 * Pure computation of start/finish/turnaround/wait for a finalizing process
 */

use crate::process::{Metrics, Origin, ProcessRecord};

/// Compute the metrics of `process` given the previously finalized process
///
/// - start: previous finish or own arrival, whichever is later; a resumed
///   process additionally pays its block duration
/// - finish: start plus the CPU time actually executed
/// - turnaround: finish minus effective arrival
/// - wait: carried wait plus turnaround minus executed
pub fn compute(process: &ProcessRecord, last_finished: Option<&ProcessRecord>) -> Metrics {
    let previous_finish = last_finished.and_then(|p| p.metrics).map(|m| m.finish);

    let mut start = match previous_finish {
        Some(finish) => finish.max(process.arrival),
        None => process.arrival,
    };
    if let Origin::Resumed { block_duration, .. } = process.origin {
        start = start.saturating_add(block_duration);
    }

    let finish = start.saturating_add(process.executed);
    let turnaround = finish.saturating_sub(process.effective_arrival());
    let wait = process
        .carried_wait
        .saturating_add(turnaround.saturating_sub(process.executed));

    Metrics {
        start,
        finish,
        turnaround,
        wait,
    }
}
