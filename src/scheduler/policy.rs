/*!
 * Shortest-Burst Policy
 * Orders arrived processes by ascending burst; leaves the rest in place
 */

use crate::core::SimTime;
use crate::process::ProcessRecord;
use std::collections::VecDeque;

/// Reorder `queue` shortest-burst-first among processes that have arrived by `clock`
///
/// Processes that have not arrived keep their exact positions. Arrived
/// processes are stably sorted by `burst` and written back into the slots
/// arrived processes occupied, so ties keep submission order.
///
/// An arrived process may therefore move past a not-yet-arrived one sitting
/// between two arrived slots. Pairs with an unarrived side have no defined
/// order; this resolves them as "unarrived stays put, arrived sort among
/// themselves" rather than following any particular sort algorithm.
pub fn reorder(queue: &mut VecDeque<ProcessRecord>, clock: SimTime) {
    let slots: Vec<usize> = queue
        .iter()
        .enumerate()
        .filter(|(_, p)| p.has_arrived(clock))
        .map(|(i, _)| i)
        .collect();

    if slots.len() < 2 {
        return;
    }

    let mut arrived: Vec<ProcessRecord> = slots.iter().map(|&i| queue[i].clone()).collect();
    arrived.sort_by_key(|p| p.burst);

    for (slot, process) in slots.into_iter().zip(arrived) {
        queue[slot] = process;
    }
}
