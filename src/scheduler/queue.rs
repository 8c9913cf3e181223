/*!
 * Arrival Queue
 * Processes awaiting or undergoing execution, in policy order
 */

use super::policy;
use crate::core::{SimTime, SubmitResult};
use crate::process::validation::validate_order;
use crate::process::ProcessRecord;
use std::collections::VecDeque;

/// Ordered queue of unfinished processes; the head is the one eligible to run
#[derive(Debug, Default, Clone)]
pub struct ArrivalQueue {
    queue: VecDeque<ProcessRecord>,
    last_submitted: Option<SimTime>,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user submission; arrivals must be non-decreasing
    pub fn submit(&mut self, process: ProcessRecord) -> SubmitResult<()> {
        validate_order(process.arrival, self.last_submitted)?;
        self.last_submitted = Some(process.arrival);
        self.queue.push_back(process);
        Ok(())
    }

    /// Append a process coming back from the blocked queue (no ordering check)
    pub fn push_resumed(&mut self, process: ProcessRecord) {
        self.queue.push_back(process);
    }

    /// Re-sort by the shortest-burst policy relative to `clock`
    pub fn reorder(&mut self, clock: SimTime) {
        policy::reorder(&mut self.queue, clock);
    }

    pub fn peek_head(&self) -> Option<&ProcessRecord> {
        self.queue.front()
    }

    pub(crate) fn head_mut(&mut self) -> Option<&mut ProcessRecord> {
        self.queue.front_mut()
    }

    pub fn pop_head(&mut self) -> Option<ProcessRecord> {
        self.queue.pop_front()
    }

    /// Arrival of the last accepted submission
    pub fn last_submitted(&self) -> Option<SimTime> {
        self.last_submitted
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.queue.iter()
    }
}
