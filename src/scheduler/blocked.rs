/*!
 * Blocked Queue
 * Processes serving simulated I/O wait, counted down at the head only
 */

use crate::core::SimTime;
use crate::process::ProcessRecord;
use std::collections::VecDeque;

/// A blocked process and the simulated seconds it has waited so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedEntry {
    pub process: ProcessRecord,
    pub elapsed: SimTime,
}

/// FIFO of blocked processes; only the head's counter advances
#[derive(Debug, Default, Clone)]
pub struct BlockedQueue {
    queue: VecDeque<BlockedEntry>,
}

impl BlockedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, process: ProcessRecord) {
        self.queue.push_back(BlockedEntry {
            process,
            elapsed: 0,
        });
    }

    /// Advance the head by one simulated second
    ///
    /// Returns the head once its counter reaches `threshold`.
    pub fn tick(&mut self, threshold: SimTime) -> Option<BlockedEntry> {
        let head = self.queue.front_mut()?;
        head.elapsed += 1;
        if head.elapsed >= threshold {
            self.queue.pop_front()
        } else {
            None
        }
    }

    pub fn peek_head(&self) -> Option<&BlockedEntry> {
        self.queue.front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockedEntry> {
        self.queue.iter()
    }
}
