/*!
 * Process Types
 * The schedulable unit and its computed metrics
 */

use crate::core::{ProcessName, SimTime};
use serde::{Deserialize, Serialize};

/// How a process record came to be in the arrival queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// Submitted by the user
    Fresh,
    /// Re-injected after serving a stint in the blocked queue
    Resumed {
        /// Time the process left the CPU; replaces `arrival` for metrics
        effective_arrival: SimTime,
        /// Simulated seconds spent blocked; pushed onto the start time
        block_duration: SimTime,
    },
}

/// Metrics fixed when a process leaves the CPU (completion or block)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub start: SimTime,
    pub finish: SimTime,
    pub turnaround: SimTime,
    pub wait: SimTime,
}

/// One schedulable unit
///
/// Invariant: `executed <= burst`. `metrics` is written exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub name: ProcessName,
    pub arrival: SimTime,
    pub burst: SimTime,
    pub executed: SimTime,
    pub origin: Origin,
    /// Wait accumulated by earlier segments of the same logical process
    pub carried_wait: SimTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

impl ProcessRecord {
    #[must_use]
    pub fn new(name: impl Into<ProcessName>, arrival: SimTime, burst: SimTime) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            executed: 0,
            origin: Origin::Fresh,
            carried_wait: 0,
            metrics: None,
        }
    }

    /// Build the instance that re-enters the arrival queue after `self` was blocked
    ///
    /// Returns `None` if `self` was never finalized.
    #[must_use]
    pub fn resumed(&self, block_duration: SimTime) -> Option<Self> {
        let metrics = self.metrics?;
        Some(Self {
            name: self.name.resumed(),
            arrival: self.arrival,
            burst: self.remaining(),
            executed: 0,
            origin: Origin::Resumed {
                effective_arrival: metrics.start + self.executed,
                block_duration,
            },
            carried_wait: metrics.wait,
            metrics: None,
        })
    }

    /// Arrival used for metrics; overridden once the process has been resumed
    #[inline]
    pub fn effective_arrival(&self) -> SimTime {
        match self.origin {
            Origin::Fresh => self.arrival,
            Origin::Resumed {
                effective_arrival, ..
            } => effective_arrival,
        }
    }

    #[inline(always)]
    pub const fn is_resumed(&self) -> bool {
        matches!(self.origin, Origin::Resumed { .. })
    }

    #[inline(always)]
    pub const fn remaining(&self) -> SimTime {
        self.burst - self.executed
    }

    #[inline(always)]
    pub const fn is_complete(&self) -> bool {
        self.executed >= self.burst
    }

    #[inline(always)]
    pub fn has_arrived(&self, clock: SimTime) -> bool {
        self.arrival <= clock
    }

    #[inline(always)]
    pub const fn is_finalized(&self) -> bool {
        self.metrics.is_some()
    }

    /// Consume one simulated second of CPU
    pub(crate) fn execute_one(&mut self) {
        debug_assert!(
            self.executed < self.burst,
            "process {} executed past its burst",
            self.name
        );
        self.executed += 1;
    }

    pub(crate) fn finalize(&mut self, metrics: Metrics) {
        debug_assert!(
            self.metrics.is_none(),
            "process {} finalized twice",
            self.name
        );
        debug_assert!(
            metrics.finish >= metrics.start && metrics.start >= self.effective_arrival(),
            "process {} has inconsistent metrics {:?}",
            self.name,
            metrics
        );
        self.metrics = Some(metrics);
    }
}
