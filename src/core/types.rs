/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated time in whole seconds
pub type SimTime = u32;

/// Vertical position of a finalized process in the timeline diagram
pub type Slot = usize;

/// State of the critical-section indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// A process is executing on the CPU
    Busy,
    /// The CPU is idle or switching between processes
    #[default]
    Free,
}

impl Indicator {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::Free => "free",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
