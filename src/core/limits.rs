/*!
 * Simulation Limits and Constants
 *
 * Centralized location for the fixed timing parameters of the simulator.
 * Simulated quantities are in simulated seconds; wall-clock quantities are
 * `Duration`s.
 */

use super::types::SimTime;
use std::time::Duration;

// =============================================================================
// SIMULATED TIME
// =============================================================================

/// Simulated seconds a process spends in the blocked queue before resuming
pub const BLOCK_DURATION: SimTime = 5;

/// Idle engine ticks between finishing one process and picking the next
/// Separates consecutive segments in the timeline diagram
pub const SWITCH_COOLDOWN: SimTime = 1;

/// Largest arrival or burst accepted at submission
/// Keeps start/finish sums of a long session well inside `SimTime`
pub const MAX_SIM_TIME: SimTime = 1_000_000;

// =============================================================================
// WALL CLOCK
// =============================================================================

/// Wall time per simulated second when driven by the runtime task
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Fastest tick rate accepted from configuration
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

// =============================================================================
// CHANNELS
// =============================================================================

/// Capacity of the command channel feeding the runtime task
pub const COMMAND_CHANNEL_CAPACITY: usize = 64;
