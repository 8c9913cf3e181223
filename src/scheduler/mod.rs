/*!
 * Scheduler Module
 * Arrival and blocked queues plus the shortest-burst ordering policy
 */

pub mod blocked;
pub mod policy;
pub mod queue;

// Re-export public API
pub use blocked::{BlockedEntry, BlockedQueue};
pub use queue::ArrivalQueue;
