/*!
 * Simulation
 * The explicit context object owning queues, clock, and engine flags
 *
 * Every operation mutates this context directly, so tests drive it
 * synchronously through [`Simulation::advance_one_second`] while the
 * runtime task drives the two ticks from real intervals.
 */

use crate::core::{SimTime, SubmitResult};
use crate::process::{ProcessRecord, SubmitRequest};
use crate::scheduler::{ArrivalQueue, BlockedQueue};
use crate::sinks::SimulationObserver;
use tracing::info;
use uuid::Uuid;

mod blocking;
mod builder;
pub mod config;
mod emit;
mod engine;
pub mod metrics;
mod stats;

pub use builder::SimulationBuilder;
pub use config::SimulationConfig;
pub use engine::TickOutcome;
pub use stats::SimulationStats;

use emit::Emitter;

/// Result of one simulated second (execution tick, then blocked tick)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub execution: TickOutcome,
    pub resumed: Option<ProcessRecord>,
}

/// Simulation context
pub struct Simulation {
    run_id: Uuid,
    config: SimulationConfig,

    arrivals: ArrivalQueue,
    blocked: BlockedQueue,

    // Simulated seconds of actual execution
    clock: SimTime,
    running: bool,
    has_work: bool,
    // Engine ticks left before `has_work` re-arms
    cooldown: Option<SimTime>,

    last_finished: Option<ProcessRecord>,
    timeline: Vec<ProcessRecord>,

    completed: u64,
    // Totals over completions only; blocked rows are excluded
    completed_turnaround: u64,
    completed_wait: u64,
    blocked_total: u64,
    resumed_total: u64,
    context_switches: u64,

    emitter: Emitter,
}

impl Simulation {
    /// Default configuration with a tracing observer
    pub fn new() -> Self {
        SimulationBuilder::new().build()
    }

    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    fn from_parts(config: SimulationConfig, observer: Box<dyn SimulationObserver>) -> Self {
        let run_id = Uuid::new_v4();
        info!(
            run_id = %run_id,
            block_duration = config.block_duration,
            switch_cooldown = config.switch_cooldown,
            "Simulation initialized"
        );

        Self {
            run_id,
            config,
            arrivals: ArrivalQueue::new(),
            blocked: BlockedQueue::new(),
            clock: 0,
            running: false,
            has_work: false,
            cooldown: None,
            last_finished: None,
            timeline: Vec::new(),
            completed: 0,
            completed_turnaround: 0,
            completed_wait: 0,
            blocked_total: 0,
            resumed_total: 0,
            context_switches: 0,
            emitter: Emitter::new(observer),
        }
    }

    /// Queue a validated process
    ///
    /// Pauses execution until the next [`run`](Self::run) and marks work as available.
    pub fn submit(&mut self, request: SubmitRequest) -> SubmitResult<ProcessRecord> {
        let process = ProcessRecord::new(request.name, request.arrival, request.burst);
        self.arrivals.submit(process.clone())?;
        self.running = false;
        self.has_work = true;

        info!(
            run_id = %self.run_id,
            name = %process.name,
            arrival = process.arrival,
            burst = process.burst,
            "Process submitted"
        );
        Ok(process)
    }

    /// Parse raw text fields, then [`submit`](Self::submit)
    pub fn submit_raw(&mut self, name: &str, arrival: &str, burst: &str) -> SubmitResult<ProcessRecord> {
        self.submit(SubmitRequest::parse(name, arrival, burst)?)
    }

    /// Submit, then resume execution
    pub fn submit_and_run(&mut self, request: SubmitRequest) -> SubmitResult<ProcessRecord> {
        let process = self.submit(request)?;
        self.run();
        Ok(process)
    }

    /// Allow the execution tick to run
    pub fn run(&mut self) {
        if !self.running {
            info!(run_id = %self.run_id, "Execution running");
        }
        self.running = true;
    }

    /// Gate the execution tick; blocked countdowns keep going
    pub fn pause(&mut self) {
        if self.running {
            info!(run_id = %self.run_id, "Execution paused");
        }
        self.running = false;
    }

    /// One simulated second: execution tick, then blocked-queue tick
    pub fn advance_one_second(&mut self) -> Tick {
        let execution = self.tick_execution();
        let resumed = self.tick_blocked();
        Tick { execution, resumed }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulated seconds of execution so far
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the head of the arrival queue is eligible to run
    pub fn has_work(&self) -> bool {
        self.has_work
    }

    pub fn arrivals(&self) -> &ArrivalQueue {
        &self.arrivals
    }

    pub fn blocked(&self) -> &BlockedQueue {
        &self.blocked
    }

    pub fn last_finished(&self) -> Option<&ProcessRecord> {
        self.last_finished.as_ref()
    }

    /// Every finalized record (completions and blocks) in emission order
    pub fn timeline(&self) -> &[ProcessRecord] {
        &self.timeline
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
