/*!
 * Simulation Task - Wall-Clock Driver
 *
 * Background task that owns a [`Simulation`] and fires its two periodic
 * ticks (execution and blocked queue) from independent `tokio` intervals.
 * All user commands arrive over a channel and run between ticks, so every
 * handler runs to completion before the next one starts.
 *
 * # Shutdown
 *
 * - Preferred: `shutdown().await` stops the loop and hands back the
 *   simulation for inspection.
 * - Fallback: dropping the handle without `shutdown()` aborts the task and
 *   logs a warning.
 */

use crate::core::limits::COMMAND_CHANNEL_CAPACITY;
use crate::core::SubmitResult;
use crate::process::{ProcessRecord, SubmitRequest};
use crate::simulation::{Simulation, SimulationStats, TickOutcome};
use crate::SimulationError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, trace, warn};

/// Control messages for the simulation task
#[derive(Debug)]
pub enum SimulationCommand {
    /// Queue a process; `run` resumes execution afterwards
    Submit {
        request: SubmitRequest,
        run: bool,
        respond: oneshot::Sender<SubmitResult<ProcessRecord>>,
    },
    /// Allow execution ticks to run
    Run,
    /// Gate execution ticks
    Pause,
    /// Block the eligible process, if any
    Block {
        respond: oneshot::Sender<Option<ProcessRecord>>,
    },
    /// Snapshot statistics
    Stats {
        respond: oneshot::Sender<SimulationStats>,
    },
    /// Copy of every finalized row
    Timeline {
        respond: oneshot::Sender<Vec<ProcessRecord>>,
    },
    /// Stop the loop and return the simulation
    Shutdown,
}

/// Handle to the simulation background task
pub struct SimulationTask {
    command_tx: mpsc::Sender<SimulationCommand>,
    handle: Option<tokio::task::JoinHandle<Simulation>>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl SimulationTask {
    /// Spawn with the tick interval from the simulation's configuration
    pub fn spawn(simulation: Simulation) -> Self {
        let period = simulation.config().tick_interval();
        Self::spawn_with_interval(simulation, period)
    }

    /// Spawn with an explicit wall-clock duration per simulated second
    pub fn spawn_with_interval(simulation: Simulation, period: Duration) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let shutdown_initiated = Arc::new(AtomicBool::new(false));

        info!(run_id = %simulation.run_id(), ?period, "Simulation task spawned");
        let handle = tokio::spawn(run_simulation_loop(simulation, period, command_rx));

        Self {
            command_tx,
            handle: Some(handle),
            shutdown_initiated,
        }
    }

    pub async fn submit(&self, request: SubmitRequest) -> Result<ProcessRecord, SimulationError> {
        self.submit_inner(request, false).await
    }

    pub async fn submit_and_run(
        &self,
        request: SubmitRequest,
    ) -> Result<ProcessRecord, SimulationError> {
        self.submit_inner(request, true).await
    }

    async fn submit_inner(
        &self,
        request: SubmitRequest,
        run: bool,
    ) -> Result<ProcessRecord, SimulationError> {
        let (respond, rx) = oneshot::channel();
        self.send(SimulationCommand::Submit {
            request,
            run,
            respond,
        })
        .await?;
        Ok(rx.await.map_err(|_| SimulationError::TaskClosed)??)
    }

    pub async fn run(&self) -> Result<(), SimulationError> {
        self.send(SimulationCommand::Run).await
    }

    pub async fn pause(&self) -> Result<(), SimulationError> {
        self.send(SimulationCommand::Pause).await
    }

    pub async fn block(&self) -> Result<Option<ProcessRecord>, SimulationError> {
        let (respond, rx) = oneshot::channel();
        self.send(SimulationCommand::Block { respond }).await?;
        rx.await.map_err(|_| SimulationError::TaskClosed)
    }

    pub async fn stats(&self) -> Result<SimulationStats, SimulationError> {
        let (respond, rx) = oneshot::channel();
        self.send(SimulationCommand::Stats { respond }).await?;
        rx.await.map_err(|_| SimulationError::TaskClosed)
    }

    pub async fn timeline(&self) -> Result<Vec<ProcessRecord>, SimulationError> {
        let (respond, rx) = oneshot::channel();
        self.send(SimulationCommand::Timeline { respond }).await?;
        rx.await.map_err(|_| SimulationError::TaskClosed)
    }

    /// Stop the loop and return the simulation
    ///
    /// Consumes self to prevent use-after-shutdown.
    pub async fn shutdown(mut self) -> Option<Simulation> {
        self.shutdown_initiated.store(true, Ordering::SeqCst);
        let _ = self.command_tx.send(SimulationCommand::Shutdown).await;

        let handle = self.handle.take()?;
        match handle.await {
            Ok(simulation) => {
                info!("Simulation task shutdown complete");
                Some(simulation)
            }
            Err(e) => {
                warn!("Simulation task shutdown error: {}", e);
                None
            }
        }
    }

    async fn send(&self, command: SimulationCommand) -> Result<(), SimulationError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| SimulationError::TaskClosed)
    }
}

fn tick_interval(period: Duration) -> tokio::time::Interval {
    // First tick one full period after start, not immediately
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

async fn run_simulation_loop(
    mut simulation: Simulation,
    period: Duration,
    mut command_rx: mpsc::Receiver<SimulationCommand>,
) -> Simulation {
    let mut execution = tick_interval(period);
    let mut blocked = tick_interval(period);

    loop {
        tokio::select! {
            _ = execution.tick() => {
                if let TickOutcome::Executed { name, executed } = simulation.tick_execution() {
                    trace!("Execution tick: {} at {}", name, executed);
                }
            }

            _ = blocked.tick() => {
                simulation.tick_blocked();
            }

            command = command_rx.recv() => {
                let Some(command) = command else {
                    info!("Command channel closed; stopping simulation task");
                    break;
                };
                if !handle_command(&mut simulation, command) {
                    info!("Simulation task shutting down");
                    break;
                }
            }
        }
    }

    simulation
}

/// Apply one command; returns `false` on shutdown
fn handle_command(simulation: &mut Simulation, command: SimulationCommand) -> bool {
    match command {
        SimulationCommand::Submit {
            request,
            run,
            respond,
        } => {
            let result = if run {
                simulation.submit_and_run(request)
            } else {
                simulation.submit(request)
            };
            let _ = respond.send(result);
        }
        SimulationCommand::Run => simulation.run(),
        SimulationCommand::Pause => simulation.pause(),
        SimulationCommand::Block { respond } => {
            let _ = respond.send(simulation.block());
        }
        SimulationCommand::Stats { respond } => {
            let _ = respond.send(simulation.stats());
        }
        SimulationCommand::Timeline { respond } => {
            let _ = respond.send(simulation.timeline().to_vec());
        }
        SimulationCommand::Shutdown => return false,
    }
    true
}

impl Drop for SimulationTask {
    fn drop(&mut self) {
        if self.shutdown_initiated.load(Ordering::SeqCst) {
            return;
        }

        if let Some(handle) = self.handle.take() {
            warn!(
                "SimulationTask dropped without calling shutdown() - aborting task immediately. \
                 Use `task.shutdown().await` for graceful cleanup."
            );
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubmitError;
    use crate::sinks::NullObserver;

    fn quiet() -> Simulation {
        Simulation::builder().with_observer(NullObserver).build()
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_process_to_completion() {
        let task = SimulationTask::spawn(quiet());
        task.submit_and_run(SubmitRequest::new("P1", 0, 3).unwrap())
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(4_500)).await;

        let timeline = task.timeline().await.unwrap();
        assert_eq!(timeline.len(), 1);
        let m = timeline[0].metrics.unwrap();
        assert_eq!((m.start, m.finish), (0, 3));

        let simulation = task.shutdown().await.unwrap();
        assert_eq!(simulation.clock(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_rejection_is_reported() {
        let task = SimulationTask::spawn(quiet());
        task.submit(SubmitRequest::new("P1", 5, 1).unwrap())
            .await
            .unwrap();

        let err = task
            .submit(SubmitRequest::new("P2", 1, 1).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Submit(SubmitError::OutOfOrder { arrival: 1, last: 5 })
        ));
        task.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_execution_does_not_advance() {
        let task = SimulationTask::spawn(quiet());
        task.submit(SubmitRequest::new("P1", 0, 2).unwrap())
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(task.stats().await.unwrap().clock, 0);

        task.run().await.unwrap();
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert_eq!(task.stats().await.unwrap().clock, 2);

        task.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_block_and_resume_through_task() {
        let task = SimulationTask::spawn(quiet());
        task.submit_and_run(SubmitRequest::new("P1", 0, 5).unwrap())
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        let blocked = task.block().await.unwrap().unwrap();
        assert_eq!(blocked.executed, 2);

        tokio::time::sleep(Duration::from_millis(5_500)).await;
        let stats = task.stats().await.unwrap();
        assert_eq!(stats.resumed_total, 1);
        assert_eq!(stats.queued, 1);

        task.shutdown().await;
    }

    #[tokio::test]
    async fn test_drop_without_shutdown_aborts() {
        let task = SimulationTask::spawn(quiet());
        task.run().await.unwrap();

        // Drop without calling shutdown - should trigger abort warning
        drop(task);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
