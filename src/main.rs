/*!
 * Burst Simulator - Main Entry Point
 *
 * Interactive console over a wall-clock simulation:
 * - Submit processes (name, arrival, burst)
 * - Run / pause the critical section
 * - Block the running process into simulated I/O wait
 */

use burst_sim::runtime::console::{to_json_line, HELP};
use burst_sim::{
    init_tracing, ConsoleCommand, Simulation, SimulationConfig, SimulationError, SimulationTask,
    SubmitRequest, TracingObserver,
};
use miette::IntoDiagnostic;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> miette::Result<()> {
    init_tracing();

    let config = SimulationConfig::from_env();
    info!(
        block_duration = config.block_duration,
        switch_cooldown = config.switch_cooldown,
        tick_millis = config.tick_millis,
        "Burst simulator starting"
    );

    let simulation = Simulation::builder()
        .with_config(config)
        .with_observer(TracingObserver)
        .build();
    let task = SimulationTask::spawn(simulation);

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.into_diagnostic()? {
        let command = match ConsoleCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "Unrecognized input");
                println!("{}", e);
                continue;
            }
        };

        if command == ConsoleCommand::Quit {
            break;
        }
        if let Err(e) = execute(&task, command).await {
            match e {
                SimulationError::Submit(reason) => println!("rejected: {}", reason),
                SimulationError::Serialization(reason) => {
                    warn!(error = %reason, "Failed to render command output");
                    println!("error: {}", reason);
                }
                other => return Err(other.into()),
            }
        }
    }

    if let Some(simulation) = task.shutdown().await {
        let stats = simulation.stats();
        println!("{}", serde_json::to_string_pretty(&stats).into_diagnostic()?);
    }
    Ok(())
}

async fn execute(task: &SimulationTask, command: ConsoleCommand) -> Result<(), SimulationError> {
    match command {
        ConsoleCommand::Submit {
            name,
            arrival,
            burst,
            run,
        } => {
            let request = SubmitRequest::parse(&name, &arrival, &burst)?;
            let process = if run {
                task.submit_and_run(request).await?
            } else {
                task.submit(request).await?
            };
            println!("queued {} (arrival {}, burst {})", process.name, process.arrival, process.burst);
        }
        ConsoleCommand::Run => task.run().await?,
        ConsoleCommand::Pause => task.pause().await?,
        ConsoleCommand::Block => match task.block().await? {
            Some(process) => println!("blocked {}", process.name),
            None => println!("nothing to block"),
        },
        ConsoleCommand::Status => {
            let stats = task.stats().await?;
            println!("{}", to_json_line(&stats)?);
        }
        ConsoleCommand::Table => {
            for row in task.timeline().await? {
                println!("{}", to_json_line(&row)?);
            }
        }
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}
