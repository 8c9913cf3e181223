/*!
 * Scenario Tests
 * End-to-end runs of the simulation driven tick by tick
 */

use burst_sim::{
    Metrics, NullObserver, Origin, ProcessRecord, Simulation, SubmitError, SubmitRequest,
    TickOutcome,
};
use pretty_assertions::assert_eq;

fn quiet_sim() -> Simulation {
    Simulation::builder().with_observer(NullObserver).build()
}

fn submit(sim: &mut Simulation, name: &str, arrival: u32, burst: u32) {
    sim.submit(SubmitRequest::new(name, arrival, burst).unwrap())
        .unwrap();
}

/// Advance until the next completion, failing after `limit` seconds
fn run_until_completed(sim: &mut Simulation, limit: usize) -> ProcessRecord {
    for _ in 0..limit {
        if let TickOutcome::Completed(p) = sim.advance_one_second().execution {
            return p;
        }
    }
    panic!("no process completed within {} ticks", limit);
}

#[test]
fn test_single_process() {
    let mut sim = quiet_sim();
    submit(&mut sim, "P1", 0, 3);
    sim.run();

    for _ in 0..3 {
        assert!(matches!(
            sim.advance_one_second().execution,
            TickOutcome::Executed { .. }
        ));
    }
    let p1 = match sim.advance_one_second().execution {
        TickOutcome::Completed(p) => p,
        other => panic!("expected completion, got {:?}", other),
    };

    assert_eq!(
        p1.metrics,
        Some(Metrics {
            start: 0,
            finish: 3,
            turnaround: 3,
            wait: 0
        })
    );
}

#[test]
fn test_started_process_is_not_preempted() {
    let mut sim = quiet_sim();
    submit(&mut sim, "P1", 0, 3);
    submit(&mut sim, "P2", 1, 2);
    sim.run();

    let p1 = run_until_completed(&mut sim, 10);
    assert_eq!(p1.name, "P1");
    assert_eq!(p1.metrics.unwrap().finish, 3);

    let p2 = run_until_completed(&mut sim, 10);
    assert_eq!(p2.name, "P2");
    assert_eq!(
        p2.metrics,
        Some(Metrics {
            start: 3,
            finish: 5,
            turnaround: 4,
            wait: 2
        })
    );
}

#[test]
fn test_shortest_burst_picked_after_completion() {
    let mut sim = quiet_sim();
    submit(&mut sim, "Long", 0, 4);
    submit(&mut sim, "Mid", 1, 3);
    submit(&mut sim, "Short", 2, 1);
    sim.run();

    let order: Vec<String> = (0..3)
        .map(|_| run_until_completed(&mut sim, 20).name.to_string())
        .collect();
    assert_eq!(order, vec!["Long", "Short", "Mid"]);
}

#[test]
fn test_block_and_resume() {
    let mut sim = quiet_sim();
    submit(&mut sim, "P1", 0, 5);
    sim.run();

    sim.advance_one_second();
    sim.advance_one_second();
    let blocked = sim.block().unwrap();
    assert_eq!(blocked.executed, 2);
    assert_eq!(blocked.metrics.unwrap().finish, 2);

    let mut resumed = None;
    for _ in 0..5 {
        resumed = resumed.or(sim.advance_one_second().resumed);
    }
    let resumed = resumed.expect("process resumes within the block duration");

    assert_eq!(resumed.name, "P1*");
    assert_eq!(resumed.burst, 3);
    assert_eq!(resumed.effective_arrival(), 2);
    assert!(matches!(resumed.origin, Origin::Resumed { .. }));
    assert_eq!(sim.arrivals().peek_head(), Some(&resumed));
}

#[test]
fn test_out_of_order_submission_rejected() {
    let mut sim = quiet_sim();
    submit(&mut sim, "P1", 3, 2);

    let err = sim
        .submit(SubmitRequest::new("P2", 2, 1).unwrap())
        .unwrap_err();
    assert_eq!(err, SubmitError::OutOfOrder { arrival: 2, last: 3 });

    let names: Vec<&str> = sim.arrivals().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["P1"]);
}

#[test]
fn test_block_before_execution_keeps_full_burst() {
    let mut sim = quiet_sim();
    submit(&mut sim, "P1", 0, 4);

    // Eligible even before run
    let blocked = sim.block().unwrap();
    assert_eq!(blocked.executed, 0);

    let resumed = (0..5)
        .find_map(|_| sim.advance_one_second().resumed)
        .unwrap();
    assert_eq!(resumed.burst, 4);
}

#[test]
fn test_repeated_blocking_accumulates_wait() {
    let mut sim = quiet_sim();
    submit(&mut sim, "P1", 0, 6);
    sim.run();

    sim.advance_one_second();
    sim.block().unwrap();
    let first = (0..5).find_map(|_| sim.tick_blocked()).unwrap();
    assert_eq!(first.name, "P1*");

    sim.advance_one_second();
    let second_block = sim.block().unwrap();
    let m = second_block.metrics.unwrap();
    // start = finish(1) + block(5), one unit executed
    assert_eq!((m.start, m.finish), (6, 7));
    assert_eq!(m.turnaround, 6);
    assert_eq!(m.wait, 5);

    let second = (0..5).find_map(|_| sim.tick_blocked()).unwrap();
    assert_eq!(second.name, "P1**");
    assert_eq!(second.burst, 4);
    assert_eq!(second.carried_wait, 5);
    assert_eq!(second.effective_arrival(), 7);
}

#[test]
fn test_idle_forever_when_empty() {
    let mut sim = quiet_sim();
    sim.run();
    for _ in 0..20 {
        assert_eq!(sim.advance_one_second().execution, TickOutcome::Idle);
    }
    assert_eq!(sim.clock(), 0);
}
