/*!
 * Property Tests
 * Random submit/run/pause/block/tick sequences must keep every finalized
 * row consistent with the metrics rules
 */

use burst_sim::simulation::metrics;
use burst_sim::{NullObserver, ProcessRecord, Simulation, SimulationConfig, SubmitRequest};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Action {
    Submit { gap: u32, burst: u32 },
    Run,
    Pause,
    Block,
    Tick,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0u32..4, 1u32..8).prop_map(|(gap, burst)| Action::Submit { gap, burst }),
        2 => Just(Action::Run),
        1 => Just(Action::Pause),
        2 => Just(Action::Block),
        6 => Just(Action::Tick),
    ]
}

fn drive(config: SimulationConfig, actions: &[Action]) -> Simulation {
    let mut sim = Simulation::builder()
        .with_config(config)
        .with_observer(NullObserver)
        .build();
    let mut next_id = 0u32;

    for action in actions {
        match action {
            Action::Submit { gap, burst } => {
                let arrival = sim.arrivals().last_submitted().unwrap_or(0) + gap;
                let request = SubmitRequest::new(&format!("P{}", next_id), arrival, *burst)
                    .expect("generated request is valid");
                sim.submit(request).expect("arrivals are non-decreasing");
                next_id += 1;
            }
            Action::Run => sim.run(),
            Action::Pause => sim.pause(),
            Action::Block => {
                sim.block();
            }
            Action::Tick => {
                sim.advance_one_second();
            }
        }
    }

    // Drain whatever is left
    sim.run();
    for _ in 0..5_000 {
        if sim.arrivals().is_empty() && sim.blocked().is_empty() {
            break;
        }
        sim.advance_one_second();
    }
    sim
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn finalized_rows_are_consistent(
        cooldown in 0u32..3,
        block_duration in 1u32..7,
        actions in proptest::collection::vec(action(), 0..120),
    ) {
        let config = SimulationConfig::default()
            .with_block_duration(block_duration)
            .with_switch_cooldown(cooldown);
        let sim = drive(config, &actions);

        prop_assert!(sim.arrivals().is_empty());
        prop_assert!(sim.blocked().is_empty());

        let mut previous: Option<&ProcessRecord> = None;
        for row in sim.timeline() {
            let m = row.metrics.expect("timeline rows are finalized");

            prop_assert!(row.executed <= row.burst);
            prop_assert!(m.start >= row.effective_arrival());
            prop_assert!(m.finish >= m.start);
            prop_assert_eq!(m.finish - m.start, row.executed);
            prop_assert_eq!(m.turnaround, m.finish - row.effective_arrival());
            prop_assert_eq!(m.wait, row.carried_wait + m.turnaround - row.executed);

            if let Some(prev) = previous {
                prop_assert!(m.finish >= prev.metrics.unwrap().finish);
            }

            // Recomputing from the same inputs gives the stored row
            prop_assert_eq!(metrics::compute(row, previous), m);
            previous = Some(row);
        }
    }

    #[test]
    fn clock_counts_executed_seconds(
        actions in proptest::collection::vec(action(), 0..120),
    ) {
        let sim = drive(SimulationConfig::default(), &actions);
        let executed: u32 = sim.timeline().iter().map(|row| row.executed).sum();
        prop_assert_eq!(sim.clock(), executed);
    }
}
