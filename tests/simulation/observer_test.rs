/*!
 * Observer Tests
 * Sink call order, slot numbering, and indicator flips
 */

use burst_sim::{Indicator, RecordingObserver, SimEvent, Simulation, SubmitRequest};
use pretty_assertions::assert_eq;

fn recorded_sim() -> (Simulation, RecordingObserver) {
    let recorder = RecordingObserver::new();
    let sim = Simulation::builder()
        .with_observer(recorder.clone())
        .build();
    (sim, recorder)
}

#[test]
fn test_two_processes_event_sequence() {
    let (mut sim, recorder) = recorded_sim();
    sim.submit(SubmitRequest::new("P1", 0, 1).unwrap()).unwrap();
    sim.submit(SubmitRequest::new("P2", 0, 1).unwrap()).unwrap();
    sim.run();

    for _ in 0..6 {
        sim.advance_one_second();
    }

    assert_eq!(
        recorder.indicators(),
        vec![Indicator::Busy, Indicator::Free, Indicator::Busy, Indicator::Free]
    );

    let slots: Vec<(String, usize)> = recorder
        .events()
        .into_iter()
        .filter_map(|e| match e {
            SimEvent::Timeline { name, slot } => Some((name, slot)),
            _ => None,
        })
        .collect();
    assert_eq!(slots, vec![("P1".to_string(), 0), ("P2".to_string(), 1)]);
}

#[test]
fn test_timeline_precedes_row() {
    let (mut sim, recorder) = recorded_sim();
    sim.submit(SubmitRequest::new("P1", 0, 2).unwrap()).unwrap();
    sim.run();
    sim.advance_one_second();
    sim.block().unwrap();

    let events = recorder.events();
    let tail = &events[events.len() - 3..];
    assert!(matches!(tail[0], SimEvent::Timeline { slot: 0, .. }));
    assert!(matches!(tail[1], SimEvent::Finalized { .. }));
    assert_eq!(tail[2], SimEvent::Indicator { state: Indicator::Free });
}

#[test]
fn test_rows_match_timeline_history() {
    let (mut sim, recorder) = recorded_sim();
    sim.submit(SubmitRequest::new("A", 0, 2).unwrap()).unwrap();
    sim.submit(SubmitRequest::new("B", 1, 1).unwrap()).unwrap();
    sim.run();
    sim.advance_one_second();
    sim.block().unwrap();
    for _ in 0..20 {
        sim.advance_one_second();
    }

    assert_eq!(recorder.finalized(), sim.timeline().to_vec());
    let names: Vec<&str> = sim.timeline().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "A*"]);
}

#[test]
fn test_no_indicator_event_while_idle() {
    let (mut sim, recorder) = recorded_sim();
    for _ in 0..5 {
        sim.advance_one_second();
    }
    assert!(recorder.events().is_empty());
}
