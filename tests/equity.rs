use holdem_advisor::equity::{EquitySimulator, SimulationConfig, SimulationError};
use holdem_advisor::hand::{Board, HoleCards};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

fn hole(s: &str) -> HoleCards {
    s.parse().unwrap()
}

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn seeded(trials: usize, seed: u64) -> EquitySimulator {
    EquitySimulator::new(SimulationConfig::default().with_trials(trials).with_seed(seed))
}

#[test]
fn pocket_aces_heads_up_near_eighty_five_percent() {
    let r = seeded(3000, 2024).run(&hole("As Ad"), &Board::empty(), 1, 1).unwrap();
    let pct = r.win_probability() * 100.0;
    assert!((pct - 85.2).abs() < 3.0, "AA equity {pct}");
}

#[test]
fn more_opponents_lower_equity() {
    let one = seeded(2000, 8).run(&hole("As Ad"), &Board::empty(), 1, 1).unwrap();
    let five = seeded(2000, 8).run(&hole("As Ad"), &Board::empty(), 1, 5).unwrap();
    assert!(five.win_probability() < one.win_probability());
}

#[test]
fn nut_river_hand_always_wins() {
    let r = seeded(200, 4).run(&hole("As Ks"), &board("Qs Js Ts 2c 3d"), 1, 3).unwrap();
    assert_eq!(r.wins, 200);
    assert_eq!(r.percentage(), 100.0);
}

#[test]
fn board_royal_flush_splits() {
    let r = seeded(200, 4).run(&hole("2c 3d"), &board("As Ks Qs Js Ts"), 1, 2).unwrap();
    assert_eq!(r.tie_probability(), 1.0);
    assert_eq!(r.win_probability(), 0.5);
}

#[test]
fn injected_rng_pins_outcome() {
    let sim = EquitySimulator::new(SimulationConfig::default().with_trials(500));
    let mut a = ChaCha8Rng::seed_from_u64(77);
    let mut b = ChaCha8Rng::seed_from_u64(77);
    let ra = sim.run_with_rng(&mut a, &hole("Qh Jh"), &board("Th 9c 2h"), 1, 2).unwrap();
    let rb = sim.run_with_rng(&mut b, &hole("Qh Jh"), &board("Th 9c 2h"), 1, 2).unwrap();
    assert_eq!(ra, rb);
}

#[test]
fn multi_deck_shoe_allows_duplicate_cards() {
    let r = seeded(300, 9).run(&hole("As As"), &board("As 7c 2d"), 3, 1);
    assert!(r.is_ok());
}

#[test]
fn independent_simulations_run_in_parallel() {
    let sim = seeded(1500, 0);
    let hero = hole("As Ad");
    let results: Vec<f64> = thread::scope(|s| {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let sim = EquitySimulator::new(sim.config().with_seed(100 + i));
                s.spawn(move || sim.run(&hero, &Board::empty(), 1, 1).map(|r| r.win_probability()))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });
    for pct in results {
        assert!((pct * 100.0 - 85.2).abs() < 4.0, "AA equity {pct}");
    }
}

#[test]
fn cancelled_run_reports_progress() {
    let stop = AtomicBool::new(true);
    let err = seeded(100, 1).run_cancellable(&hole("Kd Kc"), &Board::empty(), 1, 1, &stop).unwrap_err();
    assert_eq!(err, SimulationError::Cancelled { completed: 0 });
}

#[test]
fn stop_flag_set_mid_run_cancels() {
    let sim = seeded(50_000_000, 3);
    let stop = AtomicBool::new(false);
    let outcome = thread::scope(|s| {
        let handle = s.spawn(|| sim.run_cancellable(&hole("Ah Kh"), &Board::empty(), 1, 1, &stop));
        thread::sleep(Duration::from_millis(100));
        stop.store(true, Ordering::Relaxed);
        handle.join().unwrap()
    });
    match outcome {
        Err(SimulationError::Cancelled { completed }) => assert!(completed > 0 && completed < 50_000_000),
        other => panic!("expected cancellation, got {other:?}"),
    }
}
