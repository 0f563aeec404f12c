mod common;

use common::CountingRng;
use plummet::{descend, descend_from, DescentPolicy, Outcome};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn zero_budget_decides_exactly_once() {
    let policy = DescentPolicy::new(0.5, 0).unwrap();

    for seed in 0..50 {
        let mut rng = CountingRng::new(StdRng::seed_from_u64(seed));
        let outcome = descend(&policy, &mut rng);

        // One Bernoulli decision, never deeper than depth 0.
        assert_eq!(rng.draws, 1, "seed {}", seed);
        assert!(
            outcome == Outcome::Stopped { depth: 0 } || outcome == Outcome::Overflow,
            "seed {} produced {:?}",
            seed,
            outcome
        );
    }
}

#[test]
fn start_beyond_budget_consumes_no_entropy() {
    let policy = DescentPolicy::new(0.9, 10).unwrap();
    let mut rng = CountingRng::new(StdRng::seed_from_u64(7));

    assert_eq!(descend_from(&policy, 11, &mut rng), Outcome::Overflow);
    assert_eq!(rng.draws, 0);
}

#[test]
fn certain_continue_always_overflows() {
    let policy = DescentPolicy::new(1.0, 50).unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(descend(&policy, &mut rng), Outcome::Overflow);
    }
}

#[test]
fn certain_stop_stays_at_the_start() {
    let policy = DescentPolicy::new(0.0, 50).unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            descend_from(&policy, 3, &mut rng),
            Outcome::Stopped { depth: 3 }
        );
    }
}

#[test]
fn fixed_seed_reproduces_the_outcome_sequence() {
    let policy = DescentPolicy::default();

    let run = |seed: u64| -> Vec<Outcome> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..100).map(|_| descend(&policy, &mut rng)).collect()
    };

    assert_eq!(run(42), run(42));
    // Not a contract, but two seeds agreeing on all 100 outcomes would
    // mean the RNG is not actually wired in.
    assert_ne!(run(42), run(43));
}

#[test]
fn descents_share_no_hidden_state() {
    let policy = DescentPolicy::default();

    let mut solo = StdRng::seed_from_u64(42);
    let solo_outcomes: Vec<Outcome> = (0..50).map(|_| descend(&policy, &mut solo)).collect();

    // Interleave descents on an unrelated RNG; the seeded sequence must
    // be unaffected.
    let mut first = StdRng::seed_from_u64(42);
    let mut other = StdRng::seed_from_u64(9000);
    let interleaved: Vec<Outcome> = (0..50)
        .map(|_| {
            let _ = descend(&policy, &mut other);
            descend(&policy, &mut first)
        })
        .collect();

    assert_eq!(solo_outcomes, interleaved);
}

#[test]
fn stopped_depth_is_within_the_budget() {
    let policy = DescentPolicy::new(0.95, 30).unwrap();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        if let Some(depth) = descend_from(&policy, 5, &mut rng).depth() {
            assert!((5..=30).contains(&depth), "seed {} gave depth {}", seed, depth);
        }
    }
}
