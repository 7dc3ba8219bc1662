//! End-to-end spread scenarios on small, fully populated forests

use approx::assert_relative_eq;
use forest_fire_core::{ActivationMode, FireSimulation, ForestConfig, GridPos, TreeState};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fully populated square forest with calm air and no ember jumps
fn dense_forest(size: usize, probability: u32, seed: u64) -> ForestConfig {
    ForestConfig::default()
        .with_size(size, size)
        .with_density(1.0)
        .with_probability_of_spread(probability)
        .with_wind(0, 0)
        .with_big_jumps(false)
        .with_seed(seed)
}

fn states_in_column(sim: &FireSimulation, x: usize) -> Vec<TreeState> {
    (0..sim.grid().height())
        .filter_map(|y| sim.state_at(GridPos::new(x, y)))
        .collect()
}

/// Test: Certain spread clears a 10x10 forest within 10 steps
#[test]
fn test_certain_spread_burns_entire_forest() {
    for seed in 0..10 {
        let mut sim = FireSimulation::new(dense_forest(10, 100, seed)).expect("valid config");
        assert_eq!(sim.counts().total(), 100);

        sim.step();
        assert!(
            states_in_column(&sim, 0)
                .iter()
                .all(|&s| s == TreeState::BurnedOut),
            "seed {seed}: first column should be burned out after one step"
        );
        assert!(
            states_in_column(&sim, 1)
                .iter()
                .all(|&s| s != TreeState::Fine),
            "seed {seed}: second column should be alight after one step"
        );

        for _ in 1..10 {
            sim.step();
        }
        assert_eq!(sim.step_count(), 10);
        assert_relative_eq!(sim.burned_fraction(), 1.0);
    }
}

/// Test: Without cascading the certain-spread front moves exactly one column per step
#[test]
fn test_snapshot_front_advances_one_column_per_step() {
    let config = dense_forest(10, 100, 3).with_activation(ActivationMode::Snapshot);
    let mut sim = FireSimulation::new(config).expect("valid config");

    sim.step();
    assert!(states_in_column(&sim, 0)
        .iter()
        .all(|&s| s == TreeState::BurnedOut));
    assert!(states_in_column(&sim, 1)
        .iter()
        .all(|&s| s == TreeState::Burning));
    assert!(states_in_column(&sim, 2).iter().all(|&s| s == TreeState::Fine));

    for step in 2..=10 {
        sim.step();
        assert_relative_eq!(sim.burned_fraction(), f64::from(step) / 10.0);
    }
    assert!(!sim.is_fire_active());
}

/// Test: An empty forest never divides by zero
#[test]
fn test_empty_forest_reports_zero() {
    let config = ForestConfig::default().with_density(0.0).with_seed(1);
    let mut sim = FireSimulation::new(config).expect("valid config");
    assert_eq!(sim.counts().total(), 0);

    let summary = sim.run_to_horizon();
    assert_eq!(summary.steps, 50);
    assert_eq!(summary.burned_fraction, 0.0);
    assert!(!summary.fire_active);
    assert_eq!(sim.history().len(), 50);
    assert!(sim.history().iter().all(|&f| f == 0.0));
}

/// Test: Zero spread probability burns only the ignition column
#[test]
fn test_zero_probability_burns_first_column_only() {
    let mut sim = FireSimulation::new(dense_forest(10, 0, 11)).expect("valid config");
    sim.run_to_horizon();

    let expected = 10.0 / 100.0;
    for &fraction in sim.history() {
        assert_relative_eq!(fraction, expected);
    }
    for x in 1..10 {
        assert!(states_in_column(&sim, x).iter().all(|&s| s == TreeState::Fine));
    }
}

/// Test: Wind blowing against the front stops it at the first column
#[test]
fn test_headwind_blocks_spread() {
    let config = dense_forest(12, 90, 5).with_wind(0, -10);
    let mut sim = FireSimulation::new(config).expect("valid config");
    sim.run_to_horizon();

    assert_eq!(sim.count_state(TreeState::BurnedOut), 12);
    assert_eq!(sim.count_state(TreeState::Fine), 12 * 11);
}

/// Test: Tailwind turns an otherwise dead fire into a running one
#[test]
fn test_tailwind_bonus_drives_spread() {
    // Base 0 with west wind 25 gives 25% eastward and 0% north/south
    let config = dense_forest(20, 0, 9).with_wind(0, 25);
    let mut sim = FireSimulation::new(config).expect("valid config");
    sim.run_to_horizon();

    assert!(sim.burned_fraction() > 1.0 / 20.0);
    // Spread is only eastward, so every burned tree in a row is preceded by
    // a burned tree to its west
    for tree in sim.trees().iter().filter(|t| t.position().x > 0) {
        if !tree.is_fine() {
            let west = GridPos::new(tree.position().x - 1, tree.position().y);
            assert_eq!(sim.state_at(west), Some(TreeState::BurnedOut));
        }
    }
}

/// Test: Ember jumps carry fire across a gap that neighbour spread cannot cross
#[test]
fn test_ember_jumps_cross_firebreak() {
    // At density 0.3 neighbour spread dies out quickly, while jumps of three
    // cells keep finding new fuel. Population is identical for both runs.
    let base = ForestConfig::default()
        .with_size(40, 40)
        .with_density(0.3)
        .with_probability_of_spread(100)
        .with_wind(0, 24);

    let mut with_jumps = 0.0;
    let mut without_jumps = 0.0;
    for seed in 0..8 {
        let mut sim = FireSimulation::new(base.clone().with_big_jumps(true).with_seed(seed))
            .expect("valid config");
        with_jumps += sim.run_to_horizon().burned_fraction;

        let mut sim = FireSimulation::new(base.clone().with_big_jumps(false).with_seed(seed))
            .expect("valid config");
        without_jumps += sim.run_to_horizon().burned_fraction;
    }
    assert!(
        with_jumps > without_jumps,
        "jumps {with_jumps} should out-burn plain spread {without_jumps}"
    );
}
