//! Property-based tests for the cell rules and grid engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::collections::BTreeSet;
use vivarium::core::{Cell, CellKind, CellState, HistoricalCell, StandardCell};
use vivarium::grid::Life;

prop_compose! {
    fn arbitrary_kind()(variant in 0..2u8) -> CellKind {
        match variant {
            0 => CellKind::Standard,
            _ => CellKind::Historical,
        }
    }
}

prop_compose! {
    fn arbitrary_cell()(
        kind in arbitrary_kind(),
        alive in any::<bool>(),
        age in 0..12u32,
    ) -> Cell {
        match kind {
            CellKind::Standard => Cell::Standard(StandardCell::new(alive)),
            CellKind::Historical => Cell::Historical(HistoricalCell::with_age(alive, age)),
        }
    }
}

prop_compose! {
    fn arbitrary_dims()(rows in 1..12usize, cols in 1..12usize) -> (usize, usize) {
        (rows, cols)
    }
}

prop_compose! {
    fn arbitrary_life()(
        (rows, cols) in arbitrary_dims(),
        seeds in prop::collection::vec((0..12usize, 0..12usize), 0..10),
    ) -> Life<Cell> {
        let mut life = Life::new(rows, cols).unwrap();
        for (row, col) in seeds {
            life.seed(row % rows, col % cols).unwrap();
        }
        life
    }
}

proptest! {
    #[test]
    fn evolve_is_deterministic(cell in arbitrary_cell(), neighbors in 0..=8u8) {
        prop_assert_eq!(cell.evolve(neighbors), cell.evolve(neighbors));
    }

    #[test]
    fn affects_direction_is_deterministic(
        cell in arbitrary_cell(),
        dr in -1..=1i32,
        dc in -1..=1i32,
    ) {
        prop_assert_eq!(cell.affects_direction(dr, dc), cell.affects_direction(dr, dc));
    }

    #[test]
    fn symbol_reflects_liveness(cell in arbitrary_cell()) {
        let dead_symbol = matches!(cell.symbol(), '.' | '-');
        prop_assert_eq!(cell.is_alive(), !dead_symbol);
    }

    #[test]
    fn population_never_exceeds_capacity(life in arbitrary_life(), steps in 0..5usize) {
        let mut life = life;
        prop_assert!(life.population() <= life.rows() * life.cols());
        for _ in 0..steps {
            life.step();
            prop_assert!(life.population() <= life.rows() * life.cols());
        }
    }

    #[test]
    fn dead_grid_is_a_fixed_point((rows, cols) in arbitrary_dims(), steps in 0..8u64) {
        let mut life: Life<Cell> = Life::new(rows, cols).unwrap();
        for _ in 0..steps {
            life.step();
        }
        prop_assert_eq!(life.population(), 0);
        prop_assert_eq!(life.generation(), steps);
    }

    #[test]
    fn seeding_is_idempotent(life in arbitrary_life(), row in 0..12usize, col in 0..12usize) {
        let row = row % life.rows();
        let col = col % life.cols();

        let mut once = life.clone();
        once.seed(row, col).unwrap();
        let mut twice = once.clone();
        twice.seed(row, col).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stepping_is_deterministic(life in arbitrary_life(), steps in 1..5usize) {
        let mut left = life.clone();
        let mut right = life;
        for _ in 0..steps {
            left.step();
            right.step();
            prop_assert_eq!(&left, &right);
        }
    }

    #[test]
    fn generation_counts_steps(life in arbitrary_life(), steps in 0..10u64) {
        let mut life = life;
        for _ in 0..steps {
            life.step();
        }
        prop_assert_eq!(life.generation(), steps);
    }

    #[test]
    fn historical_ages_stay_below_the_conversion_threshold(
        life in arbitrary_life(),
        steps in 0..6usize,
    ) {
        // Seeded cells start at age 0; any cell reaching age 2 alive is
        // converted in the same step, so old historical cells never appear.
        let mut life = life;
        for _ in 0..steps {
            life.step();
        }
        for row in 0..life.rows() {
            for col in 0..life.cols() {
                if let Cell::Historical(cell) = life.get(row, col).unwrap() {
                    prop_assert!(cell.age() <= 1);
                }
            }
        }
    }

    #[test]
    fn distinct_seeds_match_population(
        (rows, cols) in arbitrary_dims(),
        seeds in prop::collection::vec((0..12usize, 0..12usize), 0..10),
    ) {
        let mut life: Life<Cell> = Life::new(rows, cols).unwrap();
        let mut distinct = BTreeSet::new();
        for (row, col) in seeds {
            let row = row % rows;
            let col = col % cols;
            life.seed(row, col).unwrap();
            distinct.insert((row, col));
        }
        prop_assert_eq!(life.population(), distinct.len());
    }

    #[test]
    fn cell_roundtrip_serialization(cell in arbitrary_cell()) {
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(cell, deserialized);
    }

    #[test]
    fn life_roundtrip_serialization(life in arbitrary_life(), steps in 0..3usize) {
        let mut life = life;
        for _ in 0..steps {
            life.step();
        }
        let json = serde_json::to_string(&life).unwrap();
        let deserialized: Life<Cell> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(life, deserialized);
    }
}
