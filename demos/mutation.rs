//! Historical Mutation
//!
//! This example demonstrates the one-way conversion from historical to
//! standard cells on a polymorphic grid.
//!
//! Key concepts:
//! - Historical cells age once per consecutive survival
//! - At age 2 a survivor becomes a standard cell, permanently
//! - The converted cell follows the standard rule from then on
//!
//! Run with: cargo run --example mutation

use vivarium::core::{Cell, CellKind};
use vivarium::grid::Life;

fn board(life: &Life<Cell>) -> String {
    life.to_string().trim_end().to_string()
}

fn main() {
    println!("=== Historical Mutation ===\n");

    let mut life: Life<Cell> = Life::new(1, 2).unwrap();
    life.seed(0, 0).unwrap();
    life.seed(0, 1).unwrap();

    println!(
        "Generation {}: {}   two historical cells, age 0",
        life.generation(),
        board(&life)
    );

    // Each cell sees exactly one cardinal neighbor, so both survive
    // every historical generation.
    life.step();
    println!(
        "Generation {}: {}   both survived once, age 1",
        life.generation(),
        board(&life)
    );

    life.step();
    println!(
        "Generation {}: {}   age reached 2: converted to standard cells",
        life.generation(),
        board(&life)
    );
    assert_eq!(life.get(0, 0).unwrap().kind(), CellKind::Standard);

    life.step();
    println!(
        "Generation {}: {}   one neighbor is too few for the standard rule",
        life.generation(),
        board(&life)
    );

    println!("\nUnder the historical rule one neighbor sustains life, so the");
    println!("pair would have aged forever. Conversion is what kills them:");
    println!("a standard cell needs two or three neighbors to survive, and");
    println!("the conversion never reverses.");

    println!("\n=== Example Complete ===");
}
