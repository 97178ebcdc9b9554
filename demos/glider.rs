//! Glider
//!
//! This example demonstrates the classic glider under the standard rule.
//!
//! Key concepts:
//! - Building a board with the life_grid! macro
//! - Synchronous stepping: every cell updates at once
//! - Emergent motion from a purely local rule
//!
//! Run with: cargo run --example glider

use vivarium::core::StandardCell;
use vivarium::life_grid;

fn main() {
    println!("=== Glider ===\n");

    let mut life = life_grid!(StandardCell;
        ".*....",
        "..*...",
        "***...",
        "......",
        "......",
        "......",
    )
    .unwrap();

    println!("Five live cells arranged as a glider:\n");
    println!("{life}");

    // One full glider period.
    for _ in 0..4 {
        life.step();
        println!(
            "Generation {}, population {}:\n",
            life.generation(),
            life.population()
        );
        println!("{life}");
    }

    println!("After four generations the same five-cell shape reappears,");
    println!("shifted one row down and one column right. The glider will");
    println!("keep walking diagonally until it reaches the edge.");

    println!("\n=== Example Complete ===");
}
