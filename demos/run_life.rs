//! Test-Case Driver
//!
//! This example runs whitespace-separated test cases read from stdin.
//!
//! Key concepts:
//! - The imperative shell: parsing and printing stay outside the library
//! - One grid per test case, stepped and reported on a schedule
//! - Cell type selected at the command line
//!
//! Input format: a case count `T`, then per case `rows cols`, a live-cell
//! count `n`, `n` pairs `row col`, and finally `generations frequency`.
//! Every generation divisible by `frequency` is reported as
//! `Generation = N, Population = P.` followed by the rendered rows.
//!
//! Run with: cargo run --example run_life -- mixed < cases.txt

use std::io::{self, Read, Write};
use std::process;

use vivarium::core::{Cell, CellState, HistoricalCell, StandardCell};
use vivarium::grid::Life;

struct Tokens<'a> {
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            words: input.split_whitespace(),
        }
    }

    fn next_usize(&mut self) -> usize {
        let word = self.words.next().expect("unexpected end of input");
        word.parse().expect("expected a non-negative integer")
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words.next().expect("unexpected end of input");
        word.parse().expect("expected a non-negative integer")
    }
}

// The schedule counters share the generation counter's width.
fn due_for_report(generation: u64, frequency: u64) -> bool {
    frequency > 0 && generation % frequency == 0
}

fn report<C: CellState>(out: &mut impl Write, life: &Life<C>) -> io::Result<()> {
    writeln!(
        out,
        "Generation = {}, Population = {}.",
        life.generation(),
        life.population()
    )?;
    write!(out, "{life}")?;
    writeln!(out)
}

fn run_cases<C: CellState>(
    label: &str,
    tokens: &mut Tokens,
    out: &mut impl Write,
) -> io::Result<()> {
    let cases = tokens.next_usize();
    for _ in 0..cases {
        let rows = tokens.next_usize();
        let cols = tokens.next_usize();
        let mut life: Life<C> = Life::new(rows, cols).unwrap();

        let live = tokens.next_usize();
        for _ in 0..live {
            let row = tokens.next_usize();
            let col = tokens.next_usize();
            life.seed(row, col).unwrap();
        }

        let generations = tokens.next_u64();
        let frequency = tokens.next_u64();

        writeln!(out, "*** Life<{label}> {rows}x{cols} ***")?;
        writeln!(out)?;
        report(out, &life)?;
        for _ in 0..generations {
            life.step();
            if due_for_report(life.generation(), frequency) {
                report(out, &life)?;
            }
        }
    }
    Ok(())
}

fn main() {
    let kind = std::env::args().nth(1).unwrap_or_else(|| "mixed".to_string());

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("failed to read stdin");
    let mut tokens = Tokens::new(&input);
    let mut out = io::stdout().lock();

    match kind.as_str() {
        "standard" => run_cases::<StandardCell>("StandardCell", &mut tokens, &mut out),
        "historical" => run_cases::<HistoricalCell>("HistoricalCell", &mut tokens, &mut out),
        "mixed" => run_cases::<Cell>("Cell", &mut tokens, &mut out),
        other => {
            eprintln!("unknown cell type '{other}' (expected standard, historical, or mixed)");
            process::exit(2);
        }
    }
    .expect("failed to write output");
}
