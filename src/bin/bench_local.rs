//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the grid scan on *your* machine.
//! - Builds deterministic pseudo-random puzzles of a few sizes, plants the
//!   word list in them, then times `scan` several times and reports the median.
//! - Puzzles are generated in code, so no data files are needed.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Compare the threaded scan:      `cargo run --bin bench_local --release --features parallel`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Building the prefix index is outside the timed section.
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordsearch::direction::Direction;
use wordsearch::grid::Grid;
use wordsearch::prefix_index::PrefixIndex;
use wordsearch::scanner;

/// Simple local benchmark runner: generate puzzles, time the scan.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per puzzle (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Seed for the puzzle generator
    #[arg(short = 's', long, default_value_t = 0x5eed)]
    seed: u64,
}

/// Words planted in every puzzle. Several are prefixes of others (MATCH/MATCHES).
const WORDS: &[&str] = &[
    "RUST", "RUSTY", "CARGO", "CRATE", "TRAIT", "BORROW", "LIFETIME", "MACRO",
    "CLOSURE", "ITERATOR", "PATTERN", "MATCH", "ENUM", "STRUCT", "OWNERSHIP",
    "TRAITOR", "CRATER", "MATCHES", "ENUMERATE", "STRUCTURE",
];

/// Grid sizes (rows, cols) to time.
const SIZES: &[(usize, usize)] = &[(15, 15), (50, 50), (150, 150), (400, 400)];

/// Tiny linear congruential generator so runs are reproducible without a crate.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        // n is always small here, so the modulo bias is irrelevant
        (self.next_u64() % n as u64) as usize
    }
}

/// Fill a grid with random letters, then overwrite straight runs with words.
fn generate_puzzle(rows: usize, cols: usize, rng: &mut Lcg) -> Grid {
    let mut cells: Vec<Vec<char>> = (0..rows)
        .map(|_| (0..cols).map(|_| (b'A' + rng.below(26) as u8) as char).collect())
        .collect();

    for word in WORDS.iter().cycle().take(rows * cols / 40 + WORDS.len()) {
        let direction = Direction::ALL[rng.below(Direction::ALL.len())];
        let (mut r, mut c) = (rng.below(rows) as isize, rng.below(cols) as isize);
        let fits = |r: isize, c: isize| r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols;
        let (dr, dc) = direction.delta();
        let last = word.len() as isize - 1;
        if !fits(r + dr * last, c + dc * last) {
            continue;
        }
        for letter in word.chars() {
            cells[r as usize][c as usize] = letter;
            (r, c) = direction.step(r, c);
        }
    }

    let lines: Vec<String> = cells.into_iter().map(|row| row.into_iter().collect()).collect();
    // generated rows are all `cols` long
    Grid::from_rows(&lines).expect("generated grid is rectangular")
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(|a, b| a.total_cmp(b));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

#[cfg(feature = "parallel")]
fn run_scan(grid: &Grid, index: &PrefixIndex) -> Vec<wordsearch::MatchRecord> {
    scanner::scan_parallel(grid, index)
}

#[cfg(not(feature = "parallel"))]
fn run_scan(grid: &Grid, index: &PrefixIndex) -> Vec<wordsearch::MatchRecord> {
    scanner::scan(grid, index)
}

fn main() {
    let cli = Cli::parse();
    let mut rng = Lcg(cli.seed);
    let index = PrefixIndex::build(WORDS);

    // (size label, median seconds, matches)
    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(SIZES.len());

    for &(rows, cols) in SIZES {
        let label = format!("{rows}x{cols}");
        let grid = generate_puzzle(rows, cols, &mut rng);
        eprintln!("\n[{label}]");

        // warm-up, not timed
        let _warmup = run_scan(&grid, &index);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_count = 0;
        for rep in 0..cli.num_repeats {
            let t_scan = Instant::now();
            let matches = run_scan(black_box(&grid), &index);
            let secs = t_scan.elapsed().as_secs_f64();

            last_count = black_box(matches.len());
            times.push(secs);
            eprintln!("  run {:>2}/{:>2}: {:.4}s ({} matches)", rep + 1, cli.num_repeats, secs, last_count);
        }

        let med = median(times);
        eprintln!("  → median {:.4}s over {} run(s)", med, cli.num_repeats);
        summary.push((label, med, last_count));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<10} | {:>10} | {:>9}", "grid", "median (s)", "# matches");
    eprintln!("{:-<10}-+-{:-<10}-+-{:-<9}", "", "", "");
    for (label, med, count) in &summary {
        eprintln!("{label:<10} | {med:>10.4} | {count:>9}");
    }
}
