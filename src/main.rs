use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordsearch::grid::Grid;
use wordsearch::report;
use wordsearch::solver;
use wordsearch::word_list::WordList;

/// Word search solver: find every listed word in a letter grid, in all eight directions
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the puzzle grid (one row of letters per line)
    #[arg(short, long, default_value = "WordFiles/WordSearch.txt")]
    grid: PathBuf,

    /// Path to the word list (one word per line)
    #[arg(short, long, default_value = "WordFiles/WordList.txt")]
    words: PathBuf,

    /// Where to write the match report ("-" for stdout); overwritten if it exists
    #[arg(short, long, default_value = "WordFiles/Output.txt")]
    output: PathBuf,
}

/// Entry point of the word search CLI.
///
/// Delegates to [`try_main`], printing any error on stderr and exiting
/// with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    log::info!("Starting word search solver");

    if let Err(e) = try_main() {
        // grid errors arrive already formatted with their code and help text
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load and validate the grid, then load the word list.
/// 3. Solve.
/// 4. Write the report to the output file (or stdout).
/// 5. Print a summary, including words that were never found, on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let grid = Grid::load_from_path(&cli.grid)?;
    let word_list = WordList::load_from_path(&cli.words)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_solve = Instant::now();
    let result = solver::solve_puzzle(&grid, &word_list.as_strs());
    let solve_secs = t_solve.elapsed().as_secs_f64();

    if cli.output.as_os_str() == "-" {
        report::write_report(&mut io::stdout().lock(), &result.matches)?;
    } else {
        let file = File::create(&cli.output).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to create report '{}': {}", cli.output.display(), e),
            )
        })?;
        report::write_report(&mut BufWriter::new(file), &result.matches)?;
        log::info!("Report written to {}", cli.output.display());
    }

    for word in &result.missing_words {
        eprintln!("⚠️  Not found: {word}");
    }

    eprintln!(
        "Loaded a {}x{} grid and {} words in {:.3}s; solved in {:.3}s ({} matches).",
        grid.height(),
        grid.width(),
        word_list.len(),
        load_secs,
        solve_secs,
        result.matches.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wordsearch"]);
        assert_eq!(cli.grid, PathBuf::from("WordFiles/WordSearch.txt"));
        assert_eq!(cli.words, PathBuf::from("WordFiles/WordList.txt"));
        assert_eq!(cli.output, PathBuf::from("WordFiles/Output.txt"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["wordsearch", "-g", "g.txt", "--words", "w.txt", "-o", "-"]);
        assert_eq!(cli.grid, PathBuf::from("g.txt"));
        assert_eq!(cli.words, PathBuf::from("w.txt"));
        assert_eq!(cli.output.as_os_str(), "-");
    }
}
