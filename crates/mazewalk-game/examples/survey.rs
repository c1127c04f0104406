//! Example that generates many mazes and reports how hard they are to solve.
//!
//! Every maze is auto-solved with the depth-first solver, and the number of
//! advances and retreats is summarized. Mazes are generated and solved in
//! parallel.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example survey
//! ```
//!
//! Change the maze size and the number of samples:
//!
//! ```sh
//! cargo run --example survey -- --size 51 --count 1000
//! ```
//!
//! Print the seed of the maze that needed the most retreats:
//!
//! ```sh
//! cargo run --example survey -- --show-hardest
//! ```

use std::process;

use clap::Parser;
use mazewalk_core::validate_dimension;
use mazewalk_game::{DepthFirstSolver, Maze, SolveOutcome, SolveStats};
use mazewalk_generator::{GeneratedMaze, MazeGenerator, MazeSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the generated mazes (odd, 5 to 999).
    #[arg(long, value_name = "SIZE", default_value_t = 101, value_parser = parse_size)]
    size: usize,

    /// Number of mazes to generate.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = 200,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    count: u64,

    /// Print the seed and grid of the maze with the most retreats.
    #[arg(long)]
    show_hardest: bool,
}

fn main() {
    let args = Args::parse();
    let generator = match MazeGenerator::new(args.size) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("Invalid --size: {err}");
            process::exit(2);
        }
    };

    let samples = (0..args.count)
        .into_par_iter()
        .map(|_| {
            let generated = generator.generate();
            let stats = solve_stats(&generated);
            (generated.seed, stats)
        })
        .collect::<Vec<_>>();

    print_summary(&args, &samples);

    if args.show_hardest
        && let Some((seed, stats)) = samples.iter().max_by_key(|(_, stats)| stats.retreats)
    {
        println!();
        println!("Hardest:");
        println!("  Seed: {seed}");
        println!("  Retreats: {}", stats.retreats);
        println!();
        print!("{}", generator.generate_with_seed(*seed).grid);
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let value = s.parse::<i64>().map_err(|err| err.to_string())?;
    validate_dimension(value).map_err(|err| err.to_string())
}

fn solve_stats(generated: &GeneratedMaze) -> SolveStats {
    let mut maze = Maze::new(generated.grid.clone());
    let (outcome, stats) = DepthFirstSolver::new().solve(&mut maze).unwrap();
    assert_eq!(outcome, SolveOutcome::Solved, "seed {}", generated.seed);
    stats
}

fn print_summary(args: &Args, samples: &[(MazeSeed, SolveStats)]) {
    println!("Mazes:");
    println!("  Size: {0}x{0}", args.size);
    println!("  Count: {}", samples.len());
    println!();

    let columns: [(&str, fn(&SolveStats) -> usize); 3] = [
        ("Advances", |stats| stats.advances),
        ("Retreats", |stats| stats.retreats),
        ("Total moves", SolveStats::total_moves),
    ];
    for (label, select) in columns {
        let values = samples
            .iter()
            .map(|(_, stats)| select(stats))
            .collect::<Vec<_>>();
        let min = values.iter().min().copied().unwrap_or_default();
        let max = values.iter().max().copied().unwrap_or_default();
        #[expect(clippy::cast_precision_loss)]
        let mean = values.iter().sum::<usize>() as f64 / values.len() as f64;
        println!("{label}:");
        println!("  min: {min}");
        println!("  max: {max}");
        println!("  mean: {mean:.1}");
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory as _, error::ErrorKind};

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["survey"]).unwrap();
        assert_eq!(args.size, 101);
        assert_eq!(args.count, 200);
        assert!(!args.show_hardest);
    }

    #[test]
    fn test_invalid_values_exit_alike() {
        for (flag, value) in [
            ("--size", "8"),
            ("--size", "1001"),
            ("--size", "big"),
            ("--count", "0"),
        ] {
            let err = Args::try_parse_from(["survey", flag, value]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{flag} {value}");
            assert_eq!(err.exit_code(), 2, "{flag} {value}");
        }
    }
}
