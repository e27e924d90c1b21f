use crate::config::{Config, Strategy};
use crate::puzzle::{ManhattanDistance, OutOfPlace, SlidingPuzzle};
use crate::search::{BestFirstSearch, Search};

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Nodes generated per solved puzzle, bucketed by solution length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Results {
    pub strategy: Strategy,
    pub nodes_by_length: Vec<Vec<usize>>,
    pub unsolved: usize,
    pub time_ms: usize,
}

impl Results {
    pub fn new(strategy: Strategy, max_length: usize) -> Self {
        Results {
            strategy,
            nodes_by_length: vec![Vec::new(); max_length + 1],
            unsolved: 0,
            time_ms: 0,
        }
    }

    pub fn add(&mut self, solution_length: usize, nodes_generated: usize) {
        if solution_length >= self.nodes_by_length.len() {
            self.nodes_by_length
                .resize_with(solution_length + 1, Vec::new);
        }
        self.nodes_by_length[solution_length].push(nodes_generated);
    }

    /// Mean nodes generated over the puzzles solved in `length` moves.
    pub fn mean(&self, length: usize) -> Option<f64> {
        let samples = self.nodes_by_length.get(length)?;
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<usize>() as f64 / samples.len() as f64)
    }

    pub fn samples(&self, length: usize) -> usize {
        self.nodes_by_length.get(length).map_or(0, Vec::len)
    }

    pub fn solved(&self) -> usize {
        self.nodes_by_length.iter().map(Vec::len).sum()
    }

    pub fn max_length(&self) -> usize {
        self.nodes_by_length.len().saturating_sub(1)
    }
}

#[derive(Debug, Serialize)]
struct StrategySummary {
    strategy: Strategy,
    solved: usize,
    unsolved: usize,
    time_ms: usize,
    samples_by_length: Vec<usize>,
    mean_nodes_by_length: Vec<Option<f64>>,
}

impl From<&Results> for StrategySummary {
    fn from(results: &Results) -> Self {
        let lengths = 0..=results.max_length();
        StrategySummary {
            strategy: results.strategy,
            solved: results.solved(),
            unsolved: results.unsolved,
            time_ms: results.time_ms,
            samples_by_length: lengths.clone().map(|l| results.samples(l)).collect(),
            mean_nodes_by_length: lengths.map(|l| results.mean(l)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub config: Config,
    pub results: Vec<Results>,
}

/// One row per solution length, one column of mean nodes generated per
/// strategy. Lengths without samples show `-`.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len")?;
        for results in &self.results {
            write!(f, " {:>14}", results.strategy.to_string())?;
        }
        writeln!(f)?;

        let max_length = self
            .results
            .iter()
            .map(Results::max_length)
            .max()
            .unwrap_or(0);
        for length in 0..=max_length {
            write!(f, "{length:3}")?;
            for results in &self.results {
                match results.mean(length) {
                    Some(mean) => write!(f, " {mean:14.1}")?,
                    None => write!(f, " {:>14}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Report {
    pub fn write_json(&self, path: &str) -> Result<()> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            config: &'a Config,
            strategies: Vec<StrategySummary>,
        }

        let report = JsonReport {
            config: &self.config,
            strategies: self.results.iter().map(StrategySummary::from).collect(),
        };
        let file = File::create(path).with_context(|| format!("cannot create report {path}"))?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

pub fn generate_puzzles<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<Vec<SlidingPuzzle>> {
    (0..config.trials)
        .map(|_| SlidingPuzzle::scrambled(config.size, config.random_moves, rng))
        .collect()
}

/// Solve every puzzle with one engine and collect the effort per solution
/// length.
pub fn solve_all<E: Search<SlidingPuzzle>>(
    engine: &mut E,
    strategy: Strategy,
    puzzles: &[SlidingPuzzle],
    max_length: usize,
) -> Results {
    let start_time = Instant::now();
    let mut results = Results::new(strategy, max_length);

    for (trial, puzzle) in puzzles.iter().enumerate() {
        debug!("Problem {trial}, initial state:\n{}", puzzle.initial());
        match engine.search(puzzle) {
            Some(solution) => {
                debug!("Solution: {solution:?}");
                results.add(solution.len(), engine.nodes_generated());
            }
            None => {
                warn!("Problem {trial} has no solution");
                results.unsolved += 1;
            }
        }
    }

    results.time_ms = start_time.elapsed().as_millis() as usize;
    results
}

fn run_strategy(strategy: Strategy, puzzles: &[SlidingPuzzle], max_length: usize) -> Results {
    match strategy {
        Strategy::UniformCost => solve_all(
            &mut BestFirstSearch::uniform_cost(),
            strategy,
            puzzles,
            max_length,
        ),
        Strategy::Manhattan => solve_all(
            &mut BestFirstSearch::a_star(ManhattanDistance),
            strategy,
            puzzles,
            max_length,
        ),
        Strategy::OutOfPlace => solve_all(
            &mut BestFirstSearch::a_star(OutOfPlace),
            strategy,
            puzzles,
            max_length,
        ),
    }
}

/// Generate the puzzle set once and solve it with every configured strategy.
#[instrument(skip_all, name = "experiment", fields(size = config.size, trials = config.trials))]
pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Report> {
    let puzzles = generate_puzzles(config, rng)?;
    info!(
        "Generated {} puzzles with {} random moves",
        puzzles.len(),
        config.random_moves
    );

    let results = config
        .strategies
        .iter()
        .map(|&strategy| {
            let results = run_strategy(strategy, &puzzles, config.random_moves);
            info!(
                "{strategy}: solved {} unsolved {} in {} ms",
                results.solved(),
                results.unsolved,
                results.time_ms
            );
            results
        })
        .collect();

    Ok(Report {
        config: config.clone(),
        results,
    })
}
