use crate::puzzle::Board;

use anyhow::{anyhow, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[clap(help = "Uniform-cost search, path cost only.")]
    UniformCost,
    #[clap(help = "A* with the sum of tile distances to their home squares.")]
    Manhattan,
    #[clap(help = "A* with the number of misplaced tiles.")]
    OutOfPlace,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::UniformCost => "uniform-cost",
            Strategy::Manhattan => "manhattan",
            Strategy::OutOfPlace => "out-of-place",
        };
        f.write_str(name)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "N-Puzzle Search",
    about = "Compare best-first search heuristics on random sliding-block puzzles.",
    version = "0.1"
)]
pub struct Cli {
    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Width and height of the board")]
    pub size: Option<usize>,

    #[arg(long, help = "Number of puzzles to solve")]
    pub trials: Option<usize>,

    #[arg(long, help = "Random moves used to scramble each puzzle")]
    pub random_moves: Option<usize>,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,

    #[arg(long, help = "Search strategies to compare", value_delimiter = ',')]
    pub strategies: Vec<Strategy>,

    #[arg(long, help = "Path to write the JSON report to")]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub size: usize,
    pub trials: usize,
    pub random_moves: usize,
    pub seed: u64,
    pub strategies: Vec<Strategy>,
    pub output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: 3,
            trials: 300,
            random_moves: 20,
            seed: 0,
            strategies: vec![Strategy::Manhattan, Strategy::OutOfPlace],
            output_path: None,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Values given on the command line win over the ones from the file.
    pub fn override_from_command_line(mut self, cli: &Cli) -> Result<Self> {
        if let Some(size) = cli.size {
            self.size = size;
        }
        if let Some(trials) = cli.trials {
            self.trials = trials;
        }
        if let Some(random_moves) = cli.random_moves {
            self.random_moves = random_moves;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if !cli.strategies.is_empty() {
            self.strategies = cli.strategies.clone();
        }
        if let Some(output_path) = cli.output_path.as_ref() {
            self.output_path = Some(output_path.clone());
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        Board::check_size(self.size)?;

        if self.trials == 0 {
            return Err(anyhow!("Number of trials must be positive"));
        }

        if self.strategies.is_empty() {
            return Err(anyhow!("At least one search strategy is required"));
        }

        Ok(())
    }
}
