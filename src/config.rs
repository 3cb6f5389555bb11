//! Command-line configuration
//!
//! [`Cli`] is the clap-derived argument surface. Selectors and values are
//! taken as plain strings and validated in [`Cli::into_config`], so every
//! problem with them is reported as a [`VizError`] naming the bad input.

use crate::algorithms::searching::SearchAlgorithm;
use crate::algorithms::sorting::{PivotPolicy, SortAlgorithm};
use crate::constants::DEFAULT_SPEED;
use crate::errors::VizError;
use crate::frame::Token;
use crate::input::{parse_edges, parse_int, parse_ints, parse_tokens};
use crate::playback::Speed;
use crate::scenario::{Scenario, TreeStructure};
use crate::structures::{
    GraphAlgorithm, HeapOperation, ListKind, ListOperation, SequenceOperation, TreeOperation,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "algotty",
    about = "Step through data-structure and algorithm animations in the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Autoplay speed in steps per second (1-10)
    #[arg(long, global = true, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Print frames as JSON lines instead of opening the viewer
    #[arg(long, global = true)]
    pub json: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `algotty=trace` (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort an integer array.
    Sort(SortArgs),

    /// Search an integer array.
    Search(SearchArgs),

    /// Operate on a singly, doubly or circular linked list.
    List(ListArgs),

    /// Push or pop on a stack.
    Stack(SequenceArgs),

    /// Enqueue or dequeue on a queue.
    Queue(SequenceArgs),

    /// Operate on a BST, AVL tree or binary heap.
    Tree(TreeArgs),

    /// Traverse a graph.
    Graph(GraphArgs),
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// insertion, bubble, selection, merge, quick, heap, counting, radix
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: String,

    /// Comma-separated integers
    #[arg(short, long, default_value = "38, 27, 43, 3, 9, 82, 10")]
    pub values: String,

    /// Quick sort pivot: last, first, median3, random
    #[arg(long, default_value = "last")]
    pub pivot: String,

    /// Seed for the random pivot policy
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// linear, binary, rotated
    #[arg(short, long, default_value = "binary")]
    pub algorithm: String,

    /// Comma-separated integers
    #[arg(short, long, default_value = "1, 3, 4, 7, 9, 12, 15")]
    pub values: String,

    #[arg(short, long, default_value = "7", allow_hyphen_values = true)]
    pub target: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// singly, doubly, circular
    #[arg(short, long, default_value = "singly")]
    pub kind: String,

    /// Initial contents, comma-separated
    #[arg(short, long, default_value = "1, 2, 3")]
    pub values: String,

    /// insert-head, insert-tail, search, delete
    #[arg(short, long, default_value = "insert-head")]
    pub operation: String,

    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[derive(Debug, Args)]
pub struct SequenceArgs {
    /// Initial contents, comma-separated (bottom/front first)
    #[arg(short, long, default_value = "1, 2, 3")]
    pub values: String,

    /// push/enqueue or pop/dequeue
    #[arg(short, long)]
    pub operation: String,

    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// bst, avl, min-heap, max-heap
    #[arg(short, long, default_value = "bst")]
    pub kind: String,

    /// Initial values, comma-separated
    #[arg(short, long, default_value = "50, 30, 70, 20, 40, 60, 80")]
    pub values: String,

    /// build, insert, delete, search (trees) or build, insert, delete, extract (heaps)
    #[arg(short, long, default_value = "build")]
    pub operation: String,

    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[derive(Debug, Args)]
pub struct GraphArgs {
    /// bfs, dfs, dijkstra
    #[arg(short, long, default_value = "bfs")]
    pub algorithm: String,

    /// Comma-separated edges: u-v or u-v:w
    #[arg(short, long, default_value = "0-1:4, 0-2:1, 2-1:2, 1-3:5, 2-3:8, 3-4:3")]
    pub edges: String,

    /// Treat edges as one-way
    #[arg(long)]
    pub directed: bool,

    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub start: String,
}

/// Everything `main` needs after argument validation
#[derive(Debug)]
pub struct Config {
    pub scenario: Scenario,
    pub speed: Speed,
    pub json: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

fn pivot_policy(name: &str, seed: Option<u64>) -> Result<PivotPolicy, VizError> {
    match name.parse::<PivotPolicy>()? {
        PivotPolicy::Random { .. } => Ok(PivotPolicy::Random { seed }),
        policy => Ok(policy),
    }
}

fn opt_int(value: Option<&str>) -> Result<Option<i64>, VizError> {
    value.map(parse_int).transpose()
}

impl Commands {
    pub fn into_scenario(self) -> Result<Scenario, VizError> {
        let scenario = match self {
            Commands::Sort(args) => Scenario::Sort {
                algorithm: args.algorithm.parse::<SortAlgorithm>()?,
                values: parse_ints(&args.values)?,
                pivot: pivot_policy(&args.pivot, args.seed)?,
            },
            Commands::Search(args) => Scenario::Search {
                algorithm: args.algorithm.parse::<SearchAlgorithm>()?,
                values: parse_ints(&args.values)?,
                target: parse_int(&args.target)?,
            },
            Commands::List(args) => Scenario::List {
                kind: args.kind.parse::<ListKind>()?,
                seed: parse_tokens(&args.values),
                operation: ListOperation::parse(
                    &args.operation,
                    args.value.as_deref().map(Token::parse),
                )?,
            },
            Commands::Stack(args) => Scenario::Stack {
                seed: parse_tokens(&args.values),
                operation: SequenceOperation::parse(
                    &args.operation,
                    args.value.as_deref().map(Token::parse),
                )?,
            },
            Commands::Queue(args) => Scenario::Queue {
                seed: parse_tokens(&args.values),
                operation: SequenceOperation::parse(
                    &args.operation,
                    args.value.as_deref().map(Token::parse),
                )?,
            },
            Commands::Tree(args) => {
                let seed = parse_ints(&args.values)?;
                let value = opt_int(args.value.as_deref())?;
                match args.kind.parse::<TreeStructure>()? {
                    TreeStructure::Search(kind) => Scenario::Tree {
                        kind,
                        seed,
                        operation: TreeOperation::parse(&args.operation, value)?,
                    },
                    TreeStructure::Heap(order) => Scenario::Heap {
                        order,
                        seed,
                        operation: HeapOperation::parse(&args.operation, value)?,
                    },
                }
            }
            Commands::Graph(args) => Scenario::Graph {
                algorithm: args.algorithm.parse::<GraphAlgorithm>()?,
                edges: parse_edges(&args.edges)?,
                directed: args.directed,
                start: parse_int(&args.start)?,
            },
        };
        Ok(scenario)
    }
}

impl Cli {
    pub fn into_config(self) -> Result<Config, VizError> {
        Ok(Config {
            scenario: self.command.into_scenario()?,
            speed: Speed::new(self.speed),
            json: self.json,
            log_file: self.log_file,
            log_level: self.log_level,
        })
    }
}
