//! Trellis CLI - Command-line interface for Trellis
//!
//! Loads scene files into a graph, prints them, and runs breadth-first or
//! depth-first traversals over them.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trellis_graph::TraversalOrder;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(author = "Trellis Contributors")]
#[command(version)]
#[command(about = "Load, inspect, and traverse weighted directed graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Trellis in a directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print a scene's adjacency list
    Show {
        /// Scene file to load
        file: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List every edge, marking bidirectional pairs
    Edges {
        /// Scene file to load
        file: PathBuf,
    },

    /// Traverse the graph from a start node
    Traverse {
        /// Scene file to load
        file: PathBuf,

        /// Node id to start from
        #[arg(short, long)]
        start: i32,

        /// Traversal order (defaults to the configured order)
        #[arg(short, long, value_enum)]
        order: Option<Order>,

        /// Print each node as it is discovered
        #[arg(long)]
        trace: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the path with the fewest edges between two nodes
    Path {
        /// Scene file to load
        file: PathBuf,

        /// Node id to start from
        #[arg(long)]
        from: i32,

        /// Node id to reach
        #[arg(long)]
        to: i32,
    },

    /// Save a scene's graph as a snapshot
    Save {
        /// Scene file to load
        file: PathBuf,

        /// Snapshot directory (defaults to the configured store)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Print the saved snapshot
    Restore {
        /// Snapshot directory (defaults to the configured store)
        #[arg(long)]
        store: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    /// Breadth-first
    Bfs,
    /// Depth-first
    Dfs,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Bfs => TraversalOrder::BreadthFirst,
            Order::Dfs => TraversalOrder::DepthFirst,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        command => run(command),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Runs every command that reads the config. `init` stays outside so it can
/// rewrite a broken config file.
fn run(command: Commands) -> commands::Result<()> {
    let config = config::Config::load(&std::env::current_dir()?)?;
    if !config.color {
        colored::control::set_override(false);
    }

    match command {
        Commands::Init { path } => commands::init(&path),
        Commands::Show { file, json } => commands::show(&file, json),
        Commands::Edges { file } => commands::edges(&file),
        Commands::Traverse {
            file,
            start,
            order,
            trace,
            json,
        } => {
            let order = order.map_or(config.default_order, TraversalOrder::from);
            commands::traverse(&file, start, order, trace, json)
        }
        Commands::Path { file, from, to } => commands::path(&file, from, to),
        Commands::Save { file, store } => {
            commands::save(&file, &store.unwrap_or(config.store_path))
        }
        Commands::Restore { store } => commands::restore(&store.unwrap_or(config.store_path)),
    }
}
