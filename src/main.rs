use std::time::Instant;

use anyhow::{Context, Result};
use avl_builder::AvlTree;
use clap::Parser;
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

const SEED: u64 = 54783;

#[derive(Parser, Debug)]
#[command(
    name = "avl-builder",
    about = "Build an AVL tree from a key sequence and report its shape"
)]
struct Cli {
    /// Keys to insert, in order.
    #[arg(allow_negative_numbers = true, conflicts_with = "random")]
    keys: Vec<i32>,

    /// Insert the keys 0..N in a seeded random order instead.
    #[arg(long, value_name = "N")]
    random: Option<i32>,

    /// Seed for --random.
    #[arg(long, default_value_t = SEED)]
    seed: u64,

    /// Skip the preorder listing.
    #[arg(short, long)]
    quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn shuffled_keys(count: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys: Vec<i32> = (0..count).collect();
    keys.shuffle(&mut rng);
    keys
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let keys = match cli.random {
        Some(count) => shuffled_keys(count, cli.seed),
        None => cli.keys,
    };

    println!("*** Iterative AVL tree construction ***");
    let start = Instant::now();
    let tree = AvlTree::from_keys(&keys).context("failed to build AVL tree")?;
    let build_duration = start.elapsed();

    if !cli.quiet {
        println!("\n--- Preorder ---");
        tree.print_preorder().context("failed to walk AVL tree")?;
    }

    println!("\n--- Summary ({} keys) ---", keys.len());
    println!("Build took:  {:>12.2?}", build_duration);
    println!("Nodes:       {:>12}", tree.len());
    if let Some(root) = tree.root() {
        println!("Root key:    {:>12}", root.key());
        println!("Root height: {:>12}", root.height());
    }
    tree.check().context("AVL invariant broken")?;
    println!("Invariants:  {:>12}", "ok");

    let released = tree.destroy().context("failed to destroy AVL tree")?;
    println!("Released:    {:>12}", released);
    Ok(())
}
