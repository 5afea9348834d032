//! avl-demo - walks an `AvlMap` through a batch of inserts and removes
//!
//! Every step is followed by `is_ordered` and `is_balanced`, so a run that finishes
//! successfully is also a small smoke test of the map.
//!
//! # Usage
//!
//! ```bash
//! # Insert 0..1000 in ascending order (the worst case for a plain BST)
//! avl-demo --count 1000 --order ascending
//!
//! # Random order, reproducible, showing every rotation
//! RUST_LOG=avl=trace avl-demo --count 20 --order random --seed 7
//! ```

use anyhow::{ensure, Result};
use avl::{AvlMap, Error};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Build an AVL-backed map, check its invariants at every step, then tear it down
#[derive(Parser, Debug)]
#[command(name = "avl-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of keys to insert
    #[arg(short, long, default_value_t = 1000)]
    count: u32,

    /// Order in which the keys are inserted
    #[arg(long, value_enum, default_value = "ascending")]
    order: KeyOrder,

    /// Seed for the random insertion order and the removal order
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KeyOrder {
    Ascending,
    Descending,
    Random,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut keys: Vec<u32> = (0..cli.count).collect();
    match cli.order {
        KeyOrder::Ascending => {}
        KeyOrder::Descending => keys.reverse(),
        KeyOrder::Random => keys.shuffle(&mut rng),
    }

    let mut map = AvlMap::new();
    for &key in &keys {
        map.insert(key, key.to_string());
        check(&map)?;
    }
    info!(len = map.len(), height = map.height(), order = ?cli.order, "built map");
    println!(
        "inserted {} keys in {:?} order: height {}",
        map.len(),
        cli.order,
        map.height()
    );

    successor_scenario()?;

    match map.update(&0, "zero".to_string()) {
        Ok(old) => println!("updated key 0 (was {old:?})"),
        Err(Error::NotFound) => println!("key 0 is not in the map"),
    }
    if let Err(err) = map.update(&cli.count, "missing".to_string()) {
        warn!(key = cli.count, %err, "update refused");
        println!("updating key {}: {err}", cli.count);
    }

    keys.shuffle(&mut rng);
    for key in &keys {
        ensure!(map.remove(key).is_some(), "key {key} vanished before it was removed");
        check(&map)?;
    }
    ensure!(map.remove(&cli.count).is_none(), "removed a key that was never inserted");
    ensure!(map.is_empty(), "map still has {} entries", map.len());

    info!("removed every key");
    println!("removed every key in random order: map is empty");
    Ok(())
}

/// Builds the map from `[5, 3, 8, 1, 4, 7, 9]` and removes 3, a node with two children, so its
/// in-order successor takes its place.
fn successor_scenario() -> Result<()> {
    let mut map: AvlMap<_, _> = [5, 3, 8, 1, 4, 7, 9].into_iter().map(|k| (k, ())).collect();
    map.remove(&3);
    check(&map)?;

    let keys: Vec<_> = map.keys().copied().collect();
    ensure!(keys == [1, 4, 5, 7, 8, 9], "unexpected keys after removing 3: {keys:?}");
    println!("removed 3 from [5, 3, 8, 1, 4, 7, 9]: {keys:?}");
    Ok(())
}

fn check<K: Ord, V>(map: &AvlMap<K, V>) -> Result<()> {
    ensure!(map.is_ordered(), "keys are out of order");
    ensure!(map.is_balanced(), "a node has a balance factor outside of -1..=1");
    Ok(())
}
