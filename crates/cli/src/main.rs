//! Sheetcraft CLI - Main entry point.
//!
//! Walks an actor through the item activation lifecycle and prints the
//! sheet after each step. With no arguments a built-in cloak scenario
//! runs; pass an actor JSON file and an item JSON file to replay the
//! walkthrough over your own data.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod fixtures;
mod report;

use sheetcraft_domain::{Actor, Item};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetcraft=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sheetcraft");

    let mut args = std::env::args().skip(1);
    let actor = match args.next() {
        Some(path) => load_actor(Path::new(&path))?,
        None => fixtures::sample_actor()?,
    };
    let item = match args.next() {
        Some(path) => load_item(Path::new(&path))?,
        None => fixtures::sample_item()?,
    };

    run_walkthrough(actor, item);
    Ok(())
}

fn load_actor(path: &Path) -> anyhow::Result<Actor> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read actor file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse actor file {}", path.display()))
}

fn load_item(path: &Path) -> anyhow::Result<Item> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read item file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse item file {}", path.display()))
}

fn run_walkthrough(mut actor: Actor, item: Item) {
    let item_name = item.name.clone();

    println!("== {}: starting sheet ==", actor.name());
    report::print_sheet(&actor);

    let id = actor.add_item(item, Utc::now());
    tracing::info!(item = %item_name, "Item added to inventory");
    println!();
    println!("== {}: items ==", actor.name());
    report::print_items(&actor);

    if actor.enable_item(id) {
        tracing::info!(item = %item_name, "Item activated");
    }
    println!();
    println!("== {}: sheet with {} active ==", actor.name(), item_name);
    report::print_sheet(&actor);

    if actor.disable_item(id) {
        tracing::info!(item = %item_name, "Item deactivated");
    }
    println!();
    println!("== {}: sheet with {} inactive ==", actor.name(), item_name);
    report::print_sheet(&actor);
}
