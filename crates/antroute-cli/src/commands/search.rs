//! Search for a route between two towns.

use anyhow::{bail, Context, Result};
use antroute::prelude::*;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::roadmap::RoadMap;

/// Flags of `antroute search`.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub from: u16,
    pub to: u16,
    pub seed: Option<u64>,
    pub rounds: Option<usize>,
    pub ants: Option<usize>,
    pub snapshots: Option<String>,
}

/// A search outcome and the seed that reproduces it.
#[derive(Debug)]
pub struct SearchReport {
    pub seed: u64,
    pub outcome: SearchOutcome,
}

pub fn run(map_path: &str, args: SearchArgs, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let map = RoadMap::load(Path::new(map_path))?;

    println!(
        "{} Searching {} → {} over {} roads...",
        "→".blue(),
        map.town_name(NodeId(args.from)).cyan(),
        map.town_name(NodeId(args.to)).cyan(),
        map.roads.len().to_string().cyan()
    );

    let colony_config = colony_config(&config, &args);
    let pb = ProgressBar::new(colony_config.rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rounds {msg}")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    let report = execute(&map, &config, &args, |round| {
        if verbose {
            pb.set_message(format!(
                "{} arrived, {} lost",
                round.successful_ants, round.failed_ants
            ));
        }
        pb.inc(1);
    })?;
    pb.finish_with_message("done");

    let outcome = &report.outcome;
    println!();
    match &outcome.route {
        Some(route) if route.is_empty() => {
            println!("{} Already at {}", "✓".green().bold(), map.town_name(NodeId(args.from)));
        }
        Some(route) => {
            println!("{} Route found:", "✓".green().bold());
            for edge in route {
                println!(
                    "  {} → {} ({})",
                    map.town_name(edge.node_a()),
                    map.town_name(edge.node_b()),
                    edge.cost().to_string().cyan()
                );
            }
            if let Some(cost) = outcome.route_cost() {
                println!("  Total: {}", cost.to_string().cyan().bold());
            }
        }
        None => {
            println!("{} No route found", "✗".red().bold());
        }
    }

    let stats = &outcome.stats;
    println!(
        "  Ants: {} arrived, {} lost ({:.0}%)",
        stats.successful_ants.to_string().cyan(),
        stats.failed_ants.to_string().cyan(),
        stats.success_rate() * 100.0
    );
    println!("  Seed: {}", report.seed.to_string().cyan());

    let output = args.snapshots.clone().or_else(|| config.search.snapshot_output.clone());
    if let Some(output) = output {
        write_snapshots(Path::new(&output), &outcome.snapshots)?;
        println!(
            "  {} Wrote {} snapshots to {}",
            "✓".green(),
            outcome.snapshots.len(),
            output
        );
    }

    Ok(())
}

/// Run the colony for `args` over `map`, calling `on_round` after each round.
pub fn execute<F>(map: &RoadMap, config: &Config, args: &SearchArgs, on_round: F) -> Result<SearchReport>
where
    F: FnMut(&RoundStats),
{
    // 0 is the "no town selected" id of the map format
    if args.from == 0 || args.to == 0 {
        bail!("Town id 0 is reserved; pick towns with ids from 1");
    }

    let edges = map.edges()?;
    let mut rng = match args.seed.or(config.search.seed) {
        Some(seed) => SimRng::new(seed),
        None => SimRng::from_entropy(),
    };
    debug!(seed = rng.seed(), "search seed");

    let outcome = search_with(
        NodeId(args.from),
        NodeId(args.to),
        &edges,
        colony_config(config, args),
        &mut rng,
        on_round,
    )
    .context("Invalid colony configuration")?;

    Ok(SearchReport {
        seed: rng.seed(),
        outcome,
    })
}

/// Project config with command-line overrides applied.
fn colony_config(config: &Config, args: &SearchArgs) -> ColonyConfig {
    let mut colony = config.colony.clone();
    if let Some(rounds) = args.rounds {
        colony.rounds = rounds;
    }
    if let Some(ants) = args.ants {
        colony.ants_per_round = ants;
    }
    colony
}

fn write_snapshots(path: &Path, snapshots: &[Snapshot]) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshots).context("Failed to serialize snapshots")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshots: {}", path.display()))
}
