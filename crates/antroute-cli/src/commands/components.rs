//! List the connected components of a road map.

use anyhow::Result;
use antroute::prelude::*;
use colored::Colorize;
use std::path::Path;

use crate::roadmap::RoadMap;

pub fn run(map_path: &str) -> Result<()> {
    let map = RoadMap::load(Path::new(map_path))?;
    let components = connected_components(&map.edges()?);

    let title = map.name.as_deref().unwrap_or(map_path);
    println!(
        "{} {} has {} connected component(s)",
        "→".blue(),
        title.bold(),
        components.len().to_string().cyan()
    );

    for (i, component) in components.iter().enumerate() {
        let towns: Vec<String> = component.iter().map(|&town| map.town_name(town)).collect();
        println!(
            "  {} {} town(s): {}",
            format!("{}.", i + 1).blue(),
            component.len(),
            towns.join(", ")
        );
    }

    if components.len() > 1 {
        println!();
        println!(
            "{} Towns in different components never have a route between them",
            "•".yellow()
        );
    }

    Ok(())
}
