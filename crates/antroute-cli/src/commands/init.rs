//! Initialize a new AntRoute project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing AntRoute project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} AntRoute project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} antroute components <map.json>", "1.".blue());
    println!("  {} antroute search <map.json> --from 1 --to 2", "2.".blue());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_default_config() {
        let dir = TempDir::new().unwrap();
        run(Some(dir.path().to_string_lossy().into_owned())).unwrap();

        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[colony]\nrounds = 3\n").unwrap();

        run(Some(dir.path().to_string_lossy().into_owned())).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().colony.rounds, 3);
    }
}
