//! Road map files.
//!
//! ```json
//! {
//!   "name": "Lowlands",
//!   "towns": { "1": "Utrecht", "2": "Arnhem" },
//!   "roads": [ { "town_a": 1, "town_b": 2, "distance": 64 } ]
//! }
//! ```

use antroute::prelude::{Edge, NodeId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One undirected road between two towns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub town_a: u16,
    pub town_b: u16,
    pub distance: u16,
}

/// Towns and the roads between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadMap {
    #[serde(default)]
    pub name: Option<String>,
    /// Town names by id. Towns without a name print as their id.
    #[serde(default)]
    pub towns: BTreeMap<u16, String>,
    pub roads: Vec<Road>,
}

impl RoadMap {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read road map: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse road map: {}", path.display()))
    }

    /// Convert every road into an edge; a zero distance is an error.
    pub fn edges(&self) -> Result<Vec<Edge>> {
        self.roads
            .iter()
            .enumerate()
            .map(|(i, road)| {
                Edge::new(road.town_a, road.town_b, road.distance)
                    .with_context(|| format!("Invalid road #{}", i + 1))
            })
            .collect()
    }

    /// Display name of a town: its name when known, otherwise its id.
    pub fn town_name(&self, town: NodeId) -> String {
        self.towns
            .get(&town.0)
            .cloned()
            .unwrap_or_else(|| town.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "name": "Lowlands",
        "towns": { "1": "Utrecht", "2": "Arnhem" },
        "roads": [
            { "town_a": 1, "town_b": 2, "distance": 64 },
            { "town_a": 2, "town_b": 3, "distance": 20 }
        ]
    }"#;

    #[test]
    fn load_reads_towns_and_roads() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), SAMPLE).unwrap();

        let map = RoadMap::load(file.path()).unwrap();
        assert_eq!(map.name.as_deref(), Some("Lowlands"));
        assert_eq!(map.roads.len(), 2);

        let edges = map.edges().unwrap();
        assert_eq!(edges[0], Edge::new(2, 1, 64).unwrap());
        assert_eq!(map.town_name(NodeId(1)), "Utrecht");
        assert_eq!(map.town_name(NodeId(3)), "3");
    }

    #[test]
    fn towns_are_optional() {
        let map: RoadMap =
            serde_json::from_str(r#"{ "roads": [ { "town_a": 4, "town_b": 5, "distance": 1 } ] }"#)
                .unwrap();
        assert!(map.towns.is_empty());
        assert_eq!(map.edges().unwrap().len(), 1);
    }

    #[test]
    fn zero_distance_is_rejected_with_context() {
        let map = RoadMap {
            roads: vec![
                Road { town_a: 1, town_b: 2, distance: 3 },
                Road { town_a: 2, town_b: 3, distance: 0 },
            ],
            ..Default::default()
        };
        let err = map.edges().unwrap_err();
        assert!(err.to_string().contains("Invalid road #2"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RoadMap::load(Path::new("/nonexistent/map.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read road map"));
    }
}
