use antroute_runtime::prelude::*;
use proptest::prelude::*;

fn road_map() -> impl Strategy<Value = Vec<(u16, u16, u16)>> {
    proptest::collection::vec((0..12u16, 0..12u16, 1..30u16), 0..30)
}

fn small_config() -> ColonyConfig {
    ColonyConfig::default().with_rounds(4).with_ants_per_round(6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_found_paths_use_input_roads(
        triples in road_map(),
        start in 0..14u16,
        destination in 0..14u16,
        seed in any::<u64>(),
    ) {
        let edges = Edge::from_triples(&triples).unwrap();
        let outcome = search(
            NodeId(start),
            NodeId(destination),
            &edges,
            small_config(),
            &mut SimRng::new(seed),
        )
        .unwrap();

        prop_assert_eq!(outcome.snapshots.len(), 5);
        prop_assert_eq!(outcome.path.is_some(), outcome.route.is_some());

        if let Some(path) = &outcome.path {
            prop_assert_eq!(path.start(), NodeId(start));
            prop_assert_eq!(path.end(), NodeId(destination));
            for (from, to) in path.hops() {
                prop_assert!(
                    edges.iter().any(|e| e.connects(from, to)),
                    "hop {} -> {} is not a road", from, to
                );
            }
            let mut seen = path.nodes().to_vec();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), path.len());
        }
    }

    #[test]
    fn prop_pheromone_never_negative(
        triples in road_map(),
        start in 0..12u16,
        destination in 0..12u16,
        seed in any::<u64>(),
    ) {
        let edges = Edge::from_triples(&triples).unwrap();
        let mut colony = Colony::from_config(&edges, small_config()).unwrap();
        let snapshots = colony.run(NodeId(start), NodeId(destination), &mut SimRng::new(seed));

        for snapshot in &snapshots {
            for level in &snapshot.levels {
                prop_assert!(level.pheromone > 0.0);
                prop_assert!(level.pheromone.is_finite());
            }
        }
        for (_, _, trail) in colony.graph().directed_trails() {
            prop_assert!(trail.pheromone >= 0.0);
        }
    }

    #[test]
    fn prop_extraction_is_deterministic(
        triples in road_map(),
        start in 0..12u16,
        destination in 0..12u16,
        seed in any::<u64>(),
    ) {
        let edges = Edge::from_triples(&triples).unwrap();
        let mut colony = Colony::from_config(&edges, small_config()).unwrap();
        colony.run(NodeId(start), NodeId(destination), &mut SimRng::new(seed));

        prop_assert_eq!(
            colony.best_path(NodeId(start), NodeId(destination)),
            colony.best_path(NodeId(start), NodeId(destination))
        );
    }

    #[test]
    fn prop_no_route_between_components(
        triples in road_map(),
        seed in any::<u64>(),
    ) {
        // Shift every road into 20..32 and add an island at 40 - 41
        let mut shifted: Vec<(u16, u16, u16)> =
            triples.iter().map(|&(a, b, c)| (a + 20, b + 20, c)).collect();
        shifted.push((40, 41, 1));
        let edges = Edge::from_triples(&shifted).unwrap();

        let outcome = search(NodeId(40), NodeId(20), &edges, small_config(), &mut SimRng::new(seed))
            .unwrap();
        prop_assert!(!outcome.found());
        prop_assert_eq!(outcome.stats.successful_ants, 0);
    }
}
