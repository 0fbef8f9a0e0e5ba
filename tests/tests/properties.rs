//! Property tests over random refinement runs.

use std::collections::BTreeSet;

use meshgram_tests::prelude::*;
use proptest::prelude::*;

/// Seed at `(x, y)` with identifier `id`, then `bisections` rounds of P2.
/// Checks per-step invariants along the way.
fn refine(id: u64, x: f64, y: f64, bisections: usize) -> Result<MeshGraph, TestCaseError> {
    let engine = Engine::default();
    let mut graph = MeshGraph::seeded(VertexId(id), Vertex::seed(Position::new(x, y)));

    for production in std::iter::once(Production::P1)
        .chain(std::iter::repeat(Production::P2).take(bisections))
    {
        let Some(occurrence) = engine.find(&graph, production).unwrap() else {
            break;
        };
        // Matching is a pure function of the graph.
        prop_assert_eq!(engine.find(&graph, production).unwrap(), Some(occurrence.clone()));

        let before = graph.clone();
        let outcome = production.rewrite(&graph, &occurrence).unwrap();
        prop_assert_eq!(&graph, &before);

        let pivot = occurrence.pivot().unwrap();
        let pivot_before = before.vertex(pivot).unwrap();
        let pivot_after = outcome.graph.vertex(pivot).unwrap();
        prop_assert_eq!(Some(pivot_after.role), pivot_before.role.used());
        prop_assert_eq!(outcome.consumed, Some(pivot));

        let high_water = before.max_id().unwrap();
        for created in &outcome.created {
            prop_assert!(*created > high_water);
            prop_assert_eq!(outcome.graph.vertex(*created).unwrap().level, pivot_before.level + 1);
        }
        for (id, vertex) in before.vertices() {
            if id != pivot {
                prop_assert_eq!(outcome.graph.vertex(id), Some(vertex));
            }
        }
        for (u, v) in before.edges() {
            prop_assert!(outcome.graph.has_edge(u, v));
        }

        graph = outcome.graph;
        let next = engine.find(&graph, production).unwrap();
        prop_assert!(next.and_then(|o| o.pivot()) != Some(pivot));
    }
    Ok(graph)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_refinement_invariants(
        id in 0u64..1_000,
        x in -10.0f64..10.0,
        y in -10.0f64..10.0,
        bisections in 0usize..8,
    ) {
        let graph = refine(id, x, y, bisections)?;

        prop_assert_eq!(graph.count_role(Role::StartUsed), 1);
        // An unrefined element always remains, so every round applies.
        prop_assert_eq!(graph.count_role(Role::InteriorUsed), bisections);
        let levels: BTreeSet<u32> = graph.vertices().map(|(_, v)| v.level).collect();
        prop_assert!(levels.iter().copied().eq(0..levels.len() as u32));
    }

    #[test]
    fn prop_conform_is_idempotent(
        id in 0u64..1_000,
        bisections in 1usize..3,
    ) {
        let engine = Engine::default();
        let graph = refine(id, 0.5, 0.5, bisections)?;

        let (once, stats) = engine.conform(&graph).unwrap();
        prop_assert!(stats.fixpoint_reached);
        prop_assert_eq!(stats.merges, graph.vertex_count() - once.vertex_count());

        let (twice, again) = engine.conform(&once).unwrap();
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(again.merges, 0);
    }

    #[test]
    fn prop_second_merge_fails(
        bisections in 2usize..4,
    ) {
        let graph = refine(0, 0.5, 0.5, bisections)?;
        let Some(occurrence) = Production::P6.find(&graph).unwrap() else {
            return Ok(());
        };
        let outcome = Production::P6.rewrite(&graph, &occurrence).unwrap();
        let first = outcome.merged[0];

        let error = meshgram_production::merge(
            &outcome.graph,
            first.left,
            first.right,
            VertexId(first.survivor.raw() + 100),
        )
        .unwrap_err();
        prop_assert_eq!(
            error.graph_error(),
            Some(&GraphError::UnknownVertex(first.left))
        );
    }
}
