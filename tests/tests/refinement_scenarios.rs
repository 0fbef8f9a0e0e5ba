//! Whole refinement runs through the engine: seed, refine, conform.

use meshgram_tests::prelude::*;
use pretty_assertions::assert_eq;

fn refined_twice() -> MeshGraph {
    Scenario::new("refined_twice")
        .start(fixtures::seed().build())
        .step(Production::P1, |a| a)
        .step(Production::P2, |a| a)
        .step(Production::P2, |a| a.duplicates(3))
        .run()
        .unwrap()
}

mod seed_refine_conform {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("seed_refine_conform")
            .start(fixtures::seed().build())
            .step(Production::P1, |a| a.vertices(7).edges(13))
            .step(Production::P2, |a| a.vertices(13).edges(26))
            .step(Production::P2, |a| a.vertices(19).edges(39).duplicates(3))
            .conform(|a| {
                a.vertices(16)
                    .edges(37)
                    .duplicates(0)
                    .isomorphic_to(fixtures::conforming_refined_quad().build())
            })
            .conform(|a| a.vertices(16).edges(37))
            .step(Production::P6, |a| a.no_match())
            .step(Production::P7, |a| a.no_match())
    }

    #[test]
    fn test_seed_refine_conform() {
        init_tracing();
        scenario().run().unwrap();
    }
}

// ========== TEST: conform_stats ==========
#[test]
fn test_conform_stats() {
    // GIVEN
    let graph = refined_twice();

    // WHEN
    let (conformed, stats) = Engine::default().conform(&graph).unwrap();

    // THEN one duplicated side, three merges, then a quiet pass
    assert_eq!(
        stats,
        ConformStats {
            passes: 2,
            duplicated_sides: 1,
            duplicated_half_sides: 0,
            merges: 3,
            fixpoint_reached: true,
        }
    );
    let merged: Vec<u64> = conformed
        .vertex_ids()
        .map(|id| id.raw())
        .filter(|&id| id > 18)
        .collect();
    assert_eq!(merged, vec![19, 20, 21]);
}

// ========== TEST: conform_single_pass ==========
#[test]
fn test_conform_single_pass() {
    // GIVEN
    let graph = refined_twice();
    let engine = Engine::new(EngineConfig::single_pass());

    // WHEN
    let (once, stats) = engine.conform(&graph).unwrap();

    // THEN the pass merged but did not confirm the fixpoint
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.applications(), 1);
    assert!(!stats.fixpoint_reached);
    assert_eq!(once.vertex_count(), 16);

    let (again, stats) = engine.conform(&once).unwrap();
    assert_eq!(again, once);
    assert!(stats.fixpoint_reached);
}

mod pass_limit {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("pass_limit")
            .config(EngineConfig::new().with_max_merge_passes(1))
            .start(refined_twice())
            .conform(|a| a.error("did not settle after 1 passes"))
    }

    #[test]
    fn test_pass_limit_is_reported() {
        scenario().run().unwrap();
    }
}

// ========== TEST: conform_without_duplicates ==========
#[test]
fn test_conform_without_duplicates() {
    // GIVEN a mesh that is already conforming
    let graph = fixtures::conforming_refined_quad().build();

    // WHEN
    let (conformed, stats) = Engine::new(EngineConfig::new().with_max_merge_passes(1))
        .conform(&graph)
        .unwrap();

    // THEN nothing changes, even under the tightest pass limit
    assert_eq!(conformed, graph);
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.merges, 0);
    assert!(stats.fixpoint_reached);
}

// ========== TEST: refine_after_conform ==========
#[test]
fn test_refine_after_conform() {
    init_tracing();
    // GIVEN a conforming level-2 mesh
    let engine = Engine::default();
    let (conformed, _) = engine.conform(&refined_twice()).unwrap();

    // WHEN the four level-2 elements are each bisected
    let mut graph = conformed;
    for _ in 0..4 {
        graph = engine.step(&graph, Production::P2).unwrap().unwrap();
    }

    // THEN all elements are used and every new vertex lives on level 3
    assert_eq!(graph.count_role(Role::InteriorUsed), 6);
    assert_eq!(graph.count_role(Role::Interior), 8);
    assert!(graph
        .vertices_with_role(Role::Interior)
        .all(|id| graph.vertex(id).unwrap().level == 3));
}
