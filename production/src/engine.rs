//! Production engine.

use meshgram_graph::MeshGraph;
use meshgram_pattern::Occurrence;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{ProductionError, ProductionResult};
use crate::production::Production;

/// Merge productions in the order conform tries them.
const MERGE_ORDER: [Production; 2] = [Production::P6, Production::P7];

/// Statistics from one conform call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConformStats {
    /// Number of passes over the merge productions, including the last one.
    pub passes: usize,
    /// Production 6 applications.
    pub duplicated_sides: usize,
    /// Production 7 applications.
    pub duplicated_half_sides: usize,
    /// Vertex merges performed.
    pub merges: usize,
    /// Whether a pass ended with no merge production matching.
    pub fixpoint_reached: bool,
}

impl ConformStats {
    pub fn applications(&self) -> usize {
        self.duplicated_sides + self.duplicated_half_sides
    }
}

/// The production engine. Holds configuration only; graphs are passed in
/// and new graphs are returned.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// First occurrence of `production`, honoring the configured strategy.
    pub fn find(
        &self,
        graph: &MeshGraph,
        production: Production,
    ) -> ProductionResult<Option<Occurrence>> {
        Ok(production.find_with(graph, self.config.template_strategy)?)
    }

    /// Match then apply. `None` when the production does not match.
    pub fn step(
        &self,
        graph: &MeshGraph,
        production: Production,
    ) -> ProductionResult<Option<MeshGraph>> {
        let Some(occurrence) = self.find(graph, production)? else {
            debug!(%production, "no match");
            return Ok(None);
        };
        let rewritten = production.apply(graph, &occurrence)?;
        debug!(%production, occurrence = %occurrence, "production applied");
        Ok(Some(rewritten))
    }

    /// Apply merge productions until none matches, or once each when
    /// configured for a single pass.
    pub fn conform(&self, graph: &MeshGraph) -> ProductionResult<(MeshGraph, ConformStats)> {
        let mut current = graph.clone();
        let mut stats = ConformStats::default();

        loop {
            stats.passes += 1;
            let changed = self.merge_pass(&mut current, &mut stats)?;
            if !changed {
                stats.fixpoint_reached = true;
                break;
            }
            if !self.config.merge_to_fixpoint {
                break;
            }
            if stats.passes >= self.config.max_merge_passes {
                warn!(passes = stats.passes, "merge pass limit reached");
                return Err(ProductionError::merge_passes_exceeded(stats.passes));
            }
        }

        info!(
            passes = stats.passes,
            merges = stats.merges,
            vertices = current.vertex_count(),
            "mesh conformed"
        );
        Ok((current, stats))
    }

    /// Try each merge production once. Returns whether anything changed.
    fn merge_pass(
        &self,
        graph: &mut MeshGraph,
        stats: &mut ConformStats,
    ) -> ProductionResult<bool> {
        let mut changed = false;
        for production in MERGE_ORDER {
            let Some(occurrence) = self.find(graph, production)? else {
                continue;
            };
            let outcome = production.rewrite(graph, &occurrence)?;
            debug!(
                %production,
                pass = stats.passes,
                survivors = ?outcome.survivors(),
                "merge production applied"
            );
            stats.merges += outcome.merged.len();
            match production {
                Production::P6 => stats.duplicated_sides += 1,
                _ => stats.duplicated_half_sides += 1,
            }
            *graph = outcome.graph;
            changed = true;
        }
        Ok(changed)
    }
}
