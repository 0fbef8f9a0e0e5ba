//! Assertion types and builders for verifying step results.

use meshgram_core::geometry::positions_equal;
use meshgram_core::{Role, Vertex};
use meshgram_graph::MeshGraph;
use meshgram_pattern::coincidence::duplicate_pair_count;
use meshgram_pattern::isomorphic_by;

use crate::error::{ScenarioError, ScenarioResult};

/// Vertex equivalence used for graph comparison: same role and level, and
/// positions within tolerance or both absent.
pub fn same_vertex(left: &Vertex, right: &Vertex) -> bool {
    left.role == right.role
        && left.level == right.level
        && match (left.position, right.position) {
            (Some(p), Some(q)) => positions_equal(p, q),
            (None, None) => true,
            _ => false,
        }
}

/// Panic unless `actual` and `expected` are isomorphic under [`same_vertex`].
#[track_caller]
pub fn assert_isomorphic(actual: &MeshGraph, expected: &MeshGraph) {
    if !isomorphic_by(actual, expected, same_vertex) {
        panic!(
            "graphs are not isomorphic\n  actual:   {} vertices, {} edges, roles {:?}\n  expected: {} vertices, {} edges, roles {:?}",
            actual.vertex_count(),
            actual.edge_count(),
            role_counts(actual),
            expected.vertex_count(),
            expected.edge_count(),
            role_counts(expected),
        );
    }
}

fn role_counts(graph: &MeshGraph) -> Vec<(char, usize)> {
    Role::ALL
        .into_iter()
        .map(|role| (role.symbol(), graph.count_role(role)))
        .filter(|&(_, n)| n > 0)
        .collect()
}

/// A complete assertion for a step result.
#[derive(Default)]
pub struct Assertion {
    // Graph shape
    pub vertices: Option<usize>,
    pub edges: Option<usize>,
    pub roles: Vec<(Role, usize)>,
    pub duplicates: Option<usize>,
    pub isomorphic_to: Option<MeshGraph>,

    // Match outcome
    pub no_match: bool,

    // Error assertions
    pub error: Option<String>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&MeshGraph) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .field("roles", &self.roles)
            .field("duplicates", &self.duplicates)
            .field("isomorphic_to", &self.isomorphic_to.is_some())
            .field("no_match", &self.no_match)
            .field("error", &self.error)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a step result. `Ok(None)` means the
    /// production found no match.
    pub fn verify(
        &self,
        step: &str,
        result: &Result<Option<MeshGraph>, String>,
    ) -> ScenarioResult<()> {
        // Check error expectations first
        if let Some(ref expected_error) = self.error {
            return match result {
                Err(msg) if msg.contains(expected_error) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', got: {}",
                        expected_error, msg
                    ),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', but step succeeded",
                        expected_error
                    ),
                )),
            };
        }

        let result = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("step failed: {}", msg)))?;

        let graph = match (result, self.no_match) {
            (None, true) => return Ok(()),
            (Some(_), true) => {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "expected no match, but the production applied",
                ))
            }
            (None, false) => {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "production did not match",
                ))
            }
            (Some(graph), false) => graph,
        };

        if let Some(ref custom) = self.custom {
            if !custom(graph) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "custom assertion failed",
                ));
            }
        }

        self.verify_graph(step, graph)
    }

    fn verify_graph(&self, step: &str, graph: &MeshGraph) -> ScenarioResult<()> {
        if let Some(expected) = self.vertices {
            if graph.vertex_count() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected {} vertices, got {}",
                        expected,
                        graph.vertex_count()
                    ),
                ));
            }
        }

        if let Some(expected) = self.edges {
            if graph.edge_count() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} edges, got {}", expected, graph.edge_count()),
                ));
            }
        }

        for &(role, expected) in &self.roles {
            let actual = graph.count_role(role);
            if actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} {:?} vertices, got {}", expected, role, actual),
                ));
            }
        }

        if let Some(expected) = self.duplicates {
            let actual = duplicate_pair_count(graph, graph.vertex_ids());
            if actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} duplicate pairs, got {}", expected, actual),
                ));
            }
        }

        if let Some(ref expected) = self.isomorphic_to {
            if !isomorphic_by(graph, expected, same_vertex) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "graph is not isomorphic to the expected one\n  expected: {} vertices, {} edges\n  actual:   {} vertices, {} edges",
                        expected.vertex_count(),
                        expected.edge_count(),
                        graph.vertex_count(),
                        graph.edge_count()
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for fluent assertion construction.
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self {
            assertion: Assertion::new(),
        }
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    pub fn vertices(mut self, n: usize) -> Self {
        self.assertion.vertices = Some(n);
        self
    }

    pub fn edges(mut self, n: usize) -> Self {
        self.assertion.edges = Some(n);
        self
    }

    /// Expect exactly `n` vertices with `role`.
    pub fn role(mut self, role: Role, n: usize) -> Self {
        self.assertion.roles.push((role, n));
        self
    }

    /// Expect exactly `n` coincident pairs across the whole graph.
    pub fn duplicates(mut self, n: usize) -> Self {
        self.assertion.duplicates = Some(n);
        self
    }

    pub fn isomorphic_to(mut self, expected: MeshGraph) -> Self {
        self.assertion.isomorphic_to = Some(expected);
        self
    }

    pub fn no_match(mut self) -> Self {
        self.assertion.no_match = true;
        self
    }

    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    pub fn assert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&MeshGraph) -> bool + Send + Sync + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use meshgram_core::Position;

    #[test]
    fn test_same_vertex_tolerance() {
        let a = Vertex::new(Role::Exterior, Position::new(0.5, 0.5), 2);
        let b = Vertex::new(Role::Exterior, Position::new(0.5 + 1e-7, 0.5), 2);
        let c = Vertex::new(Role::Exterior, Position::new(0.5, 0.5), 1);
        let d = Vertex::unplaced(Role::Exterior, 2);

        assert!(same_vertex(&a, &b));
        assert!(!same_vertex(&a, &c));
        assert!(!same_vertex(&a, &d));
        assert!(same_vertex(&d, &d));
    }

    #[test]
    fn test_verify_counts() {
        let graph = fixtures::seeded_quad().build();
        let assertion = AssertionBuilder::new()
            .vertices(7)
            .edges(13)
            .role(Role::Exterior, 4)
            .duplicates(0)
            .build();

        assert!(assertion.verify("quad", &Ok(Some(graph.clone()))).is_ok());
        assert!(assertion.verify("quad", &Ok(None)).is_err());

        let wrong = AssertionBuilder::new().edges(12).build();
        let err = wrong.verify("quad", &Ok(Some(graph))).unwrap_err();
        assert!(err.to_string().contains("expected 12 edges, got 13"));
    }

    #[test]
    fn test_verify_no_match_and_error() {
        let no_match = AssertionBuilder::new().no_match().build();
        assert!(no_match.verify("none", &Ok(None)).is_ok());

        let error = AssertionBuilder::new().error("Vertex not found").build();
        assert!(error
            .verify("err", &Err("Vertex not found: v3".to_string()))
            .is_ok());
        assert!(error.verify("err", &Ok(None)).is_err());
    }
}
