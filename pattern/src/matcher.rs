//! Pattern matcher.

use meshgram_core::geometry::{distance, midpoint, positions_equal};
use meshgram_core::{GraphResult, Position, Role, VertexId, EPSILON};
use meshgram_graph::MeshGraph;
use tracing::{debug, trace};

use crate::binding::{Occurrence, PIVOT};
use crate::shape::{Corner, ElementShape, ShapeOp};
use crate::template::{find_template, Template, TemplateStrategy};

/// Corner assignments in lexicographic permutation order.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Pattern matcher over one graph snapshot.
pub struct Matcher<'g> {
    graph: &'g MeshGraph,
}

impl<'g> Matcher<'g> {
    /// Create a new matcher.
    pub fn new(graph: &'g MeshGraph) -> Self {
        Self { graph }
    }

    /// First unrefined seed vertex, ascending by id.
    pub fn find_start(&self) -> Option<Occurrence> {
        let pivot = self.graph.vertices_with_role(Role::Start).next()?;
        debug!(pivot = %pivot, "start vertex found");
        Some(Occurrence::from_bindings(vec![(PIVOT, pivot)]))
    }

    /// First interior pivot, ascending by id, whose element fits `shape`.
    pub fn find_element(&self, shape: &ElementShape) -> GraphResult<Option<Occurrence>> {
        for pivot in self.graph.vertices_with_role(Role::Interior) {
            if let Some(occ) = self.match_element_at(pivot, shape)? {
                debug!(shape = shape.name, occurrence = %occ, "element matched");
                return Ok(Some(occ));
            }
        }
        Ok(None)
    }

    /// Try `shape` with `pivot` as the element's interior vertex.
    pub fn match_element_at(
        &self,
        pivot: VertexId,
        shape: &ElementShape,
    ) -> GraphResult<Option<Occurrence>> {
        let Some(vertex) = self.graph.vertex(pivot) else {
            return Ok(None);
        };
        if vertex.role != Role::Interior {
            return Ok(None);
        }
        let level = vertex.level;

        let corners: Vec<VertexId> = self
            .graph
            .neighbors(pivot)
            .filter(|&n| self.graph.vertex(n).is_some_and(|v| v.level == level))
            .collect();
        let all_exterior = corners
            .iter()
            .all(|&n| self.graph.vertex(n).is_some_and(|v| v.role == Role::Exterior));
        if corners.len() != 3 || !all_exterior {
            trace!(pivot = %pivot, corners = corners.len(), "pivot rejected");
            return Ok(None);
        }

        for perm in PERMUTATIONS {
            let assigned = [corners[perm[0]], corners[perm[1]], corners[perm[2]]];
            if let Some(occ) = self.run_ops(pivot, level, assigned, shape)? {
                return Ok(Some(occ));
            }
        }
        Ok(None)
    }

    /// Execute every op of `shape` for one corner assignment.
    fn run_ops(
        &self,
        pivot: VertexId,
        level: u32,
        corners: [VertexId; 3],
        shape: &ElementShape,
    ) -> GraphResult<Option<Occurrence>> {
        let mut occ = Occurrence::new();
        occ.bind(PIVOT, pivot);
        for corner in [Corner::A, Corner::B, Corner::C] {
            occ.bind(corner.slot(), corners[corner.index()]);
        }
        let at = |c: Corner| corners[c.index()];

        for op in shape.ops {
            let passed = match *op {
                ShapeOp::RequireEdge(x, y) => self.graph.has_edge(at(x), at(y)),
                ShapeOp::ForbidEdge(x, y) => !self.graph.has_edge(at(x), at(y)),
                ShapeOp::BindMidpoint { slot, between } => {
                    match self.find_midpoint(&occ, level, at(between.0), at(between.1))? {
                        Some(m) => {
                            occ.bind(slot, m);
                            true
                        }
                        None => false,
                    }
                }
                ShapeOp::RequireLongest(x, y) => self.is_longest(corners, x, y)?,
            };
            if !passed {
                return Ok(None);
            }
        }
        Ok(Some(occ))
    }

    fn position(&self, id: VertexId) -> GraphResult<Position> {
        self.graph.require_vertex(id)?.require_position(id)
    }

    /// First common exterior neighbor of `x` and `y` on `level`, outside the
    /// occurrence, lying at their midpoint.
    fn find_midpoint(
        &self,
        occ: &Occurrence,
        level: u32,
        x: VertexId,
        y: VertexId,
    ) -> GraphResult<Option<VertexId>> {
        let target = midpoint(self.position(x)?, self.position(y)?);
        for n in self.graph.neighbors(x) {
            if occ.contains(n) || !self.graph.has_edge(n, y) {
                continue;
            }
            let Some(vertex) = self.graph.vertex(n) else {
                continue;
            };
            if vertex.role != Role::Exterior || vertex.level != level {
                continue;
            }
            if positions_equal(vertex.require_position(n)?, target) {
                return Ok(Some(n));
            }
        }
        Ok(None)
    }

    /// Whether side `x`-`y` is at least as long as the other two sides.
    fn is_longest(&self, corners: [VertexId; 3], x: Corner, y: Corner) -> GraphResult<bool> {
        let z = 3 - x.index() - y.index();
        let px = self.position(corners[x.index()])?;
        let py = self.position(corners[y.index()])?;
        let pz = self.position(corners[z])?;
        let side = distance(px, py);
        Ok(side + EPSILON >= distance(px, pz) && side + EPSILON >= distance(py, pz))
    }

    /// First occurrence of a role-labeled template.
    pub fn find_template(
        &self,
        template: &Template,
        strategy: TemplateStrategy,
    ) -> Option<Occurrence> {
        let found = find_template(self.graph, template, strategy);
        if let Some(occ) = &found {
            debug!(template = template.name, ?strategy, occurrence = %occ, "template matched");
        }
        found
    }
}
