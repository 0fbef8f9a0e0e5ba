//! The closed set of mesh productions.

use std::fmt;

use meshgram_core::{GraphResult, VertexId};
use meshgram_graph::MeshGraph;
use meshgram_mutation::{ops, RewriteContext, RewriteOutcome, RewriteResult};
use meshgram_pattern::{shape, template, Matcher, Occurrence, TemplateStrategy};

use crate::error::{ProductionError, ProductionResult};

type Rewriter = fn(&mut RewriteContext<'_>) -> RewriteResult<()>;

/// A mesh production. Declaration order is the driver-visible order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Production {
    /// Seed quad split into two triangles.
    P1,
    /// Unbroken triangle bisected along its longest side.
    P2,
    /// Triangle with one hanging midpoint bisected through it.
    P3,
    /// Triangle with two hanging midpoints split into three.
    P4,
    /// Triangle with three hanging midpoints split into four.
    P5,
    /// Duplicated side of two refined neighbors merged.
    P6,
    /// Duplicated half side of two refined neighbors merged.
    P7,
}

impl Production {
    pub const ALL: [Production; 7] = [
        Production::P1,
        Production::P2,
        Production::P3,
        Production::P4,
        Production::P5,
        Production::P6,
        Production::P7,
    ];

    /// Production number, 1 to 7.
    pub fn number(self) -> u8 {
        match self {
            Production::P1 => 1,
            Production::P2 => 2,
            Production::P3 => 3,
            Production::P4 => 4,
            Production::P5 => 5,
            Production::P6 => 6,
            Production::P7 => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Production::P1 => "seed",
            Production::P2 => shape::UNBROKEN_TRIANGLE.name,
            Production::P3 => shape::ONE_HANGING_MIDPOINT.name,
            Production::P4 => shape::TWO_HANGING_MIDPOINTS.name,
            Production::P5 => shape::THREE_HANGING_MIDPOINTS.name,
            Production::P6 => template::DUPLICATED_SIDE.name,
            Production::P7 => template::DUPLICATED_HALF_SIDE.name,
        }
    }

    /// Whether this production merges vertices instead of refining.
    pub fn is_merge(self) -> bool {
        matches!(self, Production::P6 | Production::P7)
    }

    /// Number of vertices an occurrence of this production binds.
    pub fn arity(self) -> usize {
        match self {
            Production::P1 => 1,
            Production::P2 => shape::UNBROKEN_TRIANGLE.arity(),
            Production::P3 => shape::ONE_HANGING_MIDPOINT.arity(),
            Production::P4 => shape::TWO_HANGING_MIDPOINTS.arity(),
            Production::P5 => shape::THREE_HANGING_MIDPOINTS.arity(),
            Production::P6 => template::DUPLICATED_SIDE.size(),
            Production::P7 => template::DUPLICATED_HALF_SIDE.size(),
        }
    }

    /// First occurrence of the left-hand side, using the seeded template search.
    pub fn find(self, graph: &MeshGraph) -> GraphResult<Option<Occurrence>> {
        self.find_with(graph, TemplateStrategy::default())
    }

    pub fn find_with(
        self,
        graph: &MeshGraph,
        strategy: TemplateStrategy,
    ) -> GraphResult<Option<Occurrence>> {
        let matcher = Matcher::new(graph);
        match self {
            Production::P1 => Ok(matcher.find_start()),
            Production::P2 => matcher.find_element(&shape::UNBROKEN_TRIANGLE),
            Production::P3 => matcher.find_element(&shape::ONE_HANGING_MIDPOINT),
            Production::P4 => matcher.find_element(&shape::TWO_HANGING_MIDPOINTS),
            Production::P5 => matcher.find_element(&shape::THREE_HANGING_MIDPOINTS),
            Production::P6 => Ok(matcher.find_template(&template::DUPLICATED_SIDE, strategy)),
            Production::P7 => Ok(matcher.find_template(&template::DUPLICATED_HALF_SIDE, strategy)),
        }
    }

    fn rewriter(self) -> Rewriter {
        match self {
            Production::P1 => ops::seed,
            Production::P2 => ops::bisect_unbroken,
            Production::P3 => ops::bisect_one_hanging,
            Production::P4 => ops::trisect,
            Production::P5 => ops::quadrisect,
            Production::P6 => ops::merge_duplicated_side,
            Production::P7 => ops::merge_duplicated_half_side,
        }
    }

    /// Apply the right-hand side to a copy of `graph`, reporting what changed.
    pub fn rewrite(self, graph: &MeshGraph, occurrence: &Occurrence) -> RewriteResult<RewriteOutcome> {
        let mut ctx = RewriteContext::new(self.number(), graph, occurrence);
        (self.rewriter())(&mut ctx)?;
        Ok(ctx.finish())
    }

    /// Apply the right-hand side to a copy of `graph`.
    pub fn apply(self, graph: &MeshGraph, occurrence: &Occurrence) -> RewriteResult<MeshGraph> {
        self.rewrite(graph, occurrence).map(RewriteOutcome::into_graph)
    }
}

impl TryFrom<u8> for Production {
    type Error = ProductionError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Production::ALL
            .into_iter()
            .find(|p| p.number() == number)
            .ok_or(ProductionError::UnknownProduction(number))
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Find an occurrence of production `id` (1 to 7) in `graph`.
pub fn find_match(graph: &MeshGraph, id: u8) -> ProductionResult<Option<Occurrence>> {
    Ok(Production::try_from(id)?.find(graph)?)
}

/// Apply production `id` (1 to 7) to `graph` at `occurrence`.
pub fn apply_production(
    graph: &MeshGraph,
    id: u8,
    occurrence: &Occurrence,
) -> ProductionResult<MeshGraph> {
    Ok(Production::try_from(id)?.apply(graph, occurrence)?)
}

/// Merge coincident vertices `a` and `b` into `new_id` on a copy of `graph`.
pub fn merge(
    graph: &MeshGraph,
    a: VertexId,
    b: VertexId,
    new_id: VertexId,
) -> ProductionResult<MeshGraph> {
    Ok(meshgram_mutation::merge(graph, a, b, new_id)?)
}
