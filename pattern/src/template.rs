//! Role-labeled template graphs and their search strategies.
//!
//! A vertex set matches a template when its induced subgraph is isomorphic
//! to the template (respecting roles), it is connected, and it holds exactly
//! the template's number of coincident vertex pairs.

use std::collections::{BTreeMap, VecDeque};

use meshgram_core::{Role, VertexId};
use meshgram_graph::MeshGraph;
use tracing::trace;

use crate::binding::{Occurrence, Slot};
use crate::coincidence::{duplicate_pair_count, has_duplicate};

/// Slot names for template vertices, in template order.
pub const TEMPLATE_SLOTS: [Slot; 16] = [
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9", "t10", "t11", "t12", "t13",
    "t14", "t15",
];

/// How to look for a template occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateStrategy {
    /// Enumerate vertex subsets in lexicographic order and test each one.
    Exhaustive,
    /// Grow mappings outward from vertices that have a coincident partner.
    #[default]
    Seeded,
}

/// A fixed role-labeled left-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub roles: &'static [Role],
    pub edges: &'static [(usize, usize)],
    /// Exact number of coincident pairs an occurrence must contain.
    pub duplicate_pairs: usize,
    /// Template vertices expected to coincide, used to order search roots.
    pub duplicate_groups: &'static [&'static [usize]],
}

impl Template {
    pub fn size(&self) -> usize {
        self.roles.len()
    }

    pub fn adjacency(&self) -> Vec<Vec<bool>> {
        let mut adj = vec![vec![false; self.size()]; self.size()];
        for &(u, v) in self.edges {
            adj[u][v] = true;
            adj[v][u] = true;
        }
        adj
    }

    pub fn role_counts(&self) -> BTreeMap<Role, usize> {
        let mut counts = BTreeMap::new();
        for &role in self.roles {
            *counts.entry(role).or_insert(0) += 1;
        }
        counts
    }

    /// Breadth-first order over the template starting at `root`, with each
    /// vertex's parent in that order.
    fn bfs_order(&self, adj: &[Vec<bool>], root: usize) -> (Vec<usize>, Vec<Option<usize>>) {
        let mut order = Vec::with_capacity(self.size());
        let mut parent = vec![None; self.size()];
        let mut seen = vec![false; self.size()];
        let mut queue = VecDeque::new();

        seen[root] = true;
        queue.push_back(root);
        while let Some(t) = queue.pop_front() {
            order.push(t);
            for (u, &linked) in adj[t].iter().enumerate() {
                if linked && !seen[u] {
                    seen[u] = true;
                    parent[u] = Some(t);
                    queue.push_back(u);
                }
            }
        }
        (order, parent)
    }

    /// Search roots for the seeded strategy: duplicate-group members first.
    fn seed_roots(&self) -> Vec<usize> {
        let mut roots: Vec<usize> = self
            .duplicate_groups
            .iter()
            .flat_map(|g| g.iter().copied())
            .collect();
        for t in 0..self.size() {
            if !roots.contains(&t) {
                roots.push(t);
            }
        }
        roots
    }
}

use Role::{Exterior as E, Interior as I, InteriorUsed as IU};

/// Two refined neighbors whose shared side was split independently: both
/// endpoints and the midpoint of the shared side exist twice.
pub const DUPLICATED_SIDE: Template = Template {
    name: "duplicated side",
    roles: &[E, E, IU, IU, I, I, I, I, E, E, E, E, E, E],
    edges: &[
        (0, 1),
        (0, 2),
        (1, 2),
        (0, 3),
        (1, 3),
        (2, 4),
        (2, 5),
        (3, 6),
        (3, 7),
        (8, 4),
        (9, 6),
        (10, 8),
        (11, 9),
        (11, 6),
        (11, 7),
        (12, 10),
        (10, 4),
        (10, 5),
        (12, 5),
        (13, 11),
        (13, 7),
    ],
    duplicate_pairs: 3,
    duplicate_groups: &[&[8, 9], &[10, 11], &[12, 13]],
};

/// Two refined neighbors sharing one end of a side already: the midpoint
/// and the far endpoint of that side still exist twice.
pub const DUPLICATED_HALF_SIDE: Template = Template {
    name: "duplicated half side",
    roles: &[E, E, IU, IU, E, E, E, E, I, I, E, E, E, I, I],
    edges: &[
        (0, 1),
        (0, 2),
        (1, 2),
        (0, 3),
        (1, 3),
        (4, 5),
        (4, 6),
        (4, 7),
        (5, 7),
        (6, 7),
        (2, 8),
        (2, 9),
        (4, 8),
        (4, 9),
        (5, 8),
        (6, 9),
        (7, 8),
        (7, 9),
        (3, 13),
        (5, 11),
        (10, 11),
        (12, 13),
        (10, 13),
        (11, 13),
        (12, 10),
        (12, 5),
        (12, 14),
        (5, 14),
        (11, 14),
        (3, 14),
        (12, 11),
    ],
    duplicate_pairs: 2,
    duplicate_groups: &[&[6, 10], &[7, 12]],
};

/// Backtracking embedding of a template into a graph.
struct TemplateSearch<'a> {
    graph: &'a MeshGraph,
    template: &'a Template,
    adj: Vec<Vec<bool>>,
}

impl<'a> TemplateSearch<'a> {
    fn new(graph: &'a MeshGraph, template: &'a Template) -> Self {
        Self {
            graph,
            template,
            adj: template.adjacency(),
        }
    }

    fn role_of(&self, id: VertexId) -> Option<Role> {
        self.graph.vertex(id).map(|v| v.role)
    }

    /// Whether `candidate` can stand for template vertex `t` given the
    /// vertices mapped so far.
    fn consistent(&self, t: usize, candidate: VertexId, mapping: &[Option<VertexId>]) -> bool {
        if self.role_of(candidate) != Some(self.template.roles[t]) {
            return false;
        }
        mapping.iter().enumerate().all(|(s, bound)| match bound {
            Some(image) if *image == candidate => false,
            Some(image) => self.adj[t][s] == self.graph.has_edge(candidate, *image),
            None => true,
        })
    }

    /// Extend `mapping` along `order`. `pool` restricts the images when set.
    fn assign(
        &self,
        order: &[usize],
        parent: &[Option<usize>],
        depth: usize,
        mapping: &mut Vec<Option<VertexId>>,
        pool: Option<&[VertexId]>,
    ) -> bool {
        if depth == order.len() {
            return match pool {
                Some(_) => true,
                None => {
                    let image = mapping.iter().flatten().copied();
                    duplicate_pair_count(self.graph, image) == self.template.duplicate_pairs
                }
            };
        }

        let t = order[depth];
        let candidates: Vec<VertexId> = match parent[t].and_then(|p| mapping[p]) {
            Some(anchor) => self.graph.neighbors(anchor).collect(),
            None => match pool {
                Some(pool) => pool.to_vec(),
                None => self
                    .graph
                    .vertices_with_role(self.template.roles[t])
                    .collect(),
            },
        };

        for candidate in candidates {
            if pool.is_some_and(|pool| pool.binary_search(&candidate).is_err()) {
                continue;
            }
            if !self.consistent(t, candidate, mapping) {
                continue;
            }
            mapping[t] = Some(candidate);
            if self.assign(order, parent, depth + 1, mapping, pool) {
                return true;
            }
            mapping[t] = None;
        }
        false
    }

    fn into_occurrence(mapping: Vec<Option<VertexId>>) -> Occurrence {
        Occurrence::from_bindings(
            mapping
                .into_iter()
                .flatten()
                .enumerate()
                .map(|(t, id)| (TEMPLATE_SLOTS[t], id))
                .collect(),
        )
    }

    fn seeded(&self) -> Option<Occurrence> {
        if self.template.duplicate_pairs == 0 {
            return self.exhaustive();
        }
        let roots: Vec<VertexId> = self
            .graph
            .vertex_ids()
            .filter(|&id| has_duplicate(self.graph, id))
            .collect();
        trace!(template = self.template.name, roots = roots.len(), "seeded template search");

        for t in self.template.seed_roots() {
            let (order, parent) = self.template.bfs_order(&self.adj, t);
            for &root in &roots {
                let mut mapping = vec![None; self.template.size()];
                if !self.consistent(t, root, &mapping) {
                    continue;
                }
                mapping[t] = Some(root);
                if self.assign(&order, &parent, 1, &mut mapping, None) {
                    return Some(Self::into_occurrence(mapping));
                }
            }
        }
        None
    }

    fn exhaustive(&self) -> Option<Occurrence> {
        let needed = self.template.role_counts();
        let candidates: Vec<VertexId> = self
            .graph
            .vertices()
            .filter(|(_, v)| needed.contains_key(&v.role))
            .map(|(id, _)| id)
            .collect();
        trace!(
            template = self.template.name,
            candidates = candidates.len(),
            "exhaustive template search"
        );

        let mut chosen = Vec::with_capacity(self.template.size());
        let mut counts = BTreeMap::new();
        self.combine(&candidates, 0, &mut chosen, &mut counts, &needed)
    }

    /// Lexicographic combinations over `candidates`, pruned by role counts.
    fn combine(
        &self,
        candidates: &[VertexId],
        start: usize,
        chosen: &mut Vec<VertexId>,
        counts: &mut BTreeMap<Role, usize>,
        needed: &BTreeMap<Role, usize>,
    ) -> Option<Occurrence> {
        let k = self.template.size();
        if chosen.len() == k {
            return self.accept_subset(chosen);
        }
        for i in start..candidates.len() {
            if candidates.len() - i < k - chosen.len() {
                break;
            }
            let id = candidates[i];
            let Some(role) = self.role_of(id) else {
                continue;
            };
            let taken = counts.get(&role).copied().unwrap_or(0);
            if taken >= needed.get(&role).copied().unwrap_or(0) {
                continue;
            }
            counts.insert(role, taken + 1);
            chosen.push(id);
            if let Some(found) = self.combine(candidates, i + 1, chosen, counts, needed) {
                return Some(found);
            }
            chosen.pop();
            counts.insert(role, taken);
        }
        None
    }

    fn accept_subset(&self, subset: &[VertexId]) -> Option<Occurrence> {
        let induced_edges = subset
            .iter()
            .enumerate()
            .map(|(i, &u)| {
                subset[i + 1..]
                    .iter()
                    .filter(|&&v| self.graph.has_edge(u, v))
                    .count()
            })
            .sum::<usize>();
        if induced_edges != self.template.edges.len() {
            return None;
        }
        if !is_connected(self.graph, subset) {
            return None;
        }
        if duplicate_pair_count(self.graph, subset.iter().copied()) != self.template.duplicate_pairs
        {
            return None;
        }

        let (order, parent) = self.template.bfs_order(&self.adj, 0);
        let mut mapping = vec![None; self.template.size()];
        if self.assign(&order, &parent, 0, &mut mapping, Some(subset)) {
            Some(Self::into_occurrence(mapping))
        } else {
            None
        }
    }
}

/// Whether the subgraph induced by `subset` (ascending ids) is connected.
fn is_connected(graph: &MeshGraph, subset: &[VertexId]) -> bool {
    let Some(&first) = subset.first() else {
        return true;
    };
    let mut seen = vec![first];
    let mut queue = VecDeque::from([first]);
    while let Some(u) = queue.pop_front() {
        for v in graph.neighbors(u) {
            if subset.binary_search(&v).is_ok() && !seen.contains(&v) {
                seen.push(v);
                queue.push_back(v);
            }
        }
    }
    seen.len() == subset.len()
}

/// Find the first occurrence of `template` in `graph`.
pub fn find_template(
    graph: &MeshGraph,
    template: &Template,
    strategy: TemplateStrategy,
) -> Option<Occurrence> {
    let search = TemplateSearch::new(graph, template);
    match strategy {
        TemplateStrategy::Exhaustive => search.exhaustive(),
        TemplateStrategy::Seeded => search.seeded(),
    }
}
