//! [`Graph<N>`](Graph) is a simple graph keyed by integer vertex ids.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use fixedbitset::FixedBitSet;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Identifier of a vertex. Ids are non-negative and unique within one graph.
pub type VertexId = u32;

/// A single edge record: an ordered `(source, target)` pair with a weight.
///
/// In an undirected graph every logical edge {u, v} is stored as the two
/// mirrored records `u -> v` and `v -> u` with equal weight; iteration over
/// [`Graph::all_edges`] yields both. Unweighted graphs store weight 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: i64,
}

impl Edge {
    pub(crate) fn new(source: VertexId, target: VertexId, weight: i64) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// The vertex this edge leaves.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The vertex this edge enters.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// The edge weight (0 in unweighted graphs).
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

/// Error returned by [`Graph::add_vertex_with_id`] when the id is taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexExists(pub VertexId);

impl fmt::Display for VertexExists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex {} already exists", self.0)
    }
}

impl Error for VertexExists {}

/// Error returned by [`Graph::add_edge`] for a rejected edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddEdgeError {
    /// The edge would connect a vertex to itself.
    SelfLoop,
    /// The source vertex is not in the graph.
    MissingSource(VertexId),
    /// The target vertex is not in the graph.
    MissingTarget(VertexId),
}

impl fmt::Display for AddEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AddEdgeError::SelfLoop => f.write_str("self loops are not supported"),
            AddEdgeError::MissingSource(id) => write!(f, "source vertex {id} does not exist"),
            AddEdgeError::MissingTarget(id) => write!(f, "target vertex {id} does not exist"),
        }
    }
}

impl Error for AddEdgeError {}

/// A directed or undirected, weighted or unweighted simple graph.
///
/// `Graph<N>` maps integer vertex ids to caller payloads of type `N` and
/// keeps one adjacency map per vertex, so edge existence queries are O(1)
/// and iterating a vertex's outgoing edges is O(degree). Parallel edges and
/// self loops are rejected. Both maps iterate in insertion order, which
/// makes every traversal deterministic for a given mutation history.
///
/// Vertex ids are allocated by [`add_vertex`](Graph::add_vertex) as the
/// smallest unused id at or above an internal cursor, or chosen freely by
/// the caller through [`add_vertex_with_id`](Graph::add_vertex_with_id).
///
/// ```
/// use simplegraph::Graph;
///
/// let mut g = Graph::new_undirected();
/// let a = g.add_vertex(());
/// let b = g.add_vertex(());
/// g.add_edge(a, b, 0).unwrap();
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// assert!(g.has_edge(b, a));
/// ```
#[derive(Clone, Debug)]
pub struct Graph<N> {
    directed: bool,
    weighted: bool,
    vertices: IndexMap<VertexId, N>,
    adjacency: IndexMap<VertexId, IndexMap<VertexId, i64>>,
    // Degree counters are maintained for directed graphs only; entries are
    // created lazily the first time an incident edge shows up.
    in_degree: IndexMap<VertexId, usize>,
    out_degree: IndexMap<VertexId, usize>,
    edge_count: usize,
    next_id: VertexId,
}

impl<N> Graph<N> {
    /// Create an empty graph with the given flavor.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Graph {
            directed,
            weighted,
            vertices: IndexMap::new(),
            adjacency: IndexMap::new(),
            in_degree: IndexMap::new(),
            out_degree: IndexMap::new(),
            edge_count: 0,
            next_id: 0,
        }
    }

    /// Create an empty undirected, unweighted graph.
    pub fn new_undirected() -> Self {
        Graph::new(false, false)
    }

    /// Create an empty directed, unweighted graph.
    pub fn new_directed() -> Self {
        Graph::new(true, false)
    }

    /// Create an empty undirected, weighted graph.
    pub fn new_undirected_weighted() -> Self {
        Graph::new(false, true)
    }

    /// Create an empty directed, weighted graph.
    pub fn new_directed_weighted() -> Self {
        Graph::new(true, true)
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether edges carry meaningful weights.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges: logical edges for undirected graphs (each mirrored
    /// pair counts once), edge records for directed graphs.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add a vertex with an auto-allocated id and return the id.
    ///
    /// Ids are handed out as the smallest free id at or above a cursor that
    /// only ever advances, so on a fresh graph `n` calls allocate exactly
    /// `0..n`.
    ///
    /// **Panics** if the id space at or above the cursor is exhausted.
    pub fn add_vertex(&mut self, payload: N) -> VertexId {
        let id = self.next_free_id();
        self.vertices.insert(id, payload);
        self.adjacency.insert(id, IndexMap::new());
        id
    }

    /// Add a vertex under a caller-chosen id.
    ///
    /// Fails without mutating the graph when the id is already in use.
    pub fn add_vertex_with_id(&mut self, id: VertexId, payload: N) -> Result<VertexId, VertexExists> {
        match self.vertices.entry(id) {
            Entry::Occupied(_) => Err(VertexExists(id)),
            Entry::Vacant(entry) => {
                entry.insert(payload);
                self.adjacency.insert(id, IndexMap::new());
                Ok(id)
            }
        }
    }

    fn next_free_id(&mut self) -> VertexId {
        while self.vertices.contains_key(&self.next_id) {
            self.next_id = self
                .next_id
                .checked_add(1)
                .expect("vertex id space exhausted");
        }
        self.next_id
    }

    /// Return `true` if the vertex is in the graph.
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// The payload stored for a vertex.
    pub fn payload(&self, id: VertexId) -> Option<&N> {
        self.vertices.get(&id)
    }

    /// Mutable access to the payload stored for a vertex.
    pub fn payload_mut(&mut self, id: VertexId) -> Option<&mut N> {
        self.vertices.get_mut(&id)
    }

    /// Add an edge; see [`AddEdgeError`] for the rejection cases.
    ///
    /// Undirected graphs insert both mirrored records and count the logical
    /// edge once. Unweighted graphs ignore `weight` and store 0. Adding an
    /// edge that already exists is a no-op returning `Ok`; in particular
    /// the existing weight is kept. A failing call leaves the graph exactly
    /// as it was.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: i64,
    ) -> Result<(), AddEdgeError> {
        if source == target {
            return Err(AddEdgeError::SelfLoop);
        }
        if !self.vertices.contains_key(&source) {
            return Err(AddEdgeError::MissingSource(source));
        }
        if !self.vertices.contains_key(&target) {
            return Err(AddEdgeError::MissingTarget(target));
        }
        let weight = if self.weighted { weight } else { 0 };

        let adjacency = self
            .adjacency
            .get_mut(&source)
            .expect("adjacency entry exists for every vertex");
        match adjacency.entry(target) {
            // Duplicate edge: keep the record (and its weight) that is
            // already there.
            Entry::Occupied(_) => return Ok(()),
            Entry::Vacant(entry) => {
                entry.insert(weight);
            }
        }

        if self.directed {
            self.edge_count += 1;
            for id in [source, target] {
                self.in_degree.entry(id).or_insert(0);
                self.out_degree.entry(id).or_insert(0);
            }
            *self.out_degree.get_mut(&source).expect("entry created above") += 1;
            *self.in_degree.get_mut(&target).expect("entry created above") += 1;
        } else {
            self.adjacency
                .get_mut(&target)
                .expect("adjacency entry exists for every vertex")
                .insert(source, weight);
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Remove a vertex together with every incident edge record.
    ///
    /// Returns `true` if the vertex was present. The edge count drops by the
    /// vertex's degree (undirected) or by its in-degree plus out-degree
    /// (directed), and directed degree counters stay consistent.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if self.vertices.shift_remove(&id).is_none() {
            return false;
        }
        let outgoing = self
            .adjacency
            .shift_remove(&id)
            .expect("adjacency entry exists for every vertex");
        if self.directed {
            for (&target, _) in &outgoing {
                self.edge_count -= 1;
                self.decrement_in_degree(target);
            }
            // Incoming records live in the other vertices' adjacency maps.
            for (&source, adjacency) in &mut self.adjacency {
                if adjacency.shift_remove(&id).is_some() {
                    self.edge_count -= 1;
                    *self
                        .out_degree
                        .get_mut(&source)
                        .expect("counter exists for a vertex with outgoing edges") -= 1;
                }
            }
            self.in_degree.shift_remove(&id);
            self.out_degree.shift_remove(&id);
        } else {
            for (&target, _) in &outgoing {
                self.adjacency
                    .get_mut(&target)
                    .expect("mirror endpoint exists")
                    .shift_remove(&id);
                self.edge_count -= 1;
            }
        }
        true
    }

    fn decrement_in_degree(&mut self, id: VertexId) {
        *self
            .in_degree
            .get_mut(&id)
            .expect("counter exists for a vertex with incoming edges") -= 1;
    }

    /// Remove the edge between `source` and `target` (both mirrored records
    /// in an undirected graph). Returns `true` if a logical edge was
    /// removed.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        if !self.vertices.contains_key(&source) || !self.vertices.contains_key(&target) {
            return false;
        }
        let removed = self
            .adjacency
            .get_mut(&source)
            .map_or(false, |adjacency| adjacency.shift_remove(&target).is_some());
        if !removed {
            return false;
        }
        if self.directed {
            *self
                .out_degree
                .get_mut(&source)
                .expect("counter exists for a vertex with outgoing edges") -= 1;
            self.decrement_in_degree(target);
        } else {
            self.adjacency
                .get_mut(&target)
                .expect("mirror endpoint exists")
                .shift_remove(&source);
        }
        self.edge_count -= 1;
        true
    }

    /// Reassign the weight of an existing edge (both mirrors in the
    /// undirected case).
    ///
    /// **Panics** if the graph is unweighted or the edge does not exist.
    pub fn set_weight(&mut self, source: VertexId, target: VertexId, weight: i64) {
        assert!(self.weighted, "set_weight requires a weighted graph");
        let record = self
            .adjacency
            .get_mut(&source)
            .and_then(|adjacency| adjacency.get_mut(&target))
            .expect("set_weight: no such edge");
        *record = weight;
        if !self.directed {
            let mirror = self
                .adjacency
                .get_mut(&target)
                .and_then(|adjacency| adjacency.get_mut(&source))
                .expect("mirror record exists");
            *mirror = weight;
        }
    }

    /// Return `true` if the edge record `source -> target` exists.
    pub fn has_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.adjacency
            .get(&source)
            .map_or(false, |adjacency| adjacency.contains_key(&target))
    }

    /// Look up an edge record.
    pub fn get_edge(&self, source: VertexId, target: VertexId) -> Option<Edge> {
        self.adjacency
            .get(&source)?
            .get(&target)
            .map(|&weight| Edge::new(source, target, weight))
    }

    /// Degree of a vertex in an undirected graph.
    ///
    /// **Panics** on directed graphs or unknown vertices.
    pub fn degree_of(&self, id: VertexId) -> usize {
        assert!(!self.directed, "degree_of requires an undirected graph");
        assert!(self.has_vertex(id), "degree_of: unknown vertex");
        self.adjacency[&id].len()
    }

    /// In-degree of a vertex in a directed graph.
    ///
    /// **Panics** on undirected graphs or unknown vertices.
    pub fn in_degree_of(&self, id: VertexId) -> usize {
        assert!(self.directed, "in_degree_of requires a directed graph");
        assert!(self.has_vertex(id), "in_degree_of: unknown vertex");
        self.in_degree.get(&id).copied().unwrap_or(0)
    }

    /// Out-degree of a vertex in a directed graph.
    ///
    /// **Panics** on undirected graphs or unknown vertices.
    pub fn out_degree_of(&self, id: VertexId) -> usize {
        assert!(self.directed, "out_degree_of requires a directed graph");
        assert!(self.has_vertex(id), "out_degree_of: unknown vertex");
        self.out_degree.get(&id).copied().unwrap_or(0)
    }

    /// Iterate over the vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Iterate over the out-neighbors of a vertex. Unknown vertices yield an
    /// empty iterator.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|adjacency| adjacency.keys().copied())
    }

    /// Iterate over the outgoing edge records of a vertex.
    pub fn edges(&self, id: VertexId) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(move |adjacency| {
                adjacency
                    .iter()
                    .map(move |(&target, &weight)| Edge::new(id, target, weight))
            })
    }

    /// Iterate over every edge record in the graph. Undirected graphs yield
    /// both mirrors of each logical edge.
    pub fn all_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&source, adjacency)| {
            adjacency
                .iter()
                .map(move |(&target, &weight)| Edge::new(source, target, weight))
        })
    }

    /// Map a vertex id to its dense position in `0..vertex_count()`.
    ///
    /// Positions are stable as long as the graph is not mutated.
    ///
    /// **Panics** on unknown vertices.
    pub fn to_index(&self, id: VertexId) -> usize {
        self.vertices
            .get_index_of(&id)
            .expect("to_index: unknown vertex")
    }

    /// Map a dense position back to the vertex id.
    ///
    /// **Panics** when the position is out of bounds.
    pub fn from_index(&self, index: usize) -> VertexId {
        *self
            .vertices
            .get_index(index)
            .expect("from_index: position out of bounds")
            .0
    }

    /// A fresh visit map with one bit per vertex, indexed by
    /// [`to_index`](Graph::to_index).
    pub fn visit_map(&self) -> FixedBitSet {
        FixedBitSet::with_capacity(self.vertices.len())
    }
}

impl<N> Graph<N>
where
    N: Clone,
{
    /// The reverse of the graph.
    ///
    /// Undirected graphs are their own reverse and are returned borrowed;
    /// for a directed graph a new graph with every edge flipped is built.
    pub fn reversed(&self) -> Cow<'_, Graph<N>> {
        if !self.directed {
            return Cow::Borrowed(self);
        }
        let mut reversed = Graph::new(true, self.weighted);
        for (&id, payload) in &self.vertices {
            reversed
                .add_vertex_with_id(id, payload.clone())
                .expect("fresh graph has no id collisions");
        }
        for edge in self.all_edges() {
            reversed
                .add_edge(edge.target(), edge.source(), edge.weight())
                .expect("both endpoints were copied");
        }
        Cow::Owned(reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_ids_are_dense_from_zero() {
        let mut g = Graph::new_undirected();
        for expected in 0..5 {
            assert_eq!(g.add_vertex(()), expected);
        }
        assert_eq!(g.vertex_count(), 5);
    }

    #[test]
    fn allocator_skips_caller_chosen_ids() {
        let mut g = Graph::new_undirected();
        g.add_vertex_with_id(0, ()).unwrap();
        g.add_vertex_with_id(1, ()).unwrap();
        g.add_vertex_with_id(3, ()).unwrap();
        assert_eq!(g.add_vertex(()), 2);
        // The cursor has passed 2; the next free id at or above it is 4.
        assert_eq!(g.add_vertex(()), 4);
        assert_eq!(g.add_vertex(()), 5);
    }

    #[test]
    fn duplicate_vertex_id_is_rejected_without_mutation() {
        let mut g = Graph::new_undirected();
        g.add_vertex_with_id(7, "first").unwrap();
        assert_eq!(g.add_vertex_with_id(7, "second"), Err(VertexExists(7)));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.payload(7), Some(&"first"));
    }

    #[test]
    fn self_loops_and_missing_endpoints_are_rejected() {
        let mut g = Graph::new_directed();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        assert_eq!(g.add_edge(a, a, 0), Err(AddEdgeError::SelfLoop));
        assert_eq!(g.add_edge(9, b, 0), Err(AddEdgeError::MissingSource(9)));
        assert_eq!(g.add_edge(a, 9, 0), Err(AddEdgeError::MissingTarget(9)));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.in_degree_of(a), 0);
        assert_eq!(g.out_degree_of(a), 0);
    }

    #[test]
    fn duplicate_edge_is_idempotent() {
        let mut g = Graph::new_directed_weighted();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, 4).unwrap();
        g.add_edge(a, b, 9).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree_of(a), 1);
        assert_eq!(g.in_degree_of(b), 1);
        // The first weight wins.
        assert_eq!(g.get_edge(a, b).unwrap().weight(), 4);
    }

    #[test]
    fn unweighted_graphs_store_zero_weights() {
        let mut g = Graph::new_undirected();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, 42).unwrap();
        assert_eq!(g.get_edge(a, b).unwrap().weight(), 0);
        assert_eq!(g.get_edge(b, a).unwrap().weight(), 0);
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut g = Graph::new_undirected_weighted();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, 3).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge(a, b) && g.has_edge(b, a));
        g.set_weight(b, a, 8);
        assert_eq!(g.get_edge(a, b).unwrap().weight(), 8);
        assert_eq!(g.get_edge(b, a).unwrap().weight(), 8);
    }

    #[test]
    fn remove_edge_removes_both_mirrors() {
        let mut g = Graph::new_undirected();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, 0).unwrap();
        assert!(g.remove_edge(b, a));
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(a, b));
        assert!(!g.remove_edge(a, b));
    }

    #[test]
    fn remove_vertex_undirected() {
        let mut g = Graph::new_undirected();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        let c = g.add_vertex(());
        g.add_edge(a, b, 0).unwrap();
        g.add_edge(a, c, 0).unwrap();
        g.add_edge(b, c, 0).unwrap();
        assert!(g.remove_vertex(a));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree_of(b), 1);
        assert!(!g.remove_vertex(a));
    }

    #[test]
    fn remove_vertex_directed_keeps_counters_consistent() {
        let mut g = Graph::new_directed();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        let c = g.add_vertex(());
        g.add_edge(a, b, 0).unwrap();
        g.add_edge(b, c, 0).unwrap();
        g.add_edge(c, a, 0).unwrap();
        g.add_edge(b, a, 0).unwrap();
        assert!(g.remove_vertex(b));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree_of(c), 1);
        assert_eq!(g.in_degree_of(a), 1);
        assert_eq!(g.out_degree_of(a), 0);
        assert_eq!(g.in_degree_of(c), 0);
    }

    #[test]
    fn degree_sums_match_edge_count() {
        let mut g = Graph::new_directed();
        let ids: Vec<_> = (0..4).map(|_| g.add_vertex(())).collect();
        for &s in &ids {
            for &t in &ids {
                if s < t {
                    g.add_edge(s, t, 0).unwrap();
                }
            }
        }
        let in_sum: usize = g.vertices().map(|v| g.in_degree_of(v)).sum();
        let out_sum: usize = g.vertices().map(|v| g.out_degree_of(v)).sum();
        assert_eq!(in_sum, g.edge_count());
        assert_eq!(out_sum, g.edge_count());
    }

    #[test]
    fn reversed_directed_graph_flips_edges() {
        let mut g = Graph::new_directed_weighted();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b, 5).unwrap();
        let r = g.reversed();
        assert!(r.has_edge(b, a));
        assert!(!r.has_edge(a, b));
        assert_eq!(r.get_edge(b, a).unwrap().weight(), 5);
        assert_eq!(r.payload(a), Some(&"a"));

        // Reversing twice gets the original edge set back.
        let rr = r.reversed().into_owned();
        assert!(rr.has_edge(a, b));
        assert_eq!(rr.edge_count(), g.edge_count());
    }

    #[test]
    fn reversed_undirected_graph_is_borrowed() {
        let mut g = Graph::new_undirected();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, 0).unwrap();
        assert!(matches!(g.reversed(), Cow::Borrowed(_)));
    }

    #[test]
    fn dense_indexing_round_trips() {
        let mut g = Graph::new_undirected();
        g.add_vertex_with_id(10, ()).unwrap();
        g.add_vertex_with_id(5, ()).unwrap();
        g.add_vertex_with_id(20, ()).unwrap();
        for (position, id) in g.vertices().enumerate() {
            assert_eq!(g.to_index(id), position);
            assert_eq!(g.from_index(position), id);
        }
    }
}
