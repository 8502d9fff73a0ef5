//! Weighted proximity graph and minimum spanning tree extraction.
//!
//! Vertices are indices into a caller-owned region collection, edge weights are
//! usually [`Rect::separation`](crate::geometry::Rect::separation) values. The
//! spanning tree from [`Graph::kruskal`] connects every region to its closest
//! neighbours, which is what label pairing is built on.

mod union_find;

pub use union_find::UnionFind;

use std::fmt;

use crate::error::{Error, Result};

/// A weighted undirected edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint
    pub u: usize,
    /// Second endpoint
    pub v: usize,
    /// Edge weight
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: usize) -> bool {
        self.u == vertex || self.v == vertex
    }

    /// The endpoint opposite `vertex`, if `vertex` is an endpoint.
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if self.u == vertex {
            Some(self.v)
        } else if self.v == vertex {
            Some(self.u)
        } else {
            None
        }
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((u, v, weight): (usize, usize, f64)) -> Self {
        Self::new(u, v, weight)
    }
}

/// Sum of edge weights.
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}

/// A graph over a fixed vertex set `0..vertices` with an unordered edge list.
///
/// Edges are stored as given: no deduplication and no symmetry, so adding both
/// `(u, v, w)` and `(v, u, w)` creates two parallel edges.
///
/// # Examples
///
/// ```
/// use figure_regions::graph::{Edge, Graph};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 2, 2.0)?;
/// graph.add_edge(0, 2, 3.0)?;
/// graph.add_edge(2, 3, 1.0)?;
///
/// let tree = graph.kruskal()?;
/// assert_eq!(
///     tree,
///     vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0), Edge::new(1, 2, 2.0)]
/// );
/// # Ok::<(), figure_regions::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: usize,
    edges: Vec<Edge>,
    path_compression: bool,
}

impl Graph {
    /// Create a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
            path_compression: false,
        }
    }

    /// Enable union-find path compression in [`kruskal`](Self::kruskal).
    pub fn with_path_compression(mut self, enable: bool) -> Self {
        self.path_compression = enable;
        self
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Append the edge `(u, v, weight)`.
    ///
    /// Returns [`Error::VertexOutOfRange`] if either endpoint is not a vertex
    /// of this graph; the edge list is left unchanged in that case.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        for vertex in [u, v] {
            if vertex >= self.vertices {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    vertices: self.vertices,
                });
            }
        }
        self.edges.push(Edge::new(u, v, weight));
        Ok(())
    }

    /// Minimum spanning tree by Kruskal's algorithm.
    ///
    /// Edges are considered by ascending weight, ties in insertion order, NaN
    /// weights last. An
    /// edge is accepted when its endpoints are in different components, and
    /// the scan stops as soon as `vertices - 1` edges are accepted. The result
    /// lists the accepted edges in acceptance order.
    ///
    /// Returns [`Error::DisconnectedGraph`] if the edges run out before the
    /// tree is complete. Graphs with zero or one vertex yield an empty tree.
    /// The graph itself is not modified, so repeated calls agree.
    pub fn kruskal(&self) -> Result<Vec<Edge>> {
        let needed = self.vertices.saturating_sub(1);
        let mut result = Vec::with_capacity(needed);
        if needed == 0 {
            return Ok(result);
        }

        // sort_by is stable, so equal weights keep insertion order. NaN of
        // either sign goes after every number.
        let mut sorted = self.edges.clone();
        sorted.sort_by(|a, b| {
            a.weight
                .is_nan()
                .cmp(&b.weight.is_nan())
                .then_with(|| a.weight.total_cmp(&b.weight))
        });

        let mut sets = UnionFind::new(self.vertices).with_path_compression(self.path_compression);
        let mut remaining = sorted.iter();

        while result.len() < needed {
            let Some(edge) = remaining.next() else {
                log::warn!(
                    "Edge list exhausted after {} of {} spanning edges ({} vertices)",
                    result.len(),
                    needed,
                    self.vertices
                );
                return Err(Error::DisconnectedGraph {
                    vertices: self.vertices,
                    accepted: result.len(),
                });
            };

            let x = sets.find(edge.u);
            let y = sets.find(edge.v);
            if x != y {
                log::trace!("Accepted edge ({}, {}) weight {}", edge.u, edge.v, edge.weight);
                result.push(*edge);
                sets.union_roots(x, y);
            }
        }

        log::debug!(
            "Spanning tree over {} vertices: {} edges, weight {}",
            self.vertices,
            result.len(),
            total_weight(&result)
        );
        Ok(result)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Graph : {} vertices >", self.vertices)
    }
}
