//! Error types for the region model and proximity graph.
//!
//! Geometry and graph operations are total except for the cases listed here.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building regions or spanning trees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Rectangle bounds are inverted (right < left or bottom < top)
    #[error("Invalid geometry: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidGeometry {
        /// Left edge
        left: f64,
        /// Right edge
        right: f64,
        /// Top edge
        top: f64,
        /// Bottom edge
        bottom: f64,
    },

    /// Edge list exhausted before a spanning tree was complete
    #[error("Disconnected graph: accepted {accepted} of {} edges needed for {vertices} vertices", .vertices.saturating_sub(1))]
    DisconnectedGraph {
        /// Number of vertices in the graph
        vertices: usize,
        /// Number of edges accepted before the edge list ran out
        accepted: usize,
    },

    /// Edge endpoint outside the graph's vertex set
    #[error("Vertex {vertex} out of range for graph with {vertices} vertices")]
    VertexOutOfRange {
        /// Offending vertex index
        vertex: usize,
        /// Number of vertices in the graph
        vertices: usize,
    },
}
