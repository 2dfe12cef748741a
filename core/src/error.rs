use thiserror::Error;

/// Result alias for fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph operations.
///
/// Absence is not an error: lookups on missing vertices or edges return
/// `None` or an empty view, and removals of missing items are no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Invalid argument: the vertex is not an endpoint of the edge.
    #[error("vertex {vertex} is not incident to edge {from} -> {to}")]
    NotIncident {
        /// The offending vertex id.
        vertex: String,
        /// Edge source id.
        from: String,
        /// Edge target id.
        to: String,
    },
}
