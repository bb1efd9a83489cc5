//! Error types for object and scene construction.

use thiserror::Error;

/// Errors raised when an object or a scene cannot be constructed.
///
/// Each invalid-input class fails with a distinct variant; a failed
/// construction never yields a partially-initialized entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("vertex matrix of a planar object needs three columns, got {0}")]
    InvalidVertexShape(usize),

    #[error("edge matrix needs two columns, got {0}")]
    InvalidEdgeShape(usize),

    #[error("edge {edge} references vertex {vertex}, but the object has {rows} vertices")]
    EdgeOutOfRange {
        edge: usize,
        vertex: usize,
        rows: usize,
    },

    #[error("style is missing its '{0}' group")]
    IncompleteStyle(&'static str),

    #[error("draw surface reports a zero-sized drawing area")]
    InvalidDrawSurface,
}
