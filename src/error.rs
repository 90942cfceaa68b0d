// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid window: {message}")]
    InvalidWindow { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Degenerate triangle: collinear vertices, no circumcenter")]
    DegenerateTriangle,

    #[error("Malformed triangle fan: {reason}")]
    MalformedFan { reason: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
