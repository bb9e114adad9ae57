use thiserror::Error;

/// Top-level error type for the outline engine.
#[derive(Debug, Error)]
pub enum OrthosilError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while building or classifying geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{dimension} = {value} must be finite and non-negative")]
    InvalidDimension { dimension: &'static str, value: f64 },

    #[error("coordinate {value} is not finite")]
    NonFiniteCoordinate { value: f64 },

    #[error("segment ({x0}, {y0}) -> ({x1}, {y1}) is neither horizontal nor vertical")]
    NotAxisAligned { x0: f64, y0: f64, x1: f64, y1: f64 },
}

/// Errors related to path export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path precision {0} exceeds the supported maximum")]
    InvalidPrecision(usize),
}

/// Convenience type alias for results using [`OrthosilError`].
pub type Result<T> = std::result::Result<T, OrthosilError>;
