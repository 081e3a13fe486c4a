use thiserror::Error;

/// Top-level error type for the mapgeom crate.
#[derive(Debug, Error)]
pub enum MapgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to shape parameters and geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// A numeric shape parameter was NaN or infinite.
    #[error("invalid geometry parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

impl GeometryError {
    /// Rejects non-finite values for the named parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] when `value` is NaN or infinite.
    pub fn check_finite(parameter: &'static str, value: f64) -> std::result::Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            tracing::debug!(parameter, value, "rejected non-finite geometry parameter");
            Err(Self::InvalidParameter { parameter, value })
        }
    }
}

/// Convenience type alias for results using [`MapgeomError`].
pub type Result<T> = std::result::Result<T, MapgeomError>;
