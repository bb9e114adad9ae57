use crate::error::{ExportError, Result};

/// Formatting parameters for path export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStyle {
    precision: usize,
}

impl PathStyle {
    /// Number of fractional digits used when none is given.
    pub const DEFAULT_PRECISION: usize = 3;

    /// Largest accepted precision; an `f64` carries no more significant
    /// fractional digits than this.
    pub const MAX_PRECISION: usize = 17;

    /// Creates a new path style.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidPrecision` if `precision` exceeds
    /// [`Self::MAX_PRECISION`].
    pub fn new(precision: usize) -> Result<Self> {
        if precision > Self::MAX_PRECISION {
            return Err(ExportError::InvalidPrecision(precision).into());
        }
        Ok(Self { precision })
    }

    /// Returns the number of fractional digits per coordinate.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
        }
    }
}
