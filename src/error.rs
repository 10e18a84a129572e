//! Error types shared by the plotting pipeline.

use std::fmt;

use thiserror::Error;

/// One of the two plot dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal dimension.
    X,
    /// Vertical dimension.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors reported by scale derivation, tick generation and rendering.
///
/// None of these are transient: the caller has to change its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlotError {
    /// A dimension's minimum equals its maximum, so no scale exists.
    #[error("degenerate {axis} domain: min equals max")]
    DegenerateDomain {
        /// Dimension with zero range.
        axis: Axis,
    },
    /// The dataset has no finite points to derive bounds from.
    #[error("dataset contains no finite points")]
    EmptyDataset,
    /// The viewport leaves no usable plot rectangle after padding.
    #[error("invalid viewport {width}x{height} with padding {padding}")]
    InvalidViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
        /// Uniform padding in pixels.
        padding: f64,
    },
    /// Fewer than two ticks were requested.
    #[error("tick count must be at least 2, got {count}")]
    TooFewTicks {
        /// Requested tick count.
        count: usize,
    },
}
