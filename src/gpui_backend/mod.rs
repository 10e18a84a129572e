//! GPUI integration for gpui_scatterplot.
//!
//! This module provides a GPUI view that paints a
//! [`ScatterPlot`](crate::plot::ScatterPlot) and forwards mouse clicks to its
//! selection engine.

#![allow(clippy::collapsible_if)]

mod config;
mod paint;
mod view;

pub use config::{Color, ScatterViewConfig};
pub use view::{GpuiScatterView, PlotHandle};
