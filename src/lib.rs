//! gpui_scatterplot renders categorized scatter plots and highlights the
//! nearest neighbors of a right-clicked point.
//!
//! The core is backend-agnostic: [`Renderer`] turns a dataset and a
//! [`Viewport`] into a [`RenderList`] of draw primitives, and
//! [`SelectionEngine`] maps clicks back into data space to drive the
//! highlight set. With the `gpui` feature enabled, `gpui_backend` paints the
//! render list in a GPUI view and forwards mouse clicks.
//!
//! ```
//! use gpui_scatterplot::{ClickEvent, DataPoint, ScatterPlot, Transition};
//!
//! let mut plot = ScatterPlot::new(vec![
//!     DataPoint::new(0.0, 0.0, "a"),
//!     DataPoint::new(4.0, 2.0, "b"),
//!     DataPoint::new(1.0, 1.0, "a"),
//! ]);
//! let commands = plot.render()?;
//! assert!(!commands.is_empty());
//!
//! let scale = plot.scale()?;
//! let at = scale.data_to_screen(plot.data()[2].position());
//! assert!(matches!(
//!     plot.click(ClickEvent::right(at.x, at.y))?,
//!     Transition::Selected(_)
//! ));
//! # Ok::<(), gpui_scatterplot::PlotError>(())
//! ```

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod geom;
pub mod marker;
pub mod plot;
pub mod render;
pub mod selection;
pub mod ticks;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{AxisAnchor, AxisFormatter, AxisPlacement};
pub use error::{Axis, PlotError};
pub use geom::{DataPoint, Point, PointId, ScreenPoint, ScreenRect};
pub use marker::{DEFAULT_PALETTE, MarkerCatalog, MarkerShape};
pub use plot::{ScatterPlot, ScatterPlotBuilder};
pub use render::{RenderCommand, RenderList, Renderer, RendererConfig, TextAnchor};
pub use selection::{
    ClickEvent, DEFAULT_NEIGHBORS, MouseButton, Neighbor, SelectionEngine, SelectionState,
    Transition, nearest_neighbors,
};
pub use ticks::{DEFAULT_TICK_COUNT, Tick, TickGenerator};
pub use transform::ScaleModel;
pub use view::{DEFAULT_PADDING, Range, Viewport};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiScatterView, PlotHandle, ScatterViewConfig};
