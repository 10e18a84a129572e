use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{MouseButton, MouseDownEvent, Pixels, Point, Window, canvas, div};
use tracing::{debug, warn};

use crate::geom::ScreenPoint;
use crate::plot::ScatterPlot;
use crate::render::RenderList;
use crate::selection::{self, ClickEvent};

use super::config::ScatterViewConfig;
use super::paint::{ScatterFrame, paint_frame, to_hsla};

#[derive(Debug, Clone, Copy)]
struct ViewState {
    origin: ScreenPoint,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            origin: ScreenPoint::new(0.0, 0.0),
        }
    }
}

/// A GPUI view that paints a [`ScatterPlot`] and forwards clicks to it.
///
/// The plot's viewport follows the canvas size while keeping the plot's
/// padding; right clicks toggle the nearest-neighbor highlight.
#[derive(Clone)]
pub struct GpuiScatterView {
    plot: Arc<RwLock<ScatterPlot>>,
    state: Arc<RwLock<ViewState>>,
    config: ScatterViewConfig,
}

impl GpuiScatterView {
    /// Create a new GPUI view for the given plot.
    ///
    /// Uses the default [`ScatterViewConfig`].
    pub fn new(plot: ScatterPlot) -> Self {
        Self::with_config(plot, ScatterViewConfig::default())
    }

    /// Create a new GPUI view with a custom configuration.
    pub fn with_config(plot: ScatterPlot, config: ScatterViewConfig) -> Self {
        Self {
            plot: Arc::new(RwLock::new(plot)),
            state: Arc::new(RwLock::new(ViewState::default())),
            config,
        }
    }

    /// Get a handle for reading or replacing the underlying plot.
    pub fn plot_handle(&self) -> PlotHandle {
        PlotHandle {
            plot: Arc::clone(&self.plot),
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let button = match ev.button {
            MouseButton::Left => selection::MouseButton::Left,
            MouseButton::Right => selection::MouseButton::Right,
            _ => return,
        };
        let origin = self.state.read().expect("view state lock").origin;
        let pos = screen_point(ev.position);
        let event = ClickEvent::new(ScreenPoint::new(pos.x - origin.x, pos.y - origin.y), button);

        let mut plot = self.plot.write().expect("plot lock");
        match plot.click(event) {
            Ok(transition) => debug!(?transition, "click handled"),
            Err(err) => warn!(%err, "click could not be resolved"),
        }
        cx.notify();
    }
}

impl Render for GpuiScatterView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let plot = Arc::clone(&self.plot);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();

        div()
            .size_full()
            .bg(to_hsla(self.config.background))
            .child(
                canvas(
                    move |bounds, _window, _| {
                        let origin = screen_point(bounds.origin);
                        state.write().expect("view state lock").origin = origin;
                        let mut plot = plot.write().expect("plot lock");
                        plot.resize(
                            f32::from(bounds.size.width) as f64,
                            f32::from(bounds.size.height) as f64,
                        );
                        if !plot.viewport().is_valid() {
                            return ScatterFrame {
                                origin,
                                render: RenderList::new(),
                            };
                        }
                        let render = plot.render().unwrap_or_else(|err| {
                            warn!(%err, "scatter plot could not be rendered");
                            RenderList::new()
                        });
                        ScatterFrame { origin, render }
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, &config, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_down(
                MouseButton::Right,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
    }
}

/// A handle for mutating a [`ScatterPlot`] held inside a `GpuiScatterView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct PlotHandle {
    plot: Arc<RwLock<ScatterPlot>>,
}

impl PlotHandle {
    /// Read the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&ScatterPlot) -> R) -> R {
        let plot = self.plot.read().expect("plot lock");
        f(&plot)
    }

    /// Mutate the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut ScatterPlot) -> R) -> R {
        let mut plot = self.plot.write().expect("plot lock");
        f(&mut plot)
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x) as f64, f32::from(point.y) as f64)
}
