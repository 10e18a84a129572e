//! Scatter plot entry points and builders.

use crate::axis::AxisFormatter;
use crate::error::PlotError;
use crate::geom::DataPoint;
use crate::render::{RenderList, Renderer, RendererConfig};
use crate::selection::{ClickEvent, SelectionEngine, Transition};
use crate::transform::ScaleModel;
use crate::view::Viewport;

/// A categorized scatter plot with nearest-neighbor selection.
///
/// Owns its dataset, viewport and selection, and derives the scale from the
/// current inputs on every render or click.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    data: Vec<DataPoint>,
    viewport: Viewport,
    renderer: Renderer,
    selection: SelectionEngine,
}

impl ScatterPlot {
    /// Create a plot over `data` with default configuration.
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self::builder().data(data).build()
    }

    /// Start building a plot with custom configuration.
    pub fn builder() -> ScatterPlotBuilder {
        ScatterPlotBuilder::default()
    }

    /// Access the dataset.
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Replace the dataset and reset the selection.
    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        self.data = data;
        self.selection.clear();
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the viewport. The selection is kept.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Resize the viewport, keeping the configured padding.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Access the renderer.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Access the selection engine.
    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Derive the scale for the current dataset and viewport.
    pub fn scale(&self) -> Result<ScaleModel, PlotError> {
        ScaleModel::derive(&self.data, self.viewport)
    }

    /// Render the plot followed by the selection overlay.
    pub fn render(&self) -> Result<RenderList, PlotError> {
        if self.data.is_empty() {
            return Ok(RenderList::new());
        }
        let scale = self.scale()?;
        let mut render = self.renderer.render_scaled(&self.data, &scale)?;
        render.extend(
            self.renderer
                .render_selection(&self.data, &scale, &self.selection),
        );
        Ok(render)
    }

    /// Feed a click in viewport pixels into the selection engine.
    pub fn click(&mut self, event: ClickEvent) -> Result<Transition, PlotError> {
        if self.data.is_empty() {
            self.selection.clear();
            return Ok(Transition::Ignored);
        }
        let scale = self.scale()?;
        Ok(self.selection.click(&self.data, &scale, event))
    }
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for configuring a scatter plot before construction.
#[derive(Debug, Default)]
pub struct ScatterPlotBuilder {
    data: Vec<DataPoint>,
    viewport: Viewport,
    renderer: RendererConfig,
    neighbors: Option<usize>,
}

impl ScatterPlotBuilder {
    /// Set the dataset.
    pub fn data(mut self, data: Vec<DataPoint>) -> Self {
        self.data = data;
        self
    }

    /// Set the viewport.
    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the padding, keeping the viewport size.
    pub fn padding(mut self, padding: f64) -> Self {
        self.viewport.padding = padding;
        self
    }

    /// Set how many neighbors a selection highlights.
    pub fn neighbors(mut self, k: usize) -> Self {
        self.neighbors = Some(k);
        self
    }

    /// Set the number of ticks per axis.
    pub fn tick_count(mut self, count: usize) -> Self {
        self.renderer.tick_count = count;
        self
    }

    /// Set the tick label formatter.
    pub fn formatter(mut self, formatter: AxisFormatter) -> Self {
        self.renderer.formatter = formatter;
        self
    }

    /// Replace the whole renderer configuration.
    pub fn renderer_config(mut self, config: RendererConfig) -> Self {
        self.renderer = config;
        self
    }

    /// Build the plot.
    pub fn build(self) -> ScatterPlot {
        ScatterPlot {
            data: self.data,
            viewport: self.viewport,
            renderer: Renderer::new(self.renderer),
            selection: self
                .neighbors
                .map(SelectionEngine::new)
                .unwrap_or_default(),
        }
    }
}
