use tracing::trace;

use crate::axis::{AxisFormatter, AxisPlacement};
use crate::error::PlotError;
use crate::geom::{DataPoint, ScreenPoint, ScreenRect};
use crate::marker::{DEFAULT_PALETTE, MarkerCatalog, MarkerShape};
use crate::selection::SelectionEngine;
use crate::ticks::{DEFAULT_TICK_COUNT, TickGenerator};
use crate::transform::ScaleModel;
use crate::view::Viewport;

use super::{RenderCommand, RenderList, TextAnchor};

const LEGEND_PADDING: f64 = 4.0;
const LEGEND_LABEL_GAP: f64 = 4.0;

/// Geometry and labeling options for [`Renderer`].
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Ticks per axis, at least 2.
    pub tick_count: usize,
    /// Tick label formatter.
    pub formatter: AxisFormatter,
    /// Shapes assigned to categories in first-seen order.
    pub palette: Vec<MarkerShape>,
    /// Marker size in pixels.
    pub marker_size: f64,
    /// Tick mark length in pixels.
    pub tick_length: f64,
    /// Gap between a tick mark's end and its label.
    pub tick_label_gap: f64,
    /// Top-left corner of the legend; `None` puts it in the right padding band.
    pub legend_origin: Option<ScreenPoint>,
    /// Horizontal inset of the default legend origin from the plot edge.
    pub legend_inset: f64,
    /// Legend frame width in pixels.
    pub legend_width: f64,
    /// Height of one legend row in pixels.
    pub legend_row_height: f64,
    /// Radius of the selection highlight ring.
    pub highlight_radius: f64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            formatter: AxisFormatter::default(),
            palette: DEFAULT_PALETTE.to_vec(),
            marker_size: 6.0,
            tick_length: 5.0,
            tick_label_gap: 5.0,
            legend_origin: None,
            legend_inset: 10.0,
            legend_width: 56.0,
            legend_row_height: 24.0,
            highlight_radius: 7.0,
        }
    }
}

/// Turns a dataset into draw primitives.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Access the configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render markers, axes, ticks and the legend.
    ///
    /// An empty dataset renders to an empty list.
    pub fn render(
        &self,
        dataset: &[DataPoint],
        viewport: Viewport,
    ) -> Result<RenderList, PlotError> {
        if dataset.is_empty() {
            trace!("empty dataset, nothing to render");
            return Ok(RenderList::new());
        }
        let scale = ScaleModel::derive(dataset, viewport)?;
        self.render_scaled(dataset, &scale)
    }

    /// Render with an already derived scale.
    ///
    /// Records with non-finite coordinates are skipped.
    pub fn render_scaled(
        &self,
        dataset: &[DataPoint],
        scale: &ScaleModel,
    ) -> Result<RenderList, PlotError> {
        let mut render = RenderList::new();
        if dataset.is_empty() {
            return Ok(render);
        }

        let placement = AxisPlacement::place(scale);
        let ticks = TickGenerator::new(self.config.tick_count);
        let x_ticks = ticks.ticks(scale.x_range(), &self.config.formatter)?;
        let y_ticks = ticks.ticks(scale.y_range(), &self.config.formatter)?;
        let catalog = MarkerCatalog::build_with_palette(dataset, &self.config.palette);

        for point in dataset.iter().filter(|point| point.is_finite()) {
            render.push(RenderCommand::Point {
                at: scale.data_to_screen(point.position()),
                shape: catalog.shape_for(&point.category),
                size: self.config.marker_size,
            });
        }

        for (start, end) in [placement.x_axis_line(scale), placement.y_axis_line(scale)] {
            render.push(RenderCommand::Line { start, end });
        }

        let tick_length = self.config.tick_length;
        let label_offset = tick_length + self.config.tick_label_gap;
        for tick in x_ticks {
            let x = scale.x_to_screen(tick.value);
            let y = placement.x_axis_y;
            render.push(RenderCommand::Line {
                start: ScreenPoint::new(x, y),
                end: ScreenPoint::new(x, y + tick_length),
            });
            render.push(RenderCommand::Text {
                at: ScreenPoint::new(x, y + label_offset),
                text: tick.label,
                anchor: TextAnchor::North,
            });
        }
        for tick in y_ticks {
            let x = placement.y_axis_x;
            let y = scale.y_to_screen(tick.value);
            render.push(RenderCommand::Line {
                start: ScreenPoint::new(x, y),
                end: ScreenPoint::new(x - tick_length, y),
            });
            render.push(RenderCommand::Text {
                at: ScreenPoint::new(x - label_offset, y),
                text: tick.label,
                anchor: TextAnchor::East,
            });
        }

        self.build_legend(&mut render, &catalog, scale.viewport());

        trace!(
            points = dataset.len(),
            categories = catalog.len(),
            commands = render.len(),
            "rendered scatter plot"
        );
        Ok(render)
    }

    /// Render highlight rings around the current selection's neighbors.
    ///
    /// Rings sit on each neighbor's own position, not on its rounded identity.
    pub fn render_selection(
        &self,
        dataset: &[DataPoint],
        scale: &ScaleModel,
        selection: &SelectionEngine,
    ) -> RenderList {
        let mut render = RenderList::new();
        for neighbor in selection.neighbors() {
            let Some(point) = dataset.get(neighbor.index) else {
                continue;
            };
            render.push(RenderCommand::Ring {
                center: scale.data_to_screen(point.position()),
                radius: self.config.highlight_radius,
            });
        }
        render
    }

    fn build_legend(&self, render: &mut RenderList, catalog: &MarkerCatalog, viewport: Viewport) {
        if catalog.is_empty() {
            return;
        }
        let row_height = self.config.legend_row_height;
        let origin = self.config.legend_origin.unwrap_or_else(|| {
            ScreenPoint::new(
                viewport.width - viewport.padding + self.config.legend_inset,
                viewport.padding,
            )
        });
        let height = catalog.len() as f64 * row_height + LEGEND_PADDING * 2.0;
        let frame = ScreenRect::new(
            origin,
            ScreenPoint::new(origin.x + self.config.legend_width, origin.y + height),
        );
        render.push(RenderCommand::Polygon {
            points: frame.corners().to_vec(),
        });

        // glyphs sit in a square cell as tall as a row
        let glyph_x = origin.x + LEGEND_PADDING + row_height * 0.5;
        let label_x = origin.x + LEGEND_PADDING + row_height + LEGEND_LABEL_GAP;
        for (row, (category, shape)) in catalog.entries().enumerate() {
            let center_y = origin.y + LEGEND_PADDING + (row as f64 + 0.5) * row_height;
            render.push(RenderCommand::Point {
                at: ScreenPoint::new(glyph_x, center_y),
                shape,
                size: self.config.marker_size,
            });
            render.push(RenderCommand::Text {
                at: ScreenPoint::new(label_x, center_y),
                text: category.to_string(),
                anchor: TextAnchor::West,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::PointId;

    fn dataset() -> Vec<DataPoint> {
        vec![
            DataPoint::new(-2.0, 4.0, "setosa"),
            DataPoint::new(3.0, -1.0, "versicolor"),
            DataPoint::new(8.0, 9.0, "setosa"),
            DataPoint::new(1.0, 2.0, "virginica"),
        ]
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0, 70.0)
    }

    fn count(render: &RenderList, pred: impl Fn(&RenderCommand) -> bool) -> usize {
        render.commands().iter().filter(|command| pred(command)).count()
    }

    #[test]
    fn empty_dataset_renders_nothing() {
        let render = Renderer::default().render(&[], viewport()).unwrap();
        assert!(render.is_empty());
    }

    #[test]
    fn non_finite_records_are_not_drawn() {
        let data = [
            DataPoint::new(f64::NAN, 1.0, "ghost"),
            DataPoint::new(0.0, 0.0, "a"),
            DataPoint::new(3.0, 2.0, "b"),
        ];
        let render = Renderer::default().render(&data, viewport()).unwrap();
        for command in render.commands() {
            if let RenderCommand::Point { at, .. } = command {
                assert!(at.x.is_finite() && at.y.is_finite());
            }
        }
        // two data markers plus two legend glyphs
        let points = count(&render, |c| matches!(c, RenderCommand::Point { .. }));
        assert_eq!(points, 4);
        let ghost = count(&render, |c| {
            matches!(c, RenderCommand::Text { text, .. } if text == "ghost")
        });
        assert_eq!(ghost, 0);
    }

    #[test]
    fn degenerate_dataset_propagates_error() {
        let data = [DataPoint::new(3.0, 1.0, "a"), DataPoint::new(3.0, 5.0, "b")];
        assert!(matches!(
            Renderer::default().render(&data, viewport()),
            Err(PlotError::DegenerateDomain { .. })
        ));
    }

    #[test]
    fn emits_every_primitive_group() {
        let render = Renderer::default().render(&dataset(), viewport()).unwrap();
        let points = count(&render, |c| matches!(c, RenderCommand::Point { .. }));
        let lines = count(&render, |c| matches!(c, RenderCommand::Line { .. }));
        let texts = count(&render, |c| matches!(c, RenderCommand::Text { .. }));
        let polygons = count(&render, |c| matches!(c, RenderCommand::Polygon { .. }));
        // 4 data markers + 3 legend glyphs
        assert_eq!(points, 7);
        // 2 axes + 6 x ticks + 6 y ticks
        assert_eq!(lines, 14);
        // 12 tick labels + 3 legend labels
        assert_eq!(texts, 15);
        assert_eq!(polygons, 1);
        assert_eq!(render.len(), 37);
    }

    #[test]
    fn markers_follow_category_shapes() {
        let render = Renderer::default().render(&dataset(), viewport()).unwrap();
        let shapes: Vec<MarkerShape> = render
            .commands()
            .iter()
            .take(4)
            .map(|command| match command {
                RenderCommand::Point { shape, .. } => *shape,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(
            shapes,
            vec![
                MarkerShape::Circle,
                MarkerShape::Triangle,
                MarkerShape::Circle,
                MarkerShape::Square,
            ]
        );
    }

    #[test]
    fn tick_labels_hang_below_x_axis() {
        let render = Renderer::default().render(&dataset(), viewport()).unwrap();
        let scale = ScaleModel::derive(&dataset(), viewport()).unwrap();
        let axis_y = AxisPlacement::place(&scale).x_axis_y;
        let first_label = render
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Text {
                    at,
                    text,
                    anchor: TextAnchor::North,
                } => Some((*at, text.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(first_label.1, "-2");
        assert!((first_label.0.x - 70.0).abs() < 1e-9);
        assert!((first_label.0.y - (axis_y + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn legend_defaults_to_right_padding_band() {
        let render = Renderer::default().render(&dataset(), viewport()).unwrap();
        let frame = render
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Polygon { points } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(frame[0], ScreenPoint::new(740.0, 70.0));
        assert_eq!(frame.len(), 4);
        let labels: Vec<&str> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text {
                    text,
                    anchor: TextAnchor::West,
                    ..
                } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["setosa", "versicolor", "virginica"]);
    }

    #[test]
    fn too_few_ticks_is_reported() {
        let renderer = Renderer::new(RendererConfig {
            tick_count: 1,
            ..RendererConfig::default()
        });
        assert_eq!(
            renderer.render(&dataset(), viewport()),
            Err(PlotError::TooFewTicks { count: 1 })
        );
    }

    #[test]
    fn selection_overlay_rings_neighbors() {
        let data = dataset();
        let scale = ScaleModel::derive(&data, viewport()).unwrap();
        let renderer = Renderer::default();
        let mut selection = SelectionEngine::new(2);
        assert!(renderer.render_selection(&data, &scale, &selection).is_empty());

        selection.select(&data, PointId::new(1, 2));
        let overlay = renderer.render_selection(&data, &scale, &selection);
        assert_eq!(overlay.len(), 2);
        assert_eq!(
            overlay.commands()[0],
            RenderCommand::Ring {
                center: scale.data_to_screen(data[3].position()),
                radius: 7.0,
            }
        );
    }
}
