//! Axis placement and tick label formatting.

use std::sync::Arc;

use crate::geom::ScreenPoint;
use crate::transform::ScaleModel;
use crate::view::Range;

/// Which rule positioned an axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAnchor {
    /// The domain straddles zero; the axis passes through the data origin.
    Origin,
    /// The domain is strictly positive; the axis sits on the low-value edge.
    Start,
    /// The domain is strictly negative; the axis sits on the high-value edge.
    End,
}

impl AxisAnchor {
    /// Classify a domain by the sign of its bounds.
    pub fn for_range(range: Range) -> Self {
        if range.contains_zero() {
            Self::Origin
        } else if range.min > 0.0 {
            Self::Start
        } else {
            Self::End
        }
    }
}

/// Pixel positions of the two axis lines.
///
/// The lines always stay inside the padded plot rectangle, even when the
/// data does not straddle zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPlacement {
    /// Pixel row of the horizontal X axis.
    pub x_axis_y: f64,
    /// Pixel column of the vertical Y axis.
    pub y_axis_x: f64,
    /// Rule that placed the X axis (decided by the Y domain).
    pub x_anchor: AxisAnchor,
    /// Rule that placed the Y axis (decided by the X domain).
    pub y_anchor: AxisAnchor,
}

impl AxisPlacement {
    /// Place both axes for a scale.
    pub fn place(scale: &ScaleModel) -> Self {
        let viewport = scale.viewport();
        let rect = viewport.plot_rect();

        let y_anchor = AxisAnchor::for_range(scale.x_range());
        let y_axis_x = match y_anchor {
            AxisAnchor::Origin => scale.x_to_screen(0.0),
            AxisAnchor::Start => rect.min.x,
            AxisAnchor::End => rect.max.x,
        };

        let x_anchor = AxisAnchor::for_range(scale.y_range());
        let x_axis_y = match x_anchor {
            AxisAnchor::Origin => scale.y_to_screen(0.0),
            AxisAnchor::Start => rect.max.y,
            AxisAnchor::End => rect.min.y,
        };

        Self {
            x_axis_y,
            y_axis_x,
            x_anchor,
            y_anchor,
        }
    }

    /// Endpoints of the X axis line, spanning the plot rectangle.
    pub fn x_axis_line(&self, scale: &ScaleModel) -> (ScreenPoint, ScreenPoint) {
        let rect = scale.viewport().plot_rect();
        (
            ScreenPoint::new(rect.min.x, self.x_axis_y),
            ScreenPoint::new(rect.max.x, self.x_axis_y),
        )
    }

    /// Endpoints of the Y axis line, drawn bottom to top.
    pub fn y_axis_line(&self, scale: &ScaleModel) -> (ScreenPoint, ScreenPoint) {
        let rect = scale.viewport().plot_rect();
        (
            ScreenPoint::new(self.y_axis_x, rect.max.y),
            ScreenPoint::new(self.y_axis_x, rect.min.y),
        )
    }
}

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Round to two decimals and print the shortest form.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Wrap a formatting closure.
    pub fn custom(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(formatter))
    }

    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => {
                // adding 0.0 turns -0.0 into 0.0
                let rounded = (value * 100.0).round() / 100.0 + 0.0;
                format!("{rounded}")
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Viewport;

    fn scale(x: (f64, f64), y: (f64, f64)) -> ScaleModel {
        ScaleModel::from_ranges(
            Range::new(x.0, x.1),
            Range::new(y.0, y.1),
            Viewport::new(800.0, 600.0, 70.0),
        )
        .unwrap()
    }

    #[test]
    fn straddling_domain_uses_origin() {
        let scale = scale((-10.0, 30.0), (-5.0, 15.0));
        let placement = AxisPlacement::place(&scale);
        assert_eq!(placement.y_anchor, AxisAnchor::Origin);
        assert_eq!(placement.x_anchor, AxisAnchor::Origin);
        assert!((placement.y_axis_x - (70.0 + 10.0 * 660.0 / 40.0)).abs() < 1e-9);
        assert!((placement.x_axis_y - (600.0 - (70.0 + 5.0 * 460.0 / 20.0))).abs() < 1e-9);
    }

    #[test]
    fn positive_domain_sits_on_left_and_bottom_edges() {
        let placement = AxisPlacement::place(&scale((2.0, 9.0), (1.0, 4.0)));
        assert_eq!(placement.y_anchor, AxisAnchor::Start);
        assert_eq!(placement.x_anchor, AxisAnchor::Start);
        assert_eq!(placement.y_axis_x, 70.0);
        assert_eq!(placement.x_axis_y, 530.0);
    }

    #[test]
    fn negative_domain_sits_on_right_and_top_edges() {
        let placement = AxisPlacement::place(&scale((-9.0, -2.0), (-4.0, -1.0)));
        assert_eq!(placement.y_anchor, AxisAnchor::End);
        assert_eq!(placement.x_anchor, AxisAnchor::End);
        assert_eq!(placement.y_axis_x, 730.0);
        assert_eq!(placement.x_axis_y, 70.0);
    }

    #[test]
    fn zero_bound_counts_as_straddling() {
        let placement = AxisPlacement::place(&scale((0.0, 10.0), (-3.0, 0.0)));
        assert_eq!(placement.y_anchor, AxisAnchor::Origin);
        assert_eq!(placement.x_anchor, AxisAnchor::Origin);
        assert!((placement.y_axis_x - 70.0).abs() < 1e-9);
        assert!((placement.x_axis_y - 70.0).abs() < 1e-9);
    }

    #[test]
    fn axis_lines_span_plot_rect() {
        let scale = scale((2.0, 9.0), (1.0, 4.0));
        let placement = AxisPlacement::place(&scale);
        let (start, end) = placement.x_axis_line(&scale);
        assert_eq!(start, ScreenPoint::new(70.0, 530.0));
        assert_eq!(end, ScreenPoint::new(730.0, 530.0));
        let (start, end) = placement.y_axis_line(&scale);
        assert_eq!(start, ScreenPoint::new(70.0, 530.0));
        assert_eq!(end, ScreenPoint::new(70.0, 70.0));
    }

    #[test]
    fn default_formatter_rounds_to_two_decimals() {
        let formatter = AxisFormatter::default();
        assert_eq!(formatter.format(2.456), "2.46");
        assert_eq!(formatter.format(1.0), "1");
        assert_eq!(formatter.format(-0.001), "0");
        assert_eq!(formatter.format(-12.5), "-12.5");
    }

    #[test]
    fn custom_formatter_is_used() {
        let formatter = AxisFormatter::custom(|value| format!("{value:.1} m"));
        assert_eq!(formatter.format(3.14159), "3.1 m");
    }
}
