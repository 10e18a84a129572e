//! Rendering primitives and the scatter plot renderer.
//!
//! These types are backend-agnostic: a [`RenderList`] can be consumed by any
//! drawing surface (such as the GPUI backend, an SVG writer or a canvas).

mod scene;

pub use scene::{Renderer, RendererConfig};

use crate::geom::ScreenPoint;
use crate::marker::MarkerShape;

/// Which point of a text label its position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Top center; the label hangs below the position.
    North,
    /// Right middle; the label extends left of the position.
    East,
    /// Left middle; the label extends right of the position.
    West,
}

/// A single draw primitive in viewport pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a marker centered on a point.
    Point {
        /// Marker center.
        at: ScreenPoint,
        /// Marker shape.
        shape: MarkerShape,
        /// Marker size in pixels.
        size: f64,
    },
    /// Draw a straight line.
    Line {
        /// Segment start.
        start: ScreenPoint,
        /// Segment end.
        end: ScreenPoint,
    },
    /// Draw text.
    Text {
        /// Anchor position.
        at: ScreenPoint,
        /// Text content.
        text: String,
        /// Which point of the text sits at `at`.
        anchor: TextAnchor,
    },
    /// Draw a closed polygon outline.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<ScreenPoint>,
    },
    /// Draw a highlight ring around a point.
    Ring {
        /// Ring center.
        center: ScreenPoint,
        /// Ring radius in pixels.
        radius: f64,
    },
}

/// Ordered list of draw primitives.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Append every command of another list.
    pub fn extend(&mut self, other: RenderList) {
        self.commands.extend(other.commands);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the list has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl IntoIterator for RenderList {
    type Item = RenderCommand;
    type IntoIter = std::vec::IntoIter<RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderList {
    type Item = &'a RenderCommand;
    type IntoIter = std::slice::Iter<'a, RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
