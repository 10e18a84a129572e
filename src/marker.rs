//! Marker shapes and the category-to-shape catalog.

use std::f64::consts::TAU;

use indexmap::IndexMap;

use crate::geom::{DataPoint, ScreenPoint};

/// Marker shape for scatter plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    /// Circle marker.
    Circle,
    /// Upward-pointing triangle marker.
    Triangle,
    /// Square marker.
    Square,
}

/// Shapes handed out to categories, in assignment order.
pub const DEFAULT_PALETTE: [MarkerShape; 3] = [
    MarkerShape::Circle,
    MarkerShape::Triangle,
    MarkerShape::Square,
];

const CIRCLE_SEGMENTS: usize = 16;

impl MarkerShape {
    /// Outline of the marker as a closed polygon.
    ///
    /// `half_extent` is half the marker size in pixels.
    pub fn vertices(self, center: ScreenPoint, half_extent: f64) -> Vec<ScreenPoint> {
        let (cx, cy, h) = (center.x, center.y, half_extent);
        match self {
            Self::Circle => (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
                    ScreenPoint::new(cx + h * angle.cos(), cy + h * angle.sin())
                })
                .collect(),
            Self::Triangle => vec![
                ScreenPoint::new(cx, cy - h),
                ScreenPoint::new(cx - h, cy + h),
                ScreenPoint::new(cx + h, cy + h),
            ],
            Self::Square => vec![
                ScreenPoint::new(cx - h, cy - h),
                ScreenPoint::new(cx + h, cy - h),
                ScreenPoint::new(cx + h, cy + h),
                ScreenPoint::new(cx - h, cy + h),
            ],
        }
    }
}

/// Mapping from category label to marker shape.
///
/// Categories keep the order in which they first appear in the dataset, so
/// the same dataset always yields the same mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCatalog {
    shapes: IndexMap<String, MarkerShape>,
    fallback: MarkerShape,
}

impl MarkerCatalog {
    /// Assign shapes from the default palette.
    pub fn build(dataset: &[DataPoint]) -> Self {
        Self::build_with_palette(dataset, &DEFAULT_PALETTE)
    }

    /// Assign shapes from `palette`, cycling when categories outnumber it.
    ///
    /// Records with non-finite coordinates are not drawn and do not claim a
    /// shape.
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn build_with_palette(dataset: &[DataPoint], palette: &[MarkerShape]) -> Self {
        let palette = if palette.is_empty() {
            &DEFAULT_PALETTE[..]
        } else {
            palette
        };
        let mut shapes = IndexMap::new();
        for point in dataset.iter().filter(|point| point.is_finite()) {
            if !shapes.contains_key(&point.category) {
                let shape = palette[shapes.len() % palette.len()];
                shapes.insert(point.category.clone(), shape);
            }
        }
        Self {
            shapes,
            fallback: palette[0],
        }
    }

    /// Shape for a category; unknown categories get the palette's first shape.
    pub fn shape_for(&self, category: &str) -> MarkerShape {
        self.shapes.get(category).copied().unwrap_or(self.fallback)
    }

    /// Categories and their shapes in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, MarkerShape)> + '_ {
        self.shapes
            .iter()
            .map(|(category, shape)| (category.as_str(), *shape))
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check whether the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
