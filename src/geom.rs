//! Geometric primitives used by the plotting pipeline.
//!
//! Data-space types carry the caller's values; screen-space types are pixel
//! coordinates with the origin at the top-left corner and y growing downward.

/// A coordinate pair in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One record of a categorized dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
    /// Category label, mapped to a marker shape.
    pub category: String,
}

impl DataPoint {
    /// Create a new record.
    pub fn new(x: f64, y: f64, category: impl Into<String>) -> Self {
        Self {
            x,
            y,
            category: category.into(),
        }
    }

    /// Coordinates without the category.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check whether both coordinates are finite.
    ///
    /// Records failing this are left out of scaling, drawing and selection.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Identity of this record for selection purposes.
    pub fn id(&self) -> PointId {
        PointId::from_point(self.position())
    }
}

/// Integer-rounded identity of a data point.
///
/// Two records that round to the same pair cannot be told apart by the
/// selection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId {
    /// Rounded X value.
    pub x: i64,
    /// Rounded Y value.
    pub y: i64,
}

impl PointId {
    /// Create an identity from already rounded coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Round a data point to its identity, ties to even.
    pub fn from_point(point: Point) -> Self {
        Self {
            x: point.x.round_ties_even() as i64,
            y: point.y.round_ties_even() as i64,
        }
    }

    /// The identity as a data-space point.
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f64,
    /// Y value in screen pixels.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift by another point treated as an offset.
    pub fn offset(self, by: ScreenPoint) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [ScreenPoint; 4] {
        [
            self.min,
            ScreenPoint::new(self.max.x, self.min.y),
            self.max,
            ScreenPoint::new(self.min.x, self.max.y),
        ]
    }
}
