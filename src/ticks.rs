//! Evenly spaced axis ticks.

use crate::axis::AxisFormatter;
use crate::error::PlotError;
use crate::view::Range;

/// Number of ticks drawn per axis unless configured otherwise.
pub const DEFAULT_TICK_COUNT: usize = 6;

/// A position along an axis with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Unrounded value in data coordinates; drives pixel placement.
    pub value: f64,
    /// Formatted label derived from `value`.
    pub label: String,
}

/// Produce `count` evenly spaced values from `min` to `max`, both included.
pub fn generate(min: f64, max: f64, count: usize) -> Result<Vec<f64>, PlotError> {
    if count < 2 {
        return Err(PlotError::TooFewTicks { count });
    }
    let last = count - 1;
    let step = (max - min) / last as f64;
    Ok((0..count)
        .map(|i| if i == last { max } else { min + i as f64 * step })
        .collect())
}

/// Tick generator with a fixed tick count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGenerator {
    count: usize,
}

impl TickGenerator {
    /// Create a generator producing `count` ticks per axis.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Ticks per axis.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Tick values across a range.
    pub fn values(&self, range: Range) -> Result<Vec<f64>, PlotError> {
        generate(range.min, range.max, self.count)
    }

    /// Labeled ticks across a range.
    pub fn ticks(&self, range: Range, formatter: &AxisFormatter) -> Result<Vec<Tick>, PlotError> {
        Ok(self
            .values(range)?
            .into_iter()
            .map(|value| Tick {
                value,
                label: formatter.format(value),
            })
            .collect())
    }
}

impl Default for TickGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_COUNT)
    }
}
