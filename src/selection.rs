//! Click handling and nearest-neighbor selection.
//!
//! A right click is inverse-mapped through the [`ScaleModel`], rounded to a
//! [`PointId`], and toggles the highlight set of its nearest neighbors.
//! Clicking the selected identity again clears the selection; clicking a
//! different one moves it.

use indexmap::IndexSet;
use tracing::debug;

use crate::geom::{DataPoint, PointId, ScreenPoint};
use crate::transform::ScaleModel;

/// Neighbors highlighted per selection unless configured otherwise.
pub const DEFAULT_NEIGHBORS: usize = 5;

/// Mouse button of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button, reserved for point inspection.
    Left,
    /// Secondary button, drives neighbor selection.
    Right,
}

/// A click in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// Click position in pixels.
    pub position: ScreenPoint,
    /// Button that was pressed.
    pub button: MouseButton,
}

impl ClickEvent {
    /// Create a click event.
    pub fn new(position: ScreenPoint, button: MouseButton) -> Self {
        Self { position, button }
    }

    /// Right click at a pixel position.
    pub fn right(x: f64, y: f64) -> Self {
        Self::new(ScreenPoint::new(x, y), MouseButton::Right)
    }

    /// Left click at a pixel position.
    pub fn left(x: f64, y: f64) -> Self {
        Self::new(ScreenPoint::new(x, y), MouseButton::Left)
    }
}

/// A dataset point found by a neighbor search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index into the dataset.
    pub index: usize,
    /// Identity of the point.
    pub id: PointId,
    /// Euclidean distance from the selected identity.
    pub distance: f64,
}

/// Selection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Idle,
    /// A point is selected and its neighbors are highlighted.
    Selected {
        /// Identity that was clicked.
        point: PointId,
        /// Nearest neighbors by ascending distance.
        neighbors: Vec<Neighbor>,
    },
}

/// Result of feeding a click into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The click did not change the state.
    Ignored,
    /// A point was selected from idle.
    Selected(PointId),
    /// The selection moved to a different point.
    Moved {
        /// Previously selected identity.
        from: PointId,
        /// Newly selected identity.
        to: PointId,
    },
    /// The selected point was clicked again and the selection was cleared.
    Cleared,
}

/// Nearest-neighbor selection state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEngine {
    k: usize,
    state: SelectionState,
}

impl SelectionEngine {
    /// Create an idle engine highlighting `k` neighbors per selection.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            state: SelectionState::Idle,
        }
    }

    /// Configured neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Current state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Selected identity, if any.
    pub fn selected(&self) -> Option<PointId> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Selected { point, .. } => Some(*point),
        }
    }

    /// Neighbors of the current selection, nearest first.
    pub fn neighbors(&self) -> &[Neighbor] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Selected { neighbors, .. } => neighbors,
        }
    }

    /// Identities to draw highlighted, nearest first.
    pub fn highlighted(&self) -> IndexSet<PointId> {
        self.neighbors().iter().map(|neighbor| neighbor.id).collect()
    }

    /// Check whether an identity is highlighted.
    pub fn is_highlighted(&self, id: PointId) -> bool {
        self.neighbors().iter().any(|neighbor| neighbor.id == id)
    }

    /// Return to idle.
    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Handle a click in viewport pixels.
    ///
    /// Left clicks are accepted and ignored. Clicks outside the viewport are
    /// extrapolated through the scale like any other.
    pub fn click(
        &mut self,
        dataset: &[DataPoint],
        scale: &ScaleModel,
        event: ClickEvent,
    ) -> Transition {
        match event.button {
            MouseButton::Left => Transition::Ignored,
            MouseButton::Right => {
                let id = PointId::from_point(scale.screen_to_data(event.position));
                self.select(dataset, id)
            }
        }
    }

    /// Apply a selection transition for an already resolved identity.
    pub fn select(&mut self, dataset: &[DataPoint], id: PointId) -> Transition {
        if dataset.is_empty() {
            self.clear();
            return Transition::Ignored;
        }

        let transition = match self.selected() {
            Some(current) if current == id => {
                self.clear();
                Transition::Cleared
            }
            previous => {
                let neighbors = nearest_neighbors(dataset, id, self.effective_k(dataset.len()));
                self.state = SelectionState::Selected {
                    point: id,
                    neighbors,
                };
                match previous {
                    Some(from) => Transition::Moved { from, to: id },
                    None => Transition::Selected(id),
                }
            }
        };
        debug!(
            ?transition,
            highlighted = self.neighbors().len(),
            "selection transition"
        );
        transition
    }

    fn effective_k(&self, len: usize) -> usize {
        if self.k == 0 || self.k > len {
            len
        } else {
            self.k
        }
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_NEIGHBORS)
    }
}

/// The `k` points closest to `center`, nearest first.
///
/// Distances run from the integer identity to each point's raw coordinates.
/// Ties keep dataset order, and a point at the center is its own nearest
/// neighbor. Records with non-finite coordinates are never neighbors.
pub fn nearest_neighbors(dataset: &[DataPoint], center: PointId, k: usize) -> Vec<Neighbor> {
    let origin = center.to_point();
    let mut neighbors: Vec<Neighbor> = dataset
        .iter()
        .enumerate()
        .filter(|(_, point)| point.is_finite())
        .map(|(index, point)| Neighbor {
            index,
            id: point.id(),
            distance: origin.distance(point.position()),
        })
        .collect();
    // stable: equal distances keep dataset order
    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    neighbors.truncate(k);
    neighbors
}
