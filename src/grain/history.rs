use std::sync::Arc;

use crate::geometry::Shape;

/// Append-only record of clipped grain shapes, one per regression step.
///
/// Entry `i` holds the shape after `i + 1` offsets. Entries are shared, so
/// readers may keep them after the grain moves on.
#[derive(Debug, Clone, Default)]
pub struct ShapeHistory {
    shapes: Vec<Arc<Shape>>,
}

impl ShapeHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, shape: Arc<Shape>) {
        self.shapes.push(shape);
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the shape recorded at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<Shape>> {
        self.shapes.get(index)
    }

    /// Returns the most recent shape.
    #[must_use]
    pub fn last(&self) -> Option<&Arc<Shape>> {
        self.shapes.last()
    }

    /// Iterates the recorded shapes in step order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Shape>> {
        self.shapes.iter()
    }

    /// Returns the entries from `start` on as a new history sharing the
    /// same shapes.
    #[must_use]
    pub fn since(&self, start: usize) -> Self {
        Self {
            shapes: self.shapes.get(start..).unwrap_or_default().to_vec(),
        }
    }

    /// Returns the recorded shapes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<Shape>] {
        &self.shapes
    }
}
