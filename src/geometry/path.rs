use crate::math::distance_2d::point_dist;
use crate::math::Point2;

use super::curve::{ArcSegment, Curve, LineSegment};

/// A single drawing primitive of a source path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathPrimitive {
    Line(LineSegment),
    Arc(ArcSegment),
}

impl PathPrimitive {
    /// Returns this primitive scaled uniformly about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.scaled(factor)),
            Self::Arc(arc) => Self::Arc(arc.scaled(factor)),
        }
    }
}

impl Curve for PathPrimitive {
    fn point_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line(line) => line.point_at(t),
            Self::Arc(arc) => arc.point_at(t),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    fn start(&self) -> Point2 {
        match self {
            Self::Line(line) => line.start(),
            Self::Arc(arc) => arc.start(),
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Line(line) => line.end(),
            Self::Arc(arc) => arc.end(),
        }
    }
}

impl From<LineSegment> for PathPrimitive {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<ArcSegment> for PathPrimitive {
    fn from(arc: ArcSegment) -> Self {
        Self::Arc(arc)
    }
}

/// An ordered sequence of line and arc primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub primitives: Vec<PathPrimitive>,
}

impl Path {
    /// Creates a path from its primitives.
    #[must_use]
    pub fn new(primitives: Vec<PathPrimitive>) -> Self {
        Self { primitives }
    }

    /// Returns the summed length of all primitives.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.primitives.iter().map(|p| p.length()).sum()
    }

    /// Returns this path scaled uniformly about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            primitives: self.primitives.iter().map(|p| p.scaled(factor)).collect(),
        }
    }

    /// Appends all primitives of `other` to this path.
    pub fn extend(&mut self, other: &Path) {
        self.primitives.extend_from_slice(&other.primitives);
    }

    /// Returns the number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns whether the path has no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl FromIterator<PathPrimitive> for Path {
    fn from_iter<I: IntoIterator<Item = PathPrimitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

/// A straight segment with two endpoints; the unit consumed by the
/// boundary sequencer.
///
/// `start == end` is allowed and marks a single sampled point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a zero-length segment at `point`.
    #[must_use]
    pub fn point(point: Point2) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// Returns whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        point_dist(&self.start, &self.end)
    }
}
