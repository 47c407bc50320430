//! Traced path data
//!
//! A `Segment` is the uninterrupted travel between two consecutive wall
//! impacts (or between the start and the first impact, or between the last
//! impact and the end of the trace). A `Path` is one ray's chronological
//! segment list. Paths are immutable once built; the renderer reads them
//! while the scene may be rebuilding replacements.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Points visited between two bounce events, in travel order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Visited positions, including the impact points at both ends.
    /// Always at least 2 points in a finished path.
    pub points: Vec<Vec2>,
}

impl Segment {
    /// First point of the segment
    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    /// Last point of the segment
    pub fn end(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }
}

/// Full trace of one ray, segments in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    /// True if the ray never moved
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total number of recorded points across all segments
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }
}

/// Accumulates points into an open segment and closes it at each impact.
///
/// Segments shorter than 2 points are dropped rather than emitted, so a
/// trace that ends exactly on an impact never yields a trailing stub.
#[derive(Debug)]
pub struct PathBuilder {
    segments: Vec<Segment>,
    current: Vec<Vec2>,
}

impl PathBuilder {
    /// Start a path with the open segment containing only the origin
    pub fn new(origin: Vec2) -> Self {
        Self {
            segments: Vec::new(),
            current: vec![origin],
        }
    }

    /// Record a visited position in the open segment
    pub fn visit(&mut self, p: Vec2) {
        self.current.push(p);
    }

    /// Close the open segment at an impact and start the next one there
    pub fn break_at(&mut self, impact: Vec2) {
        if self.current.len() >= 2 {
            self.segments.push(Segment {
                points: std::mem::take(&mut self.current),
            });
        } else {
            self.current.clear();
        }
        self.current.push(impact);
    }

    /// Finish the path, keeping the open segment if it recorded any travel
    pub fn finish(mut self) -> Path {
        if self.current.len() >= 2 {
            self.segments.push(Segment {
                points: self.current,
            });
        }
        Path {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = PathBuilder::new(Vec2::ZERO).finish();
        assert!(path.is_empty());
        assert_eq!(path.point_count(), 0);
    }

    #[test]
    fn test_single_segment() {
        let mut builder = PathBuilder::new(Vec2::ZERO);
        builder.visit(Vec2::new(10.0, 0.0));
        builder.visit(Vec2::new(20.0, 0.0));
        let path = builder.finish();

        assert_eq!(path.segments.len(), 1);
        assert_eq!(path.segments[0].start(), Vec2::ZERO);
        assert_eq!(path.segments[0].end(), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_break_starts_next_segment_at_impact() {
        let mut builder = PathBuilder::new(Vec2::ZERO);
        builder.visit(Vec2::new(10.0, 0.0));
        builder.break_at(Vec2::new(10.0, 0.0));
        builder.visit(Vec2::new(5.0, 0.0));
        let path = builder.finish();

        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.segments[0].end(), Vec2::new(10.0, 0.0));
        assert_eq!(path.segments[1].start(), Vec2::new(10.0, 0.0));
        assert_eq!(path.segments[1].end(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_stub_segments_dropped() {
        // Break immediately after an impact: the one-point segment vanishes
        let mut builder = PathBuilder::new(Vec2::ZERO);
        builder.break_at(Vec2::new(1.0, 0.0));
        builder.visit(Vec2::new(2.0, 0.0));
        let path = builder.finish();

        assert_eq!(path.segments.len(), 1);
        assert_eq!(path.segments[0].start(), Vec2::new(1.0, 0.0));
    }
}
