pub mod diagonal;
pub mod interval;

pub use diagonal::{clip_colinear, ColinearClip, DiagonalSegment, DiagonalSegmentStore};
pub use interval::{AxisIntervalStore, Span};

/// One uncovered piece of a submitted primitive, ready for the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostSegment {
    Vertical { x: i32, span: Span },
    Horizontal { y: i32, span: Span },
    Diagonal(DiagonalSegment),
}

/// Drawn-line database for a single redraw pass.
///
/// Every primitive of the pass goes through here; only the parts no earlier
/// primitive covered come back out. An instance lives for exactly one
/// callback invocation: it is created on entry and dropped on exit, because
/// coverage carried into a later pass would suppress legitimate geometry.
///
/// Single-pixel segments classify as vertical, so callers must submit their
/// vertical geometry before their horizontal geometry within one pass, or a
/// single-pixel feature degenerating out of a vertical edge will not find
/// the run that already covers it.
#[derive(Debug, Default)]
pub struct LineDeduplicator {
    axis: AxisIntervalStore,
    diagonals: DiagonalSegmentStore,
}

impl LineDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertical(&mut self, x: i32, y1: i32, y2: i32) -> Vec<Span> {
        self.axis.add_vertical(x, y1, y2)
    }

    pub fn add_horizontal(&mut self, y: i32, x1: i32, x2: i32) -> Vec<Span> {
        self.axis.add_horizontal(y, x1, x2)
    }

    pub fn add_diagonal(&mut self, start: (i32, i32), end: (i32, i32)) -> Vec<DiagonalSegment> {
        self.diagonals.add_diagonal(start, end)
    }

    /// Classify one segment and route it to the matching store.
    pub fn add_segment(&mut self, start: (i32, i32), end: (i32, i32)) -> Vec<GhostSegment> {
        let pieces: Vec<GhostSegment> = if start.0 == end.0 {
            // Includes single pixels: those always count as vertical.
            let x = start.0;
            self.add_vertical(x, start.1, end.1)
                .into_iter()
                .map(|span| GhostSegment::Vertical { x, span })
                .collect()
        } else if start.1 == end.1 {
            let y = start.1;
            self.add_horizontal(y, start.0, end.0)
                .into_iter()
                .map(|span| GhostSegment::Horizontal { y, span })
                .collect()
        } else {
            self.add_diagonal(start, end)
                .into_iter()
                .map(GhostSegment::Diagonal)
                .collect()
        };
        tracing::trace!(?start, ?end, surviving = pieces.len(), "segment deduplicated");
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_classifies_as_vertical() {
        let mut dedup = LineDeduplicator::new();
        dedup.add_vertical(5, 0, 9);
        // The pixel sits inside the vertical run, so nothing survives.
        assert!(dedup.add_segment((5, 4), (5, 4)).is_empty());
    }

    #[test]
    fn horizontal_run_does_not_hide_vertical_coverage() {
        let mut dedup = LineDeduplicator::new();
        dedup.add_segment((0, 3), (10, 3));
        assert_eq!(
            dedup.add_segment((4, 3), (4, 3)),
            vec![GhostSegment::Vertical {
                x: 4,
                span: Span::new(3, 3)
            }]
        );
    }

    #[test]
    fn classification_routes_by_orientation() {
        let mut dedup = LineDeduplicator::new();
        assert_eq!(
            dedup.add_segment((2, 0), (2, 5)),
            vec![GhostSegment::Vertical {
                x: 2,
                span: Span::new(0, 5)
            }]
        );
        assert_eq!(
            dedup.add_segment((0, 7), (5, 7)),
            vec![GhostSegment::Horizontal {
                y: 7,
                span: Span::new(0, 5)
            }]
        );
        assert_eq!(
            dedup.add_segment((0, 0), (4, 4)),
            vec![GhostSegment::Diagonal(DiagonalSegment::new(
                (0, 0),
                (4, 4)
            ))]
        );
    }

    #[test]
    fn resubmitted_shape_is_fully_suppressed() {
        let mut dedup = LineDeduplicator::new();
        let edges = [
            ((1, 1), (1, 8)),
            ((6, 1), (6, 8)),
            ((2, 1), (5, 1)),
            ((2, 8), (5, 8)),
        ];
        for (a, b) in edges {
            assert!(!dedup.add_segment(a, b).is_empty());
        }
        for (a, b) in edges {
            assert!(dedup.add_segment(a, b).is_empty());
        }
    }
}
