use crate::backend::DrawBackend;
use crate::dedup::{GhostSegment, LineDeduplicator};
use crate::nudge::NudgeScheduler;

/// Where the ghost is being drawn this invocation, and in which mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostContext {
    pub x: i32,
    pub y: i32,
    pub ref_x: i32,
    pub ref_y: i32,
    pub erase: bool,
}

/// One redraw pass handed to the ghost callback.
///
/// Owns the pass-scoped [`LineDeduplicator`]; every primitive the callback
/// submits is routed through it and only the uncovered pieces reach the
/// backend. Submit vertical geometry before horizontal geometry: single
/// pixels are bookkept as vertical.
pub struct GhostPass<'a> {
    dedup: LineDeduplicator,
    backend: &'a mut dyn DrawBackend,
}

impl GhostPass<'_> {
    pub fn vertical(&mut self, x: i32, y1: i32, y2: i32) {
        for span in self.dedup.add_vertical(x, y1, y2) {
            self.backend.draw_vertical_run(x, span.lo, span.hi);
        }
    }

    pub fn horizontal(&mut self, y: i32, x1: i32, x2: i32) {
        for span in self.dedup.add_horizontal(y, x1, x2) {
            self.backend.draw_horizontal_run(y, span.lo, span.hi);
        }
    }

    pub fn diagonal(&mut self, start: (i32, i32), end: (i32, i32)) {
        for piece in self.dedup.add_diagonal(start, end) {
            self.backend
                .draw_segment(piece.start.0, piece.start.1, piece.end.0, piece.end.1);
        }
    }

    /// Classify by orientation and submit.
    pub fn segment(&mut self, start: (i32, i32), end: (i32, i32)) {
        for piece in self.dedup.add_segment(start, end) {
            match piece {
                GhostSegment::Vertical { x, span } => {
                    self.backend.draw_vertical_run(x, span.lo, span.hi);
                }
                GhostSegment::Horizontal { y, span } => {
                    self.backend.draw_horizontal_run(y, span.lo, span.hi);
                }
                GhostSegment::Diagonal(seg) => {
                    self.backend
                        .draw_segment(seg.start.0, seg.start.1, seg.end.0, seg.end.1);
                }
            }
        }
    }
}

/// Shape-drawing hook registered by the caller. Invoked once per redraw
/// pass with a fresh [`GhostPass`]; expected to decompose its geometry
/// relative to the reference point and the current point and submit every
/// piece through the pass.
pub type GhostCallback = Box<dyn FnMut(&mut GhostPass<'_>, GhostContext)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostState {
    /// No callback registered.
    Idle,
    /// Callback registered, nothing currently on screen.
    Armed,
    /// The last-drawn ghost is still on screen and must be erased next.
    Drawn,
}

/// Controller for one interactive overlay session.
///
/// Owns the registered callback, the reference anchor, the last-drawn
/// pointer position, and the suspend counter. Owned by the event dispatch
/// code and driven synchronously from pointer-motion and show/hide
/// requests; entry points called outside their precondition do nothing.
#[derive(Default)]
pub struct GhostSession {
    callback: Option<GhostCallback>,
    ref_point: (i32, i32),
    last_point: (i32, i32),
    suspend_count: u32,
    first_draw: bool,
    erase_next: bool,
}

impl GhostSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GhostState {
        if self.callback.is_none() {
            GhostState::Idle
        } else if self.erase_next {
            GhostState::Drawn
        } else {
            GhostState::Armed
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend_count > 0
    }

    /// True until the first draw after arming, and again after an undraw
    /// with the reset flag.
    pub fn is_first_draw(&self) -> bool {
        self.first_draw
    }

    /// Arm the overlay with a new callback and reference anchor. A ghost
    /// still on screen from the previous callback is erased first.
    pub fn set_ghost(
        &mut self,
        backend: &mut dyn DrawBackend,
        callback: GhostCallback,
        ref_x: i32,
        ref_y: i32,
    ) {
        self.erase_current(backend);
        self.callback = Some(callback);
        self.ref_point = (ref_x, ref_y);
        self.first_draw = true;
        self.erase_next = false;
        tracing::debug!(ref_x, ref_y, "ghost session armed");
    }

    /// Tear the session down. Erases a still-visible ghost, then drops the
    /// callback.
    pub fn clear_ghost(&mut self, backend: &mut dyn DrawBackend) {
        self.erase_current(backend);
        self.callback = None;
        self.first_draw = true;
        tracing::debug!("ghost session cleared");
    }

    /// Redraw the ghost at a new pointer position. The stale ghost at the
    /// previous position is erased first; each of the two passes gets its
    /// own deduplicator. No-op while suspended or with no callback.
    pub fn draw_ghost(&mut self, backend: &mut dyn DrawBackend, x: i32, y: i32) {
        if self.callback.is_none() || self.suspend_count > 0 {
            return;
        }
        self.erase_current(backend);
        self.invoke(backend, (x, y), false);
        self.last_point = (x, y);
        self.first_draw = false;
        self.erase_next = true;
    }

    /// Erase the pending ghost. `reset` forces the next draw to be treated
    /// as a first draw. No-op unless a ghost is on screen.
    pub fn undraw_ghost(&mut self, backend: &mut dyn DrawBackend, reset: bool) {
        if !self.erase_next {
            return;
        }
        self.invoke(backend, self.last_point, true);
        self.erase_next = false;
        if reset {
            self.first_draw = true;
        }
    }

    /// Nested visibility control. Hiding on the 0 -> 1 edge forces an
    /// undraw; showing back down to 0 schedules one debounced pointer
    /// nudge so the host regenerates a paint without an explicit redraw.
    pub fn show_ghost(
        &mut self,
        backend: &mut dyn DrawBackend,
        nudge: &dyn NudgeScheduler,
        visible: bool,
    ) {
        if visible {
            if self.suspend_count == 0 {
                return;
            }
            self.suspend_count -= 1;
            tracing::debug!(suspend_count = self.suspend_count, "ghost show");
            if self.suspend_count == 0 {
                nudge.request_nudge();
            }
        } else {
            self.suspend_count += 1;
            tracing::debug!(suspend_count = self.suspend_count, "ghost hide");
            if self.suspend_count == 1 {
                self.undraw_ghost(backend, true);
            }
        }
    }

    fn erase_current(&mut self, backend: &mut dyn DrawBackend) {
        if self.erase_next {
            self.invoke(backend, self.last_point, true);
            self.erase_next = false;
        }
    }

    fn invoke(&mut self, backend: &mut dyn DrawBackend, point: (i32, i32), erase: bool) {
        let (ref_x, ref_y) = self.ref_point;
        let Some(callback) = self.callback.as_mut() else {
            return;
        };
        let mut pass = GhostPass {
            dedup: LineDeduplicator::new(),
            backend,
        };
        callback(
            &mut pass,
            GhostContext {
                x: point.0,
                y: point.1,
                ref_x,
                ref_y,
                erase,
            },
        );
        // The pass, and with it the accumulated coverage, ends here.
    }
}
