//! A sketching session owning the anchor list and the surface dimensions.
//!
//! The original sketch kept these as module globals next to the canvas
//! handle. Owning them in an explicit value lets a caller run several
//! independent sessions and feed them synthetic input in tests.

use tracing::{debug, trace};

use crate::animate::{Animation, Frame};
use crate::draw::{MarkerStyle, Surface};
use crate::spline::{Point, Spline};
use crate::Error;

/// Anchor list, surface dimensions and the at most one in-flight animation
/// run of a single sketch.
#[derive(Debug, Default)]
pub struct Session {
    anchors: Vec<Point>,
    width: f64,
    height: f64,
    animation: Option<Animation>,
}

impl Session {
    /// An empty session on a surface of the given dimensions.
    pub fn new(width: f64, height: f64) -> Session {
        Session {
            anchors: Vec::new(),
            width,
            height,
            animation: None,
        }
    }

    /// The anchors placed so far, in placement order.
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// Current surface dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Whether an animation run is currently in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Appends one anchor and immediately draws its marker.
    ///
    /// Anchors are never moved or removed again within a session.
    pub fn place<S: Surface>(&mut self, point: Point, surface: &mut S) {
        trace!(x = point.x, y = point.y, total = self.anchors.len() + 1, "anchor placed");
        self.anchors.push(point);
        surface.draw_marker(point, MarkerStyle::Anchor);
    }

    /// Adopts new surface dimensions.
    ///
    /// Existing anchors keep their coordinates. After shrinking the surface
    /// they may end up outside the drawable area, the session makes no
    /// attempt to rescale them.
    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(width, height, "surface resized");
        self.width = width;
        self.height = height;
    }

    /// Redraws all markers, derives the control table and strokes the full
    /// static spline. With at least [`MIN_ANCHORS`] anchors it also starts
    /// an animation run.
    ///
    /// With fewer than two anchors there is no curve and only the markers
    /// are drawn. A commit while a run is in flight replaces that run with
    /// a fresh one over the current anchors.
    ///
    /// [`MIN_ANCHORS`]: crate::animate::MIN_ANCHORS
    pub fn commit<S: Surface>(&mut self, surface: &mut S) {
        debug!(anchors = self.anchors.len(), "commit");
        surface.clear();
        for &anchor in self.anchors.iter() {
            surface.draw_marker(anchor, MarkerStyle::Anchor);
        }

        let spline = Spline::new(self.anchors.clone());
        surface.draw_spline(&spline);

        // The threshold check lives in `Animation`, a failed start just
        // means there is nothing to animate yet.
        self.animation = Animation::start(spline).ok();
    }

    /// Forwards a scheduling tick to the in-flight run, if any.
    ///
    /// Returns whether the host should schedule another tick. A finished
    /// run is dropped, leaving the session idle.
    pub fn tick<S: Surface>(&mut self, ts_ms: f64, surface: &mut S) -> Result<bool, Error> {
        let Some(animation) = self.animation.as_mut() else {
            return Ok(false);
        };
        match animation.tick(ts_ms, surface)? {
            Frame::Again => Ok(true),
            Frame::Done => {
                self.animation = None;
                Ok(false)
            }
        }
    }
}
