//! Time-progress animation of a marker travelling along a spline.
//!
//! The driver is deliberately passive: it never schedules anything itself.
//! The host owns the "run before next frame" primitive and calls
//! [`Animation::tick`] with a wall-clock timestamp once per frame, for as
//! long as the returned [`Frame`] asks for another one. This keeps the whole
//! state machine testable with synthetic timestamps.

use tracing::{debug, trace};

use crate::draw::{MarkerStyle, Surface};
use crate::spline::Spline;
use crate::Error;

/// Duration of an animation run started through [`Animation::start`].
pub const DEFAULT_DURATION_MS: f64 = 5000.0;

/// Animating a single segment has little point. A run only starts once at
/// least one interior anchor exists, which is stricter than the two anchors
/// needed to merely draw a curve.
pub const MIN_ANCHORS: usize = 3;

/// Tells the host whether to schedule another tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "the host must keep ticking until `Frame::Done`"]
pub enum Frame {
    /// The run is still going, schedule another tick.
    Again,

    /// The run reached full progress and went back to idle.
    Done,
}

/// One in-flight animation run over a fixed spline.
///
/// A new run is a fresh value; two runs never share state. The spline is
/// snapshotted at start, anchors placed afterwards are not picked up.
#[derive(Clone, Debug)]
pub struct Animation {
    spline: Spline,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl Animation {
    /// Starts a run of [`DEFAULT_DURATION_MS`] over `spline`.
    pub fn start(spline: Spline) -> Result<Animation, Error> {
        Animation::with_duration(spline, DEFAULT_DURATION_MS)
    }

    /// Starts a run with an explicit duration in milliseconds.
    pub fn with_duration(spline: Spline, duration_ms: f64) -> Result<Animation, Error> {
        let found = spline.anchors().len();
        if found < MIN_ANCHORS {
            return Err(Error::TooFewAnchors {
                found,
                need: MIN_ANCHORS,
            });
        }
        debug!(anchors = found, duration_ms, "starting animation run");
        Ok(Animation {
            spline,
            duration_ms,
            started_at: None,
        })
    }

    /// The spline this run was started over.
    pub fn spline(&self) -> &Spline {
        &self.spline
    }

    /// Advances the run to `ts_ms` and redraws the whole scene.
    ///
    /// The first tick records its timestamp as the run's start, so progress
    /// is measured in elapsed time, not tick count. Each tick clears the
    /// surface, redraws all anchor markers and the static spline, then puts
    /// the tracer at the current progress. The first tick whose elapsed time
    /// reaches the duration draws the tracer on the last anchor and ends the
    /// run.
    pub fn tick<S: Surface>(&mut self, ts_ms: f64, surface: &mut S) -> Result<Frame, Error> {
        let started_at = *self.started_at.get_or_insert(ts_ms);
        let progress = ((ts_ms - started_at) / self.duration_ms).min(1.0);
        trace!(progress, "animation tick");

        surface.clear();
        for &anchor in self.spline.anchors() {
            surface.draw_marker(anchor, MarkerStyle::Anchor);
        }
        surface.draw_spline(&self.spline);
        surface.draw_marker(self.spline.evaluate(progress)?, MarkerStyle::Tracer);

        if progress < 1.0 {
            Ok(Frame::Again)
        } else {
            debug!("animation run finished");
            Ok(Frame::Done)
        }
    }
}
