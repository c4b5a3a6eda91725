//! Control point derivation and piecewise curve sampling.
//!
//! The builder half turns an ordered anchor list into one [`ControlPair`] per
//! segment, the sampler half ([`Spline`]) maps a global progress value onto
//! the correct cubic segment and evaluates it.

use nalgebra::Vector2;
use smallvec::SmallVec;

use crate::Error;

/// A 2d coordinate in surface space.
pub type Point = Vector2<f64>;

/// Tension of the cardinal spline.
///
/// Each control point is offset from its anchor by a sixth of the
/// tension-scaled vector between the anchor's two neighbours.
const TENSION: f64 = 1.0;

/// The two bezier control points governing the cubic segment between
/// `anchors[i]` and `anchors[i + 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlPair {
    /// Control point pulling the curve out of the segment's start anchor
    pub cp1: Point,

    /// Control point pulling the curve into the segment's end anchor
    pub cp2: Point,
}

/// Control pairs for all segments of an anchor list, indexed by segment.
///
/// Derived wholesale from the anchors on every (re)trigger and read-only
/// afterwards. Always holds `max(0, anchors.len() - 1)` entries.
pub type ControlTable = SmallVec<[ControlPair; 8]>;

/// Derives a [`ControlPair`] per consecutive anchor pair.
///
/// The pair for segment `i` only depends on anchors `i - 1` to `i + 2`.
/// Missing neighbours at either end are clamped to the segment's own
/// endpoints, so the first segment's incoming tangent uses its start point
/// as a stand-in for a predecessor and the last one mirrors that policy.
///
/// Fewer than two anchors means there is no segment, yielding an empty table.
pub fn control_points(anchors: &[Point]) -> ControlTable {
    let mut table = ControlTable::new();
    if anchors.len() < 2 {
        return table;
    }

    for i in 0..anchors.len() - 1 {
        let p0 = if i > 0 { anchors[i - 1] } else { anchors[i] };
        let p1 = anchors[i];
        let p2 = anchors[i + 1];
        let p3 = *anchors.get(i + 2).unwrap_or(&p2);

        table.push(ControlPair {
            cp1: p1 + (p2 - p0) * (TENSION / 6.0),
            cp2: p2 - (p3 - p1) * (TENSION / 6.0),
        });
    }

    table
}

/// Evaluates the cubic bernstein form at `t` for the four given points.
///
/// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// An anchor list together with its derived [`ControlTable`].
///
/// Built once when a render or animation is triggered. The anchors pass
/// through the curve exactly at segment boundaries and tangents are
/// continuous across them.
#[derive(Clone, Debug, PartialEq)]
pub struct Spline {
    anchors: Vec<Point>,
    controls: ControlTable,
}

impl Spline {
    /// Takes a snapshot of the anchors and derives their control table.
    pub fn new(anchors: Vec<Point>) -> Spline {
        let controls = control_points(&anchors);
        Spline { anchors, controls }
    }

    /// The anchors this spline was built from, in traversal order.
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// The derived control pairs, one per segment.
    pub fn controls(&self) -> &[ControlPair] {
        &self.controls
    }

    /// Number of cubic segments, which is one less than the anchor count.
    pub fn segments(&self) -> usize {
        self.anchors.len().saturating_sub(1)
    }

    /// Maps a global progress value to a segment index and the local `t`
    /// within that segment.
    ///
    /// `progress == 1` would select one segment past the end, so the index
    /// is clamped to the last segment where the local `t` becomes 1.
    pub fn locate(&self, progress: f64) -> Result<(usize, f64), Error> {
        if self.anchors.len() < 2 {
            return Err(Error::TooFewAnchors {
                found: self.anchors.len(),
                need: 2,
            });
        }

        let segments = self.segments() as f64;
        let segment = ((progress * segments).floor() as usize).min(self.segments() - 1);
        let local_t = (progress - segment as f64 / segments) * segments;
        Ok((segment, local_t))
    }

    /// The exact position on the piecewise curve for a progress value in
    /// `[0, 1]`.
    ///
    /// `evaluate(0)` is the first anchor and `evaluate(1)` the last one.
    /// With fewer than two anchors no curve exists and sampling it is an
    /// error instead of a meaningless point.
    pub fn evaluate(&self, progress: f64) -> Result<Point, Error> {
        let (segment, t) = self.locate(progress)?;
        let ControlPair { cp1, cp2 } = self.controls[segment];
        Ok(cubic_point(
            self.anchors[segment],
            cp1,
            cp2,
            self.anchors[segment + 1],
            t,
        ))
    }

    /// Iterates over the segments as `[start, cp1, cp2, end]` quadruples,
    /// ready to be fed into a drawing context.
    pub fn bezier_segments(&self) -> impl Iterator<Item = [Point; 4]> + '_ {
        self.controls.iter().enumerate().map(|(i, pair)| {
            [
                self.anchors[i],
                pair.cp1,
                pair.cp2,
                self.anchors[i + 1],
            ]
        })
    }
}
