//! Defines the drawing boundary the sketching core renders through.
//!
//! The core never talks to a real canvas. It only needs three operations,
//! all assumed synchronous and infallible, so they live behind a trait and
//! tests can record them instead of drawing.

use crate::spline::{Point, Spline};

pub mod svg;

/// Style tag distinguishing the two kinds of markers the core draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    /// A placed anchor point
    Anchor,

    /// The marker travelling along the curve during an animation
    Tracer,
}

/// Draw the sketching core's primitives on some drawing context.
pub trait Surface {
    /// Wipe the whole drawable area.
    fn clear(&mut self);

    /// Draw a dot marker at `center`.
    fn draw_marker(&mut self, center: Point, style: MarkerStyle);

    /// Stroke one cubic segment from `p0` to `p3` with control points
    /// `cp1` and `cp2`.
    fn draw_curve(&mut self, p0: Point, cp1: Point, cp2: Point, p3: Point);

    /// Stroke a whole spline segment by segment.
    ///
    /// A spline with fewer than two anchors has no segments and drawing it
    /// is a silent no-op.
    fn draw_spline(&mut self, spline: &Spline) {
        for [p0, cp1, cp2, p3] in spline.bezier_segments() {
            self.draw_curve(p0, cp1, cp2, p3);
        }
    }
}
