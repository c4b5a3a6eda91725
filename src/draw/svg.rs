//! Svg implementation of the drawing boundary.
//!
//! Accumulates everything drawn since the last [`Surface::clear`] and
//! renders it as a standalone svg document via [`Display`].

use std::fmt::{Display, Formatter};

use crate::draw::{MarkerStyle, Surface};
use crate::spline::Point;

/// Marker radius used by both styles (matches the 5px canvas arcs).
const MARKER_RADIUS: f64 = 5.0;

/// Fill color of anchor markers.
const ANCHOR_COLOR: &str = "red";

/// Fill color of the travelling marker.
const TRACER_COLOR: &str = "green";

/// Stroke color of the spline itself.
const CURVE_COLOR: &str = "blue";

/// Stroke width of the spline itself.
const CURVE_WIDTH: f64 = 2.0;

/// A [`Surface`] rendering into an svg document.
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

enum Element {
    Circle {
        center: Point,
        radius: f64,
        color: &'static str,
    },
    Curve {
        points: [Point; 4],
    },
}

impl SvgSurface {
    /// An empty surface covering `(0, 0)` to `(width, height)`.
    pub fn new(width: f64, height: f64) -> SvgSurface {
        SvgSurface {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Number of elements drawn since the last clear.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn draw_marker(&mut self, center: Point, style: MarkerStyle) {
        let color = match style {
            MarkerStyle::Anchor => ANCHOR_COLOR,
            MarkerStyle::Tracer => TRACER_COLOR,
        };
        self.elements.push(Element::Circle {
            center,
            radius: MARKER_RADIUS,
            color,
        });
    }

    fn draw_curve(&mut self, p0: Point, cp1: Point, cp2: Point, p3: Point) {
        self.elements.push(Element::Curve {
            points: [p0, cp1, cp2, p3],
        });
    }
}

impl Display for SvgSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.width, self.height
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Circle {
                center,
                radius,
                color,
            } => {
                writeln!(
                    f,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                    center.x, center.y, radius, color
                )
            }
            Element::Curve { points: [p0, c1, c2, p1] } => {
                writeln!(
                    f,
                    "<path stroke=\"{}\" fill=\"none\" stroke-width=\"{}\" \
                     d=\"M {} {} C {} {} {} {} {} {}\"/>",
                    CURVE_COLOR,
                    CURVE_WIDTH,
                    p0.x,
                    p0.y,
                    c1.x,
                    c1.y,
                    c2.x,
                    c2.y,
                    p1.x,
                    p1.y
                )
            }
        }
    }
}
