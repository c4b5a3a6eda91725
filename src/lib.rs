#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod animate;
pub mod draw;
pub mod session;
pub mod spline;

pub use crate::session::Session;
pub use crate::spline::{Point, Spline};

/// Errors returned by curve sampling and animation start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs more anchors than have been placed.
    ///
    /// Sampling needs at least two anchors, starting an animation run at
    /// least three.
    #[error("need at least {need} anchors, got {found}")]
    TooFewAnchors {
        /// Anchors actually present
        found: usize,

        /// Anchors the operation requires
        need: usize,
    },
}
