//! Error types for scene construction.

use std::fmt;
use stratum_core::Plane;

/// Errors arising while building a [`Scene`](crate::Scene).
///
/// Query-time failure is never an error: out-of-window lookups resolve
/// to `None` through the [`stratum_core::SceneView`] contract. Only
/// construction validates eagerly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// Attempted to build a scene with zero planes.
    NoPlanes,
    /// An edit referenced a plane beyond the configured plane count.
    PlaneOutOfRange {
        /// The offending plane.
        plane: Plane,
        /// Number of planes the scene was configured with.
        count: u8,
    },
    /// An edit referenced a world coordinate outside the scene window.
    OutOfWindow {
        /// World x of the offending edit.
        x: i32,
        /// World y of the offending edit.
        y: i32,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlanes => write!(f, "scene must have at least one plane"),
            Self::PlaneOutOfRange { plane, count } => {
                write!(f, "plane {plane} out of range: scene has {count} plane(s)")
            }
            Self::OutOfWindow { x, y } => {
                write!(f, "world coordinate ({x}, {y}) outside the scene window")
            }
        }
    }
}

impl std::error::Error for SceneError {}
