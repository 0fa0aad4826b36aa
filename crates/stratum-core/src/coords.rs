//! Tile coordinate types.

use std::fmt;

/// A vertical layer of the tile world.
///
/// Planes are discrete: tiles on different planes never touch, see, or
/// collide with each other. Queries comparing areas on different planes
/// resolve to "no relationship" rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Plane(pub u8);

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Plane {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// A 2D integer tile coordinate without a plane.
///
/// Used for scene-local coordinates and for transient per-axis
/// distance results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Horizontal (west to east) component.
    pub x: i32,
    /// Vertical (south to north) component.
    pub y: i32,
}

impl Point {
    /// Create a point from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An absolute tile coordinate: world x, world y, and plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldPoint {
    /// Absolute tile x, increasing eastward.
    pub x: i32,
    /// Absolute tile y, increasing northward.
    pub y: i32,
    /// Vertical layer the tile sits on.
    pub plane: Plane,
}

impl WorldPoint {
    /// Create a world point from its components.
    pub const fn new(x: i32, y: i32, plane: Plane) -> Self {
        Self { x, y, plane }
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}
