//! Backend traits through which spatial queries read scene data.
//!
//! The query algorithms never own collision or tile data; they read a
//! snapshot of it through [`SceneView`]. Keeping this seam narrow lets
//! the algorithms run against a synthetic in-memory grid in tests and
//! against a real scene backend in production.

use crate::coords::{Plane, Point, WorldPoint};
use crate::flags::CollisionFlags;

/// Side length, in tiles, of the loaded scene window.
///
/// Collision data is only addressable inside a fixed square window of
/// the world. Coordinates outside it cannot be resolved, and queries
/// that would step past it report an indeterminate result.
pub const SCENE_EXTENT: i32 = 104;

/// Read-only access to the loaded scene's collision and tile data.
///
/// All methods are pure reads over the backend's current snapshot.
/// Implementations returning `None` signal "not addressable here",
/// which query algorithms translate into their indeterminate result
/// (`false` or no movement) rather than an error.
///
/// [`to_scene`] is called once per query object; per-tile coordinates
/// are then derived by offset arithmetic, never by repeated transforms.
///
/// [`to_scene`]: SceneView::to_scene
pub trait SceneView {
    /// Handle to a single tile, borrowed from the scene.
    type Tile<'a>: TileView
    where
        Self: 'a;

    /// Transform an absolute world coordinate into scene-local
    /// coordinates, or `None` when it lies outside the loaded window.
    fn to_scene(&self, x: i32, y: i32) -> Option<Point>;

    /// Transform a scene-local coordinate back into an absolute world
    /// coordinate on the given plane.
    fn to_world(&self, local: Point, plane: Plane) -> WorldPoint;

    /// The collision bitset at a scene-local tile, or `None` when the
    /// coordinate is not addressable.
    fn collision_flags(&self, plane: Plane, local: Point) -> Option<CollisionFlags>;

    /// The tile at a scene-local coordinate, or `None` when no tile is
    /// loaded there.
    fn tile(&self, plane: Plane, local: Point) -> Option<Self::Tile<'_>>;
}

/// Pairwise visibility capability of a single tile.
///
/// The only thing queries ask of a tile handle. How visibility is
/// determined (ray walk, precomputed table, ...) is entirely the
/// backend's concern.
pub trait TileView {
    /// Whether an unobstructed sight line runs from this tile to
    /// `other`. Not necessarily symmetric.
    fn has_line_of_sight_to(&self, other: &Self) -> bool;
}
