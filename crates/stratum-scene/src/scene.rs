//! The [`Scene`] grid store and its [`SceneView`] implementation.

use crate::builder::SceneBuilder;
use stratum_core::{CollisionFlags, Plane, Point, SceneView, TileView, WorldPoint, SCENE_EXTENT};

/// A loaded window of the tile world.
///
/// Owns one `SCENE_EXTENT × SCENE_EXTENT` collision flag grid per
/// plane, anchored at the world coordinate of the window's south-west
/// corner. Immutable after construction; build one with
/// [`Scene::builder`].
#[derive(Clone, Debug)]
pub struct Scene {
    base_x: i32,
    base_y: i32,
    planes: Vec<Vec<CollisionFlags>>,
}

impl Scene {
    /// Start building a scene anchored at the given world coordinate.
    pub fn builder(base_x: i32, base_y: i32) -> SceneBuilder {
        SceneBuilder::new(base_x, base_y)
    }

    /// World x of the window's south-west corner.
    pub fn base_x(&self) -> i32 {
        self.base_x
    }

    /// World y of the window's south-west corner.
    pub fn base_y(&self) -> i32 {
        self.base_y
    }

    /// Number of planes the scene holds.
    pub fn plane_count(&self) -> u8 {
        self.planes.len() as u8
    }

    pub(crate) fn from_parts(base_x: i32, base_y: i32, planes: Vec<Vec<CollisionFlags>>) -> Self {
        Self {
            base_x,
            base_y,
            planes,
        }
    }

    fn in_window(local: Point) -> bool {
        local.x >= 0 && local.x < SCENE_EXTENT && local.y >= 0 && local.y < SCENE_EXTENT
    }

    /// Flags at a scene-local tile; sight rays treat anything outside
    /// the addressable grid as opaque.
    pub(crate) fn sight_flags_at(&self, plane: Plane, x: i32, y: i32) -> CollisionFlags {
        self.collision_flags(plane, Point::new(x, y))
            .unwrap_or(CollisionFlags::SIGHT_FULL)
    }
}

impl SceneView for Scene {
    type Tile<'a> = SceneTile<'a>;

    fn to_scene(&self, x: i32, y: i32) -> Option<Point> {
        let local = Point::new(x - self.base_x, y - self.base_y);
        Self::in_window(local).then_some(local)
    }

    fn to_world(&self, local: Point, plane: Plane) -> WorldPoint {
        WorldPoint::new(self.base_x + local.x, self.base_y + local.y, plane)
    }

    fn collision_flags(&self, plane: Plane, local: Point) -> Option<CollisionFlags> {
        if !Self::in_window(local) {
            return None;
        }
        let grid = self.planes.get(plane.0 as usize)?;
        Some(grid[(local.y * SCENE_EXTENT + local.x) as usize])
    }

    fn tile(&self, plane: Plane, local: Point) -> Option<SceneTile<'_>> {
        if (plane.0 as usize) < self.planes.len() && Self::in_window(local) {
            Some(SceneTile {
                scene: self,
                plane,
                at: local,
            })
        } else {
            None
        }
    }
}

/// Handle to a single tile of a [`Scene`].
///
/// Visibility between two handles is answered by walking the sight
/// line across the scene's sight-blocking flags, stepping along the
/// dominant axis with a 16.16 fixed-point slope accumulator. The
/// directional flags make the answer asymmetric: a one-sided sight
/// wall stops rays entering across that edge but not rays leaving.
#[derive(Clone, Copy, Debug)]
pub struct SceneTile<'a> {
    scene: &'a Scene,
    plane: Plane,
    at: Point,
}

impl SceneTile<'_> {
    /// Scene-local coordinate of this tile.
    pub fn at(&self) -> Point {
        self.at
    }

    /// Plane this tile sits on.
    pub fn plane(&self) -> Plane {
        self.plane
    }
}

impl TileView for SceneTile<'_> {
    /// Both handles are evaluated against `self`'s scene data; tiles on
    /// different planes never see each other.
    fn has_line_of_sight_to(&self, other: &Self) -> bool {
        if self.plane != other.plane {
            return false;
        }
        self.scene.sight_line(self.plane, self.at, other.at)
    }
}
