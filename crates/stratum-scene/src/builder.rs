//! Scene construction.

use crate::error::SceneError;
use crate::scene::Scene;
use indexmap::IndexMap;
use stratum_core::{CollisionFlags, Plane, SCENE_EXTENT};

/// Default number of vertical layers in a scene.
const DEFAULT_PLANE_COUNT: u8 = 4;

/// One edge of a tile, for wall placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSide {
    /// The north edge.
    North,
    /// The east edge.
    East,
    /// The south edge.
    South,
    /// The west edge.
    West,
}

impl WallSide {
    /// Movement-blocking flag for a wall on this edge.
    fn block(self) -> CollisionFlags {
        match self {
            Self::North => CollisionFlags::BLOCK_NORTH,
            Self::East => CollisionFlags::BLOCK_EAST,
            Self::South => CollisionFlags::BLOCK_SOUTH,
            Self::West => CollisionFlags::BLOCK_WEST,
        }
    }

    /// Sight-blocking flag for a wall on this edge.
    fn sight(self) -> CollisionFlags {
        match self {
            Self::North => CollisionFlags::SIGHT_NORTH,
            Self::East => CollisionFlags::SIGHT_EAST,
            Self::South => CollisionFlags::SIGHT_SOUTH,
            Self::West => CollisionFlags::SIGHT_WEST,
        }
    }

    /// The same wall as seen from the adjacent tile: offset to that
    /// tile and the edge it shows there.
    fn mirrored(self) -> (i32, i32, WallSide) {
        match self {
            Self::North => (0, 1, Self::South),
            Self::East => (1, 0, Self::West),
            Self::South => (0, -1, Self::North),
            Self::West => (-1, 0, Self::East),
        }
    }
}

/// Builder for [`Scene`] construction.
///
/// Edits are collected in insertion order and validated when
/// [`build`](SceneBuilder::build) bakes them into the dense per-plane
/// grids. All edit coordinates are absolute world coordinates; the
/// window covers `[base, base + SCENE_EXTENT)` on both axes.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    base_x: i32,
    base_y: i32,
    plane_count: u8,
    edits: IndexMap<(Plane, i32, i32), CollisionFlags>,
}

impl SceneBuilder {
    /// Start a builder for a window anchored at the given world
    /// coordinate, with the default plane count.
    pub fn new(base_x: i32, base_y: i32) -> Self {
        Self {
            base_x,
            base_y,
            plane_count: DEFAULT_PLANE_COUNT,
            edits: IndexMap::new(),
        }
    }

    /// Override the number of planes.
    pub fn plane_count(mut self, count: u8) -> Self {
        self.plane_count = count;
        self
    }

    /// Merge raw flags onto the tile at a world coordinate.
    pub fn flags(mut self, plane: Plane, x: i32, y: i32, flags: CollisionFlags) -> Self {
        *self
            .edits
            .entry((plane, x, y))
            .or_insert(CollisionFlags::EMPTY) |= flags;
        self
    }

    /// Place a solid movement-blocking object on a tile.
    pub fn full_block(self, plane: Plane, x: i32, y: i32) -> Self {
        self.flags(plane, x, y, CollisionFlags::BLOCK_OBJECT)
    }

    /// Place a solid object that also blocks sight.
    pub fn opaque_block(self, plane: Plane, x: i32, y: i32) -> Self {
        self.flags(
            plane,
            x,
            y,
            CollisionFlags::BLOCK_OBJECT | CollisionFlags::SIGHT_FULL,
        )
    }

    /// Place a movement-blocking wall on one edge of a tile.
    ///
    /// The wall is mirrored onto the adjacent tile's opposite edge, so
    /// the crossing is blocked from both sides. A mirror that would
    /// land outside the window is skipped; that tile simply is not
    /// loaded.
    pub fn wall(self, plane: Plane, x: i32, y: i32, side: WallSide) -> Self {
        self.wall_flags(plane, x, y, side, WallSide::block)
    }

    /// Place a wall that blocks both movement and sight.
    pub fn opaque_wall(self, plane: Plane, x: i32, y: i32, side: WallSide) -> Self {
        self.wall_flags(plane, x, y, side, |s| s.block() | s.sight())
    }

    fn wall_flags(
        mut self,
        plane: Plane,
        x: i32,
        y: i32,
        side: WallSide,
        to_flags: impl Fn(WallSide) -> CollisionFlags,
    ) -> Self {
        self = self.flags(plane, x, y, to_flags(side));
        let (dx, dy, opposite) = side.mirrored();
        let (mx, my) = (x + dx, y + dy);
        if self.contains(mx, my) {
            self = self.flags(plane, mx, my, to_flags(opposite));
        }
        self
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.base_x
            && x < self.base_x + SCENE_EXTENT
            && y >= self.base_y
            && y < self.base_y + SCENE_EXTENT
    }

    /// Validate all edits and bake them into a [`Scene`].
    pub fn build(self) -> Result<Scene, SceneError> {
        let Self {
            base_x,
            base_y,
            plane_count,
            edits,
        } = self;
        if plane_count == 0 {
            return Err(SceneError::NoPlanes);
        }
        let cells = (SCENE_EXTENT * SCENE_EXTENT) as usize;
        let mut planes = vec![vec![CollisionFlags::EMPTY; cells]; plane_count as usize];
        for ((plane, x, y), flags) in edits {
            if plane.0 >= plane_count {
                return Err(SceneError::PlaneOutOfRange { plane, count: plane_count });
            }
            let (lx, ly) = (x - base_x, y - base_y);
            if lx < 0 || lx >= SCENE_EXTENT || ly < 0 || ly >= SCENE_EXTENT {
                return Err(SceneError::OutOfWindow { x, y });
            }
            planes[plane.0 as usize][(ly * SCENE_EXTENT + lx) as usize] |= flags;
        }
        Ok(Scene::from_parts(base_x, base_y, planes))
    }
}
