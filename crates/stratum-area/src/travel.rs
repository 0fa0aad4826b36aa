//! Collision-aware stepping: [`Area::can_travel`] and
//! [`Area::next_step_towards`].

use crate::area::Area;
use smallvec::SmallVec;
use stratum_core::{CollisionFlags, Point, SceneView, WorldPoint, SCENE_EXTENT};

impl Area {
    /// Whether this area can take one step in the direction `(dx, dy)`
    /// without entering a blocked tile or clipping a wall.
    ///
    /// `dx` and `dy` are reduced to their signs, so any vector toward
    /// the intended direction works. A zero step is trivially
    /// passable. Coordinates that cannot be resolved against the scene
    /// window count as blocked, so the answer near the window edge is
    /// `false` rather than a guess.
    pub fn can_travel<S: SceneView>(&self, scene: &S, dx: i32, dy: i32) -> bool {
        self.can_travel_where(scene, dx, dy, |_| true)
    }

    /// [`can_travel`](Self::can_travel) with a per-tile admissibility
    /// filter.
    ///
    /// The filter sees each candidate tile as an absolute world
    /// coordinate and can veto it; movement logic uses this to keep
    /// actors from walking through each other without baking actors
    /// into the collision map.
    pub fn can_travel_where<S, F>(&self, scene: &S, dx: i32, dy: i32, filter: F) -> bool
    where
        S: SceneView,
        F: Fn(WorldPoint) -> bool,
    {
        let dx = dx.signum();
        let dy = dy.signum();
        if dx == 0 && dy == 0 {
            return true;
        }

        let Some(local) = scene.to_scene(self.x(), self.y()) else {
            return false;
        };
        let width = self.width() as i32;
        let height = self.height() as i32;

        // The strip of tiles the leading edge would newly occupy.
        let start_x = local.x + dx;
        let start_y = local.y + dy;
        let check_x = start_x + if dx > 0 { width - 1 } else { 0 };
        let check_y = start_y + if dy > 0 { height - 1 } else { 0 };
        let end_x = start_x + width - 1;
        let end_y = start_y + height - 1;

        let mut x_flags = CollisionFlags::BLOCK_FULL;
        let mut y_flags = CollisionFlags::BLOCK_FULL;
        let mut xy_flags = CollisionFlags::BLOCK_FULL;
        let mut x_wall_flags_south = CollisionFlags::BLOCK_FULL;
        let mut x_wall_flags_north = CollisionFlags::BLOCK_FULL;
        let mut y_wall_flags_west = CollisionFlags::BLOCK_FULL;
        let mut y_wall_flags_east = CollisionFlags::BLOCK_FULL;

        if dx < 0 {
            x_flags |= CollisionFlags::BLOCK_EAST;
            x_wall_flags_south |= CollisionFlags::BLOCK_SOUTH | CollisionFlags::BLOCK_SOUTH_EAST;
            x_wall_flags_north |= CollisionFlags::BLOCK_NORTH | CollisionFlags::BLOCK_NORTH_EAST;
        }
        if dx > 0 {
            x_flags |= CollisionFlags::BLOCK_WEST;
            x_wall_flags_south |= CollisionFlags::BLOCK_SOUTH | CollisionFlags::BLOCK_SOUTH_WEST;
            x_wall_flags_north |= CollisionFlags::BLOCK_NORTH | CollisionFlags::BLOCK_NORTH_WEST;
        }
        if dy < 0 {
            y_flags |= CollisionFlags::BLOCK_NORTH;
            y_wall_flags_west |= CollisionFlags::BLOCK_WEST | CollisionFlags::BLOCK_NORTH_WEST;
            y_wall_flags_east |= CollisionFlags::BLOCK_EAST | CollisionFlags::BLOCK_NORTH_EAST;
        }
        if dy > 0 {
            y_flags |= CollisionFlags::BLOCK_SOUTH;
            y_wall_flags_west |= CollisionFlags::BLOCK_WEST | CollisionFlags::BLOCK_SOUTH_WEST;
            y_wall_flags_east |= CollisionFlags::BLOCK_EAST | CollisionFlags::BLOCK_SOUTH_EAST;
        }
        if dx < 0 && dy < 0 {
            xy_flags |= CollisionFlags::BLOCK_NORTH_EAST;
        }
        if dx < 0 && dy > 0 {
            xy_flags |= CollisionFlags::BLOCK_SOUTH_EAST;
        }
        if dx > 0 && dy < 0 {
            xy_flags |= CollisionFlags::BLOCK_NORTH_WEST;
        }
        if dx > 0 && dy > 0 {
            xy_flags |= CollisionFlags::BLOCK_SOUTH_WEST;
        }

        // Unaddressable tiles count as blocked.
        let blocked = |x: i32, y: i32, mask: CollisionFlags| -> bool {
            match scene.collision_flags(self.plane(), Point::new(x, y)) {
                Some(flags) => flags.intersects(mask),
                None => true,
            }
        };
        let world = |x: i32, y: i32| scene.to_world(Point::new(x, y), self.plane());

        if dx != 0 {
            // The column being entered must be open along the whole edge.
            for y in start_y..=end_y {
                if blocked(check_x, y, x_flags) || !filter(world(check_x, y)) {
                    return false;
                }
            }
            // A wall segment between two of the entered tiles would be
            // clipped by the slide even though both tiles are open.
            for y in (start_y + 1)..=end_y {
                if blocked(check_x, y, x_wall_flags_south) {
                    return false;
                }
            }
            for y in (start_y..end_y).rev() {
                if blocked(check_x, y, x_wall_flags_north) {
                    return false;
                }
            }
        }
        if dy != 0 {
            for x in start_x..=end_x {
                if blocked(x, check_y, y_flags) || !filter(world(x, check_y)) {
                    return false;
                }
            }
            for x in (start_x + 1)..=end_x {
                if blocked(x, check_y, y_wall_flags_west) {
                    return false;
                }
            }
            for x in (start_x..end_x).rev() {
                if blocked(x, check_y, y_wall_flags_east) {
                    return false;
                }
            }
        }
        if dx != 0 && dy != 0 {
            if blocked(check_x, check_y, xy_flags) || !filter(world(check_x, check_y)) {
                return false;
            }
            // A single-tile edge cutting a corner can clip a wall the
            // axis sweeps never see, so the orthogonal neighbours of
            // the corner get re-checked. Note the filter polarity: here
            // the filter gates whether the tile is considered at all,
            // it does not veto the move by itself.
            if self.width() == 1
                && blocked(check_x, check_y - dy, x_flags)
                && filter(world(check_x, start_y))
            {
                return false;
            }
            if self.height() == 1
                && blocked(check_x - dx, check_y, y_flags)
                && filter(world(start_x, check_y))
            {
                return false;
            }
        }

        true
    }

    /// One step of the greedy chase pattern toward `target`.
    ///
    /// Tries a diagonal step first, then a horizontal one, then a
    /// vertical one, and takes the first the collision checker allows.
    /// Returns the stepped area, the unchanged area when already
    /// arrived or stuck, and `None` when the answer cannot be
    /// determined: the planes differ, the areas overlap while
    /// `stop_at_melee` is set (movement between co-located actors is
    /// undefined), or the target lies outside the window the collision
    /// data is loaded for.
    ///
    /// Two quirks of the pattern are deliberate:
    ///
    /// - with `stop_at_melee`, an actor standing diagonally adjacent to
    ///   its target only ever tries the horizontal step;
    /// - a pure vertical step is never attempted while the target is
    ///   within one tile of horizontal reach.
    pub fn next_step_towards<S: SceneView>(
        &self,
        scene: &S,
        target: &Area,
        stop_at_melee: bool,
    ) -> Option<Area> {
        self.next_step_towards_where(scene, target, stop_at_melee, |_| true)
    }

    /// [`next_step_towards`](Self::next_step_towards) with a per-tile
    /// admissibility filter, forwarded to the collision checks.
    pub fn next_step_towards_where<S, F>(
        &self,
        scene: &S,
        target: &Area,
        stop_at_melee: bool,
        filter: F,
    ) -> Option<Area>
    where
        S: SceneView,
        F: Fn(WorldPoint) -> bool,
    {
        if self.plane() != target.plane() {
            return None;
        }
        if self.intersects(target) {
            if stop_at_melee {
                return None;
            }
            return Some(*self);
        }

        let dx = target.x() - self.x();
        let dy = target.y() - self.y();
        let distances = self.axis_distances(target);
        if stop_at_melee && distances.x + distances.y == 1 {
            // Already in range.
            return Some(*self);
        }

        let local = scene.to_scene(self.x(), self.y())?;
        if local.x + dx < 0
            || local.x + dx >= SCENE_EXTENT
            || local.y + dy < 0
            || local.y + dy >= SCENE_EXTENT
        {
            // Collision data is not loaded past the scene boundary.
            return None;
        }

        let dx_sig = dx.signum();
        let dy_sig = dy.signum();

        let mut steps: SmallVec<[(i32, i32); 3]> = SmallVec::new();
        if stop_at_melee && distances.x == 1 && distances.y == 1 {
            // Standing diagonally at range: only sidestep.
            steps.push((dx_sig, 0));
        } else {
            steps.push((dx_sig, dy_sig));
            if dx != 0 {
                steps.push((dx_sig, 0));
            }
            if dy != 0 && dx.abs().max(dy.abs()) > 1 {
                steps.push((0, dy_sig));
            }
        }

        for (sx, sy) in steps {
            if self.can_travel_where(scene, sx, sy, &filter) {
                return Some(self.translated(sx, sy));
            }
        }

        // Stuck.
        Some(*self)
    }
}
