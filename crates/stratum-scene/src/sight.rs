//! Sight-line ray walk over the scene's sight-blocking flags.

use crate::scene::Scene;
use stratum_core::{CollisionFlags, Plane, Point};

impl Scene {
    /// Whether an unobstructed sight line runs from `from` to `to`.
    ///
    /// Walks the dominant axis one tile at a time, tracking the minor
    /// axis in 16.16 fixed point, and tests each tile the ray enters
    /// against the directional sight flags for the travel direction.
    /// The source tile is never tested, so a ray can leave an opaque
    /// tile; the target tile is, so a ray cannot enter one.
    pub(crate) fn sight_line(&self, plane: Plane, from: Point, to: Point) -> bool {
        if from == to {
            return true;
        }
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        let mut x_flags = CollisionFlags::SIGHT_FULL;
        let mut y_flags = CollisionFlags::SIGHT_FULL;
        if dx < 0 {
            x_flags |= CollisionFlags::SIGHT_EAST;
        } else {
            x_flags |= CollisionFlags::SIGHT_WEST;
        }
        if dy < 0 {
            y_flags |= CollisionFlags::SIGHT_NORTH;
        } else {
            y_flags |= CollisionFlags::SIGHT_SOUTH;
        }

        if dx.abs() > dy.abs() {
            let mut x = from.x;
            let mut y_acc = (from.y << 16) + 0x8000;
            let slope = (dy << 16) / dx.abs();
            if dy < 0 {
                // keep the walk on the lower tile when descending
                y_acc -= 1;
            }
            let step = dx.signum();
            while x != to.x {
                x += step;
                let y = y_acc >> 16;
                if self.sight_flags_at(plane, x, y).intersects(x_flags) {
                    return false;
                }
                y_acc += slope;
                let next_y = y_acc >> 16;
                if next_y != y && self.sight_flags_at(plane, x, next_y).intersects(y_flags) {
                    return false;
                }
            }
        } else {
            let mut y = from.y;
            let mut x_acc = (from.x << 16) + 0x8000;
            let slope = (dx << 16) / dy.abs();
            if dx < 0 {
                x_acc -= 1;
            }
            let step = dy.signum();
            while y != to.y {
                y += step;
                let x = x_acc >> 16;
                if self.sight_flags_at(plane, x, y).intersects(y_flags) {
                    return false;
                }
                x_acc += slope;
                let next_x = x_acc >> 16;
                if next_x != x && self.sight_flags_at(plane, next_x, y).intersects(x_flags) {
                    return false;
                }
            }
        }
        true
    }
}
