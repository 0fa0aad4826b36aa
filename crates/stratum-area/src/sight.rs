//! Line-of-sight queries between areas.

use crate::area::Area;
use stratum_core::{Point, SceneView, TileView, WorldPoint};

impl Area {
    /// Whether this area has line of sight to `other`.
    ///
    /// Asymmetric by contract: one-sided sight walls mean `a` seeing
    /// `b` does not imply `b` sees `a`. Each area is represented by
    /// the single tile of its footprint nearest to the other area (the
    /// same clamped projection the distance queries use), and the
    /// final answer is delegated to the backend's tiles. Both tiles
    /// are resolved on this area's plane; after the cross-plane check
    /// that is also the other's.
    ///
    /// Cross-plane pairs, coordinates outside the scene window, and
    /// missing tiles all answer `false`.
    pub fn has_line_of_sight_to<S: SceneView>(&self, scene: &S, other: &Area) -> bool {
        if self.plane() != other.plane() {
            return false;
        }

        let Some(source) = scene.to_scene(self.x(), self.y()) else {
            return false;
        };
        let Some(target) = scene.to_scene(other.x(), other.y()) else {
            return false;
        };

        let source_rep = Point::new(
            target.x.clamp(source.x, source.x + self.width() as i32 - 1),
            target.y.clamp(source.y, source.y + self.height() as i32 - 1),
        );
        let target_rep = Point::new(
            source.x.clamp(target.x, target.x + other.width() as i32 - 1),
            source.y.clamp(target.y, target.y + other.height() as i32 - 1),
        );

        let Some(source_tile) = scene.tile(self.plane(), source_rep) else {
            return false;
        };
        let Some(target_tile) = scene.tile(self.plane(), target_rep) else {
            return false;
        };
        source_tile.has_line_of_sight_to(&target_tile)
    }

    /// Whether this area has line of sight to a single tile.
    pub fn has_line_of_sight_to_point<S: SceneView>(&self, scene: &S, point: WorldPoint) -> bool {
        self.has_line_of_sight_to(scene, &Area::from(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::{CollisionFlags, Plane};
    use stratum_scene::{Scene, SceneBuilder};

    const P0: Plane = Plane(0);

    fn area(x: i32, y: i32, w: u32, h: u32) -> Area {
        Area::new(x, y, w, h, P0).unwrap()
    }

    fn open_scene() -> Scene {
        SceneBuilder::new(0, 0).build().unwrap()
    }

    #[test]
    fn open_ground_is_mutually_visible() {
        let scene = open_scene();
        let a = area(10, 10, 1, 1);
        let b = area(20, 14, 1, 1);
        assert!(a.has_line_of_sight_to(&scene, &b));
        assert!(b.has_line_of_sight_to(&scene, &a));
    }

    #[test]
    fn cross_plane_is_never_visible() {
        let scene = open_scene();
        let a = area(10, 10, 1, 1);
        let b = Area::new(12, 10, 1, 1, Plane(1)).unwrap();
        assert!(!a.has_line_of_sight_to(&scene, &b));
    }

    #[test]
    fn outside_window_is_indeterminate_false() {
        let scene = open_scene();
        let a = area(10, 10, 1, 1);
        let far = area(500, 500, 1, 1);
        assert!(!a.has_line_of_sight_to(&scene, &far));
        assert!(!far.has_line_of_sight_to(&scene, &a));
    }

    #[test]
    fn opaque_block_breaks_sight() {
        let scene = SceneBuilder::new(0, 0)
            .opaque_block(P0, 15, 10)
            .build()
            .unwrap();
        let a = area(10, 10, 1, 1);
        let b = area(20, 10, 1, 1);
        assert!(!a.has_line_of_sight_to(&scene, &b));
        assert!(!b.has_line_of_sight_to(&scene, &a));
    }

    #[test]
    fn one_sided_sight_wall_is_asymmetric_between_areas() {
        let scene = SceneBuilder::new(0, 0)
            .flags(P0, 15, 10, CollisionFlags::SIGHT_WEST)
            .build()
            .unwrap();
        let a = area(10, 10, 1, 1);
        let b = area(20, 10, 1, 1);
        assert!(!a.has_line_of_sight_to(&scene, &b));
        assert!(b.has_line_of_sight_to(&scene, &a));
    }

    #[test]
    fn wide_area_sees_from_its_nearest_tile() {
        // The block at (14, 10) shadows rays cast from (10, 10), but
        // the 3×3 area's nearest tile to the target is (12, 11), whose
        // ray passes clear.
        let scene = SceneBuilder::new(0, 0)
            .opaque_block(P0, 14, 10)
            .build()
            .unwrap();
        let wide = area(10, 10, 3, 3);
        let target = area(20, 11, 1, 1);
        assert!(!area(10, 10, 1, 1).has_line_of_sight_to(&scene, &target));
        assert!(wide.has_line_of_sight_to(&scene, &target));
    }

    #[test]
    fn sight_to_point_matches_single_tile_area() {
        let scene = SceneBuilder::new(0, 0)
            .opaque_block(P0, 15, 10)
            .build()
            .unwrap();
        let a = area(10, 10, 1, 1);
        assert!(!a.has_line_of_sight_to_point(&scene, WorldPoint::new(20, 10, P0)));
        assert!(a.has_line_of_sight_to_point(&scene, WorldPoint::new(12, 14, P0)));
    }
}
