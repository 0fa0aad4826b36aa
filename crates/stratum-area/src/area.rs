//! The [`Area`] value type and its distance queries.

use crate::error::AreaError;
use stratum_core::{Plane, Point, WorldPoint};

/// An axis-aligned rectangle of tiles on a single plane.
///
/// `(x, y)` is the south-west corner in absolute world coordinates;
/// `width` extends east and `height` north, both at least one tile.
/// Areas are immutable values: queries construct new ones rather than
/// mutating.
///
/// Areas on different planes have no spatial relationship: distance is
/// [`Area::UNREACHABLE`] and every boolean query answers `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Area {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    plane: Plane,
}

impl Area {
    /// Largest accepted width or height.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Distance reported between areas on different planes.
    pub const UNREACHABLE: u32 = u32::MAX;

    /// Create an area from its south-west corner and extents.
    ///
    /// Returns [`AreaError::EmptyArea`] when either extent is zero and
    /// [`AreaError::DimensionTooLarge`] when one does not fit the
    /// coordinate space.
    pub fn new(x: i32, y: i32, width: u32, height: u32, plane: Plane) -> Result<Self, AreaError> {
        if width == 0 || height == 0 {
            return Err(AreaError::EmptyArea);
        }
        if width > Self::MAX_DIM {
            return Err(AreaError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(AreaError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            plane,
        })
    }

    /// World x of the south-west corner.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// World y of the south-west corner.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Plane the area sits on.
    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// The south-west corner as a world point.
    pub fn to_world_point(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y, self.plane)
    }

    /// The same footprint shifted by one step.
    pub(crate) fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The point within this area closest to `other`'s south-west
    /// corner: each axis clamps the other's coordinate into this
    /// area's own span.
    fn comparison_point(&self, other: &Area) -> Point {
        Point::new(
            other.x.clamp(self.x, self.x + self.width as i32 - 1),
            other.y.clamp(self.y, self.y + self.height as i32 - 1),
        )
    }

    /// Per-axis separation of the two areas' nearest points.
    ///
    /// The shared primitive behind every distance query; the melee and
    /// overlap tests must agree with [`distance_to`](Self::distance_to)
    /// on tie-breaking, so all three go through here.
    pub(crate) fn axis_distances(&self, other: &Area) -> Point {
        let p1 = self.comparison_point(other);
        let p2 = other.comparison_point(self);
        Point::new((p1.x - p2.x).abs(), (p1.y - p2.y).abs())
    }

    /// Chebyshev distance to another area, or [`Area::UNREACHABLE`]
    /// when the planes differ.
    ///
    /// Zero means the areas overlap; one means they touch, including
    /// diagonally.
    pub fn distance_to(&self, other: &Area) -> u32 {
        if self.plane != other.plane {
            return Self::UNREACHABLE;
        }
        let d = self.axis_distances(other);
        d.x.max(d.y) as u32
    }

    /// Chebyshev distance to a single tile.
    pub fn distance_to_point(&self, point: WorldPoint) -> u32 {
        self.distance_to(&Area::from(point))
    }

    /// Whether `other` is within melee range: on the same plane with
    /// the nearest points exactly one tile apart on exactly one axis.
    ///
    /// Diagonal contact has Chebyshev distance one but is not melee
    /// range.
    pub fn is_in_melee_range(&self, other: &Area) -> bool {
        if self.plane != other.plane {
            return false;
        }
        let d = self.axis_distances(other);
        d.x + d.y == 1
    }

    /// Whether the two areas overlap.
    pub fn intersects(&self, other: &Area) -> bool {
        if self.plane != other.plane {
            return false;
        }
        let d = self.axis_distances(other);
        d.x + d.y == 0
    }
}

impl From<WorldPoint> for Area {
    /// The 1×1 area covering a single tile.
    fn from(point: WorldPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
            width: 1,
            height: 1,
            plane: point.plane,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const P0: Plane = Plane(0);
    const P1: Plane = Plane(1);

    fn area(x: i32, y: i32, w: u32, h: u32, plane: Plane) -> Area {
        Area::new(x, y, w, h, plane).unwrap()
    }

    #[test]
    fn zero_extent_rejected() {
        assert_eq!(Area::new(0, 0, 0, 1, P0), Err(AreaError::EmptyArea));
        assert_eq!(Area::new(0, 0, 1, 0, P0), Err(AreaError::EmptyArea));
    }

    #[test]
    fn oversized_extent_rejected() {
        let too_big = Area::MAX_DIM + 1;
        assert!(matches!(
            Area::new(0, 0, too_big, 1, P0),
            Err(AreaError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Area::new(0, 0, 1, too_big, P0),
            Err(AreaError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn distance_between_separated_areas() {
        let a = area(10, 10, 1, 1, P0);
        let b = area(12, 10, 1, 1, P0);
        assert_eq!(a.distance_to(&b), 2);
        assert_eq!(a.distance_to_point(WorldPoint::new(12, 10, P0)), 2);
    }

    #[test]
    fn distance_measures_between_edges_not_corners() {
        // A 3-wide area reaches to x = 12, one tile short of x = 14.
        let wide = area(10, 10, 3, 3, P0);
        let far = area(14, 10, 1, 1, P0);
        assert_eq!(wide.distance_to(&far), 2);
    }

    #[test]
    fn touching_areas_have_distance_one() {
        let a = area(10, 10, 2, 2, P0);
        assert_eq!(a.distance_to(&area(12, 10, 1, 1, P0)), 1);
        assert_eq!(a.distance_to(&area(12, 12, 1, 1, P0)), 1); // diagonal touch
    }

    #[test]
    fn cross_plane_distance_is_unreachable() {
        let a = area(10, 10, 1, 1, P0);
        let b = area(10, 10, 1, 1, P1);
        assert_eq!(a.distance_to(&b), Area::UNREACHABLE);
        assert!(!a.is_in_melee_range(&b));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn melee_range_is_orthogonal_contact_only() {
        let a = area(10, 10, 1, 1, P0);
        assert!(a.is_in_melee_range(&area(11, 10, 1, 1, P0)));
        assert!(a.is_in_melee_range(&area(10, 9, 1, 1, P0)));
        // Diagonal contact: distance one, but not melee range.
        let diagonal = area(11, 11, 1, 1, P0);
        assert_eq!(a.distance_to(&diagonal), 1);
        assert!(!a.is_in_melee_range(&diagonal));
        // Overlap is not melee range either.
        assert!(!a.is_in_melee_range(&a));
    }

    #[test]
    fn melee_range_against_wide_area_edge() {
        let boss = area(10, 10, 3, 3, P0);
        assert!(boss.is_in_melee_range(&area(13, 11, 1, 1, P0)));
        assert!(!boss.is_in_melee_range(&area(14, 11, 1, 1, P0)));
        assert!(!boss.is_in_melee_range(&area(13, 13, 1, 1, P0)));
    }

    #[test]
    fn intersects_requires_true_overlap() {
        let a = area(10, 10, 2, 2, P0);
        assert!(a.intersects(&area(11, 11, 3, 3, P0)));
        assert!(!a.intersects(&area(12, 10, 1, 1, P0))); // touching, not overlapping
    }

    #[test]
    fn world_point_round_trip() {
        let a = area(3200, 3456, 2, 3, P1);
        let corner = a.to_world_point();
        assert_eq!(corner, WorldPoint::new(3200, 3456, P1));
        let rebuilt = Area::from(corner);
        assert_eq!(rebuilt.to_world_point(), corner);
        assert_eq!((rebuilt.width(), rebuilt.height()), (1, 1));
    }

    fn arb_area() -> impl Strategy<Value = Area> {
        (-500i32..500, -500i32..500, 1u32..6, 1u32..6)
            .prop_map(|(x, y, w, h)| area(x, y, w, h, P0))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in arb_area(), b in arb_area()) {
            prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }

        #[test]
        fn intersects_is_symmetric(a in arb_area(), b in arb_area()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn area_overlaps_itself_at_distance_zero(a in arb_area()) {
            prop_assert!(a.intersects(&a));
            prop_assert_eq!(a.distance_to(&a), 0);
        }

        #[test]
        fn melee_range_implies_distance_one(a in arb_area(), b in arb_area()) {
            if a.is_in_melee_range(&b) {
                prop_assert_eq!(a.distance_to(&b), 1);
            }
        }

        #[test]
        fn overlap_and_melee_are_exclusive(a in arb_area(), b in arb_area()) {
            prop_assert!(!(a.intersects(&b) && a.is_in_melee_range(&b)));
        }
    }
}
