//! End-to-end pursuit scenarios: repeated single steps over a scene.

use stratum_area::Area;
use stratum_core::{Plane, WorldPoint};
use stratum_scene::{Scene, SceneBuilder, WallSide};

const P0: Plane = Plane(0);

fn area(x: i32, y: i32, w: u32, h: u32) -> Area {
    Area::new(x, y, w, h, P0).unwrap()
}

/// Step until the walker stops moving, returning the path taken.
fn walk(scene: &Scene, mut walker: Area, target: &Area, stop_at_melee: bool) -> Vec<Area> {
    let mut path = vec![walker];
    for _ in 0..64 {
        let next = walker
            .next_step_towards(scene, target, stop_at_melee)
            .expect("pursuit stays inside the scene window");
        if next == walker {
            break;
        }
        walker = next;
        path.push(walker);
    }
    path
}

#[test]
fn closes_to_melee_range_across_open_ground() {
    let scene = SceneBuilder::new(0, 0).build().unwrap();
    let target = area(20, 17, 1, 1);
    let path = walk(&scene, area(10, 10, 1, 1), &target, true);

    // Diagonal until the rows align, then straight east, stopping one
    // tile short of the target.
    assert_eq!(path.last().copied().unwrap(), area(19, 17, 1, 1));
    assert_eq!(path.len(), 10);
    assert!(path.last().unwrap().is_in_melee_range(&target));
}

#[test]
fn wide_walker_keeps_its_footprint_while_chasing() {
    let scene = SceneBuilder::new(0, 0).build().unwrap();
    let target = area(30, 30, 1, 1);
    let path = walk(&scene, area(10, 10, 2, 2), &target, true);

    for step in &path {
        assert_eq!((step.width(), step.height()), (2, 2));
        assert_eq!(step.plane(), P0);
    }
    assert!(path.last().unwrap().is_in_melee_range(&target));
}

#[test]
fn greedy_walker_stops_against_a_wall_line() {
    // A north-south wall line between x = 11 and x = 12. The greedy
    // single-step pattern walks up to it and reports itself stuck; it
    // does not search around.
    let mut builder = SceneBuilder::new(0, 0);
    for y in 5..=15 {
        builder = builder.wall(P0, 12, y, WallSide::West);
    }
    let scene = builder.build().unwrap();

    let target = area(16, 10, 1, 1);
    let path = walk(&scene, area(10, 10, 1, 1), &target, true);
    let stopped = path.last().copied().unwrap();

    assert_eq!(stopped, area(11, 10, 1, 1));
    assert!(!stopped.can_travel(&scene, 1, 0));
    assert!(!stopped.is_in_melee_range(&target));
}

#[test]
fn doorway_admits_single_tiles_but_not_wide_walkers() {
    // The same wall line with a one-tile gap at y = 10. A 1×1 walker
    // slips through; a 2×2 walker cannot fit and jams against it.
    let mut builder = SceneBuilder::new(0, 0);
    for y in 5..=15 {
        if y != 10 {
            builder = builder.wall(P0, 12, y, WallSide::West);
        }
    }
    let scene = builder.build().unwrap();

    let target = area(16, 10, 1, 1);
    let small = walk(&scene, area(10, 10, 1, 1), &target, true);
    assert!(small.last().unwrap().is_in_melee_range(&target));

    let wide = walk(&scene, area(9, 9, 2, 2), &target, true);
    assert!(!wide.last().unwrap().is_in_melee_range(&target));
}

#[test]
fn actor_filter_blocks_the_occupied_tile() {
    // Another actor stands on (12, 10); the filter keeps the walker
    // from stepping onto it, so the walker waits in place.
    let scene = SceneBuilder::new(0, 0).build().unwrap();
    let occupied = WorldPoint::new(12, 10, P0);

    let walker = area(11, 10, 1, 1);
    let target = area(14, 10, 1, 1);
    let next = walker
        .next_step_towards_where(&scene, &target, true, |p| p != occupied)
        .unwrap();
    assert_eq!(next, walker);

    // Without the filter the same step is open.
    let next = walker.next_step_towards(&scene, &target, true).unwrap();
    assert_eq!(next, area(12, 10, 1, 1));
}
