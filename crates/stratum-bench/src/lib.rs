//! Benchmark scene profiles for the Stratum query crates.
//!
//! Provides pre-built scenes shared by the benchmarks:
//!
//! - [`open_scene`]: an empty window, the best case for every query
//! - [`street_grid_scene`]: wall lines every eighth column with
//!   doorways, a realistic mix of open and blocked tiles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stratum_core::{Plane, SCENE_EXTENT};
use stratum_scene::{Scene, SceneBuilder, WallSide};

/// An empty scene window anchored at the origin.
pub fn open_scene() -> Scene {
    SceneBuilder::new(0, 0)
        .build()
        .expect("open scene always builds")
}

/// A scene with an opaque north-south wall line every eighth column,
/// each broken by a doorway every sixteenth row.
pub fn street_grid_scene() -> Scene {
    let mut builder = SceneBuilder::new(0, 0);
    for x in (8..SCENE_EXTENT).step_by(8) {
        for y in 0..SCENE_EXTENT {
            if y % 16 != 0 {
                builder = builder.opaque_wall(Plane(0), x, y, WallSide::West);
            }
        }
    }
    builder.build().expect("street grid scene always builds")
}
