//! Stratum: spatial reasoning over planar tile grids.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Stratum sub-crates. For most users, adding `stratum` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stratum::prelude::*;
//!
//! // A scene with a wall line broken by a doorway.
//! let mut builder = Scene::builder(0, 0);
//! for y in 5..=15 {
//!     if y != 10 {
//!         builder = builder.opaque_wall(Plane(0), 12, y, WallSide::West);
//!     }
//! }
//! let scene = builder.build().unwrap();
//!
//! // A guard two tiles east of the doorway, an intruder to the west.
//! let guard = Area::new(14, 10, 1, 1, Plane(0)).unwrap();
//! let intruder = Area::new(8, 10, 1, 1, Plane(0)).unwrap();
//!
//! // The guard sees the intruder through the doorway and walks one
//! // greedy step toward it.
//! assert!(guard.has_line_of_sight_to(&scene, &intruder));
//! let step = guard.next_step_towards(&scene, &intruder, true).unwrap();
//! assert_eq!(step.to_world_point(), WorldPoint::new(13, 10, Plane(0)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stratum-core` | Coordinates, collision flags, backend traits |
//! | [`area`] | `stratum-area` | The [`area::Area`] queries |
//! | [`scene`] | `stratum-scene` | In-memory scene backend |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and backend traits (`stratum-core`).
///
/// Coordinate types ([`types::WorldPoint`], [`types::Point`],
/// [`types::Plane`]), the [`types::CollisionFlags`] bitset, and the
/// [`types::SceneView`]/[`types::TileView`] seams.
pub use stratum_core as types;

/// Area queries (`stratum-area`).
///
/// The [`area::Area`] rectangle and its distance, stepping, and
/// line-of-sight queries.
pub use stratum_area as area;

/// In-memory scene backend (`stratum-scene`).
///
/// [`scene::Scene`] and [`scene::SceneBuilder`] for building collision
/// grids, used in production as a self-contained backend and in tests
/// as the synthetic grid.
pub use stratum_scene as scene;

/// Common imports for typical Stratum usage.
///
/// ```rust
/// use stratum::prelude::*;
/// ```
pub mod prelude {
    pub use stratum_area::{Area, AreaError};
    pub use stratum_core::{
        CollisionFlags, Plane, Point, SceneView, TileView, WorldPoint, SCENE_EXTENT,
    };
    pub use stratum_scene::{Scene, SceneBuilder, SceneError, WallSide};
}
