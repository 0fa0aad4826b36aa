//! Core types and traits for the Stratum spatial query library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate types ([`WorldPoint`], [`Point`], [`Plane`]), the
//! per-tile [`CollisionFlags`] bitset, and the backend traits
//! ([`SceneView`], [`TileView`]) through which spatial queries read
//! collision and visibility data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coords;
pub mod flags;
pub mod view;

pub use coords::{Plane, Point, WorldPoint};
pub use flags::CollisionFlags;
pub use view::{SceneView, TileView, SCENE_EXTENT};
