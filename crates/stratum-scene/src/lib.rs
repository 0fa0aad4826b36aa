//! In-memory scene backend for Stratum spatial queries.
//!
//! A [`Scene`] owns a fixed 104×104 window of per-plane collision flag
//! grids anchored at a world coordinate, and implements the
//! [`stratum_core::SceneView`] seam so the query algorithms can run
//! against it. Scenes are built up-front with [`SceneBuilder`] and are
//! immutable afterwards, which is what makes concurrent reads safe.
//!
//! Line-of-sight between two [`SceneTile`] handles is answered by a
//! fixed-point ray walk over the sight-blocking flags; see the
//! [`SceneTile`] docs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod scene;
mod sight;

pub use builder::{SceneBuilder, WallSide};
pub use error::SceneError;
pub use scene::{Scene, SceneTile};
