//! Spatial queries over rectangular tile areas.
//!
//! An [`Area`] is an axis-aligned rectangle of tiles on a single
//! [`Plane`](stratum_core::Plane): the footprint of an actor or a patch
//! of ground. This crate answers the questions movement and combat
//! logic ask about such footprints:
//!
//! - how far apart are two areas, and do they touch or overlap
//!   ([`Area::distance_to`], [`Area::intersects`],
//!   [`Area::is_in_melee_range`]);
//! - can an area take one step in a compass direction without clipping
//!   a wall ([`Area::can_travel`]);
//! - where does it end up after one step of the greedy chase pattern
//!   wide actors use ([`Area::next_step_towards`]);
//! - does one area have line of sight to another
//!   ([`Area::has_line_of_sight_to`]).
//!
//! Collision and visibility data is read through the
//! [`stratum_core::SceneView`] seam; every query is a pure function of
//! its inputs and the backend's current snapshot. Failure to resolve
//! coordinates is reported as an indeterminate result (`false` or no
//! movement), never as an error or panic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod error;
mod sight;
mod travel;

pub use area::Area;
pub use error::AreaError;
