/*!
manifold2d
==========

**manifold2d** is the narrow-phase core of a 2D rigid-body physics engine
written with the rust programming language. It computes feature-indexed
contact manifolds for circle, convex-polygon and edge-chain shapes, tracks
contact identity across frames for warm starting, and provides an N-body
constant-volume joint solved by sequential impulses.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate nalgebra as na;
extern crate num_traits as num;

pub mod dynamics;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
