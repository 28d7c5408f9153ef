//! A small, fast **point-in-polygon** library: containment queries against a
//! closed 2D polygon, answered through a [quadtree](quadtree) classification
//! hierarchy built once per polygon and queried at interactive rates.
//!
//! The [`QuadTree`] subdivides the canonical [-1,1]×[-1,1] domain around the
//! polygon boundary, caches Interior/Exterior verdicts for cells the boundary
//! never touches, and falls back to a dual-counter winding-number evaluation
//! ([`Polygon::winding_contains`]) only in boundary cells. Typical use is
//! cross-checking a GPU-computed containment result with an independent CPU
//! answer.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **geo-interop**: build [`Polygon`]s from `geo` types and back
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod polygon;
pub mod quadtree;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use aabb::Aabb;
pub use polygon::Polygon;
pub use quadtree::{CellStatus, Node, QuadTree};
