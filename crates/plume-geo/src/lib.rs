//! Geodesy for Plume timelines.
//!
//! Everything spatial the engine needs lives here: great-circle leg
//! length on a spherical Earth and time-based interpolation along a
//! timestamped path.
//!
//! # Conventions
//!
//! - Coordinates are WGS84 degrees, longitude first.
//! - Distances are kilometres.
//! - Times are seconds-of-day (`f64`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod interpolate;

pub use distance::{haversine_km, path_length_km, EARTH_RADIUS_KM};
pub use interpolate::{interpolate_path, lerp};
