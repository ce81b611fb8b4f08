//! Domain types for the restroom compass.
//!
//! This module contains the validated coordinate type used throughout
//! the server. Types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod coordinate;

pub use coordinate::{InvalidCoordinate, LatLon};
