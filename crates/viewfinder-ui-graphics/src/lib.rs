//! Pure geometry data for Viewfinder.
//!
//! Everything is expressed in logical pixels as `f32`, matching what hosts
//! report for element bounds.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
}
