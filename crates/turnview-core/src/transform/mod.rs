//! Rotation geometry shared by the compositor and the view style.
//!
//! # Coordinate System
//!
//! - Angles are in degrees, positive = clockwise on screen (y-down)
//! - Stored angles are never normalized; [`visual_angle`] reduces mod 360
//! - Origin is top-left corner

mod rotation;

pub use rotation::{angle_to_radians, compute_diagonal_bounds, diagonal_length, visual_angle};
