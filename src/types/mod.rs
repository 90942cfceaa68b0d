// src/types/mod.rs

pub mod vector;
pub mod window;

pub use self::vector::{SpadePoint, Vector2DExt, from_spade_point, to_spade_points};
pub use self::window::Window;
