//! Vector math.

pub mod dot_product;
pub mod vector2;

pub use vector2::Vector2;
