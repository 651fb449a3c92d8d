//! Dot product implementation.

mod original;

pub use original::dot_product_original;
pub use original::dot_product_original as dot_product;

use crate::math::vector2::Vector2;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&Vector2, &Vector2) -> f64;
