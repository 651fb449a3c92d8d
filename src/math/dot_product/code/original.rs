//! Reference implementation of the 2-D dot product.

use crate::math::vector2::Vector2;

/// Compute the dot product of two vectors.
///
/// Evaluated as `a.x * b.x + a.y * b.y`: two products and one addition,
/// no fused multiply-add. IEEE-754 overflow and NaN propagation apply.
///
/// # Example
/// ```
/// use vector_dot::math::dot_product::dot_product_original;
/// use vector_dot::math::Vector2;
///
/// let a = Vector2::new(3.0, 4.0);
/// let b = Vector2::new(1.0, 2.0);
/// assert_eq!(dot_product_original(&a, &b), 11.0);
/// ```
pub fn dot_product_original(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}
