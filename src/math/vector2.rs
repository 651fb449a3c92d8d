//! Two-component vector value type.

/// A 2-D vector with `f64` components.
///
/// Components are assigned positionally and never validated; NaN and
/// infinities are carried through as-is.
///
/// # Example
/// ```
/// use vector_dot::math::vector2::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.x, 3.0);
/// assert_eq!(v.y, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a vector from its `x` and `y` components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
