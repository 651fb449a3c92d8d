//! Built-in assertion fixture.
//!
//! The binary takes no flags, reads no environment and opens no files, so
//! this is the only configuration it has.

use crate::assertion::Assertion;
use crate::math::vector2::Vector2;

/// First operand of the default fixture
pub const DEFAULT_A: (f64, f64) = (3.0, 4.0);

/// Second operand of the default fixture
pub const DEFAULT_B: (f64, f64) = (1.0, 2.0);

/// Dot product the default fixture is expected to produce
pub const DEFAULT_EXPECTED: f64 = 11.0;

/// Operands and expected product for one assertion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssertionConfig {
    pub a: (f64, f64),
    pub b: (f64, f64),
    pub expected: f64,
}

impl Default for AssertionConfig {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            expected: DEFAULT_EXPECTED,
        }
    }
}

impl AssertionConfig {
    /// Build the assertion described by this configuration.
    pub fn assertion(&self) -> Assertion {
        Assertion::new(Vector2::from(self.a), Vector2::from(self.b), self.expected)
    }
}
