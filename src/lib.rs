//! # Vector-Dot
//!
//! A 2-D vector type, its dot product, and an assertion step that checks a
//! computed product against an expected value and reports the result on a
//! single line.

pub mod assertion;
pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod utils;

pub use assertion::{Assertion, Outcome};
pub use error::{CheckError, ReportError};
pub use math::dot_product::dot_product;
pub use math::Vector2;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::assertion::{Assertion, Outcome};
    pub use crate::config::AssertionConfig;
    pub use crate::math::dot_product::{self, dot_product};
    pub use crate::math::Vector2;
    pub use crate::registry::{build_registry, PropertyCheck, PropertyRegistry};
}
