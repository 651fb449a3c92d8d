//! # Dot Product
//!
//! The dot product (also known as scalar product) of two 2-D vectors is the
//! sum of the products of their corresponding components:
//!
//! `dot(a, b) = a.x * b.x + a.y * b.y`
//!
//! ## Verified properties
//!
//! - **Known value**: `dot((3, 4), (1, 2)) == 11`
//! - **Commutativity**: `dot(a, b) == dot(b, a)`
//! - **Zero vector**: `dot(a, (0, 0)) == 0`
//! - **Orthogonality**: `dot((1, 0), (0, 1)) == 0`
//! - **Self dot**: `dot(a, a) == a.x² + a.y²`, never negative
//!
//! All comparisons are exact. Each product is rounded once and the sum is
//! rounded once, so swapping operands or multiplying by zero gives the
//! same bits every time.

pub mod code;
pub mod test;

pub use code::*;

use crate::error::CheckError;
use crate::math::vector2::Vector2;
use crate::registry::PropertyCheck;
use crate::utils::{random_vectors, DEFAULT_SEED};

const NAME: &str = "dot_product";

/// Components of sampled vectors are drawn from `[-SAMPLE_RANGE, SAMPLE_RANGE)`.
/// Must stay finite and positive for [`random_vectors`].
const SAMPLE_RANGE: f64 = 1.0e3;

/// Property check for a dot product implementation
pub struct DotProductProperties {
    /// Implementation under test
    pub function: DotProductFn,
    /// Number of random vectors to sample
    pub samples: usize,
    /// Seed for the sample generator
    pub seed: u64,
}

impl Default for DotProductProperties {
    fn default() -> Self {
        Self {
            function: dot_product_original,
            samples: 256,
            seed: DEFAULT_SEED,
        }
    }
}

impl DotProductProperties {
    fn check_known_value(&self) -> Result<(), CheckError> {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, 2.0);
        let result = (self.function)(&a, &b);
        if result != 11.0 {
            return Err(CheckError::violated(
                NAME,
                "known_value",
                format!("dot({:?}, {:?}) = {}, expected 11", a, b, result),
            ));
        }
        Ok(())
    }

    fn check_commutativity(&self, vectors: &[Vector2]) -> Result<(), CheckError> {
        for (a, b) in vectors.iter().zip(vectors.iter().cycle().skip(1)) {
            let ab = (self.function)(a, b);
            let ba = (self.function)(b, a);
            if ab != ba {
                return Err(CheckError::violated(
                    NAME,
                    "commutativity",
                    format!("dot({:?}, {:?}) = {} but reversed = {}", a, b, ab, ba),
                ));
            }
        }
        Ok(())
    }

    fn check_zero_vector(&self, vectors: &[Vector2]) -> Result<(), CheckError> {
        let zero = Vector2::default();
        for a in vectors {
            let result = (self.function)(a, &zero);
            if result != 0.0 {
                return Err(CheckError::violated(
                    NAME,
                    "zero_vector",
                    format!("dot({:?}, (0, 0)) = {}", a, result),
                ));
            }
        }
        Ok(())
    }

    fn check_orthogonality(&self) -> Result<(), CheckError> {
        let result = (self.function)(&Vector2::new(1.0, 0.0), &Vector2::new(0.0, 1.0));
        if result != 0.0 {
            return Err(CheckError::violated(
                NAME,
                "orthogonality",
                format!("dot((1, 0), (0, 1)) = {}", result),
            ));
        }
        Ok(())
    }

    fn check_self_dot(&self, vectors: &[Vector2]) -> Result<(), CheckError> {
        for a in vectors {
            let result = (self.function)(a, a);
            let expected = a.x * a.x + a.y * a.y;
            if result != expected || result < 0.0 {
                return Err(CheckError::violated(
                    NAME,
                    "self_dot",
                    format!("dot({:?}, itself) = {}, expected {}", a, result, expected),
                ));
            }
        }
        Ok(())
    }
}

impl PropertyCheck for DotProductProperties {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Sum of the products of corresponding vector components"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn properties(&self) -> Vec<&'static str> {
        vec![
            "known_value",
            "commutativity",
            "zero_vector",
            "orthogonality",
            "self_dot",
        ]
    }

    fn verify(&self) -> Result<(), CheckError> {
        tracing::debug!(samples = self.samples, seed = self.seed, "sampling vectors");
        let vectors = random_vectors(self.seed, self.samples, SAMPLE_RANGE);

        self.check_known_value()?;
        self.check_commutativity(&vectors)?;
        self.check_zero_vector(&vectors)?;
        self.check_orthogonality()?;
        self.check_self_dot(&vectors)?;

        Ok(())
    }
}
