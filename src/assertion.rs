//! Assertion and report step.
//!
//! An [`Assertion`] pairs two vectors with the dot product they are expected
//! to produce. Evaluating it is an exact `==` comparison; reporting it writes
//! a single fixed line naming the [`Outcome`].

use std::fmt;
use std::io::Write;

use crate::config::AssertionConfig;
use crate::error::{CheckError, ReportError};
use crate::math::dot_product::dot_product;
use crate::math::vector2::Vector2;
use crate::registry::PropertyCheck;

/// Result of comparing a computed product to its expected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Successful,
    Failed,
}

impl Outcome {
    /// The line printed for this outcome, without the trailing newline.
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Successful => "Assertion successful",
            Outcome::Failed => "Assertion failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Two operands and the dot product they should produce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assertion {
    pub a: Vector2,
    pub b: Vector2,
    pub expected: f64,
}

impl Assertion {
    pub fn new(a: Vector2, b: Vector2, expected: f64) -> Self {
        Self { a, b, expected }
    }

    /// Dot product of the two operands.
    pub fn product(&self) -> f64 {
        dot_product(&self.a, &self.b)
    }

    /// Compare the product to `expected` with exact equality.
    ///
    /// A NaN product or a NaN expectation always fails.
    pub fn evaluate(&self) -> Outcome {
        let product = self.product();
        let outcome = if product == self.expected {
            Outcome::Successful
        } else {
            Outcome::Failed
        };

        tracing::debug!(
            a = ?self.a,
            b = ?self.b,
            product,
            expected = self.expected,
            ?outcome,
            "evaluated assertion"
        );

        outcome
    }

    /// Evaluate and write the outcome line, followed by `\n`, to `out`.
    ///
    /// A `Failed` outcome is returned as `Ok`; only a write failure is an
    /// error.
    pub fn report<W: Write>(&self, out: &mut W) -> Result<Outcome, ReportError> {
        let outcome = self.evaluate();
        writeln!(out, "{}", outcome)?;
        out.flush()?;
        Ok(outcome)
    }
}

/// Expected values that must not match `(3,4)·(1,2)`
const MISMATCHED_EXPECTATIONS: [f64; 7] = [
    0.0,
    10.0,
    12.0,
    -11.0,
    11.000000000000002,
    f64::NAN,
    f64::INFINITY,
];

/// Property check for the report step
pub struct AssertionProperties;

impl AssertionProperties {
    const NAME: &'static str = "assertion";
    const FIXTURE_SUCCEEDS: &'static str = "fixture_succeeds";
    const MISMATCH_FAILS: &'static str = "mismatch_fails";

    fn expect_report(
        &self,
        property: &'static str,
        assertion: &Assertion,
        wanted: Outcome,
    ) -> Result<(), CheckError> {
        let mut buf = Vec::new();
        let outcome = assertion.report(&mut buf)?;
        let line = String::from_utf8_lossy(&buf);
        let expected_line = format!("{}\n", wanted);

        if outcome != wanted || line != expected_line {
            return Err(CheckError::violated(
                Self::NAME,
                property,
                format!(
                    "expected {:?} writing {:?}, got {:?} writing {:?} (expected value {})",
                    wanted, expected_line, outcome, line, assertion.expected
                ),
            ));
        }
        Ok(())
    }
}

impl PropertyCheck for AssertionProperties {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Exact comparison of a dot product against its expected value"
    }

    fn category(&self) -> &'static str {
        "report"
    }

    fn properties(&self) -> Vec<&'static str> {
        vec![Self::FIXTURE_SUCCEEDS, Self::MISMATCH_FAILS]
    }

    fn verify(&self) -> Result<(), CheckError> {
        let fixture = AssertionConfig::default().assertion();
        self.expect_report(Self::FIXTURE_SUCCEEDS, &fixture, Outcome::Successful)?;

        for expected in MISMATCHED_EXPECTATIONS {
            let mismatch = Assertion { expected, ..fixture };
            self.expect_report(Self::MISMATCH_FAILS, &mismatch, Outcome::Failed)?;
        }

        Ok(())
    }
}
