//! Error types.
//!
//! A mismatch between a computed product and its expected value is not an
//! error: it is reported as [`Outcome::Failed`](crate::assertion::Outcome).
//! Only writer failures and violated property checks end up here.

use thiserror::Error;

/// Failure while writing an assertion report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output writer rejected the report line.
    #[error("failed to write assertion report: {0}")]
    Write(#[from] std::io::Error),
}

/// Failure raised by a registered property check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A counterexample was found for a property.
    #[error("check '{check}' violated property '{property}': {detail}")]
    PropertyViolated {
        check: &'static str,
        property: &'static str,
        detail: String,
    },

    /// A check could not write its report line.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CheckError {
    pub(crate) fn violated(
        check: &'static str,
        property: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::PropertyViolated {
            check,
            property,
            detail: detail.into(),
        }
    }

    /// Name of the property that failed, if any.
    pub fn property(&self) -> Option<&'static str> {
        match self {
            Self::PropertyViolated { property, .. } => Some(*property),
            Self::Report(_) => None,
        }
    }
}
