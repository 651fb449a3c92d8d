//! Property check registry.
//!
//! Every self-verifying routine in the crate implements [`PropertyCheck`]
//! and is registered in [`build_registry`], so the full set can be
//! listed and verified in one pass.

use crate::error::CheckError;

/// Trait that all property checks must implement
pub trait PropertyCheck: Send + Sync {
    /// Name of the check (e.g., "dot_product")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math", "report")
    fn category(&self) -> &'static str;

    /// Names of the properties this check covers
    fn properties(&self) -> Vec<&'static str>;

    /// Verify every property, returning the first violation
    fn verify(&self) -> Result<(), CheckError>;
}

/// Registry of all property checks
pub struct PropertyRegistry {
    checks: Vec<Box<dyn PropertyCheck>>,
}

impl PropertyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register a check
    pub fn register<C: PropertyCheck + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Get all registered checks
    pub fn all(&self) -> &[Box<dyn PropertyCheck>] {
        &self.checks
    }

    /// Find check by name
    pub fn find(&self, name: &str) -> Option<&dyn PropertyCheck> {
        self.checks
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// List check names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// List checks by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn PropertyCheck> {
        self.checks
            .iter()
            .filter(|c| c.category() == category)
            .map(|c| c.as_ref())
            .collect()
    }

    /// Run every registered check in registration order
    pub fn verify_all(&self) -> Result<(), CheckError> {
        for check in &self.checks {
            tracing::debug!(check = check.name(), "verifying");
            check.verify()?;
        }
        Ok(())
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all checks
pub fn build_registry() -> PropertyRegistry {
    let mut registry = PropertyRegistry::new();

    registry.register(crate::math::dot_product::DotProductProperties::default());
    registry.register(crate::assertion::AssertionProperties);

    registry
}
