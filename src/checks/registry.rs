//! Check registry.
//!
//! The [`CheckRegistry`] holds the checks a run executes. Unlike a lookup
//! table, order matters here: checks run and print in registration order.

use super::{Check, CheckId, ConfigFileCheck, OptionalToolCheck, RequiredArtifactCheck};

/// Ordered list of checks.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with the built-in checks in their fixed order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ConfigFileCheck));
        registry.register(Box::new(OptionalToolCheck));
        registry.register(Box::new(RequiredArtifactCheck));
        registry
    }

    /// Append a check. Registering an ID twice replaces the earlier check in place.
    pub fn register(&mut self, check: Box<dyn Check>) {
        let id = check.id();
        match self.checks.iter().position(|c| c.id() == id) {
            Some(idx) => self.checks[idx] = check,
            None => self.checks.push(check),
        }
    }

    /// Get a check by ID.
    pub fn get(&self, id: &CheckId) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over checks in run order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckContext;
    use crate::error::Result;
    use crate::requirements::CheckResult;

    struct Named(&'static str, &'static str);

    impl Check for Named {
        fn id(&self) -> CheckId {
            CheckId::new(self.0)
        }

        fn name(&self) -> &str {
            self.1
        }

        fn run(&self, _ctx: &CheckContext<'_>) -> Result<CheckResult> {
            Ok(CheckResult::pass(self.1))
        }
    }

    #[test]
    fn builtins_run_in_fixed_order() {
        let registry = CheckRegistry::with_builtins();
        let ids: Vec<String> = registry.iter().map(|c| c.id().0).collect();
        assert_eq!(ids, vec!["config-file", "optional-tool", "required-artifact"]);
    }

    #[test]
    fn register_appends() {
        let mut registry = CheckRegistry::new();
        assert!(registry.is_empty());

        registry.register(Box::new(Named("a", "first")));
        registry.register(Box::new(Named("b", "second")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().last().map(|c| c.name()), Some("second"));
    }

    #[test]
    fn duplicate_id_replaces_in_place() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(Named("a", "first")));
        registry.register(Box::new(Named("b", "second")));
        registry.register(Box::new(Named("a", "replacement")));

        let names: Vec<&str> = registry.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["replacement", "second"]);
    }

    #[test]
    fn get_by_id() {
        let registry = CheckRegistry::with_builtins();
        let check = registry.get(&CheckId::new("optional-tool"));
        assert_eq!(check.map(|c| c.name()), Some("Optional tool"));
        assert!(registry.get(&CheckId::new("missing")).is_none());
    }
}
