use std::collections::HashMap;
use std::hash::BuildHasher;

/// Resolves a textual target reference to a concrete widget identifier.
pub trait TargetResolver {
    /// `None` when the reference matches nothing.
    fn resolve(&self, reference: &str) -> Option<String>;
}

/// Resolver for pages without resolvable widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTargets;

impl TargetResolver for NoTargets {
    fn resolve(&self, _reference: &str) -> Option<String> {
        None
    }
}

impl<S: BuildHasher> TargetResolver for HashMap<String, String, S> {
    fn resolve(&self, reference: &str) -> Option<String> {
        self.get(reference).cloned()
    }
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, reference: &str) -> Option<String> {
        self(reference)
    }
}
