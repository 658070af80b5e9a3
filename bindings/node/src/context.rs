//! A host runtime instance with its own module cache

use crate::exports::ModuleExports;
use crate::module::{initialize_module_with, BINDING_NAME};
use std::collections::HashMap;
use std::fmt;
use tree_sitter_w::{Accessor, LanguageError, LanguageResult};

type ModuleInit = Box<dyn Fn(&mut ModuleExports) -> LanguageResult<()>>;

/// One independent host environment.
///
/// Modules are registered by name and loaded on first `require`; each
/// context loads a module at most once and hands out the same exports
/// afterwards. Contexts share nothing with each other.
#[derive(Default)]
pub struct HostContext {
    registered: HashMap<String, ModuleInit>,
    loaded: HashMap<String, ModuleExports>,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with the w binding registered against `accessor`
    pub fn with_binding(accessor: Accessor) -> Self {
        let mut context = Self::new();
        context.register(BINDING_NAME, move |exports| {
            initialize_module_with(exports, &accessor).map(|_| ())
        });
        context
    }

    /// A context with the w binding registered against the generated grammar
    pub fn with_grammar() -> LanguageResult<Self> {
        let accessor = Accessor::grammar().ok_or(LanguageError::GrammarUnavailable)?;
        Ok(Self::with_binding(accessor))
    }

    pub fn register<F>(&mut self, binding: &str, init: F)
    where
        F: Fn(&mut ModuleExports) -> LanguageResult<()> + 'static,
    {
        self.registered.insert(binding.to_string(), Box::new(init));
    }

    /// Resolve `binding`, running its initializer on first use.
    ///
    /// A failed initializer caches nothing, so the exports of a module are
    /// either fully populated or absent.
    pub fn require(&mut self, binding: &str) -> LanguageResult<&ModuleExports> {
        if !self.loaded.contains_key(binding) {
            let init = self
                .registered
                .get(binding)
                .ok_or_else(|| LanguageError::module_not_found(binding))?;

            let mut exports = ModuleExports::new();
            init(&mut exports)?;
            tracing::debug!(binding, "Loaded module");
            self.loaded.insert(binding.to_string(), exports);
        }

        self.loaded
            .get(binding)
            .ok_or_else(|| LanguageError::module_not_found(binding))
    }

    pub fn is_loaded(&self, binding: &str) -> bool {
        self.loaded.contains_key(binding)
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("registered", &self.registered.keys().collect::<Vec<_>>())
            .field("loaded", &self.loaded.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use w_test_support::fixture_accessor;

    #[test]
    fn test_require_runs_initializer_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let accessor = fixture_accessor();

        let mut context = HostContext::new();
        context.register(BINDING_NAME, move |exports| {
            counter.set(counter.get() + 1);
            initialize_module_with(exports, &accessor).map(|_| ())
        });

        assert!(!context.is_loaded(BINDING_NAME));
        let first = context.require(BINDING_NAME).unwrap().clone();
        let second = context.require(BINDING_NAME).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert!(context.is_loaded(BINDING_NAME));
    }

    #[test]
    fn test_unknown_binding() {
        let mut context = HostContext::with_binding(fixture_accessor());
        assert_eq!(
            context.require("tree_sitter_v_binding").unwrap_err(),
            LanguageError::module_not_found("tree_sitter_v_binding")
        );
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut context = HostContext::new();
        context.register(BINDING_NAME, |_| Err(LanguageError::host("out of memory")));
        assert_eq!(
            context.require(BINDING_NAME).unwrap_err(),
            LanguageError::host("out of memory")
        );
        assert!(!context.is_loaded(BINDING_NAME));
    }

    #[test]
    fn test_with_grammar_matches_build() {
        assert_eq!(
            HostContext::with_grammar().is_ok(),
            tree_sitter_w::Accessor::grammar().is_some()
        );
    }
}
