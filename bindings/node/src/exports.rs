//! The host's exports object

use std::collections::BTreeMap;
use tree_sitter_w::{LanguageError, LanguageResult, TaggedExternal};

/// A value a module can publish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportValue {
    String(&'static str),
    External(TaggedExternal),
}

impl ExportValue {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::String(value) => Some(*value),
            Self::External(_) => None,
        }
    }

    pub fn as_external(&self) -> Option<&TaggedExternal> {
        match self {
            Self::External(external) => Some(external),
            Self::String(_) => None,
        }
    }
}

/// The exports object a host's module loader hands to a module at load time.
///
/// Implemented by each host runtime; modules never construct one themselves.
pub trait Exports {
    /// Define every property in `props`, or none of them.
    fn define_properties(&mut self, props: [(&'static str, ExportValue); 2])
        -> LanguageResult<()>;

    fn get(&self, key: &str) -> Option<ExportValue>;

    fn keys(&self) -> Vec<String>;
}

/// In-process exports object
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModuleExports {
    properties: BTreeMap<String, ExportValue>,
}

impl ModuleExports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Exports for ModuleExports {
    fn define_properties(
        &mut self,
        props: [(&'static str, ExportValue); 2],
    ) -> LanguageResult<()> {
        // Validate the whole batch before writing anything
        if let Some((key, _)) = props
            .iter()
            .find(|(key, _)| self.properties.contains_key(*key))
        {
            return Err(LanguageError::already_initialized(*key));
        }
        if props[0].0 == props[1].0 {
            return Err(LanguageError::already_initialized(props[0].0));
        }

        for (key, value) in props {
            self.properties.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<ExportValue> {
        self.properties.get(key).copied()
    }

    fn keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }
}
