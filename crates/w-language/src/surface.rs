//! The record a host module publishes to its consumers

use crate::accessor::Accessor;
use crate::error::LanguageResult;
use crate::external::{verify_language, TaggedExternal};
use crate::table::LanguageTable;
use crate::tag::TypeTag;
use serde::Serialize;

/// Canonical identifier of the grammar
pub const GRAMMAR_NAME: &str = "w";

pub const NAME_KEY: &str = "name";
pub const LANGUAGE_KEY: &str = "language";

/// Every key a loaded module exports, and nothing else
pub const KEYS: [&str; 2] = [NAME_KEY, LANGUAGE_KEY];

/// The grammar's display name plus its tagged language table.
///
/// Built in one step so a host never sees one key without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSurface {
    name: &'static str,
    language: TaggedExternal,
}

impl ExportSurface {
    /// Resolve `accessor` once and wrap the table for export
    pub fn load(accessor: &Accessor) -> LanguageResult<Self> {
        let table = accessor.resolve()?;
        Ok(Self::for_table(table))
    }

    pub fn for_table(table: LanguageTable) -> Self {
        Self {
            name: GRAMMAR_NAME,
            language: TaggedExternal::for_language(table),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn language(&self) -> TaggedExternal {
        self.language
    }

    /// The verified language table
    pub fn language_table(&self) -> LanguageResult<LanguageTable> {
        verify_language(&self.language)
    }

    pub fn summary(&self) -> ExportSummary {
        ExportSummary {
            name: self.name,
            keys: KEYS.to_vec(),
            type_tag: self.language.tag(),
            table_address: format!("{:#x}", self.language.data() as usize),
        }
    }
}

/// Serializable view of an [`ExportSurface`] for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub name: &'static str,
    pub keys: Vec<&'static str>,
    pub type_tag: Option<TypeTag>,
    pub table_address: String,
}
