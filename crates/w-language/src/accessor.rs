//! Binding to the generator's `tree_sitter_w` accessor

use crate::error::{LanguageError, LanguageResult};
use crate::table::{LanguageTable, TSLanguage};
use tree_sitter_language::LanguageFn;

/// Link name of the accessor emitted by the parser generator
pub const GRAMMAR_SYMBOL: &str = "tree_sitter_w";

/// A no-argument function returning the process-wide language table.
///
/// The function must be side-effect free and return the same static table
/// on every call. Resolving it is therefore idempotent and needs no caching.
#[derive(Debug, Clone, Copy)]
pub struct Accessor {
    symbol: &'static str,
    raw: unsafe extern "C" fn() -> *const (),
}

impl Accessor {
    pub fn new(symbol: &'static str, language: LanguageFn) -> Self {
        Self {
            symbol,
            raw: language.into_raw(),
        }
    }

    /// The generated grammar's accessor, if the parser was compiled into this build
    #[cfg(w_grammar)]
    pub fn grammar() -> Option<Self> {
        Some(Self::new(GRAMMAR_SYMBOL, crate::grammar::LANGUAGE))
    }

    /// The generated grammar's accessor, if the parser was compiled into this build
    #[cfg(not(w_grammar))]
    pub fn grammar() -> Option<Self> {
        None
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The accessor in the form tree-sitter consumers accept
    pub fn language_fn(&self) -> LanguageFn {
        // SAFETY: `raw` came out of a LanguageFn in `new`
        unsafe { LanguageFn::from_raw(self.raw) }
    }

    /// Call the accessor and wrap its result.
    pub fn resolve(&self) -> LanguageResult<LanguageTable> {
        // SAFETY: accessors take no arguments and only return a static pointer
        let raw = unsafe { (self.raw)() };
        // SAFETY: a non-null accessor result is a static table by contract
        let table = unsafe { LanguageTable::from_raw(raw.cast::<TSLanguage>()) }.ok_or(
            LanguageError::NullTable {
                symbol: self.symbol,
            },
        )?;

        tracing::debug!(
            symbol = self.symbol,
            table = %format_args!("{:#x}", table.addr()),
            "Resolved language table"
        );
        Ok(table)
    }
}
