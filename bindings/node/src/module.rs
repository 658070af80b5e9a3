//! Module initialization: the one place the accessor meets the host

use crate::exports::{ExportValue, Exports};
use tree_sitter_w::{
    verify_language, Accessor, ExportSurface, LanguageError, LanguageResult, LanguageTable,
    LANGUAGE_KEY, NAME_KEY,
};

/// Name the host loader registers this module under
pub const BINDING_NAME: &str = "tree_sitter_w_binding";

/// Populate `exports` from the generated grammar.
///
/// Fails with [`LanguageError::GrammarUnavailable`] when this build has no
/// generated parser to link.
pub fn initialize_module<E: Exports + ?Sized>(exports: &mut E) -> LanguageResult<&mut E> {
    let accessor = Accessor::grammar().ok_or(LanguageError::GrammarUnavailable)?;
    initialize_module_with(exports, &accessor)
}

/// Populate `exports` with `name` and the tagged `language` from `accessor`.
///
/// Both keys land in one `define_properties` call, so a failure from the
/// host leaves the exports object as it was.
pub fn initialize_module_with<'a, E: Exports + ?Sized>(
    exports: &'a mut E,
    accessor: &Accessor,
) -> LanguageResult<&'a mut E> {
    let surface = ExportSurface::load(accessor)?;

    exports.define_properties([
        (NAME_KEY, ExportValue::String(surface.name())),
        (LANGUAGE_KEY, ExportValue::External(surface.language())),
    ])?;

    tracing::debug!(
        symbol = accessor.symbol(),
        name = surface.name(),
        "Initialized w module exports"
    );
    Ok(exports)
}

/// Consumer side: fetch the `language` export and verify it is a language table
pub fn language_from_exports<E: Exports + ?Sized>(exports: &E) -> LanguageResult<LanguageTable> {
    let value = exports.get(LANGUAGE_KEY).ok_or(LanguageError::MissingExport {
        key: LANGUAGE_KEY.to_string(),
    })?;

    match value {
        ExportValue::External(external) => verify_language(&external),
        ExportValue::String(_) => Err(LanguageError::tag_mismatch(
            tree_sitter_w::LANGUAGE_TYPE_TAG,
            None,
        )),
    }
}
