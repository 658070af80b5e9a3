//! The generated `w` grammar, linked when `grammar/src/parser.c` exists

use tree_sitter_language::LanguageFn;

extern "C" {
    fn tree_sitter_w() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for this grammar
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_w) };

/// The content of the generated [`node-types.json`] file
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers/6-static-node-types
pub const NODE_TYPES: &str = include_str!("../grammar/src/node-types.json");

/// The grammar as a [`tree_sitter::Language`]
pub fn language() -> tree_sitter::Language {
    tree_sitter::Language::new(LANGUAGE)
}
