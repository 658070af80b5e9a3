//! Static library adapter for the `w` grammar
//!
//! Packages that link `libtree_sitter_w_swift.a` get `tree_sitter_w` from the
//! generated parser plus the functions declared in
//! `include/tree_sitter_w.h`: the grammar name, the language type tag, the
//! export surface, and a tag check that returns null for anything that is not
//! a language table.

pub mod c_api;

pub use c_api::{
    export_into, export_surface_with, tree_sitter_w_check_language, tree_sitter_w_export,
    tree_sitter_w_name, tree_sitter_w_type_tag, CExportSurface, GRAMMAR_NAME_C,
};
