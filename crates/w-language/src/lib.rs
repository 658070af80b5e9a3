//! Language table export layer for the `w` grammar
//!
//! The parser generator owns the language table; this crate only forwards a
//! reference to it. Hosts receive the table as a [`TaggedExternal`] carrying
//! [`LANGUAGE_TYPE_TAG`], and every consumer runs [`verify_language`] before
//! treating an external as a table.
//!
//! ```
//! use tree_sitter_w::{verify_language, TaggedExternal, TypeTag};
//!
//! let mut value = TaggedExternal::new(std::ptr::null());
//! value.type_tag(&TypeTag::from_name("tree-sitter:parser")).unwrap();
//! assert!(verify_language(&value).is_err());
//! ```

pub mod accessor;
pub mod error;
pub mod external;
#[cfg(w_grammar)]
mod grammar;
pub mod surface;
pub mod table;
pub mod tag;

pub use accessor::{Accessor, GRAMMAR_SYMBOL};
pub use error::{LanguageError, LanguageResult};
pub use external::{verify_language, TaggedExternal};
#[cfg(w_grammar)]
pub use grammar::{language, LANGUAGE, NODE_TYPES};
pub use surface::{ExportSummary, ExportSurface, GRAMMAR_NAME, KEYS, LANGUAGE_KEY, NAME_KEY};
pub use table::{LanguageTable, TSLanguage};
pub use tag::{TypeTag, LANGUAGE_TYPE_TAG};
pub use tree_sitter_language::LanguageFn;
