//! Dynamic host runtime adapter for the `w` grammar
//!
//! A host loads the module through [`HostContext::require`], which runs
//! [`initialize_module`] once and publishes two exports: `name`, the grammar
//! identifier, and `language`, the language table as a tagged external.
//! Consumers get the table back with [`language_from_exports`], which
//! refuses anything that is not tagged as a language.

pub mod context;
pub mod exports;
pub mod module;

pub use context::HostContext;
pub use exports::{ExportValue, Exports, ModuleExports};
pub use module::{initialize_module, initialize_module_with, language_from_exports, BINDING_NAME};
