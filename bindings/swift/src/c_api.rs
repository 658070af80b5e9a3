//! C ABI consumed by packages that link the static archive

use std::ffi::{c_char, CStr};
use std::ptr;
use tree_sitter_w::{
    verify_language, Accessor, ExportSurface, LanguageResult, TSLanguage, TaggedExternal, TypeTag,
    LANGUAGE_TYPE_TAG,
};

/// `GRAMMAR_NAME` as a C string
pub const GRAMMAR_NAME_C: &CStr = c"w";

/// Export surface in C layout: `name` and the tagged `language`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CExportSurface {
    pub name: *const c_char,
    pub language: TaggedExternal,
}

impl From<ExportSurface> for CExportSurface {
    fn from(surface: ExportSurface) -> Self {
        Self {
            name: GRAMMAR_NAME_C.as_ptr(),
            language: surface.language(),
        }
    }
}

/// Build the C export surface from `accessor`
pub fn export_surface_with(accessor: &Accessor) -> LanguageResult<CExportSurface> {
    ExportSurface::load(accessor).map(CExportSurface::from)
}

/// Write the surface for `accessor` into `out`, leaving it untouched on failure.
///
/// # Safety
///
/// `out` must be null or valid for writes.
pub unsafe fn export_into(out: *mut CExportSurface, accessor: &Accessor) -> bool {
    if out.is_null() {
        return false;
    }
    match export_surface_with(accessor) {
        Ok(surface) => {
            out.write(surface);
            true
        }
        Err(err) => {
            tracing::warn!(symbol = accessor.symbol(), error = %err, "Failed to export language");
            false
        }
    }
}

#[no_mangle]
pub extern "C" fn tree_sitter_w_name() -> *const c_char {
    GRAMMAR_NAME_C.as_ptr()
}

#[no_mangle]
pub extern "C" fn tree_sitter_w_type_tag() -> TypeTag {
    LANGUAGE_TYPE_TAG
}

/// # Safety
///
/// `out` must be null or valid for writes of a `CExportSurface`.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_w_export(out: *mut CExportSurface) -> bool {
    match Accessor::grammar() {
        Some(accessor) => export_into(out, &accessor),
        None => false,
    }
}

/// Returns the language table behind `value`, or null if `value` is not
/// tagged as a language.
///
/// # Safety
///
/// `value` must be null or point to a readable `TaggedExternal`.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_w_check_language(
    value: *const TaggedExternal,
) -> *const TSLanguage {
    let Some(value) = value.as_ref() else {
        return ptr::null();
    };
    match verify_language(value) {
        Ok(table) => table.as_ptr(),
        Err(_) => ptr::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter_w::GRAMMAR_NAME;
    use w_test_support::{fixture_accessor, fixture_table_address, null_accessor};

    #[test]
    fn test_c_name_matches_grammar_name() {
        let name = unsafe { CStr::from_ptr(tree_sitter_w_name()) };
        assert_eq!(name.to_str().unwrap(), GRAMMAR_NAME);
    }

    #[test]
    fn test_export_into_writes_both_fields() {
        let mut out = CExportSurface {
            name: ptr::null(),
            language: TaggedExternal::new(ptr::null()),
        };
        assert!(unsafe { export_into(&mut out, &fixture_accessor()) });
        assert_eq!(out.name, GRAMMAR_NAME_C.as_ptr());
        assert_eq!(out.language.data() as usize, fixture_table_address());
        assert_eq!(out.language.tag(), Some(LANGUAGE_TYPE_TAG));
    }

    #[test]
    fn test_failed_export_leaves_output_untouched() {
        let mut out = CExportSurface {
            name: ptr::null(),
            language: TaggedExternal::new(ptr::null()),
        };
        assert!(!unsafe { export_into(&mut out, &null_accessor()) });
        assert!(out.name.is_null());
        assert_eq!(out.language.tag(), None);
    }

    /// `TreeSitterWExternal` as a C caller lays it out
    #[repr(C)]
    struct CallerExternal {
        data: *const std::ffi::c_void,
        tag: TypeTag,
        tagged: u8,
    }

    #[test]
    fn test_check_accepts_any_nonzero_tag_flag_from_c() {
        let table = fixture_accessor().resolve().unwrap();
        let from_c = CallerExternal {
            data: table.as_ptr().cast(),
            tag: LANGUAGE_TYPE_TAG,
            tagged: 0xFF,
        };
        let checked =
            unsafe { tree_sitter_w_check_language(ptr::addr_of!(from_c).cast::<TaggedExternal>()) };
        assert_eq!(checked as usize, fixture_table_address());
    }

    #[test]
    fn test_check_rejects_cleared_tag_flag_from_c() {
        let table = fixture_accessor().resolve().unwrap();
        let from_c = CallerExternal {
            data: table.as_ptr().cast(),
            tag: LANGUAGE_TYPE_TAG,
            tagged: 0,
        };
        let checked =
            unsafe { tree_sitter_w_check_language(ptr::addr_of!(from_c).cast::<TaggedExternal>()) };
        assert!(checked.is_null());
        assert_eq!(
            std::mem::size_of::<CallerExternal>(),
            std::mem::size_of::<TaggedExternal>()
        );
    }

    #[test]
    fn test_null_output_is_refused() {
        assert!(!unsafe { export_into(ptr::null_mut(), &fixture_accessor()) });
        assert!(!unsafe { tree_sitter_w_export(ptr::null_mut()) });
    }
}
