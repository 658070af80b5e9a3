//! Tagged external values and the boundary check

use crate::error::{LanguageError, LanguageResult};
use crate::table::{LanguageTable, TSLanguage};
use crate::tag::{TypeTag, LANGUAGE_TYPE_TAG};
use std::ffi::c_void;

/// A host-native box around a raw pointer, optionally carrying a type tag.
///
/// Mirrors the external values dynamic runtimes hand to native code: the
/// pointer is opaque to the host, and the tag is the only thing that says
/// what kind of object it points to. A tag can be attached once.
///
/// The tag flag is a `u8` rather than `bool`: C callers may hand back any
/// byte there, and every non-zero value reads as tagged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedExternal {
    data: *const c_void,
    tag: TypeTag,
    tagged: u8,
}

// SAFETY: the pointer is never dereferenced without passing a tag check, and
// tagged language tables are immutable statics
unsafe impl Send for TaggedExternal {}
unsafe impl Sync for TaggedExternal {}

impl TaggedExternal {
    /// Wrap an untagged pointer
    pub fn new(data: *const c_void) -> Self {
        Self {
            data,
            tag: TypeTag::new(0, 0),
            tagged: 0,
        }
    }

    /// Wrap a language table and tag it as one
    pub fn for_language(table: LanguageTable) -> Self {
        Self {
            data: table.as_ptr().cast(),
            tag: LANGUAGE_TYPE_TAG,
            tagged: 1,
        }
    }

    /// Attach `tag` to this value. Fails if a tag is already present.
    pub fn type_tag(&mut self, tag: &TypeTag) -> LanguageResult<()> {
        if self.is_tagged() {
            return Err(LanguageError::AlreadyTagged { existing: self.tag });
        }
        self.tag = *tag;
        self.tagged = 1;
        Ok(())
    }

    pub fn check_type_tag(&self, tag: &TypeTag) -> bool {
        self.is_tagged() && self.tag == *tag
    }

    pub fn tag(&self) -> Option<TypeTag> {
        self.is_tagged().then_some(self.tag)
    }

    pub fn is_tagged(&self) -> bool {
        self.tagged != 0
    }

    pub fn data(&self) -> *const c_void {
        self.data
    }

    /// Copy of this value with the tag removed
    pub fn strip_tag(&self) -> Self {
        Self::new(self.data)
    }
}

/// Check that `value` is a language table before anyone dereferences it.
///
/// Every boundary that receives an external and wants a language table goes
/// through here. A value with any other tag, or none, is rejected.
pub fn verify_language(value: &TaggedExternal) -> LanguageResult<LanguageTable> {
    if !value.check_type_tag(&LANGUAGE_TYPE_TAG) {
        tracing::warn!(
            expected = %LANGUAGE_TYPE_TAG,
            found = ?value.tag().map(|tag| tag.to_string()),
            "Rejected external value that is not a language table"
        );
        return Err(LanguageError::tag_mismatch(LANGUAGE_TYPE_TAG, value.tag()));
    }

    // SAFETY: the language tag is only attached around static tables
    unsafe { LanguageTable::from_raw(value.data().cast::<TSLanguage>()) }.ok_or(
        LanguageError::NullTable {
            symbol: "external value",
        },
    )
}
