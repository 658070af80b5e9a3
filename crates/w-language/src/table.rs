//! The opaque language table handle

use std::fmt;
use std::marker::{PhantomData, PhantomPinned};
use std::ptr::NonNull;

/// A compiled grammar's parse table.
///
/// The layout is private to the parser generator. This type only exists
/// behind pointers and can never be constructed or read from Rust.
#[repr(C)]
pub struct TSLanguage {
    _opaque: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// A non-null reference to a statically allocated [`TSLanguage`].
///
/// Tables live for the whole process and are never written after the
/// generator emits them, so the handle is freely shared across threads.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageTable(NonNull<TSLanguage>);

// SAFETY: the pointee is immutable static data
unsafe impl Send for LanguageTable {}
unsafe impl Sync for LanguageTable {}

impl LanguageTable {
    /// Wrap a raw table pointer, returning `None` for null.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a language table with static storage
    /// duration.
    pub unsafe fn from_raw(ptr: *const TSLanguage) -> Option<Self> {
        NonNull::new(ptr.cast_mut()).map(Self)
    }

    pub fn as_ptr(self) -> *const TSLanguage {
        self.0.as_ptr().cast_const()
    }

    pub fn addr(self) -> usize {
        self.0.as_ptr() as usize
    }

    /// Pointer identity, the only equality that means anything for an opaque table
    pub fn ptr_eq(self, other: LanguageTable) -> bool {
        self.0 == other.0
    }
}

impl fmt::Debug for LanguageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LanguageTable({:#x})", self.addr())
    }
}
