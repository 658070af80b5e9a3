use tree_sitter_w::{Accessor, LanguageFn, TaggedExternal, TypeTag};

/// Name used to derive the tag of a non-language opaque kind
pub const OTHER_KIND_TAG_NAME: &str = "tree-sitter:parser";

static PRIMARY: [u8; 16] = *b"w-fixture-table\0";
static SECONDARY: [u8; 16] = *b"w-second-table\0\0";

static PARSER_STANDIN: u64 = 0xDEAD_BEEF;

unsafe extern "C" fn fixture_language() -> *const () {
    std::ptr::addr_of!(PRIMARY).cast()
}

unsafe extern "C" fn secondary_language() -> *const () {
    std::ptr::addr_of!(SECONDARY).cast()
}

unsafe extern "C" fn null_language() -> *const () {
    std::ptr::null()
}

/// Accessor returning the primary fixture table
pub fn fixture_accessor() -> Accessor {
    // SAFETY: returns a pointer to a static
    Accessor::new("fixture_language", unsafe {
        LanguageFn::from_raw(fixture_language)
    })
}

/// Accessor returning a second, distinct fixture table
pub fn secondary_accessor() -> Accessor {
    // SAFETY: returns a pointer to a static
    Accessor::new("secondary_language", unsafe {
        LanguageFn::from_raw(secondary_language)
    })
}

/// Accessor breaking the non-null contract
pub fn null_accessor() -> Accessor {
    // SAFETY: returns null without touching memory
    Accessor::new("null_language", unsafe { LanguageFn::from_raw(null_language) })
}

pub fn fixture_table_address() -> usize {
    std::ptr::addr_of!(PRIMARY) as usize
}

/// An external of some other opaque kind, tagged accordingly
pub fn other_kind_external() -> TaggedExternal {
    let mut external = TaggedExternal::new(std::ptr::addr_of!(PARSER_STANDIN).cast());
    // A fresh external has no tag yet
    let _ = external.type_tag(&TypeTag::from_name(OTHER_KIND_TAG_NAME));
    external
}
