use pretty_assertions::assert_eq;
use tree_sitter_w::{
    verify_language, Accessor, ExportSurface, LanguageError, LanguageFn, TaggedExternal, TypeTag,
    GRAMMAR_NAME, KEYS, LANGUAGE_TYPE_TAG,
};

static TABLE: [u64; 2] = [0x77, 0];

unsafe extern "C" fn fixture_language() -> *const () {
    std::ptr::addr_of!(TABLE).cast()
}

fn accessor() -> Accessor {
    Accessor::new("fixture_language", unsafe {
        LanguageFn::from_raw(fixture_language)
    })
}

#[test]
fn test_surface_load_uses_canonical_name() {
    let surface = ExportSurface::load(&accessor()).unwrap();
    assert_eq!(surface.name(), GRAMMAR_NAME);
    assert_eq!(surface.name(), "w");
    assert_eq!(KEYS, ["name", "language"]);
}

#[test]
fn test_independent_loads_share_the_table() {
    let first = ExportSurface::load(&accessor()).unwrap();
    let second = ExportSurface::load(&accessor()).unwrap();
    assert_eq!(first, second);
    assert!(first
        .language_table()
        .unwrap()
        .ptr_eq(second.language_table().unwrap()));
}

#[test]
fn test_tag_from_another_wrapper_still_verifies() {
    let wrapped = ExportSurface::load(&accessor()).unwrap().language();
    let copy_of_constant = TypeTag::new(0x8AF2E5212AD58ABF, 0xD5006CAD83ABBA16);
    assert!(wrapped.check_type_tag(&copy_of_constant));
    assert_eq!(copy_of_constant, LANGUAGE_TYPE_TAG);
}

#[test]
fn test_corrupted_language_export_is_rejected() {
    let language = ExportSurface::load(&accessor()).unwrap().language();

    let stripped = language.strip_tag();
    assert_eq!(
        verify_language(&stripped),
        Err(LanguageError::tag_mismatch(LANGUAGE_TYPE_TAG, None))
    );

    let mut retagged = stripped;
    let bogus = TypeTag::new(LANGUAGE_TYPE_TAG.lower, LANGUAGE_TYPE_TAG.upper ^ 1);
    retagged.type_tag(&bogus).unwrap();
    assert_eq!(
        verify_language(&retagged),
        Err(LanguageError::tag_mismatch(LANGUAGE_TYPE_TAG, Some(bogus)))
    );
}

#[test]
fn test_summary_serializes_tag_as_hex() {
    let summary = ExportSurface::load(&accessor()).unwrap().summary();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["name"], "w");
    assert_eq!(json["typeTag"], "8AF2E5212AD58ABFD5006CAD83ABBA16");
    assert_eq!(json["keys"], serde_json::json!(["name", "language"]));
}

#[test]
fn test_external_of_other_kind_never_becomes_a_table() {
    let other = 42u32;
    let mut external = TaggedExternal::new(std::ptr::addr_of!(other).cast());
    external
        .type_tag(&TypeTag::from_name("tree-sitter:tree"))
        .unwrap();
    assert!(verify_language(&external).unwrap_err().is_tag_mismatch());
}
