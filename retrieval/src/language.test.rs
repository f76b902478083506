use super::*;

#[test]
fn from_extension_recognizes_the_supported_set() {
    assert_eq!(SupportedLanguage::from_extension("rs"), Some(SupportedLanguage::Rust));
    assert_eq!(SupportedLanguage::from_extension("TS"), Some(SupportedLanguage::TypeScript));
    assert_eq!(SupportedLanguage::from_extension("py"), Some(SupportedLanguage::Python));
    assert_eq!(SupportedLanguage::from_extension("go"), Some(SupportedLanguage::Go));
    assert_eq!(SupportedLanguage::from_extension("md"), Some(SupportedLanguage::Markdown));
    assert_eq!(SupportedLanguage::from_extension("rb"), None);
}

#[test]
fn from_path_reads_the_extension() {
    assert_eq!(SupportedLanguage::from_path(Path::new("src/main.rs")), Some(SupportedLanguage::Rust));
    assert_eq!(SupportedLanguage::from_path(Path::new("README")), None);
}
