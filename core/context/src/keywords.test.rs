use super::*;

#[test]
fn extract_raw_keywords_lowercases_and_filters_short_and_stopwords() {
    let keywords = extract_raw_keywords("Fix the Auth bug for login flow");
    assert_eq!(keywords, vec!["fix", "auth", "bug", "login", "flow"]);
}

#[test]
fn extract_raw_keywords_dedupes_preserving_first_occurrence_order() {
    let keywords = extract_raw_keywords("auth auth login");
    assert_eq!(keywords, vec!["auth", "login"]);
}

#[test]
fn expand_keywords_keeps_originals_first_then_synonyms() {
    let raw = vec!["auth".to_string()];
    let expanded = expand_keywords(&raw);
    assert_eq!(expanded[0], "auth");
    assert!(expanded.contains(&"login".to_string()));
    assert!(expanded.contains(&"token".to_string()));
}

#[test]
fn expand_keywords_caps_at_twenty() {
    let raw: Vec<String> = (0..30).map(|i| format!("kw{i}")).collect();
    let expanded = expand_keywords(&raw);
    assert_eq!(expanded.len(), 20);
}

#[test]
fn expand_keywords_with_no_synonyms_returns_raw_unchanged() {
    let raw = vec!["widget".to_string(), "gizmo".to_string()];
    assert_eq!(expand_keywords(&raw), raw);
}
