//! Tests for the suggestion generator

use souq_application::suggestions::SuggestionGenerator;

fn suggest(query: &str, locale: &str) -> Vec<String> {
    SuggestionGenerator::new().suggest(query, locale)
}

#[test]
fn empty_query_returns_locale_defaults() {
    let suggestions = suggest("", "en");
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0], "gaming laptop");
}

#[test]
fn suggestions_overlap_the_query() {
    let suggestions = suggest("laptop", "en");
    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| s.contains("laptop")));
}

#[test]
fn overlap_works_in_both_directions() {
    // The query contains the candidate phrase, not the other way around
    let suggestions = suggest("cheap wireless headphones with mic", "en");
    assert!(suggestions.contains(&"wireless headphones".to_string()));
}

#[test]
fn unrelated_query_yields_empty_list() {
    assert!(suggest("xylophone polish", "en").is_empty());
}

#[test]
fn never_more_than_five() {
    assert!(suggest("", "en").len() <= 5);
    assert!(suggest("a", "en").len() <= 5);
}

#[test]
fn locale_selects_the_phrase_list() {
    let arabic = suggest("", "ar");
    assert!(!arabic.is_empty());
    assert!(arabic.contains(&"سماعات لاسلكية".to_string()));

    let chinese = suggest("耳机", "zh");
    assert!(chinese.contains(&"无线耳机".to_string()));
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(suggest("laptop", "en"), suggest("laptop", "en"));
}

#[test]
fn matching_is_case_insensitive() {
    let suggestions = suggest("LAPTOP", "en");
    assert!(suggestions.iter().any(|s| s.contains("laptop")));
}
