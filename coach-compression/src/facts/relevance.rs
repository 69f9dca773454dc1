//! Keyword relevance of a fact to a free-text query.

use std::cmp::Reverse;

use coach_core::models::MemoryFact;

const NUTRITION_QUERY_TERMS: &[&str] = &["nutrition", "diet", "meal"];
const NUTRITION_FACT_TERMS: &[&str] = &["vegetarian", "calorie", "protein"];
const WORKOUT_QUERY_TERMS: &[&str] = &["workout", "exercise", "train"];
const WORKOUT_FACT_TERMS: &[&str] = &["morning", "gym", "workout"];

/// Bonus when query and fact are both about the same domain.
const DOMAIN_BONUS: u32 = 2;

fn mentions_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| haystack.contains(t))
}

/// +1 per query word found in the content, +2 per matching domain.
/// Both sides are compared lowercase, so domain terms match regardless of
/// case too: "PROTEIN" in a fact counts the same as "protein".
pub fn score(content: &str, query: &str) -> u32 {
    let content = content.to_lowercase();
    let query = query.to_lowercase();

    let mut relevance = query
        .split_whitespace()
        .filter(|word| content.contains(word))
        .count() as u32;

    if mentions_any(&query, NUTRITION_QUERY_TERMS) && mentions_any(&content, NUTRITION_FACT_TERMS) {
        relevance += DOMAIN_BONUS;
    }
    if mentions_any(&query, WORKOUT_QUERY_TERMS) && mentions_any(&content, WORKOUT_FACT_TERMS) {
        relevance += DOMAIN_BONUS;
    }

    relevance
}

/// Stable sort, most relevant first. Equal scores keep input order.
pub fn sort_by_relevance(facts: &mut [&MemoryFact], query: &str) {
    facts.sort_by_cached_key(|f| Reverse(score(&f.content, query)));
}
