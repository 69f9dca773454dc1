//! Confidence-then-recency ordering for facts without a query.

use std::cmp::Reverse;

use coach_core::models::MemoryFact;

/// Confidences within this distance of a group's head count as equal.
pub const CONFIDENCE_TIE_WINDOW: f64 = 0.1;

/// Sort by confidence descending; facts whose confidence lies within
/// [`CONFIDENCE_TIE_WINDOW`] of their group's most confident fact are
/// ordered newest first.
///
/// Groups are formed greedily from the top so the resulting order is a
/// total order (a pairwise "close enough" comparison is not transitive).
pub fn sort_by_confidence_then_recency(facts: &mut Vec<&MemoryFact>) {
    facts.sort_by(|a, b| b.confidence.value().total_cmp(&a.confidence.value()));

    let mut grouped: Vec<(usize, &MemoryFact)> = Vec::with_capacity(facts.len());
    let mut group = 0usize;
    let mut head: Option<f64> = None;
    for fact in facts.drain(..) {
        let confidence = fact.confidence.value();
        match head {
            Some(h) if h - confidence <= CONFIDENCE_TIE_WINDOW => {}
            Some(_) => {
                group += 1;
                head = Some(confidence);
            }
            None => head = Some(confidence),
        }
        grouped.push((group, fact));
    }

    grouped.sort_by_key(|(group, fact)| (*group, Reverse(fact.created_at)));
    facts.extend(grouped.into_iter().map(|(_, fact)| fact));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use coach_core::models::FactType;

    fn fact(content: &str, confidence: f64, days_ago: i64) -> MemoryFact {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        MemoryFact::new(
            FactType::Preference,
            content,
            confidence,
            base - Duration::days(days_ago),
        )
    }

    #[test]
    fn clear_confidence_gap_wins_over_recency() {
        let old_sure = fact("old sure", 0.95, 30);
        let new_unsure = fact("new unsure", 0.6, 0);
        let mut facts = vec![&new_unsure, &old_sure];
        sort_by_confidence_then_recency(&mut facts);
        assert_eq!(facts[0].content, "old sure");
    }

    #[test]
    fn near_ties_break_by_recency() {
        let older = fact("older", 0.9, 10);
        let newer = fact("newer", 0.85, 1);
        let mut facts = vec![&older, &newer];
        sort_by_confidence_then_recency(&mut facts);
        assert_eq!(facts[0].content, "newer");
        assert_eq!(facts[1].content, "older");
    }

    #[test]
    fn chained_near_ties_do_not_merge_groups() {
        // 0.9 and 0.75 are 0.15 apart even though each is within 0.1 of 0.82.
        let a = fact("a", 0.9, 20);
        let b = fact("b", 0.82, 10);
        let c = fact("c", 0.75, 0);
        let mut facts = vec![&c, &b, &a];
        sort_by_confidence_then_recency(&mut facts);
        let order: Vec<&str> = facts.iter().map(|f| f.content.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
