//! The three ordered reductions. Each returns whether it changed anything.

use coach_core::constants::ELLIPSIS;
use coach_core::models::{CompressedContext, MemoryFact};

/// Cut each summary longer than `limit` chars to `limit` chars plus an ellipsis.
pub fn shorten_summaries(context: &mut CompressedContext, limit: usize) -> bool {
    let mut changed = false;
    for summary in [
        &mut context.workout_summary,
        &mut context.nutrition_summary,
        &mut context.activity_summary,
    ] {
        changed |= shorten(summary, limit);
    }
    changed
}

fn shorten(text: &mut String, limit: usize) -> bool {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            text.truncate(cut);
            text.push_str(ELLIPSIS);
            true
        }
        None => false,
    }
}

/// Keep the first `limit` workouts.
pub fn cap_workouts(context: &mut CompressedContext, limit: usize) -> bool {
    if context.recent_workouts.len() <= limit {
        return false;
    }
    context.recent_workouts.truncate(limit);
    true
}

/// Bring the fact list down to `limit` entries.
///
/// With `preserve_constraints`, every constraint survives (even past the
/// limit) and non-constraints fill whatever room is left, in order.
/// Without it, the first `limit` facts are kept.
pub fn cap_facts(context: &mut CompressedContext, limit: usize, preserve_constraints: bool) -> bool {
    let facts = &mut context.relevant_facts;
    if facts.len() <= limit {
        return false;
    }
    if !preserve_constraints {
        facts.truncate(limit);
        return true;
    }

    let (constraints, others): (Vec<MemoryFact>, Vec<MemoryFact>) =
        std::mem::take(facts).into_iter().partition(|f| f.is_constraint());
    let room = limit.saturating_sub(constraints.len());
    facts.extend(constraints);
    facts.extend(others.into_iter().take(room));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_counts_chars_not_bytes() {
        let mut s = "é".repeat(10);
        assert!(shorten(&mut s, 4));
        assert_eq!(s, "éééé...");
    }

    #[test]
    fn shorten_leaves_exact_length_alone() {
        let mut s = "a".repeat(200);
        assert!(!shorten(&mut s, 200));
        assert_eq!(s.len(), 200);
    }
}
