// ABOUTME: Literal substitution engine applied to bug summaries
// ABOUTME: Chains replacement pairs left to right and plans one update per bug

use bugzilla_sdk::Bug;
use std::ops::Range;

use crate::types::{PlannedUpdate, ReplacementPair};

/// Apply every pair in order, feeding each step's output into the next.
/// All occurrences of a needle are replaced; matching is literal.
pub fn apply_replacements(summary: &str, pairs: &[ReplacementPair]) -> String {
    pairs.iter().fold(summary.to_string(), |text, pair| {
        if text.contains(&pair.needle) {
            text.replace(&pair.needle, &pair.replacement)
        } else {
            text
        }
    })
}

/// Same text as [`apply_replacements`], plus the byte ranges of the result
/// that were written by a replacement (merged where adjacent). Text that was
/// already in the summary is never part of a range, even when it equals a
/// replacement.
pub fn replace_with_spans(summary: &str, pairs: &[ReplacementPair]) -> (String, Vec<Range<usize>>) {
    let mut text = summary.to_string();
    let mut inserted = vec![false; text.len()];

    for pair in pairs {
        if !text.contains(&pair.needle) {
            continue;
        }

        let mut next = String::with_capacity(text.len());
        let mut next_inserted = Vec::with_capacity(inserted.len());
        let mut pos = 0;
        for (start, found) in text.match_indices(pair.needle.as_str()) {
            next.push_str(&text[pos..start]);
            next_inserted.extend_from_slice(&inserted[pos..start]);
            next.push_str(&pair.replacement);
            next_inserted.resize(next_inserted.len() + pair.replacement.len(), true);
            pos = start + found.len();
        }
        next.push_str(&text[pos..]);
        next_inserted.extend_from_slice(&inserted[pos..]);

        text = next;
        inserted = next_inserted;
    }

    let mut spans = Vec::new();
    let mut run_start = None;
    for (i, &flag) in inserted.iter().enumerate() {
        match (flag, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                spans.push(start..i);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        spans.push(start..inserted.len());
    }

    (text, spans)
}

/// One planned update for every bug, in search order, changed or not
pub fn plan_updates(bugs: Vec<Bug>, pairs: &[ReplacementPair]) -> Vec<PlannedUpdate> {
    bugs.into_iter()
        .map(|bug| {
            let new_summary = apply_replacements(&bug.summary, pairs);
            PlannedUpdate { bug, new_summary }
        })
        .collect()
}
