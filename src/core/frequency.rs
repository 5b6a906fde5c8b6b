// File: src/core/frequency.rs
use crate::core::types::FrequencyEntry;
use std::collections::HashMap;

/// Counts every character of `text` and ranks them by descending count.
///
/// Ties keep the order of first occurrence in `text`. Percentages are
/// floored against the full text length, so they need not sum to 100.
pub fn frequency_ranking(text: &[char]) -> Vec<FrequencyEntry> {
    let mut first_seen: Vec<char> = Vec::new();
    let mut counts: HashMap<char, usize> = HashMap::new();

    for &c in text {
        let count = counts.entry(c).or_insert(0);
        if *count == 0 {
            first_seen.push(c);
        }
        *count += 1;
    }

    let total = text.len();
    let mut ranking: Vec<FrequencyEntry> = first_seen
        .into_iter()
        .map(|letter| {
            let count = counts[&letter];
            FrequencyEntry {
                letter,
                count,
                percent: count * 100 / total,
            }
        })
        .collect();

    // Stable sort, so ties stay in first-occurrence order.
    ranking.sort_by_key(|entry| std::cmp::Reverse(entry.count));
    ranking
}
