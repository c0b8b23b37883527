//! Word-frequency statistics over a row sequence.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::row::AnnotationRow;
use crate::search::TagFilter;

/// Tokens excluded from frequency counting.
const PUNCTUATION: [&str; 22] = [
    ",", ".", "\"", "\\", "/", ":", ";", "'", "?", "<", ">", "|", "!", "#", "-", "_", "`", "~",
    "&", "*", "(", ")",
];

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    /// Lower-cased surface form.
    pub word: String,
    /// Number of occurrences matching the filter.
    pub count: usize,
    /// Share of the total token count, in percent.
    pub percent: f64,
    /// Standard frequency index, `-log10(count / total)`.
    pub f: f64,
}

/// Count word frequencies, optionally restricted by a tag filter.
///
/// Words are lower-cased before counting; punctuation tokens and blank
/// words are excluded. `percent` and `f` are computed against the total
/// row count, filtered or not. Results sort by descending count, ties by
/// word ascending, truncated to `top` entries when given.
#[must_use]
pub fn word_stats(rows: &[AnnotationRow], filter: &TagFilter, top: Option<usize>) -> Vec<WordStat> {
    let total = rows.len();
    if total == 0 {
        return Vec::new();
    }

    let filter_value = match filter {
        TagFilter::None => None,
        TagFilter::Value(kind, value) => Some((*kind, value.to_lowercase())),
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in rows {
        if let Some((kind, value)) = &filter_value {
            if kind.field(row).to_lowercase() != *value {
                continue;
            }
        }
        let word = row.word.to_lowercase();
        if word.is_empty() || PUNCTUATION.contains(&word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut stats: Vec<WordStat> = counts
        .into_iter()
        .map(|(word, count)| {
            let ratio = count as f64 / total as f64;
            WordStat {
                word,
                count,
                percent: ratio * 100.0,
                f: -ratio.log10(),
            }
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    if let Some(top) = top {
        stats.truncate(top);
    }
    stats
}
