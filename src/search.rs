//! Word, phrase, and tag matchers over annotation row sequences.
//!
//! All matchers scan the row sequence left to right and deduplicate their
//! results by sentence id: the first matching row of a sentence wins and
//! later matches in the same sentence are dropped silently. Unmatched
//! queries return empty maps; nothing here fails.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::morph::fold;
use crate::row::{AnnotationRow, NO_VALUE};

/// Which tag field a search or filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagKind {
    /// Part-of-speech tags.
    Pos,
    /// Named-entity tags.
    Ner,
    /// Semantic-class tags.
    Semantic,
}

impl TagKind {
    /// The row field this kind selects.
    #[must_use]
    pub fn field<'r>(&self, row: &'r AnnotationRow) -> &'r str {
        match self {
            TagKind::Pos => &row.pos,
            TagKind::Ner => &row.ner,
            TagKind::Semantic => &row.semantic,
        }
    }
}

/// Tag restriction applied on top of a word search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagFilter {
    /// No tag restriction.
    None,
    /// Restrict to rows whose tag of the given kind equals the value,
    /// case-insensitively.
    Value(TagKind, String),
}

/// Search for a single word, deduplicated by sentence id.
///
/// The key is trimmed and its first space joined into the `_` separator
/// used by multi-syllable tokens. With `use_morph` false the comparison is
/// an exact, case-sensitive match on the surface form; with `use_morph`
/// true the row's precomputed morph key is compared (lower-cased) against
/// the folded, lower-cased search key.
#[must_use]
pub fn search_word<'c>(
    key: &str,
    use_morph: bool,
    rows: &'c [AnnotationRow],
) -> BTreeMap<&'c str, &'c AnnotationRow> {
    let key = normalize_key(key);
    let mut matches: BTreeMap<&str, &AnnotationRow> = BTreeMap::new();

    if use_morph {
        let key = fold(&key.to_lowercase());
        for row in rows {
            let morph = row.morph.to_lowercase();
            if !morph.is_empty() && morph == key {
                matches.entry(row.sentence_id.as_str()).or_insert(row);
            }
        }
    } else {
        for row in rows {
            if !row.word.is_empty() && row.word == key {
                matches.entry(row.sentence_id.as_str()).or_insert(row);
            }
        }
    }
    matches
}

/// Trim the key and join its first space into the `_` separator used by
/// multi-syllable tokens.
fn normalize_key(key: &str) -> String {
    key.trim().replacen(' ', "_", 1)
}

/// Generate the candidate phrase list for a multi-word key.
///
/// Keys of two or more words produce every contiguous grouping of 2..=4
/// words at every starting offset; words before and after a grouping are
/// kept as single-word padding, and a candidate batch that is set-equal
/// to already-collected candidates is dropped. A single-word key produces
/// itself.
#[must_use]
pub fn phrase_candidates(key: &str) -> Vec<String> {
    let words: Vec<&str> = key.split(' ').collect();
    if words.len() < 2 {
        return vec![key.to_string()];
    }

    let mut result: Vec<String> = Vec::new();
    for group_len in 2..=4usize {
        for offset in 0..words.len() {
            let mut batch: Vec<String> = Vec::new();
            for word in &words[..offset] {
                batch.push((*word).to_string());
            }

            let limit = (words.len() + 1).saturating_sub(group_len);
            let mut i = offset;
            while i < limit {
                batch.push(words[i..i + group_len].join(" "));
                i += group_len;
            }
            while i < words.len() {
                batch.push(words[i].to_string());
                i += 1;
            }

            if !contains_all(&result, &batch) {
                result.extend(batch);
            }
        }
    }
    result
}

fn contains_all(collected: &[String], batch: &[String]) -> bool {
    let collected: HashSet<&str> = collected.iter().map(String::as_str).collect();
    batch.iter().all(|s| collected.contains(s.as_str()))
}

/// Search for a phrase, returning the contiguous matching rows per
/// sentence.
///
/// Every candidate from [`phrase_candidates`] is scanned token-by-token,
/// case-insensitively, against contiguous runs of rows. The first match
/// per sentence wins; among candidates, earlier ones win.
#[must_use]
pub fn search_phrase<'c>(
    key: &str,
    rows: &'c [AnnotationRow],
) -> BTreeMap<&'c str, &'c [AnnotationRow]> {
    let mut matches: BTreeMap<&str, &[AnnotationRow]> = BTreeMap::new();

    for phrase in phrase_candidates(key) {
        let tokens: Vec<String> = phrase.split(' ').map(str::to_lowercase).collect();
        if tokens.is_empty() || rows.len() < tokens.len() {
            continue;
        }
        for i in 0..=rows.len() - tokens.len() {
            let run = &rows[i..i + tokens.len()];
            if run
                .iter()
                .zip(&tokens)
                .all(|(row, token)| row.word.to_lowercase() == *token)
            {
                matches.entry(run[0].sentence_id.as_str()).or_insert(run);
            }
        }
    }
    matches
}

/// Search by tag value, case-insensitively, deduplicated by sentence id.
#[must_use]
pub fn search_tag<'c>(
    key: &str,
    kind: TagKind,
    rows: &'c [AnnotationRow],
) -> BTreeMap<&'c str, &'c AnnotationRow> {
    let key = key.to_lowercase();
    let mut matches: BTreeMap<&str, &AnnotationRow> = BTreeMap::new();
    for row in rows {
        if kind.field(row).to_lowercase() == key {
            matches.entry(row.sentence_id.as_str()).or_insert(row);
        }
    }
    matches
}

/// Search for a word restricted by a tag filter.
///
/// With [`TagFilter::None`] this degrades to [`search_word`]. Otherwise a
/// row matches when both the word (case-insensitively on the surface
/// form, or via the folded morph key) and the selected tag field match.
#[must_use]
pub fn search_word_and_tag<'c>(
    key: &str,
    use_morph: bool,
    filter: &TagFilter,
    rows: &'c [AnnotationRow],
) -> BTreeMap<&'c str, &'c AnnotationRow> {
    let TagFilter::Value(kind, value) = filter else {
        return search_word(key, use_morph, rows);
    };

    let value = value.to_lowercase();
    let mut matches: BTreeMap<&str, &AnnotationRow> = BTreeMap::new();

    if use_morph {
        let key = fold(&key.to_lowercase());
        for row in rows {
            let morph = row.morph.to_lowercase();
            if !morph.is_empty() && morph == key && kind.field(row).to_lowercase() == value {
                matches.entry(row.sentence_id.as_str()).or_insert(row);
            }
        }
    } else {
        let key = key.to_lowercase();
        for row in rows {
            if !row.word.is_empty()
                && row.word.to_lowercase() == key
                && kind.field(row).to_lowercase() == value
            {
                matches.entry(row.sentence_id.as_str()).or_insert(row);
            }
        }
    }
    matches
}

/// Distinct non-sentinel values of the given tag field, sorted ascending.
///
/// The `-` sentinel (untagged) never appears in the result.
#[must_use]
pub fn tag_values(rows: &[AnnotationRow], kind: TagKind) -> Vec<String> {
    let mut values: BTreeSet<&str> = BTreeSet::new();
    for row in rows {
        let value = kind.field(row);
        if value != NO_VALUE {
            values.insert(value);
        }
    }
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, sid: &str, word: &str, morph: &str, pos: &str) -> AnnotationRow {
        AnnotationRow {
            id: id.to_string(),
            sentence_id: sid.to_string(),
            word: word.to_string(),
            morph: morph.to_string(),
            pos: pos.to_string(),
            links: NO_VALUE.to_string(),
            ner: NO_VALUE.to_string(),
            semantic: NO_VALUE.to_string(),
            ..AnnotationRow::default()
        }
    }

    fn sample() -> Vec<AnnotationRow> {
        vec![
            row("S0001_01", "0001", "Tôi", "tooi", "P"),
            row("S0001_02", "0001", "học", "hoc5", "V"),
            row("S0002_01", "0002", "học", "hoc5", "V"),
            row("S0002_02", "0002", "bài", "bai2", "N"),
        ]
    }

    #[test]
    fn test_search_word_exact_is_case_sensitive() {
        let rows = sample();
        assert_eq!(search_word("học", false, &rows).len(), 2);
        assert!(search_word("Học", false, &rows).is_empty());
    }

    #[test]
    fn test_search_word_dedups_first_match() {
        let rows = vec![
            row("S0001_01", "0001", "học", "hoc5", "V"),
            row("S0001_02", "0001", "học", "hoc5", "V"),
        ];
        let matches = search_word("học", false, &rows);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches["0001"].id, "S0001_01");
    }

    #[test]
    fn test_search_word_normalizes_first_space() {
        let rows = vec![row("S0001_01", "0001", "học_sinh", "hoc5_sinh", "N")];
        assert_eq!(search_word("  học sinh ", false, &rows).len(), 1);
    }

    #[test]
    fn test_search_word_morph_folds_key() {
        let rows = sample();
        // The folded key "hoc5" matches the precomputed morph field.
        let matches = search_word("học", true, &rows);
        assert_eq!(matches.len(), 2);
        // Case-insensitive on the key side.
        assert_eq!(search_word("HỌC", true, &rows).len(), 2);
    }

    #[test]
    fn test_search_word_ignores_blank_rows() {
        let mut rows = sample();
        rows.push(AnnotationRow::default());
        assert!(search_word("", false, &rows).is_empty());
        assert!(search_word("", true, &rows).is_empty());
    }

    #[test]
    fn test_phrase_candidates_single_word() {
        assert_eq!(phrase_candidates("học"), vec!["học".to_string()]);
    }

    #[test]
    fn test_phrase_candidates_pairs_come_first() {
        let candidates = phrase_candidates("a b c");
        assert_eq!(candidates[0], "a b");
        assert!(candidates.contains(&"b c".to_string()));
        assert!(candidates.contains(&"a b c".to_string()));
    }

    #[test]
    fn test_phrase_candidates_dedup_set_equal_batches() {
        let candidates = phrase_candidates("a b");
        // "a b" plus its padding singles, each at most once per batch shape.
        let pair_count = candidates.iter().filter(|c| *c == "a b").count();
        assert_eq!(pair_count, 1);
    }

    #[test]
    fn test_search_phrase_matches_contiguous_run() {
        let rows = sample();
        let matches = search_phrase("học bài", &rows);
        let run = matches["0002"];
        assert_eq!(run.len(), 2);
        assert_eq!(run[0].id, "S0002_01");
        assert_eq!(run[1].id, "S0002_02");
    }

    #[test]
    fn test_search_phrase_is_case_insensitive() {
        let rows = sample();
        assert!(search_phrase("HỌC BÀI", &rows).contains_key("0002"));
    }

    #[test]
    fn test_search_tag() {
        let rows = sample();
        let matches = search_tag("v", TagKind::Pos, &rows);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches["0001"].id, "S0001_02");
        assert_eq!(matches["0002"].id, "S0002_01");
    }

    #[test]
    fn test_search_word_and_tag_conjunction() {
        let rows = sample();
        let filter = TagFilter::Value(TagKind::Pos, "V".to_string());
        assert_eq!(search_word_and_tag("học", false, &filter, &rows).len(), 2);

        let wrong = TagFilter::Value(TagKind::Pos, "N".to_string());
        assert!(search_word_and_tag("học", false, &wrong, &rows).is_empty());
    }

    #[test]
    fn test_search_word_and_tag_no_filter_degrades() {
        let rows = sample();
        let plain = search_word("học", false, &rows);
        let filtered = search_word_and_tag("học", false, &TagFilter::None, &rows);
        assert_eq!(plain.len(), filtered.len());
    }

    #[test]
    fn test_search_word_and_tag_morph() {
        let rows = sample();
        let filter = TagFilter::Value(TagKind::Pos, "v".to_string());
        assert_eq!(search_word_and_tag("học", true, &filter, &rows).len(), 2);
    }

    #[test]
    fn test_tag_values_excludes_sentinel() {
        let rows = sample();
        assert_eq!(tag_values(&rows, TagKind::Pos), vec!["N", "P", "V"]);
        assert!(tag_values(&rows, TagKind::Ner).is_empty());
    }
}
