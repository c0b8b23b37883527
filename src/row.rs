//! Per-token annotation rows and the tab-delimited corpus line format.
//!
//! A corpus file carries one token per line, with 10 or 11 tab-separated
//! fields in fixed order:
//!
//! | # | Field | Meaning |
//! |---|-------|---------|
//! | 0 | id | composite id: sentence id + in-sentence position suffix |
//! | 1 | word | surface form (`_` joins multi-syllable tokens) |
//! | 2 | lemma | dictionary form |
//! | 3 | links | `-` or comma-separated 1-based positions in the paired sentence |
//! | 4 | morph | diacritic-folded, lower-cased morph key |
//! | 5 | pos | part-of-speech tag (`-` = untagged) |
//! | 6 | phrase | phrase annotation (opaque) |
//! | 7 | grm | grammar annotation (opaque) |
//! | 8 | ner | named-entity tag (`-` = untagged) |
//! | 9 | semantic | semantic-class tag (`-` = untagged) |
//! | 10 | lang_code | optional language tag |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentinel marking "no value" for the links and tag fields.
pub const NO_VALUE: &str = "-";

/// Width of the in-sentence position suffix at the end of a row id.
///
/// Row ids encode their 1-based in-sentence position zero-padded to this
/// many digits (e.g. `S0001_07` is word 7 of sentence `0001`). The
/// alignment-window classification in
/// [`reconstruct_other`](crate::sentence::reconstruct_other) reads the
/// suffix at exactly this width; corpora with a different id scheme need
/// this constant revisited.
pub const POSITION_WIDTH: usize = 2;

/// Minimum number of tab-separated fields a corpus line must carry.
pub const MIN_FIELDS: usize = 10;

/// One token's worth of linguistic annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRow {
    /// Composite identifier; strictly increasing within a sentence.
    pub id: String,
    /// Sentence id derived from `id`; groups rows into sentences.
    pub sentence_id: String,
    /// Surface form. `_` stands in for spaces in multi-syllable tokens.
    pub word: String,
    /// Dictionary form.
    pub lemma: String,
    /// `-`, or comma-separated 1-based word positions in the paired sentence.
    pub links: String,
    /// Diacritic-folded, lower-cased morph key for fuzzy matching.
    pub morph: String,
    /// Part-of-speech tag.
    pub pos: String,
    /// Phrase annotation, opaque to this crate.
    pub phrase: String,
    /// Grammar annotation, opaque to this crate.
    pub grm: String,
    /// Named-entity tag.
    pub ner: String,
    /// Semantic-class tag.
    pub semantic: String,
    /// Optional language tag.
    pub lang_code: String,
}

impl AnnotationRow {
    /// Parse a tab-delimited corpus line.
    ///
    /// Fields are trimmed. Lines with fewer than [`MIN_FIELDS`] fields
    /// parse to an all-blank row that still occupies its sequence
    /// position; they are never rejected. Extra fields beyond the
    /// optional language code are ignored.
    #[must_use]
    pub fn parse_line(line: &str) -> Self {
        if line.trim().is_empty() {
            return Self::default();
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < MIN_FIELDS {
            return Self::default();
        }

        let id = fields[0].to_string();
        Self {
            sentence_id: sentence_id_of(&id),
            id,
            word: fields[1].to_string(),
            lemma: fields[2].to_string(),
            links: fields[3].to_string(),
            morph: fields[4].to_string(),
            pos: fields[5].to_string(),
            phrase: fields[6].to_string(),
            grm: fields[7].to_string(),
            ner: fields[8].to_string(),
            semantic: fields[9].to_string(),
            lang_code: fields.get(10).copied().unwrap_or("").to_string(),
        }
    }

    /// True if this row is a blank placeholder from a malformed line.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.id.is_empty() && self.word.is_empty()
    }

    /// True if the row carries word-level alignment links.
    #[must_use]
    pub fn has_links(&self) -> bool {
        !self.links.is_empty() && self.links != NO_VALUE
    }

    /// The 1-based paired-sentence positions this row aligns to, in links
    /// order. Unparseable entries are skipped.
    #[must_use]
    pub fn link_targets(&self) -> Vec<usize> {
        if !self.has_links() {
            return Vec::new();
        }
        self.links
            .split(',')
            .filter_map(|token| token.trim().parse().ok())
            .collect()
    }

    /// The integer value of the trailing [`POSITION_WIDTH`]-digit position
    /// suffix of `id`, if it parses.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        trailing_position(&self.id)
    }
}

/// Derive the sentence id from a row id.
///
/// The longest digit run in the id wins (the first one on ties), so
/// `S0001_07` yields `0001`. Ids without digits fall back to the chars
/// `2..len-2` substring when the id is longer than 4 chars, else the id
/// itself.
#[must_use]
pub fn sentence_id_of(id: &str) -> String {
    static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

    let mut longest: Option<&str> = None;
    for run in DIGIT_RUN.find_iter(id) {
        if longest.map_or(true, |best| run.as_str().len() > best.len()) {
            longest = Some(run.as_str());
        }
    }
    if let Some(run) = longest {
        return run.to_string();
    }

    let chars: Vec<char> = id.chars().collect();
    if chars.len() > 4 {
        chars[2..chars.len() - 2].iter().collect()
    } else {
        id.to_string()
    }
}

/// Parse the trailing [`POSITION_WIDTH`] characters of a row id as its
/// in-sentence position.
#[must_use]
pub fn trailing_position(id: &str) -> Option<usize> {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() < POSITION_WIDTH {
        return None;
    }
    let suffix: String = chars[chars.len() - POSITION_WIDTH..].iter().collect();
    suffix.parse().ok()
}
