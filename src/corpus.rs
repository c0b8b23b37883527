//! Corpus snapshots: an ordered row sequence plus its derived sentence
//! index.
//!
//! A [`Corpus`] is an immutable value built once per load. The sentence
//! index is derived state with a lifetime tied to the row sequence:
//! replacing the rows means building a new `Corpus`, never patching the
//! index in place. All query operations borrow the snapshot, so a corpus
//! can be shared freely across callers.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::{self, SentenceAlignment};
use crate::error::Result;
use crate::row::{AnnotationRow, MIN_FIELDS};
use crate::search::{self, TagFilter, TagKind};
use crate::sentence::{self, Sentence};

/// Inclusive row-index bounds of one sentence within its row sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Index of the first row of the sentence.
    pub start: usize,
    /// Index of the last row of the sentence (inclusive).
    pub end: usize,
}

impl SentenceSpan {
    /// Number of rows the span covers. Spans are never empty.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// A warning raised while parsing corpus text.
///
/// Malformed lines are not rejected: they occupy their position as blank
/// rows, which can distort sentence spans when they fall inside a
/// sentence. The warning list is the side channel that makes this
/// observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the source text.
    pub line: usize,
    /// What was wrong with the line.
    pub reason: String,
}

/// Build the sentence index for an ordered row sequence.
///
/// A single left-to-right pass: each contiguous run of rows sharing a
/// `sentence_id` becomes one span. Rows of a sentence must be contiguous
/// (no interleaving); a sentence id that reappears later would overwrite
/// its earlier span.
#[must_use]
pub fn build_index(rows: &[AnnotationRow]) -> HashMap<String, SentenceSpan> {
    let mut index = HashMap::new();
    if rows.is_empty() {
        return index;
    }

    let mut current = rows[0].sentence_id.clone();
    let mut start = 0usize;
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.sentence_id != current {
            let finished = std::mem::replace(&mut current, row.sentence_id.clone());
            index.insert(finished, SentenceSpan { start, end: i - 1 });
            start = i;
        }
    }
    index.insert(current, SentenceSpan { start, end: rows.len() - 1 });
    index
}

/// One language's annotation rows plus the derived sentence index.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    rows: Vec<AnnotationRow>,
    index: HashMap<String, SentenceSpan>,
    warnings: Vec<ParseWarning>,
}

impl Corpus {
    /// Build a corpus from already-parsed rows.
    #[must_use]
    pub fn from_rows(rows: Vec<AnnotationRow>) -> Self {
        let index = build_index(&rows);
        Self {
            rows,
            index,
            warnings: Vec::new(),
        }
    }

    /// Parse tab-delimited corpus text, one row per line.
    ///
    /// Lines with fewer than [`MIN_FIELDS`] fields become blank placeholder
    /// rows and are recorded in [`warnings`](Self::warnings); see
    /// [`AnnotationRow::parse_line`] for the field order.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut rows = Vec::new();
        let mut warnings = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let field_count = line.split('\t').count();
            if line.trim().is_empty() {
                warnings.push(ParseWarning {
                    line: i + 1,
                    reason: "empty line".to_string(),
                });
            } else if field_count < MIN_FIELDS {
                warnings.push(ParseWarning {
                    line: i + 1,
                    reason: format!(
                        "expected at least {MIN_FIELDS} tab-separated fields, got {field_count}"
                    ),
                });
            }
            rows.push(AnnotationRow::parse_line(line));
        }
        if !warnings.is_empty() {
            log::warn!(
                "corpus text has {} malformed line(s), first at line {}",
                warnings.len(),
                warnings[0].line
            );
        }

        let index = build_index(&rows);
        Self {
            rows,
            index,
            warnings,
        }
    }

    /// Read and parse corpus text from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text(&text))
    }

    /// Read and parse a corpus file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// The full row sequence, in annotation order.
    #[must_use]
    pub fn rows(&self) -> &[AnnotationRow] {
        &self.rows
    }

    /// The sentence index.
    #[must_use]
    pub fn index(&self) -> &HashMap<String, SentenceSpan> {
        &self.index
    }

    /// The span of one sentence, if present.
    #[must_use]
    pub fn span(&self, sentence_id: &str) -> Option<SentenceSpan> {
        self.index.get(sentence_id).copied()
    }

    /// The rows of one sentence, or an empty slice if absent.
    #[must_use]
    pub fn sentence_rows(&self, sentence_id: &str) -> &[AnnotationRow] {
        match self.span(sentence_id) {
            Some(span) if span.start < self.rows.len() => {
                let end = span.end.min(self.rows.len() - 1);
                &self.rows[span.start..=end]
            }
            _ => &[],
        }
    }

    /// Warnings recorded while parsing, empty for [`Corpus::from_rows`].
    #[must_use]
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of indexed sentences.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.index.len()
    }

    /// True if the corpus has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct non-sentinel values of the given tag field, sorted
    /// ascending.
    #[must_use]
    pub fn tag_values(&self, kind: TagKind) -> Vec<String> {
        search::tag_values(&self.rows, kind)
    }

    /// See [`search::search_word`].
    #[must_use]
    pub fn search_word(&self, key: &str, use_morph: bool) -> BTreeMap<&str, &AnnotationRow> {
        search::search_word(key, use_morph, &self.rows)
    }

    /// See [`search::search_phrase`].
    #[must_use]
    pub fn search_phrase(&self, key: &str) -> BTreeMap<&str, &[AnnotationRow]> {
        search::search_phrase(key, &self.rows)
    }

    /// See [`search::search_tag`].
    #[must_use]
    pub fn search_tag(&self, key: &str, kind: TagKind) -> BTreeMap<&str, &AnnotationRow> {
        search::search_tag(key, kind, &self.rows)
    }

    /// See [`search::search_word_and_tag`].
    #[must_use]
    pub fn search_word_and_tag(
        &self,
        key: &str,
        use_morph: bool,
        filter: &TagFilter,
    ) -> BTreeMap<&str, &AnnotationRow> {
        search::search_word_and_tag(key, use_morph, filter, &self.rows)
    }

    /// Reconstruct the sentence containing `matched`, with the matched
    /// word isolated as the center. See [`sentence::reconstruct`].
    #[must_use]
    pub fn reconstruct(&self, matched: &AnnotationRow) -> Sentence {
        sentence::reconstruct(matched, &self.rows, &self.index)
    }

    /// Reconstruct this corpus's sentence paired with `matched` from the
    /// other language. See [`sentence::reconstruct_other`].
    #[must_use]
    pub fn reconstruct_other(&self, matched: &AnnotationRow) -> Sentence {
        sentence::reconstruct_other(matched, &self.rows, &self.index)
    }
}

/// Which side of a parallel corpus a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The first language.
    First,
    /// The second language.
    Second,
}

/// Two parallel corpora sharing sentence ids pairwise.
///
/// The two row sequences carry the same sentence ids but not necessarily
/// the same row count per sentence; alignment links in each side's rows
/// point at 1-based word positions in the other side's sentence.
#[derive(Debug, Clone, Default)]
pub struct ParallelCorpus {
    first: Corpus,
    second: Corpus,
}

impl ParallelCorpus {
    /// Pair two corpora.
    #[must_use]
    pub fn new(first: Corpus, second: Corpus) -> Self {
        Self { first, second }
    }

    /// The first-language corpus.
    #[must_use]
    pub fn first(&self) -> &Corpus {
        &self.first
    }

    /// The second-language corpus.
    #[must_use]
    pub fn second(&self) -> &Corpus {
        &self.second
    }

    /// The corpus on the given side.
    #[must_use]
    pub fn side(&self, side: Side) -> &Corpus {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// The word-alignment graph of one sentence pair. See
    /// [`align::align_sentence`].
    #[must_use]
    pub fn align(&self, sentence_id: &str) -> SentenceAlignment {
        align::align_sentence(
            sentence_id,
            self.first.rows(),
            self.second.rows(),
            self.first.index(),
            self.second.index(),
        )
    }

    /// Reconstruct the sentence pair for a row matched on `side`: the
    /// matched side's sentence with the match centered, and the paired
    /// side's sentence segmented through the match's alignment links.
    #[must_use]
    pub fn sentence_pair(&self, matched: &AnnotationRow, side: Side) -> (Sentence, Sentence) {
        let (own, other) = match side {
            Side::First => (&self.first, &self.second),
            Side::Second => (&self.second, &self.first),
        };
        (own.reconstruct(matched), other.reconstruct_other(matched))
    }
}
