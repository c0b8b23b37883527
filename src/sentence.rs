//! Sentence reconstruction: left context, matched center, right context.
//!
//! A matched row is rendered back into its containing sentence as a
//! three-part split, for both the matched language
//! ([`reconstruct`]) and the paired language ([`reconstruct_other`]),
//! where the center window comes from the match's alignment links.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::corpus::SentenceSpan;
use crate::row::AnnotationRow;

/// Punctuation that absorbs the space before it.
const CLOSING_PUNCTUATION: [&str; 12] = [
    ".", ",", "?", "/", ":", ";", "\\", "!", "%", ")", "}", "]",
];

/// Punctuation that absorbs the space after it.
const OPENING_PUNCTUATION: [&str; 3] = ["(", "[", "{"];

/// A reconstructed sentence with the matched word(s) isolated as the
/// center.
///
/// Created per query result and discarded after rendering or export. All
/// fields are formatted for display: underscores replaced by spaces,
/// punctuation spacing fixed, fields trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence id, blank when the lookup missed.
    pub sentence_id: String,
    /// Words before the match.
    pub left: String,
    /// The matched word(s).
    pub center: String,
    /// Words after the match.
    pub right: String,
}

impl Sentence {
    /// Render the full sentence, non-empty parts joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        [
            self.left.as_str(),
            self.center.as_str(),
            self.right.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    fn format_space(&mut self) {
        format_field(&mut self.left);
        format_field(&mut self.center);
        format_field(&mut self.right);
    }
}

/// Display formatting for one field: underscores become spaces first,
/// then punctuation absorbs its neighboring space, then the field is
/// trimmed.
fn format_field(field: &mut String) {
    let mut text = field.replace('_', " ");
    for punct in CLOSING_PUNCTUATION {
        text = text.replace(&format!(" {punct}"), punct);
    }
    for punct in OPENING_PUNCTUATION {
        text = text.replace(&format!("{punct} "), punct);
    }
    *field = text.trim().to_string();
}

/// Reconstruct the sentence containing `matched` from its own language's
/// rows.
///
/// Rows in the sentence span sort into left, center, or right by
/// lexicographic id comparison against the matched row; ids are strictly
/// increasing within a sentence, so this is annotation order. A missing
/// sentence id yields an all-blank [`Sentence`].
#[must_use]
pub fn reconstruct(
    matched: &AnnotationRow,
    rows: &[AnnotationRow],
    index: &HashMap<String, SentenceSpan>,
) -> Sentence {
    let Some(span) = index.get(&matched.sentence_id) else {
        return Sentence::default();
    };
    if rows.is_empty() || span.start >= rows.len() {
        return Sentence::default();
    }
    let end = span.end.min(rows.len() - 1);

    let mut sentence = Sentence {
        sentence_id: matched.sentence_id.clone(),
        ..Sentence::default()
    };
    for row in &rows[span.start..=end] {
        if row.sentence_id != matched.sentence_id {
            continue;
        }
        match row.id.cmp(&matched.id) {
            Ordering::Less => {
                sentence.left.push_str(&row.word);
                sentence.left.push(' ');
            }
            Ordering::Equal => sentence.center = row.word.clone(),
            Ordering::Greater => {
                sentence.right.push_str(&row.word);
                sentence.right.push(' ');
            }
        }
    }
    sentence.format_space();
    sentence
}

/// Reconstruct the paired-language sentence for `matched`, segmented
/// through its alignment links.
///
/// Without links (the `-` sentinel, or links that parse to nothing) the
/// whole paired sentence lands in `right` with an empty center: no
/// word-level alignment is available, so the sentence is shown
/// unsegmented. With links, the first and last linked positions bound the
/// center window and every row of the paired sentence is classified by
/// the integer value of its id's position suffix; rows without a
/// parseable suffix fall into `right`.
#[must_use]
pub fn reconstruct_other(
    matched: &AnnotationRow,
    other_rows: &[AnnotationRow],
    other_index: &HashMap<String, SentenceSpan>,
) -> Sentence {
    let Some(span) = other_index.get(&matched.sentence_id) else {
        return Sentence::default();
    };
    if other_rows.is_empty() || span.start >= other_rows.len() {
        return Sentence::default();
    }
    let end = span.end.min(other_rows.len() - 1);

    let mut sentence = Sentence {
        sentence_id: matched.sentence_id.clone(),
        ..Sentence::default()
    };

    let links = matched.link_targets();
    if links.is_empty() {
        for row in &other_rows[span.start..=end] {
            sentence.right.push_str(&row.word);
            sentence.right.push(' ');
        }
    } else {
        let first = links[0];
        let last = links[links.len() - 1];
        for row in &other_rows[span.start..=end] {
            let target = match row.position() {
                Some(position) if position < first => &mut sentence.left,
                Some(position) if position > last => &mut sentence.right,
                Some(_) => &mut sentence.center,
                None => &mut sentence.right,
            };
            target.push_str(&row.word);
            target.push(' ');
        }
    }
    sentence.format_space();
    sentence
}
