//! Word-level alignment graphs between paired sentences.
//!
//! Each sentence of a pair becomes an ordered list of nodes (one per
//! word, with a 0-based local index); the first language's `links` fields
//! are resolved against the second language's local indices to produce a
//! directed bipartite edge set, used to draw alignment arcs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::corpus::SentenceSpan;
use crate::row::AnnotationRow;

/// One word of a sentence in an alignment graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentNode {
    /// 0-based position within the sentence window.
    pub id: usize,
    /// Surface form.
    pub word: String,
    /// Part-of-speech tag, for arc labeling.
    pub pos: String,
    /// 0-based positions in the paired sentence this word aligns to.
    /// Empty for unaligned words; multiple entries for one-to-many
    /// alignment.
    pub id_target: Vec<usize>,
}

/// The word-alignment graph of one sentence pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAlignment {
    /// First-language words in sentence order.
    pub sentence_1: Vec<AlignmentNode>,
    /// Second-language words in sentence order.
    pub sentence_2: Vec<AlignmentNode>,
}

/// Resolve the word alignment of one sentence pair.
///
/// Every `links` entry of a first-language row is a 1-based position in
/// the second-language sentence; in-bounds positions become edges in the
/// source node's `id_target`, out-of-range or unparseable entries are
/// skipped silently. A sentence id missing from either index yields an
/// empty [`SentenceAlignment`].
#[must_use]
pub fn align_sentence(
    sentence_id: &str,
    rows_1: &[AnnotationRow],
    rows_2: &[AnnotationRow],
    index_1: &HashMap<String, SentenceSpan>,
    index_2: &HashMap<String, SentenceSpan>,
) -> SentenceAlignment {
    let (Some(span_1), Some(span_2)) = (index_1.get(sentence_id), index_2.get(sentence_id))
    else {
        return SentenceAlignment::default();
    };

    let mut sentence_1 = collect_nodes(rows_1, span_1);
    let sentence_2 = collect_nodes(rows_2, span_2);

    let source_rows = span_rows(rows_1, span_1);
    for (node, row) in sentence_1.iter_mut().zip(source_rows) {
        for target in row.link_targets() {
            if target == 0 {
                continue;
            }
            let target_index = target - 1;
            if target_index < sentence_2.len() {
                node.id_target.push(sentence_2[target_index].id);
            }
        }
    }

    SentenceAlignment {
        sentence_1,
        sentence_2,
    }
}

fn collect_nodes(rows: &[AnnotationRow], span: &SentenceSpan) -> Vec<AlignmentNode> {
    span_rows(rows, span)
        .iter()
        .enumerate()
        .map(|(local_index, row)| AlignmentNode {
            id: local_index,
            word: row.word.clone(),
            pos: row.pos.clone(),
            id_target: Vec::new(),
        })
        .collect()
}

fn span_rows<'c>(rows: &'c [AnnotationRow], span: &SentenceSpan) -> &'c [AnnotationRow] {
    if rows.is_empty() || span.start >= rows.len() {
        return &[];
    }
    let end = span.end.min(rows.len() - 1);
    &rows[span.start..=end]
}
