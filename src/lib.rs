//! # bitext
//!
//! Search and word-level alignment for word-aligned bilingual corpora.
//!
//! `bitext` operates on flat, ordered sequences of per-token annotation
//! rows (word, lemma, POS/NER/semantic tags, and a `links` field carrying
//! word-to-word alignment into the paired language) and provides:
//!
//! - **Sentence indexing**: contiguous per-sentence spans over a row stream
//! - **Search**: exact, morphological (diacritic-folded), phrase, and tag
//!   matchers, deduplicated per sentence
//! - **Reconstruction**: left / matched-center / right renderings of the
//!   matched sentence and of its paired-language counterpart
//! - **Alignment**: explicit bipartite word-alignment graphs for arc
//!   drawing
//! - **Statistics & export**: word-frequency tables and plain-text
//!   sentence-pair export
//!
//! ## Quick Start
//!
//! ```rust
//! use bitext::{Corpus, ParallelCorpus};
//!
//! let viet = Corpus::from_text(
//!     "S0001_01\tTôi\ttôi\t1\ttooi\tP\t-\t-\t-\t-\n\
//!      S0001_02\thọc\thọc\t2\thoc5\tV\t-\t-\t-\t-",
//! );
//! let eng = Corpus::from_text(
//!     "S0001_01\tI\tI\t-\ti\tPRP\t-\t-\t-\t-\n\
//!      S0001_02\tstudy\tstudy\t-\tstudy\tVBP\t-\t-\t-\t-",
//! );
//!
//! let matches = viet.search_word("học", false);
//! assert_eq!(matches.len(), 1);
//!
//! let pair = ParallelCorpus::new(viet, eng);
//! let alignment = pair.align("0001");
//! assert_eq!(alignment.sentence_1[0].id_target, vec![0]);
//! assert_eq!(alignment.sentence_1[1].id_target, vec![1]);
//! ```
//!
//! ## Failure semantics
//!
//! Queries never fail: unmatched searches return empty maps, missing
//! sentence ids reconstruct to blank sentences, and unresolvable
//! alignment links contribute no edges. Malformed corpus lines become
//! blank placeholder rows that keep their sequence position and are
//! reported through [`Corpus::warnings`]. The only fallible calls are the
//! reader- and path-based loaders.
//!
//! ## Corpus snapshots
//!
//! A [`Corpus`] owns one language's rows plus the derived sentence index;
//! the index is never patched in place, so reloading the corpus means
//! building a new value. Queries borrow the snapshot, and sharing a corpus
//! across threads only requires `&Corpus`.

mod error;
mod row;

pub mod align;
pub mod corpus;
pub mod export;
pub mod morph;
pub mod search;
pub mod sentence;
pub mod stats;

pub use align::{align_sentence, AlignmentNode, SentenceAlignment};
pub use corpus::{build_index, Corpus, ParallelCorpus, ParseWarning, SentenceSpan, Side};
pub use error::{Error, Result};
pub use morph::fold;
pub use row::{sentence_id_of, trailing_position, AnnotationRow, MIN_FIELDS, NO_VALUE, POSITION_WIDTH};
pub use search::{
    phrase_candidates, search_phrase, search_tag, search_word, search_word_and_tag, tag_values,
    TagFilter, TagKind,
};
pub use sentence::{reconstruct, reconstruct_other, Sentence};
pub use stats::{word_stats, WordStat};
