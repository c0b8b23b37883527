//! Alignment, reconstruction, and export over a full sentence pair.

use bitext::{export, Corpus, ParallelCorpus, Side};

const VIET: &str = "\
S0001_01\tTôi\ttôi\t1\ttooi\tPRON\t-\t-\t-\t-
S0001_02\thọc\thọc\t2\thoc5\tVERB\t-\t-\t-\t-
S0002_01\tCô_giáo\tcô_giáo\t2\tcoo_giao1\tNOUN\t-\t-\tPER\t-
S0002_02\tdạy\tdạy\t3\tday5\tVERB\t-\t-\t-\t-
S0002_03\ttiếng_Việt\ttiếng_việt\t4\ttieeng1_vieet5\tNOUN\t-\t-\t-\t-
S0002_04\t.\t.\t-\t.\tPUNCT\t-\t-\t-\t-";

const ENG: &str = "\
S0001_01\tI\tI\t1\ti\tPRP\t-\t-\t-\t-
S0001_02\tstudy\tstudy\t2\tstudy\tVBP\t-\t-\t-\t-
S0002_01\tThe\tthe\t-\tthe\tDT\t-\t-\t-\t-
S0002_02\tteacher\tteacher\t1\tteacher\tNN\t-\t-\tPER\t-
S0002_03\tteaches\tteach\t2\tteach\tVBZ\t-\t-\t-\t-
S0002_04\tVietnamese\tVietnamese\t3\tvietnamese\tNNP\t-\t-\t-\t-
S0002_05\t.\t.\t-\t.\tPUNCT\t-\t-\t-\t-";

fn pair() -> ParallelCorpus {
    ParallelCorpus::new(Corpus::from_text(VIET), Corpus::from_text(ENG))
}

// =============================================================================
// Alignment
// =============================================================================

#[test]
fn test_align_identity_links() {
    let alignment = pair().align("0001");
    assert_eq!(alignment.sentence_1.len(), 2);
    assert_eq!(alignment.sentence_2.len(), 2);
    assert_eq!(alignment.sentence_1[0].id_target, vec![0]);
    assert_eq!(alignment.sentence_1[1].id_target, vec![1]);
}

#[test]
fn test_align_offset_links() {
    let alignment = pair().align("0002");
    // "Cô_giáo" → "teacher" (position 2 → local index 1), and so on.
    assert_eq!(alignment.sentence_1[0].id_target, vec![1]);
    assert_eq!(alignment.sentence_1[1].id_target, vec![2]);
    assert_eq!(alignment.sentence_1[2].id_target, vec![3]);
    // The unlinked period has no edges.
    assert!(alignment.sentence_1[3].id_target.is_empty());
}

#[test]
fn test_align_targets_stay_in_bounds() {
    for sentence_id in ["0001", "0002"] {
        let alignment = pair().align(sentence_id);
        let len_2 = alignment.sentence_2.len();
        for node in &alignment.sentence_1 {
            for &target in &node.id_target {
                assert!(target < len_2);
            }
        }
    }
}

#[test]
fn test_align_unknown_sentence_is_empty() {
    let alignment = pair().align("0404");
    assert!(alignment.sentence_1.is_empty());
    assert!(alignment.sentence_2.is_empty());
}

#[test]
fn test_alignment_serializes_for_visualization() {
    let alignment = pair().align("0001");
    let json = serde_json::to_value(&alignment).unwrap();
    assert_eq!(json["sentence_1"][0]["id_target"][0], 0);
    assert_eq!(json["sentence_2"][1]["word"], "study");
}

// =============================================================================
// Sentence pairs
// =============================================================================

#[test]
fn test_sentence_pair_centers_match_and_aligned_window() {
    let pair = pair();
    let matched = pair.first().rows()[3].clone(); // "dạy", links "3"
    let (own, other) = pair.sentence_pair(&matched, Side::First);

    assert_eq!(own.left, "Cô giáo");
    assert_eq!(own.center, "dạy");
    assert_eq!(own.right, "tiếng Việt.");

    assert_eq!(other.left, "The teacher");
    assert_eq!(other.center, "teaches");
    assert_eq!(other.right, "Vietnamese.");
}

#[test]
fn test_sentence_pair_without_links_shows_other_unsegmented() {
    let pair = pair();
    let matched = pair.first().rows()[5].clone(); // ".", no links
    let (own, other) = pair.sentence_pair(&matched, Side::First);

    assert_eq!(own.center, ".");
    assert_eq!(other.left, "");
    assert_eq!(other.center, "");
    assert_eq!(other.right, "The teacher teaches Vietnamese.");
}

#[test]
fn test_sentence_pair_from_second_side() {
    let pair = pair();
    let matched = pair.second().rows()[1].clone(); // "study", links "2"
    let (own, other) = pair.sentence_pair(&matched, Side::Second);

    assert_eq!(own.left, "I");
    assert_eq!(own.center, "study");
    assert_eq!(other.center, "học");
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_matched_pairs() {
    let pair = pair();
    let matches = pair.first().search_word("học", false);
    let pairs: Vec<_> = matches
        .values()
        .map(|row| pair.sentence_pair(row, Side::First))
        .collect();

    let rendered = export::render_pairs(&pairs);
    assert_eq!(rendered, "* Tôi học\n+ I study\n");
}
