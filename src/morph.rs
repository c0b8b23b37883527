//! Vietnamese diacritic folding.
//!
//! Morphological search compares diacritic-folded, tone-aware keys rather
//! than raw surface forms, so that e.g. `việt`, `Việt`, and `viết` fold to
//! distinct but ASCII-only keys. Folding maps each Vietnamese vowel (and
//! `đ`) to a telex-like base (`ă`→`aw`, `â`→`aa`, `ê`→`ee`, `ô`→`oo`,
//! `ơ`→`ow`, `ư`→`uw`, `đ`→`dd`) and turns the tone mark into a digit
//! 1-5 (sắc, huyền, hỏi, ngã, nặng) appended after the syllable. Marked
//! capitals fold to the lower-case base; everything else passes through
//! unchanged.
//!
//! Folded keys are comparison keys only, never displayed.
//!
//! ```rust
//! use bitext::morph::fold;
//!
//! assert_eq!(fold("việt"), "vieet5");
//! assert_eq!(fold("tiếng_Việt"), "tieeng1_Vieet5");
//! assert_eq!(fold("hello"), "hello");
//! ```

/// Fold a word into its ASCII morph key.
///
/// The word is split on `_` (the multi-syllable separator), each syllable
/// is folded independently with its tone digits appended after its base
/// characters, and the results are rejoined with `_`. Empty or
/// whitespace-only input returns the empty string. Folding is idempotent:
/// an already-ASCII key folds to itself.
#[must_use]
pub fn fold(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    text.split('_')
        .map(fold_syllable)
        .collect::<Vec<_>>()
        .join("_")
}

fn fold_syllable(syllable: &str) -> String {
    let mut base = String::with_capacity(syllable.len());
    let mut tones = String::new();
    for c in syllable.chars() {
        match fold_char(c) {
            Some((letters, tone)) => {
                base.push_str(letters);
                if let Some(digit) = tone {
                    tones.push(digit);
                }
            }
            None => base.push(c),
        }
    }
    base.push_str(&tones);
    base
}

/// The telex-like base and tone digit for one character, or `None` for
/// characters that pass through unchanged.
fn fold_char(c: char) -> Option<(&'static str, Option<char>)> {
    let folded = match c {
        'á' | 'Á' => ("a", Some('1')),
        'à' | 'À' => ("a", Some('2')),
        'ả' | 'Ả' => ("a", Some('3')),
        'ã' | 'Ã' => ("a", Some('4')),
        'ạ' | 'Ạ' => ("a", Some('5')),

        'ă' | 'Ă' => ("aw", None),
        'ắ' | 'Ắ' => ("aw", Some('1')),
        'ằ' | 'Ằ' => ("aw", Some('2')),
        'ẳ' | 'Ẳ' => ("aw", Some('3')),
        'ẵ' | 'Ẵ' => ("aw", Some('4')),
        'ặ' | 'Ặ' => ("aw", Some('5')),

        'â' | 'Â' => ("aa", None),
        'ấ' | 'Ấ' => ("aa", Some('1')),
        'ầ' | 'Ầ' => ("aa", Some('2')),
        'ẩ' | 'Ẩ' => ("aa", Some('3')),
        'ẫ' | 'Ẫ' => ("aa", Some('4')),
        'ậ' | 'Ậ' => ("aa", Some('5')),

        'đ' | 'Đ' => ("dd", None),

        'é' | 'É' => ("e", Some('1')),
        'è' | 'È' => ("e", Some('2')),
        'ẻ' | 'Ẻ' => ("e", Some('3')),
        'ẽ' | 'Ẽ' => ("e", Some('4')),
        'ẹ' | 'Ẹ' => ("e", Some('5')),

        'ê' | 'Ê' => ("ee", None),
        'ế' | 'Ế' => ("ee", Some('1')),
        'ề' | 'Ề' => ("ee", Some('2')),
        'ể' | 'Ể' => ("ee", Some('3')),
        'ễ' | 'Ễ' => ("ee", Some('4')),
        'ệ' | 'Ệ' => ("ee", Some('5')),

        'í' | 'Í' => ("i", Some('1')),
        'ì' | 'Ì' => ("i", Some('2')),
        'ỉ' | 'Ỉ' => ("i", Some('3')),
        'ĩ' | 'Ĩ' => ("i", Some('4')),
        'ị' | 'Ị' => ("i", Some('5')),

        'ó' | 'Ó' => ("o", Some('1')),
        'ò' | 'Ò' => ("o", Some('2')),
        'ỏ' | 'Ỏ' => ("o", Some('3')),
        'õ' | 'Õ' => ("o", Some('4')),
        'ọ' | 'Ọ' => ("o", Some('5')),

        'ô' | 'Ô' => ("oo", None),
        'ố' | 'Ố' => ("oo", Some('1')),
        'ồ' | 'Ồ' => ("oo", Some('2')),
        'ổ' | 'Ổ' => ("oo", Some('3')),
        'ỗ' | 'Ỗ' => ("oo", Some('4')),
        'ộ' | 'Ộ' => ("oo", Some('5')),

        'ơ' | 'Ơ' => ("ow", None),
        'ớ' | 'Ớ' => ("ow", Some('1')),
        'ờ' | 'Ờ' => ("ow", Some('2')),
        'ở' | 'Ở' => ("ow", Some('3')),
        'ỡ' | 'Ỡ' => ("ow", Some('4')),
        'ợ' | 'Ợ' => ("ow", Some('5')),

        'ú' | 'Ú' => ("u", Some('1')),
        'ù' | 'Ù' => ("u", Some('2')),
        'ủ' | 'Ủ' => ("u", Some('3')),
        'ũ' | 'Ũ' => ("u", Some('4')),
        'ụ' | 'Ụ' => ("u", Some('5')),

        'ư' | 'Ư' => ("uw", None),
        'ứ' | 'Ứ' => ("uw", Some('1')),
        'ừ' | 'Ừ' => ("uw", Some('2')),
        'ử' | 'Ử' => ("uw", Some('3')),
        'ữ' | 'Ữ' => ("uw", Some('4')),
        'ự' | 'Ự' => ("uw", Some('5')),

        'ý' | 'Ý' => ("y", Some('1')),
        'ỳ' | 'Ỳ' => ("y", Some('2')),
        'ỷ' | 'Ỷ' => ("y", Some('3')),
        'ỹ' | 'Ỹ' => ("y", Some('4')),
        'ỵ' | 'Ỵ' => ("y", Some('5')),

        _ => return None,
    };
    Some(folded)
}
