//! Plain-text export of reconstructed sentence pairs.

use std::io::{self, Write};

use crate::sentence::Sentence;

/// Render sentence pairs in the two-line export format.
///
/// Each pair renders as a `* ` line for the first sentence and a `+ `
/// line for the second; pairs are separated by a blank line.
#[must_use]
pub fn render_pairs(pairs: &[(Sentence, Sentence)]) -> String {
    let blocks: Vec<String> = pairs
        .iter()
        .map(|(first, second)| format!("* {}\n+ {}", first.text(), second.text()))
        .collect();
    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Write sentence pairs to `writer` in the two-line export format.
pub fn write_pairs<W: Write>(mut writer: W, pairs: &[(Sentence, Sentence)]) -> io::Result<()> {
    writer.write_all(render_pairs(pairs).as_bytes())
}
