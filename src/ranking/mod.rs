pub mod matcher;
pub mod normalizer;

use unicode_normalization::char::is_combining_mark;

pub use matcher::{match_str, Matcher};
pub use normalizer::{fold, normalize, FoldMode};

/// Chars that separate words
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Whether `c` begins a word given the char before it.
///
/// Word starts follow a separator, open the string, or are the upper-case
/// hump of camelCase.
#[inline]
pub(crate) fn is_word_start(prev: Option<char>, c: char) -> bool {
    if is_separator(c) {
        return false;
    }
    match prev {
        None => true,
        Some(p) if is_separator(p) => true,
        Some(p) => p.is_lowercase() && c.is_uppercase(),
    }
}

/// Text folded and lowercased for matching, with the bookkeeping needed to
/// report positions in the original string.
#[derive(Debug, Default)]
pub(crate) struct PreparedText {
    /// Folded, lowercased chars
    pub chars: Vec<char>,
    /// Index of the original char each entry came from
    pub origin: Vec<usize>,
    /// Whether each entry starts a word
    pub word_start: Vec<bool>,
    scratch: Vec<char>,
}

impl PreparedText {
    /// Replace the contents with `text`, reusing the buffers.
    pub fn load(&mut self, text: &str, mode: FoldMode) {
        self.chars.clear();
        self.origin.clear();
        self.word_start.clear();

        let mut prev = None;
        for (idx, c) in text.chars().enumerate() {
            let boundary = is_word_start(prev, c);

            self.scratch.clear();
            match mode {
                FoldMode::Fold => normalizer::fold_char_into(c, &mut self.scratch),
                FoldMode::Exact => self.scratch.push(c),
            }

            let mut first = true;
            for &folded in &self.scratch {
                for lower in folded.to_lowercase() {
                    self.chars.push(lower);
                    self.origin.push(idx);
                    self.word_start.push(boundary && first);
                    first = false;
                }
            }

            // A stray accent must not split the word it decorates
            if !is_combining_mark(c) {
                prev = Some(c);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }
}
