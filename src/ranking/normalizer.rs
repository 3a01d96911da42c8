//! Diacritic folding.
//!
//! An ASCII query compares against keywords with their accents removed, so
//! typing `"ho chi minh"` finds `"hồ chí minh"`. A query that already
//! contains non-ASCII chars is compared exactly, so `"hồ"` does not find
//! `"ho"`.

use std::borrow::Cow;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// How keywords are compared against one query.
///
/// Decided once per sort call from the query alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldMode {
    /// Strip diacritics from query and keywords
    Fold,
    /// Compare chars as written
    Exact,
}

impl FoldMode {
    /// Picks the mode for `query`.
    ///
    /// ```
    /// use fuzzy_sort::FoldMode;
    ///
    /// assert_eq!(FoldMode::for_query("ho chi minh", true), FoldMode::Fold);
    /// assert_eq!(FoldMode::for_query("hồ", true), FoldMode::Exact);
    /// assert_eq!(FoldMode::for_query("ho", false), FoldMode::Exact);
    /// ```
    pub fn for_query(query: &str, strip_diacritics: bool) -> Self {
        if strip_diacritics && query.is_ascii() {
            FoldMode::Fold
        } else {
            FoldMode::Exact
        }
    }
}

/// Letters without a canonical decomposition
fn fold_special(c: char) -> Option<&'static str> {
    let folded = match c {
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'ħ' => "h",
        'Ħ' => "H",
        'ŧ' => "t",
        'Ŧ' => "T",
        'ı' => "i",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'þ' => "th",
        'Þ' => "TH",
        _ => return None,
    };
    Some(folded)
}

/// Appends the folded form of `c` to `out`.
///
/// A char may fold to several chars (`ß` -> `ss`) or to none (a lone
/// combining mark).
pub(crate) fn fold_char_into(c: char, out: &mut Vec<char>) {
    // Hangul syllables decompose into jamo, which are letters, not accents
    if c.is_ascii() || ('\u{AC00}'..='\u{D7A3}').contains(&c) {
        out.push(c);
        return;
    }
    if let Some(folded) = fold_special(c) {
        out.extend(folded.chars());
        return;
    }
    decompose_canonical(c, |d| {
        if !is_combining_mark(d) {
            out.push(d);
        }
    });
}

/// Strips diacritics from `text`.
///
/// Borrows when there is nothing to fold.
///
/// ```
/// use fuzzy_sort::fold;
///
/// assert_eq!(fold("hồ chí minh"), "ho chi minh");
/// assert_eq!(fold("Đà Nẵng"), "Da Nang");
/// assert!(matches!(fold("plain"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn fold(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut buf = Vec::with_capacity(4);
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        buf.clear();
        fold_char_into(c, &mut buf);
        out.extend(buf.iter());
    }

    if out == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(out)
    }
}

/// Applies `mode` to `text`.
pub fn normalize(text: &str, mode: FoldMode) -> Cow<'_, str> {
    match mode {
        FoldMode::Fold => fold(text),
        FoldMode::Exact => Cow::Borrowed(text),
    }
}
