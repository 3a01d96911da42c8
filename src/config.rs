//! Scoring weights for the fuzzy matcher.
//!
//! Every bonus and penalty the matcher applies lives here so callers can
//! tune ranking without touching the algorithm.
//!
//! A score has two parts. The tier (exact, initials, word start) counts in
//! units of [`TIER_STRIDE`]; the detail (start offset, gaps, adjacency,
//! keyword length) is clamped below half a stride, so no detail weight can
//! lift a match over a higher tier:
//!
//! exact > initials > word start > earlier start > contiguous

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FuzzySortError, Result};
use crate::core::Score;

/// Score value of one unit of tier weight
pub const TIER_STRIDE: Score = 1 << 48;

/// Bound on the detail part of a score, strictly inside half a stride
pub const MAX_DETAIL: Score = TIER_STRIDE / 2 - 1;

/// Largest allowed sum of the tier weights (keeps every score in `i64`)
pub const MAX_TIER_TOTAL: Score = Score::MAX / TIER_STRIDE - 1;

/// Largest allowed detail weight
pub const MAX_DETAIL_WEIGHT: Score = 1 << 16;

/// Tunable weights and switches used by [`Sorter`](crate::Sorter).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use fuzzy_sort::SortOptions;
///
/// let defaults = SortOptions::default();
/// assert!(defaults.strip_diacritics);
///
/// let mut config = HashMap::new();
/// config.insert("gap_penalty".to_string(), 4);
/// let options = SortOptions::from_config(&config);
/// assert_eq!(options.gap_penalty, 4);
/// assert_eq!(options.adjacency_bonus, defaults.adjacency_bonus);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Keyword equals the query (case-insensitive, after folding), in
    /// tier units
    pub exact_bonus: Score,

    /// Every query char lands on the first letter of a word, in tier units
    pub initials_bonus: Score,

    /// First matched char sits at a word start, in tier units
    pub word_start_bonus: Score,

    /// Each further matched char sitting at a word start
    pub boundary_bonus: Score,

    /// Each matched char directly following the previous matched char
    pub adjacency_bonus: Score,

    /// Per keyword char before the first match
    pub leading_penalty: Score,

    /// Per unmatched char inside the matched span
    pub gap_penalty: Score,

    /// Per unmatched char anywhere in the keyword
    pub unmatched_penalty: Score,

    /// Fold diacritics when the query is pure ASCII
    pub strip_diacritics: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            exact_bonus: 4,
            initials_bonus: 2,
            word_start_bonus: 1,
            boundary_bonus: 48,
            adjacency_bonus: 32,
            leading_penalty: 64,
            gap_penalty: 16,
            unmatched_penalty: 1,
            strip_diacritics: true,
        }
    }
}

impl SortOptions {
    /// Builds options from a flat key/value map, falling back to defaults.
    ///
    /// Keys are the field names. `strip_diacritics` is read as a flag
    /// (`0` disables it). Unknown keys are ignored.
    pub fn from_config(config: &HashMap<String, Score>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, default: Score| config.get(key).copied().unwrap_or(default);

        Self {
            exact_bonus: get("exact_bonus", defaults.exact_bonus),
            initials_bonus: get("initials_bonus", defaults.initials_bonus),
            word_start_bonus: get("word_start_bonus", defaults.word_start_bonus),
            boundary_bonus: get("boundary_bonus", defaults.boundary_bonus),
            adjacency_bonus: get("adjacency_bonus", defaults.adjacency_bonus),
            leading_penalty: get("leading_penalty", defaults.leading_penalty),
            gap_penalty: get("gap_penalty", defaults.gap_penalty),
            unmatched_penalty: get("unmatched_penalty", defaults.unmatched_penalty),
            strip_diacritics: config
                .get("strip_diacritics")
                .map(|v| *v != 0)
                .unwrap_or(defaults.strip_diacritics),
        }
    }

    /// Parses options from JSON and validates them. Missing fields take
    /// their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads and validates a JSON options file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json(&json).map_err(|e| {
            tracing::trace!("Rejected options file {}: {}", path.display(), e);
            e
        })?;
        Ok(options)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Checks that the weights keep the ranking preference order.
    ///
    /// Tier weights must be ordered `exact > initials + word_start` and
    /// `initials > word_start >= 1`. Detail weights must lie in
    /// `0..=MAX_DETAIL_WEIGHT`, with a positive `leading_penalty` so an
    /// earlier start always scores strictly higher.
    pub fn validate(&self) -> Result<()> {
        let details = [
            ("boundary_bonus", self.boundary_bonus),
            ("adjacency_bonus", self.adjacency_bonus),
            ("leading_penalty", self.leading_penalty),
            ("gap_penalty", self.gap_penalty),
            ("unmatched_penalty", self.unmatched_penalty),
        ];
        if let Some((field, _)) = details.iter().find(|(_, v)| *v < 0) {
            return Err(invalid(field, "must be non-negative"));
        }
        if let Some((field, _)) = details.iter().find(|(_, v)| *v > MAX_DETAIL_WEIGHT) {
            return Err(invalid(field, "exceeds MAX_DETAIL_WEIGHT"));
        }
        if self.leading_penalty == 0 {
            return Err(invalid("leading_penalty", "must be positive"));
        }

        if self.word_start_bonus < 1 {
            return Err(invalid("word_start_bonus", "must be at least 1"));
        }
        if self.initials_bonus <= self.word_start_bonus {
            return Err(invalid("initials_bonus", "must exceed word_start_bonus"));
        }
        if self.exact_bonus <= self.initials_bonus.saturating_add(self.word_start_bonus) {
            return Err(invalid(
                "exact_bonus",
                "must exceed initials_bonus + word_start_bonus",
            ));
        }
        let total = self
            .exact_bonus
            .saturating_add(self.initials_bonus)
            .saturating_add(self.word_start_bonus);
        if total > MAX_TIER_TOTAL {
            return Err(invalid("exact_bonus", "tier weights exceed MAX_TIER_TOTAL"));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> FuzzySortError {
    FuzzySortError::InvalidOptions {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl std::fmt::Display for SortOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "exact={}, initials={}, word_start={}, boundary={}, adjacency={}, \
             leading={}, gap={}, unmatched={}, strip_diacritics={}",
            self.exact_bonus,
            self.initials_bonus,
            self.word_start_bonus,
            self.boundary_bonus,
            self.adjacency_bonus,
            self.leading_penalty,
            self.gap_penalty,
            self.unmatched_penalty,
            self.strip_diacritics
        )
    }
}
