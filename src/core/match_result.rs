use serde::{Deserialize, Serialize};

/// Match score. Integer so ordering is exact and reproducible.
pub type Score = i64;

/// Outcome of matching one query against one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether every query char was found in order
    pub matched: bool,

    /// Relevance score (only meaningful when `matched`)
    pub score: Score,

    /// Char indices in the original keyword that matched, ascending
    #[serde(default)]
    pub positions: Vec<usize>,
}

impl MatchResult {
    /// Result for a keyword the query does not match
    pub fn no_match() -> Self {
        Self {
            matched: false,
            score: 0,
            positions: Vec::new(),
        }
    }

    /// Successful match with the given score and positions
    pub fn new(score: Score, positions: Vec<usize>) -> Self {
        Self {
            matched: true,
            score,
            positions,
        }
    }

    /// Wraps every matched char of `keyword` in `open`/`close`.
    ///
    /// Runs of adjacent matched chars share one pair of markers.
    ///
    /// ```
    /// use fuzzy_sort::match_str;
    ///
    /// let result = match_str("nyc", "new york city");
    /// assert_eq!(result.highlight("new york city", "[", "]"), "[n]ew [y]ork [c]ity");
    /// ```
    pub fn highlight(&self, keyword: &str, open: &str, close: &str) -> String {
        highlight(&self.positions, keyword, open, close)
    }
}

/// One entry of a non-mutating ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranked {
    /// Position of the candidate in the caller's collection
    pub index: usize,

    /// Match score
    pub score: Score,

    /// Matched char indices in the candidate's keyword
    #[serde(default)]
    pub positions: Vec<usize>,
}

impl Ranked {
    /// Wraps the matched chars of `keyword`, see [`MatchResult::highlight`]
    pub fn highlight(&self, keyword: &str, open: &str, close: &str) -> String {
        highlight(&self.positions, keyword, open, close)
    }
}

fn highlight(positions: &[usize], keyword: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(keyword.len() + positions.len() * 2);
    let mut wanted = positions.iter().copied().peekable();
    let mut inside = false;

    for (idx, c) in keyword.chars().enumerate() {
        let hit = wanted.peek() == Some(&idx);
        if hit {
            wanted.next();
        }
        if hit && !inside {
            out.push_str(open);
        } else if !hit && inside {
            out.push_str(close);
        }
        inside = hit;
        out.push(c);
    }
    if inside {
        out.push_str(close);
    }

    out
}
