use crate::config::{SortOptions, MAX_DETAIL, TIER_STRIDE};
use crate::core::{MatchResult, Score};
use crate::ranking::normalizer::FoldMode;
use crate::ranking::PreparedText;

/// Scores keywords against one prepared query.
///
/// The query is folded and lowercased once; keyword buffers are reused
/// between calls, so scoring a whole collection allocates only for the
/// positions of each reported match.
///
/// A keyword matches when every query char appears in it, in order,
/// ignoring case. Among matches, higher scores go to (strongest first):
///
/// 1. the whole keyword equal to the query
/// 2. every query char on the first letter of a word (`"nyc"` in
///    `"new york city"`)
/// 3. a match that begins at the start of a word
/// 4. a match that begins earlier
/// 5. a tighter match, with fewer skipped chars inside it
///
/// Rules 1 to 3 are tiers: each is worth whole multiples of
/// [`TIER_STRIDE`], and everything below them is clamped to
/// `±MAX_DETAIL`, so no keyword length can reorder two tiers.
///
/// The empty query matches everything with a score of `0`.
pub struct Matcher<'o> {
    options: &'o SortOptions,
    mode: FoldMode,
    query: Vec<char>,
    keyword: PreparedText,
    best: Vec<usize>,
    candidate: Vec<usize>,
}

impl<'o> Matcher<'o> {
    /// Prepare `query` for scoring.
    pub fn new(query: &str, options: &'o SortOptions) -> Self {
        let mode = FoldMode::for_query(query, options.strip_diacritics);
        let mut prepared = PreparedText::default();
        prepared.load(query, mode);

        Self {
            options,
            mode,
            query: prepared.chars,
            keyword: PreparedText::default(),
            best: Vec::new(),
            candidate: Vec::new(),
        }
    }

    /// Fold mode chosen for this query
    pub fn mode(&self) -> FoldMode {
        self.mode
    }

    /// Whether the prepared query is empty
    pub fn is_empty_query(&self) -> bool {
        self.query.is_empty()
    }

    /// Score `keyword`, including the matched positions.
    pub fn score(&mut self, keyword: &str) -> MatchResult {
        match self.evaluate(keyword) {
            Some(score) => {
                let mut positions: Vec<usize> =
                    self.best.iter().map(|&p| self.keyword.origin[p]).collect();
                positions.dedup();
                MatchResult::new(score, positions)
            }
            None => MatchResult::no_match(),
        }
    }

    /// Score `keyword` without collecting positions.
    pub fn score_only(&mut self, keyword: &str) -> Option<Score> {
        self.evaluate(keyword)
    }

    /// Finds the best alignment of the query in `keyword`, leaving its
    /// positions (in prepared-char space) in `self.best`.
    fn evaluate(&mut self, keyword: &str) -> Option<Score> {
        self.best.clear();
        if self.query.is_empty() {
            return Some(0);
        }

        self.keyword.load(keyword, self.mode);
        if self.keyword.len() < self.query.len() {
            return None;
        }

        let mut best_score: Option<Score> = None;

        if self.align_initials() {
            best_score = Some(self.consider(best_score));
        }
        if self.align_compact() {
            best_score = Some(self.consider(best_score));
            if self.align_word_anchor() {
                best_score = Some(self.consider(best_score));
            }
        }

        let mut score = best_score?;
        if self.keyword.chars == self.query {
            score = score.saturating_add(self.options.exact_bonus.saturating_mul(TIER_STRIDE));
        }
        Some(score)
    }

    /// Scores `self.candidate` and keeps it when it beats `current`.
    fn consider(&mut self, current: Option<Score>) -> Score {
        let score = self.alignment_score(&self.candidate);
        match current {
            Some(best) if best >= score => best,
            _ => {
                std::mem::swap(&mut self.best, &mut self.candidate);
                score
            }
        }
    }

    /// Query chars placed on word starts only, leftmost first.
    fn align_initials(&mut self) -> bool {
        let kw = &self.keyword;
        self.candidate.clear();

        let mut from = 0;
        for &qc in &self.query {
            let found = (from..kw.len()).find(|&i| kw.word_start[i] && kw.chars[i] == qc);
            match found {
                Some(i) => {
                    self.candidate.push(i);
                    from = i + 1;
                }
                None => return false,
            }
        }
        true
    }

    /// Shortest window ending at the earliest possible end.
    ///
    /// A forward scan finds where the first complete match ends; a backward
    /// scan from there pulls the start as far right as it can go.
    fn align_compact(&mut self) -> bool {
        let kw = &self.keyword.chars;
        self.candidate.clear();

        let mut qi = 0;
        let mut end = None;
        for (i, &c) in kw.iter().enumerate() {
            if c == self.query[qi] {
                qi += 1;
                if qi == self.query.len() {
                    end = Some(i);
                    break;
                }
            }
        }
        let Some(end) = end else {
            return false;
        };

        let mut qi = self.query.len();
        let mut i = end + 1;
        while qi > 0 {
            i -= 1;
            if kw[i] == self.query[qi - 1] {
                qi -= 1;
                self.candidate.push(i);
            }
        }
        self.candidate.reverse();
        true
    }

    /// Leftmost alignment anchored on a word start holding the first query
    /// char.
    ///
    /// Only the first such anchor needs trying: if the rest of the query
    /// does not fit after it, it fits after no later anchor either.
    fn align_word_anchor(&mut self) -> bool {
        let kw = &self.keyword;
        self.candidate.clear();

        let first = self.query[0];
        let Some(anchor) = (0..kw.len()).find(|&i| kw.word_start[i] && kw.chars[i] == first)
        else {
            return false;
        };

        self.candidate.push(anchor);
        let mut from = anchor + 1;
        for &qc in &self.query[1..] {
            match (from..kw.len()).find(|&i| kw.chars[i] == qc) {
                Some(i) => {
                    self.candidate.push(i);
                    from = i + 1;
                }
                None => return false,
            }
        }
        true
    }

    fn alignment_score(&self, positions: &[usize]) -> Score {
        let opts = self.options;
        let kw = &self.keyword;

        let mut tier: Score = 0;
        if positions.iter().all(|&p| kw.word_start[p]) {
            tier += opts.initials_bonus;
        }
        if kw.word_start[positions[0]] {
            tier += opts.word_start_bonus;
        }

        tier.saturating_mul(TIER_STRIDE)
            .saturating_add(self.detail_score(positions))
    }

    /// Start offset, gaps, adjacency and keyword length, clamped to
    /// `±MAX_DETAIL`. Linear in the start offset, so within a tier an
    /// earlier start always wins.
    fn detail_score(&self, positions: &[usize]) -> Score {
        let opts = self.options;
        let kw = &self.keyword;
        let (first, last) = (positions[0], positions[positions.len() - 1]);
        let matched = positions.len() as Score;

        let mut bonus: Score = 0;
        for pair in positions.windows(2) {
            if kw.word_start[pair[1]] {
                bonus = bonus.saturating_add(opts.boundary_bonus);
            }
            if pair[1] == pair[0] + 1 {
                bonus = bonus.saturating_add(opts.adjacency_bonus);
            }
        }

        let gaps = (last - first + 1) as Score - matched;
        let unmatched = kw.len() as Score - matched;
        let penalty = (first as Score)
            .saturating_mul(opts.leading_penalty)
            .saturating_add(gaps.saturating_mul(opts.gap_penalty))
            .saturating_add(unmatched.saturating_mul(opts.unmatched_penalty));

        bonus
            .saturating_sub(penalty)
            .clamp(-MAX_DETAIL, MAX_DETAIL)
    }
}

/// Scores `keyword` against `query` with default options.
///
/// ```
/// use fuzzy_sort::match_str;
///
/// let initials = match_str("nyc", "new york city");
/// let scattered = match_str("nyc", "annyci");
/// assert!(initials.matched && scattered.matched);
/// assert!(initials.score > scattered.score);
///
/// assert!(!match_str("nyc", "banal").matched);
/// ```
pub fn match_str(query: &str, keyword: &str) -> MatchResult {
    let options = SortOptions::default();
    Matcher::new(query, &options).score(keyword)
}
