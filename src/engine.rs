use std::cmp::Ordering;
use std::time::Instant;

use crate::config::SortOptions;
use crate::core::{Ranked, Score, Sortable};
use crate::error::Result;
use crate::ranking::Matcher;

/// Fuzzy sort orchestrator
///
/// Scores every element of a [`Sortable`] once per call and reorders it in
/// place: matches first, best score first, ties broken by the collection's
/// own `less`. Nothing is cached between calls, so elements may change
/// between sorts.
///
/// A `Sorter` holds only its options and can be shared across threads.
/// Sorting the same collection concurrently is the caller's problem.
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    options: SortOptions,
}

impl Sorter {
    /// Create a sorter with validated options
    pub fn new(options: SortOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options in use
    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Prepare a reusable matcher for `query`
    pub fn matcher(&self, query: &str) -> Matcher<'_> {
        Matcher::new(query, &self.options)
    }

    /// Sort `data` in place by relevance to `query`.
    ///
    /// Returns how many elements matched. Those occupy positions
    /// `0..matched`, best first. The remaining positions hold the
    /// non-matching elements in their previous relative order.
    ///
    /// Elements with equal score are ordered by `data.less`; elements equal
    /// under both keep their previous relative order.
    pub fn sort<S: Sortable + ?Sized>(&self, data: &mut S, query: &str) -> usize {
        let start = Instant::now();
        let len = data.len();

        let mut scored = self.score_all(&*data, query);
        order_by_score(&*data, &mut scored);
        let matched = scored.len();

        let mut is_match = vec![false; len];
        let mut order: Vec<usize> = Vec::with_capacity(len);
        for &(index, _) in &scored {
            is_match[index] = true;
            order.push(index);
        }
        drop(scored);
        order.extend((0..len).filter(|&i| !is_match[i]));

        apply_order(data, &mut order);

        tracing::debug!(
            "Sorted {} candidates for '{}': {} matched in {:.3}ms",
            len,
            query,
            matched,
            start.elapsed().as_secs_f64() * 1000.0
        );

        matched
    }

    /// Rank `data` without reordering it.
    ///
    /// The entries come in the order [`Sorter::sort`] would place the
    /// matched elements, each with its score and highlight positions.
    pub fn rank<S: Sortable + ?Sized>(&self, data: &S, query: &str) -> Vec<Ranked> {
        let mut matcher = self.matcher(query);
        let mut ranked: Vec<Ranked> = (0..data.len())
            .filter_map(|index| {
                let result = matcher.score(&data.keyword(index));
                result.matched.then(|| Ranked {
                    index,
                    score: result.score,
                    positions: result.positions,
                })
            })
            .collect();

        ranked.sort_by(|a, b| compare(data, (a.index, a.score), (b.index, b.score)));

        tracing::debug!(
            "Ranked {} candidates for '{}': {} matched",
            data.len(),
            query,
            ranked.len()
        );

        ranked
    }

    /// Indices and scores of the matching elements, in index order
    fn score_all<S: Sortable + ?Sized>(&self, data: &S, query: &str) -> Vec<(usize, Score)> {
        let mut matcher = self.matcher(query);
        (0..data.len())
            .filter_map(|index| {
                matcher
                    .score_only(&data.keyword(index))
                    .map(|score| (index, score))
            })
            .collect()
    }
}

/// Score descending, then the collection's tie-break
fn compare<S: Sortable + ?Sized>(data: &S, a: (usize, Score), b: (usize, Score)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| {
        if data.less(a.0, b.0) {
            Ordering::Less
        } else if data.less(b.0, a.0) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// Stable, so equal entries keep index order
fn order_by_score<S: Sortable + ?Sized>(data: &S, scored: &mut [(usize, Score)]) {
    scored.sort_by(|&a, &b| compare(data, a, b));
}

/// Rearrange `data` so position `dest` receives the element that was at
/// `order[dest]`, using only `swap`.
///
/// Walks each permutation cycle once; `order` is consumed as scratch.
fn apply_order<S: Sortable + ?Sized>(data: &mut S, order: &mut [usize]) {
    for start in 0..order.len() {
        let mut dest = start;
        let mut src = order[dest];
        while src != start {
            data.swap(dest, src);
            order[dest] = dest;
            dest = src;
            src = order[dest];
        }
        order[dest] = dest;
    }
}

/// Sort `data` in place with default options. Returns the match count.
///
/// ```
/// use fuzzy_sort::sort;
///
/// let mut cities = vec!["annyci", "banal", "nyc subway", "new york city"];
/// let matched = sort(&mut cities, "nyc");
/// assert_eq!(matched, 3);
/// assert_eq!(&cities[..matched], ["new york city", "nyc subway", "annyci"]);
/// ```
pub fn sort<S: Sortable + ?Sized>(data: &mut S, query: &str) -> usize {
    Sorter::default().sort(data, query)
}

/// Sort `data` in place with `options`. Returns the match count.
pub fn sort_with<S: Sortable + ?Sized>(data: &mut S, query: &str, options: &SortOptions) -> usize {
    Sorter {
        options: options.clone(),
    }
    .sort(data, query)
}

/// Rank `data` with default options, leaving it untouched.
///
/// ```
/// use fuzzy_sort::rank;
///
/// let names = ["banal", "alabama"];
/// let ranked = rank(&names[..], "al");
/// assert_eq!(ranked[0].index, 1);
/// assert_eq!(ranked[0].positions, vec![0, 1]);
/// ```
pub fn rank<S: Sortable + ?Sized>(data: &S, query: &str) -> Vec<Ranked> {
    Sorter::default().rank(data, query)
}

/// Rank `data` with `options`, leaving it untouched.
pub fn rank_with<S: Sortable + ?Sized>(data: &S, query: &str, options: &SortOptions) -> Vec<Ranked> {
    Sorter {
        options: options.clone(),
    }
    .rank(data, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts swaps so tests can see the sorter only moves by swapping
    struct Counted {
        items: Vec<String>,
        swaps: usize,
    }

    impl Counted {
        fn new(items: &[&str]) -> Self {
            Self {
                items: items.iter().map(|s| s.to_string()).collect(),
                swaps: 0,
            }
        }
    }

    impl Sortable for Counted {
        fn len(&self) -> usize {
            self.items.len()
        }

        fn keyword(&self, index: usize) -> std::borrow::Cow<'_, str> {
            std::borrow::Cow::Borrowed(&self.items[index])
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.swaps += 1;
            self.items.swap(i, j);
        }

        fn less(&self, i: usize, j: usize) -> bool {
            self.items[i] < self.items[j]
        }
    }

    #[test]
    fn test_sorter_rejects_invalid_options() {
        let options = SortOptions {
            gap_penalty: -1,
            ..SortOptions::default()
        };
        assert!(Sorter::new(options).is_err());
    }

    #[test]
    fn test_sort_partitions_matches_first() {
        let mut data = vec!["zzz", "abc", "qqq", "a-b-c", "xyz"];
        let matched = sort(&mut data, "abc");

        assert_eq!(matched, 2);
        assert_eq!(&data[..2], ["abc", "a-b-c"]);
        // Unmatched tail keeps its previous order
        assert_eq!(&data[2..], ["zzz", "qqq", "xyz"]);
    }

    #[test]
    fn test_sort_no_matches() {
        let mut data = vec!["one", "two"];
        assert_eq!(sort(&mut data, "zz"), 0);
        assert_eq!(data, ["one", "two"]);
    }

    #[test]
    fn test_sort_empty_collection() {
        let mut data: Vec<String> = Vec::new();
        assert_eq!(sort(&mut data, "abc"), 0);
        assert_eq!(sort(&mut data, ""), 0);
    }

    #[test]
    fn test_empty_query_orders_by_tie_break() {
        let mut data = vec!["pear", "apple", "fig"];
        assert_eq!(sort(&mut data, ""), 3);
        assert_eq!(data, ["apple", "fig", "pear"]);
    }

    #[test]
    fn test_equal_scores_use_tie_break() {
        let mut data = vec!["xb", "xa"];
        let matched = sort(&mut data, "x");
        assert_eq!(matched, 2);
        assert_eq!(data, ["xa", "xb"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut data = vec!["tú xương", "túng", "nguyễn thị tú", "súng", "mụn", "tú mập ú"];
        sort(&mut data, "tu");
        let first = data.clone();
        sort(&mut data, "tu");
        assert_eq!(data, first);
    }

    #[test]
    fn test_sort_uses_linear_swaps() {
        let mut data = Counted::new(&["e", "d", "c", "b", "a"]);
        let matched = sort(&mut data, "");

        assert_eq!(matched, 5);
        assert_eq!(data.items, ["a", "b", "c", "d", "e"]);
        assert!(data.swaps < data.items.len());
    }

    #[test]
    fn test_rank_matches_sort_order() {
        let names = ["banal", "annyci", "new york city", "nyc subway", "ny cats"];
        let ranked = rank(&names[..], "nyc");

        let mut sorted = names.to_vec();
        let matched = sort(&mut sorted, "nyc");

        assert_eq!(ranked.len(), matched);
        let via_rank: Vec<&str> = ranked.iter().map(|r| names[r.index]).collect();
        assert_eq!(via_rank, &sorted[..matched]);
    }

    #[test]
    fn test_rank_leaves_data_untouched() {
        let names = vec!["b", "a"];
        let ranked = rank(&names, "");
        assert_eq!(names, ["b", "a"]);
        assert_eq!(ranked[0].index, 1);
    }

    #[test]
    fn test_sort_with_options_disables_folding() {
        let options = SortOptions {
            strip_diacritics: false,
            ..SortOptions::default()
        };
        let mut data = vec!["hồ chí minh", "ho chi minh city"];
        let matched = sort_with(&mut data, "ho chi minh", &options);
        assert_eq!(matched, 1);
        assert_eq!(data[0], "ho chi minh city");

        let ranked = rank_with(&data, "ho chi minh", &SortOptions::default());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 1);
    }

    #[test]
    fn test_apply_order_cycles() {
        let mut data = vec!["a", "b", "c", "d"];
        let mut order = vec![2, 0, 3, 1];
        apply_order(&mut data, &mut order);
        assert_eq!(data, ["c", "a", "d", "b"]);
    }
}
