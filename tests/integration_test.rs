use std::borrow::Cow;

use fuzzy_sort::{match_str, rank, sort, KeyedSlice, SortOptions, Sortable, Sorter};

/// A very simple data model
#[derive(Debug, Clone, PartialEq)]
struct Player {
    firstname: String,
    lastname: String,
}

impl Player {
    fn new(firstname: &str, lastname: &str) -> Self {
        Self {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        }
    }

    fn name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname).trim().to_string()
    }
}

/// Collection of players, fuzzy-sortable by full name
struct Team(Vec<Player>);

impl Sortable for Team {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn keyword(&self, index: usize) -> Cow<'_, str> {
        Cow::Owned(self.0[index].name())
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].name() < self.0[j].name()
    }
}

fn vietnamese_team() -> Team {
    Team(
        [
            "nguyễn thị tú",
            "hồ_chí_minh",
            "nguyễn thanh tú",
            "tú mập ú",
            "tú xương",
            "túng",
            "nghèo túng",
            "súng",
            "mùng",
            "mụn",
            "cụng",
            "hàng tuấn thiên",
            "lê thị trang",
            "trương văn lanh",
            "đoàn minh vương",
            "hà nội",
            "đà nẵng",
            "hải thượng lãn ông",
            "đồng nai",
            "hò xuân hương",
            "hồ tùng mậu",
        ]
        .iter()
        .map(|name| Player::new(name, ""))
        .collect(),
    )
}

#[test]
fn test_end_to_end_scenario() {
    let mut places = vec![
        "new york city",
        "nyc subway",
        "annyci",
        "banal",
        "hồ chí minh",
        "ho chi minh city",
    ];

    let matched = sort(&mut places, "nyc");

    assert_eq!(matched, 3);
    assert_eq!(&places[..matched], ["new york city", "nyc subway", "annyci"]);

    let mut tail = places[matched..].to_vec();
    tail.sort();
    assert_eq!(tail, ["banal", "ho chi minh city", "hồ chí minh"]);
}

#[test]
fn test_team_sort_by_initials() {
    let mut team = vietnamese_team();

    // ASCII query folds the accents away; initials of "trương văn lanh"
    let matched = sort(&mut team, "tvl");
    assert!(matched >= 1);
    assert_eq!(team.0[0].name(), "trương văn lanh");
}

#[test]
fn test_team_diacritics_ignored_for_ascii_query() {
    let mut team = vietnamese_team();

    let matched = sort(&mut team, "ho_chi_minh");
    assert_eq!(matched, 1);
    assert_eq!(team.0[0].name(), "hồ_chí_minh");

    // Underscores separate words, so this is an initials match
    let matched = sort(&mut team, "hcm");
    assert!(matched >= 1);
    assert_eq!(team.0[0].name(), "hồ_chí_minh");
}

#[test]
fn test_team_diacritics_respected_for_accented_query() {
    let mut team = vietnamese_team();

    let matched = sort(&mut team, "hồ");
    let names: Vec<String> = team.0[..matched].iter().map(Player::name).collect();

    assert!(names.contains(&"hồ tùng mậu".to_string()));
    assert!(names.contains(&"hồ_chí_minh".to_string()));
    // "hò xuân hương" has a different accent on the o
    assert!(!names.contains(&"hò xuân hương".to_string()));
}

#[test]
fn test_team_matched_prefix_is_ordered() {
    let mut team = vietnamese_team();
    let sorter = Sorter::default();

    let matched = sorter.sort(&mut team, "tu");
    assert!(matched > 0);

    let mut matcher = sorter.matcher("tu");
    let scores: Vec<i64> = (0..matched)
        .map(|i| matcher.score_only(&team.keyword(i)).unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    // Nothing past the prefix matches
    for i in matched..team.len() {
        assert!(matcher.score_only(&team.keyword(i)).is_none());
    }
}

#[test]
fn test_match_iff_subsequence() {
    let keywords = ["abcdef", "fedcba", "a b c", "ABC", "xyz", ""];
    let query = "abc";

    for keyword in keywords {
        let lower = keyword.to_lowercase();
        let mut chars = lower.chars();
        let is_subsequence = query.chars().all(|q| chars.any(|c| c == q));
        assert_eq!(match_str(query, keyword).matched, is_subsequence, "{}", keyword);
    }
}

#[test]
fn test_empty_query_keeps_tie_break_order() {
    let mut names = vec!["delta", "alpha", "charlie", "bravo"];
    let matched = sort(&mut names, "");

    assert_eq!(matched, 4);
    assert_eq!(names, ["alpha", "bravo", "charlie", "delta"]);

    let ranked = rank(&names, "");
    assert!(ranked.iter().all(|r| r.score == 0));
}

#[test]
fn test_identical_keywords_follow_tie_break() {
    // Same keyword, different payload; tie-break on the payload
    struct Tagged(Vec<(&'static str, u32)>);

    impl Sortable for Tagged {
        fn len(&self) -> usize {
            self.0.len()
        }
        fn keyword(&self, index: usize) -> Cow<'_, str> {
            Cow::Borrowed(self.0[index].0)
        }
        fn swap(&mut self, i: usize, j: usize) {
            self.0.swap(i, j)
        }
        fn less(&self, i: usize, j: usize) -> bool {
            self.0[i].1 < self.0[j].1
        }
    }

    let mut data = Tagged(vec![("same name", 3), ("same name", 1), ("other", 9), ("same name", 2)]);
    for _ in 0..3 {
        let matched = sort(&mut data, "sn");
        assert_eq!(matched, 3);
        let tags: Vec<u32> = data.0[..matched].iter().map(|t| t.1).collect();
        assert_eq!(tags, [1, 2, 3]);
    }
}

#[test]
fn test_sort_twice_is_stable() {
    let mut team = vietnamese_team();
    sort(&mut team, "ng");
    let first = team.0.clone();
    sort(&mut team, "ng");
    assert_eq!(team.0, first);
}

#[test]
fn test_keyed_slice_sort() {
    let mut players = vec![
        Player::new("Ada", "Lovelace"),
        Player::new("Alan", "Turing"),
        Player::new("Grace", "Hopper"),
    ];

    let mut keyed = KeyedSlice::new(&mut players, |p| p.lastname.as_str());
    let matched = sort(&mut keyed, "ho");

    assert_eq!(matched, 1);
    assert_eq!(players[0].firstname, "Grace");
}

#[test]
fn test_custom_options_change_ranking() {
    // Same tier (mid-word) and length; a huge adjacency bonus with no gap
    // penalty lets the later, tight match win.
    let options = SortOptions {
        adjacency_bonus: 1_000,
        leading_penalty: 1,
        gap_penalty: 0,
        ..SortOptions::default()
    };
    let sorter = Sorter::new(options).unwrap();

    let mut data = vec!["zaxxc", "zzzac"];
    let matched = sorter.sort(&mut data, "ac");
    assert_eq!(matched, 2);
    assert_eq!(data[0], "zzzac");

    let mut data = vec!["zzzac", "zaxxc"];
    sort(&mut data, "ac");
    assert_eq!(data[0], "zaxxc");
}

#[test]
fn test_custom_options_cannot_cross_tiers() {
    // Maximal detail weights still leave a scattered word-start match
    // ahead of a tight mid-word one.
    let options = SortOptions {
        adjacency_bonus: fuzzy_sort::config::MAX_DETAIL_WEIGHT,
        gap_penalty: fuzzy_sort::config::MAX_DETAIL_WEIGHT,
        unmatched_penalty: fuzzy_sort::config::MAX_DETAIL_WEIGHT,
        ..SortOptions::default()
    };
    let sorter = Sorter::new(options).unwrap();

    let filler = "y".repeat(3_000);
    let mut data = vec![format!("{}ab", filler), format!("a{}b", filler)];
    assert_eq!(sorter.sort(&mut data, "ab"), 2);
    assert!(data[0].starts_with('a'));
}

#[test]
fn test_preference_order_holds_across_lengths() {
    for filler in [1, 2, 10, 100, 1_000, 5_000] {
        let y = "y".repeat(filler);
        // All three keywords have the same length
        let initials = format!("a {} b", y);
        let word_start = format!("a{}yyb", y);
        let mid_word = format!("{}yyab", y);

        let mut data = vec![mid_word.clone(), word_start.clone(), initials.clone()];
        let matched = sort(&mut data, "ab");

        assert_eq!(matched, 3);
        assert_eq!(data, [initials, word_start, mid_word], "filler {}", filler);
    }
}

#[test]
fn test_earlier_start_wins_at_every_offset() {
    let total = 5_002;
    for offset in (0..5_000).step_by(97).chain([127, 128, 129, 4_999]) {
        let early = format!("{}al{}", "x".repeat(offset), "x".repeat(total - offset - 2));
        let late = format!("{}al{}", "x".repeat(offset + 1), "x".repeat(total - offset - 3));
        assert_eq!(early.len(), late.len());

        let mut data = vec![late.clone(), early.clone()];
        assert_eq!(sort(&mut data, "al"), 2);
        assert_eq!(data[0], early, "offset {}", offset);
    }
}
