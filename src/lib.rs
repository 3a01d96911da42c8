//! # Fuzzy Sort
//!
//! Fuzzy matching and ranking for interactive filtering (command palettes,
//! file pickers, name lookups):
//! - Subsequence matching, case-insensitive
//! - Initials, word starts, early and tight matches ranked first
//! - Accent-insensitive when the query is plain ASCII
//! - In-place sorting of any collection through the [`Sortable`] trait
//! - Integer scores, so orderings are reproducible
//!
//! ## Example Usage
//!
//! ```rust
//! use fuzzy_sort::{sort, rank};
//!
//! let mut places = vec![
//!     "new york city",
//!     "nyc subway",
//!     "annyci",
//!     "banal",
//!     "hồ chí minh",
//!     "ho chi minh city",
//! ];
//!
//! let matched = sort(&mut places, "nyc");
//! assert_eq!(&places[..matched], ["new york city", "nyc subway", "annyci"]);
//!
//! let ranked = rank(&places, "ho chi minh");
//! assert_eq!(places[ranked[0].index], "hồ chí minh");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;

// Re-export primary types
pub use config::{SortOptions, TIER_STRIDE};
pub use crate::core::{KeyedSlice, MatchResult, Ranked, Score, Sortable};
pub use engine::{rank, rank_with, sort, sort_with, Sorter};
pub use error::{FuzzySortError, Result};
pub use ranking::{fold, match_str, normalize, FoldMode, Matcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
