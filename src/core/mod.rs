pub mod match_result;
pub mod sortable;

pub use match_result::{MatchResult, Ranked, Score};
pub use sortable::{KeyedSlice, Sortable};
