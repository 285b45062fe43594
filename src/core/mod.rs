//! Core domain types

pub mod category;
pub mod ranking;
pub mod similarity;

pub use category::parse_categories;
pub use ranking::{RankedCategory, Ranking};
pub use similarity::{magnitude, score, zero_vector, ScoreError, Vector, SENTINEL_SCORE};
