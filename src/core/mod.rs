// Core algorithm exports
pub mod grade;
pub mod matcher;
pub mod ranking;
pub mod scoring;

pub use grade::grade_of;
pub use matcher::{Matcher, Recommendation};
pub use ranking::rank_guides;
pub use scoring::{compute_score, score_breakdown};
