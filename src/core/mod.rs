// Core algorithm exports
pub mod matcher;
pub mod moderation;
pub mod scoring;

pub use matcher::{MentorMatcher, RankResult};
pub use moderation::{ModerationGate, DEFAULT_BLOCK_THRESHOLD};
pub use scoring::calculate_match_score;
