//! Keyword scoring
//!
//! Value, traffic, difficulty and search-intent estimates for single
//! keywords. Every scorer borrows the [`ReferenceTables`](crate::reference::ReferenceTables)
//! it reads from and holds no other state.

pub mod difficulty;
pub mod intent;
pub mod traffic;
pub mod value;

pub use difficulty::{difficulty_score, DifficultySubScores};
pub use intent::{BuyingStage, IntentAnalysis, IntentClassifier, SearchIntent};
pub use traffic::{estimate_traffic, TrafficEstimate};
pub use value::{KeywordScorer, KeywordValue, Priority};
