pub mod analyze;
pub mod score;
pub mod tables;

// Re-export command functions for convenience
pub use analyze::{analyze, OutputFormat};
pub use score::{difficulty, intent, value, TrafficOptions};
pub use tables::tables;
