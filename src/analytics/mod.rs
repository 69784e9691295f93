//! Analytics module for search volume trend analysis
//!
//! Every analyzer is a pure function of its inputs and the borrowed
//! [`ReferenceTables`](crate::reference::ReferenceTables).

pub mod anomaly;
pub mod forecast;
pub mod growth;
pub mod keyword_trends;
pub mod seasonality;
pub mod stats;

pub use anomaly::{Anomaly, AnomalyDetector, AnomalyKind};
pub use forecast::{ForecastGenerator, MonthlyForecast, TrendDirection};
pub use growth::GrowthAnalyzer;
pub use keyword_trends::{confidence_score, SeasonalityPattern, TrendAnalysis, TrendAnalyzer};
pub use seasonality::{Seasonality, SeasonalityDetector};
