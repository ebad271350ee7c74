pub mod classifier;
pub mod deferred;
pub mod error;
pub mod mcp_api;
pub mod presentation;
pub mod signals;

pub use classifier::{classify, explain, ClassificationResult, ScoreBreakdown};
pub use signals::{extract, PageSignals};
