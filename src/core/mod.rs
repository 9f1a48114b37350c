// Core algorithm exports
pub mod circular;
pub mod eligibility;
pub mod matcher;
pub mod probability;
pub mod scoring;
pub mod thresholds;

pub use circular::{summarize_circular, format_summary, CircularSummary};
pub use eligibility::{UnitCompatibility, AcceptAllUnits, AcceptedUnits, UnitRule};
pub use matcher::{Matcher, Recommendations};
pub use probability::{calculate_success_probability, probability_level};
pub use scoring::calculate_match_score;
