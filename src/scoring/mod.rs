pub mod answers;
pub mod catalog;
pub mod engine;
pub mod validation;

pub use answers::AnswerSet;
pub use catalog::Category;
pub use engine::{
    calculate_risk_score, determine_risk_tier, ReasonCode, RiskTier, ScoreBreakdown, ScoreResult,
};
pub use validation::{unrecognized_keys, validate_answers};
