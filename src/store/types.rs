use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{RiskTier, ScoreBreakdown, ScoreResult};

/// One saved assessment: the scored subset of a ScoreResult, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub name: String,
    pub assessed_at: DateTime<Utc>,
    pub total: u32,
    pub risk_tier: RiskTier,
    pub breakdown: ScoreBreakdown,
}

impl AssessmentRecord {
    /// Age of this assessment relative to now
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.assessed_at
    }
}

/// Local assessment history, persisted as versioned JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    pub version: u32,
    #[serde(default)]
    pub assessments: Vec<AssessmentRecord>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty history with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            assessments: Vec::new(),
        }
    }

    /// Append a scored assessment under the given name, stamped now
    pub fn record(&mut self, name: &str, result: &ScoreResult) {
        self.assessments.push(AssessmentRecord {
            name: name.to_string(),
            assessed_at: Utc::now(),
            total: result.total,
            risk_tier: result.risk_tier,
            breakdown: result.breakdown,
        });
    }

    /// Most recent records first, at most `limit` of them
    pub fn recent(&self, limit: usize) -> Vec<&AssessmentRecord> {
        let mut records: Vec<&AssessmentRecord> = self.assessments.iter().collect();
        records.sort_by(|a, b| b.assessed_at.cmp(&a.assessed_at));
        records.truncate(limit);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_risk_score, AnswerSet};
    use chrono::Duration;

    fn sample_result() -> ScoreResult {
        calculate_risk_score(&AnswerSet::default())
    }

    #[test]
    fn test_new_history_empty() {
        let history = History::new();
        assert_eq!(history.version, 1);
        assert!(history.assessments.is_empty());
    }

    #[test]
    fn test_record_stores_result_fields() {
        let mut history = History::new();
        let result = sample_result();
        history.record("Acme Reader", &result);

        assert_eq!(history.assessments.len(), 1);
        let record = &history.assessments[0];
        assert_eq!(record.name, "Acme Reader");
        assert_eq!(record.total, result.total);
        assert_eq!(record.risk_tier, result.risk_tier);
        assert_eq!(record.breakdown, result.breakdown);
    }

    #[test]
    fn test_recent_newest_first() {
        let mut history = History::new();
        let result = sample_result();
        history.record("first", &result);
        history.record("second", &result);
        history.record("third", &result);

        // Force distinct timestamps
        history.assessments[0].assessed_at = Utc::now() - Duration::hours(2);
        history.assessments[1].assessed_at = Utc::now() - Duration::hours(1);

        let recent = history.recent(10);
        assert_eq!(recent[0].name, "third");
        assert_eq!(recent[1].name, "second");
        assert_eq!(recent[2].name, "first");
    }

    #[test]
    fn test_recent_respects_limit() {
        let mut history = History::new();
        let result = sample_result();
        for i in 0..5 {
            history.record(&format!("system-{}", i), &result);
        }
        assert_eq!(history.recent(2).len(), 2);
    }
}
