use serde::{Deserialize, Serialize};

/// Aggregate chosen by the caller when a session is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Share of correct answers, 0 to 100.
    Percentage,
    /// +1 correct, 0 unanswered, -1 incorrect.
    Penalty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionScore {
    pub correct_count: u32,
    pub total_count: u32,
    pub percentage: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PenaltyScore {
    pub correct: u32,
    pub incorrect: u32,
    pub unanswered: u32,
    pub total: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ScoreReport {
    Percentage(SessionScore),
    Penalty(PenaltyScore),
}

impl ScoreReport {
    /// The single number stored with a result.
    pub fn headline(&self) -> i32 {
        match self {
            ScoreReport::Percentage(score) => score.percentage as i32,
            ScoreReport::Penalty(score) => score.total,
        }
    }
}
