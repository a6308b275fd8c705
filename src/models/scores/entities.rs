use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 成绩记录，每个 (problem, student) 至多一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    pub problem_id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub points: i32,
    pub attempts: i32,
    pub updated_at: DateTime<Utc>,
}

// 评分结论
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradingDecision {
    Correct,
    Incorrect,
}

impl GradingDecision {
    pub const CORRECT: &'static str = "correct";
    pub const INCORRECT: &'static str = "incorrect";

    pub fn is_correct(self) -> bool {
        self == GradingDecision::Correct
    }
}

impl<'de> Deserialize<'de> for GradingDecision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for GradingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradingDecision::Correct => write!(f, "{}", GradingDecision::CORRECT),
            GradingDecision::Incorrect => write!(f, "{}", GradingDecision::INCORRECT),
        }
    }
}

impl std::str::FromStr for GradingDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GradingDecision::CORRECT => Ok(GradingDecision::Correct),
            GradingDecision::INCORRECT => Ok(GradingDecision::Incorrect),
            _ => Err(format!(
                "Invalid grading decision: '{s}'. Expected: correct, incorrect"
            )),
        }
    }
}

/// 评分结果
///
/// 持久化失败不会向上抛出，而是以 `success = false` 和描述性消息返回给调用方。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

impl ScoreOutcome {
    pub fn recorded(message: impl Into<String>, score: Score) -> Self {
        Self {
            success: true,
            message: message.into(),
            score: Some(score),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            score: None,
        }
    }
}
