use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: i64,
    pub teacher_id: i64,
    pub content: String,
    pub answer: String,
    pub filename: String,
    pub merit: i32,  // 完全正确的得分
    pub effort: i32, // 尝试作答的保底分
    pub attempts: i32,
    pub tag_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// 评分只需要的题目分值
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemPoints {
    pub merit: i32,
    pub effort: i32,
}

impl From<&Problem> for ProblemPoints {
    fn from(problem: &Problem) -> Self {
        Self {
            merit: problem.merit,
            effort: problem.effort,
        }
    }
}

// 题目标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub description: String,
}
