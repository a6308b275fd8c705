use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 学生提交
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub problem_id: i64,
    pub student_id: i64,
    pub content: String,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

// 教师反馈
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub teacher_id: i64,
    pub student_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
