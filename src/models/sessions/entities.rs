use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 学生当前会话中分配的一道题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub content: String,
    pub answer: String,
    pub attempts: i32,
    pub filename: String,
    pub problem_id: i64,
    pub started_at: DateTime<Utc>,
}

impl Board {
    /// 复制一份独立的看板实例，开始时间重置为 `now`
    pub fn instantiate(&self, now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            ..self.clone()
        }
    }
}

/// 学生会话状态，仅存在于内存中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSession {
    pub student_id: i64,
    pub password: String,
    /// 按分配顺序排列
    pub boards: Vec<Board>,
    pub submission_status: i32,
}

impl StudentSession {
    pub fn board_mut(&mut self, problem_id: i64) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.problem_id == problem_id)
    }
}
