use serde::Deserialize;

// 提交创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmissionRequest {
    pub problem_id: i64,
    pub student_id: i64,
    pub content: String,
    #[serde(default)]
    pub priority: i32,
    /// 创建时即标记完成（例如教师直接评分的提交）
    #[serde(default)]
    pub completed: bool,
}

// 反馈创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedbackRequest {
    pub teacher_id: i64,
    pub student_id: i64,
    pub content: String,
}
