use serde::Deserialize;

// 题目创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProblemRequest {
    pub teacher_id: i64,
    pub content: String,
    pub answer: String,
    pub filename: String,
    pub merit: i32,
    pub effort: i32,
    #[serde(default)]
    pub attempts: i32,
    pub tag_id: Option<i64>,
}

impl CreateProblemRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.merit < 0 || self.effort < 0 {
            return Err("Merit and effort must not be negative".to_string());
        }
        if self.attempts < 0 {
            return Err("Attempts must not be negative".to_string());
        }
        Ok(())
    }
}
