use serde::Deserialize;

use super::entities::GradingDecision;

// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeRequest {
    pub decision: GradingDecision,
    pub problem_id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    #[serde(default)]
    pub partial_credit: u32,
    /// 对应的提交记录，评分成功后标记为已完成
    #[serde(default)]
    pub submission_id: Option<i64>,
}

// 新增成绩（用于存储层）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub problem_id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub points: i32,
    pub attempts: i32,
}

// 更新成绩（用于存储层），按成绩行 id 定位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub teacher_id: i64,
    pub points: i32,
    pub attempts: i32,
}
