use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    Problem, ProblemPoints, Score, Tag,
    problems::requests::CreateProblemRequest,
    scores::requests::{NewScore, ScoreUpdate},
    submissions::{
        entities::{Feedback, Submission},
        requests::{CreateFeedbackRequest, CreateSubmissionRequest},
    },
    users::{
        entities::{Attendance, Student, Teacher, TeacherCredential},
        requests::CreateAccountRequest,
    },
};

pub mod sea_orm_storage;

/// 持久化存储接口
///
/// 评分引擎与会话名册只通过该接口访问数据，`(problem_id, student_id)` 的成绩唯一性由存储层保证。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 成绩管理方法
    // 通过题目和学生获取成绩
    async fn get_score(&self, problem_id: i64, student_id: i64) -> Result<Option<Score>>;
    // 新增成绩
    async fn insert_score(&self, score: NewScore) -> Result<Score>;
    // 按成绩行 ID 更新成绩
    async fn update_score(&self, score_id: i64, update: ScoreUpdate) -> Result<Score>;
    // 列出学生的全部成绩
    async fn list_scores_for_student(&self, student_id: i64) -> Result<Vec<Score>>;

    /// 题目管理方法
    // 创建题目
    async fn create_problem(&self, problem: CreateProblemRequest) -> Result<Problem>;
    // 通过ID获取题目
    async fn get_problem(&self, problem_id: i64) -> Result<Option<Problem>>;
    // 获取题目分值
    async fn get_problem_points(&self, problem_id: i64) -> Result<Option<ProblemPoints>>;
    // 创建标签
    async fn create_tag(&self, description: &str) -> Result<Tag>;

    /// 账号管理方法
    // 创建学生
    async fn create_student(&self, student: CreateAccountRequest) -> Result<Student>;
    // 获取学生密码
    async fn get_student_password(&self, student_id: i64) -> Result<Option<String>>;
    // 创建教师
    async fn create_teacher(&self, teacher: CreateAccountRequest) -> Result<Teacher>;
    // 获取所有教师凭据
    async fn get_all_teachers(&self) -> Result<Vec<TeacherCredential>>;

    /// 考勤方法
    // 记录考勤
    async fn insert_attendance(&self, student_id: i64, at: DateTime<Utc>) -> Result<Attendance>;
    // 统计学生考勤次数
    async fn count_attendance(&self, student_id: i64) -> Result<u64>;

    /// 提交与反馈方法
    // 创建提交
    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 标记提交已完成
    async fn complete_submission(&self, submission_id: i64, at: DateTime<Utc>) -> Result<bool>;
    // 创建反馈
    async fn create_feedback(&self, feedback: CreateFeedbackRequest) -> Result<Feedback>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
