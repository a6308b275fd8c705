//! 题目与标签存储操作

use super::SeaOrmStorage;
use crate::entity::problems::{ActiveModel, Column, Entity as Problems};
use crate::entity::tags::ActiveModel as TagActiveModel;
use crate::errors::{Result, TrackerError};
use crate::models::{Problem, ProblemPoints, Tag, problems::requests::CreateProblemRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QuerySelect, Set};

impl SeaOrmStorage {
    /// 创建题目
    pub async fn create_problem_impl(&self, req: CreateProblemRequest) -> Result<Problem> {
        req.validate().map_err(TrackerError::validation)?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(req.teacher_id),
            content: Set(req.content),
            answer: Set(req.answer),
            filename: Set(req.filename),
            merit: Set(req.merit),
            effort: Set(req.effort),
            attempts: Set(req.attempts),
            tag_id: Set(req.tag_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_problem())
    }

    /// 通过 ID 获取题目
    pub async fn get_problem_impl(&self, problem_id: i64) -> Result<Option<Problem>> {
        let result = Problems::find_by_id(problem_id)
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_problem()))
    }

    /// 只查询题目的 merit 与 effort
    pub async fn get_problem_points_impl(&self, problem_id: i64) -> Result<Option<ProblemPoints>> {
        let result: Option<(i32, i32)> = Problems::find_by_id(problem_id)
            .select_only()
            .column(Column::Merit)
            .column(Column::Effort)
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询题目分值失败: {e}")))?;

        Ok(result.map(|(merit, effort)| ProblemPoints { merit, effort }))
    }

    /// 创建标签
    pub async fn create_tag_impl(&self, description: &str) -> Result<Tag> {
        let model = TagActiveModel {
            description: Set(description.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建标签失败: {e}")))?;

        Ok(result.into_tag())
    }
}
