//! 提交与反馈存储操作

use super::SeaOrmStorage;
use crate::entity::feedback::ActiveModel as FeedbackActiveModel;
use crate::entity::submissions::{ActiveModel, Entity as Submissions};
use crate::errors::{Result, TrackerError};
use crate::models::submissions::{
    entities::{Feedback, Submission},
    requests::{CreateFeedbackRequest, CreateSubmissionRequest},
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建提交
    pub async fn create_submission_impl(&self, req: CreateSubmissionRequest) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            problem_id: Set(req.problem_id),
            student_id: Set(req.student_id),
            content: Set(req.content),
            priority: Set(req.priority),
            created_at: Set(now),
            completed_at: Set(req.completed.then_some(now)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 标记提交已完成，提交不存在时返回 false
    pub async fn complete_submission_impl(
        &self,
        submission_id: i64,
        at: DateTime<Utc>,
    ) -> Result<bool> {
        let Some(existing) = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询提交失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut model: ActiveModel = existing.into();
        model.completed_at = Set(Some(at.timestamp()));

        model
            .update(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("更新提交状态失败: {e}")))?;

        Ok(true)
    }

    /// 创建反馈
    pub async fn create_feedback_impl(&self, req: CreateFeedbackRequest) -> Result<Feedback> {
        if req.content.trim().is_empty() {
            return Err(TrackerError::validation("反馈内容不能为空"));
        }

        let model = FeedbackActiveModel {
            teacher_id: Set(req.teacher_id),
            student_id: Set(req.student_id),
            content: Set(req.content),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建反馈失败: {e}")))?;

        Ok(result.into_feedback())
    }
}
