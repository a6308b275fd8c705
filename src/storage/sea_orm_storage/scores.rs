//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::scores::{ActiveModel, Column, Entity as Scores};
use crate::errors::{Result, TrackerError};
use crate::models::{
    Score,
    scores::requests::{NewScore, ScoreUpdate},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 通过题目 ID 和学生 ID 获取成绩
    pub async fn get_score_impl(&self, problem_id: i64, student_id: i64) -> Result<Option<Score>> {
        let result = Scores::find()
            .filter(Column::ProblemId.eq(problem_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_score()))
    }

    /// 新增成绩，唯一索引冲突时返回错误
    pub async fn insert_score_impl(&self, req: NewScore) -> Result<Score> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            problem_id: Set(req.problem_id),
            student_id: Set(req.student_id),
            teacher_id: Set(req.teacher_id),
            points: Set(req.points),
            attempts: Set(req.attempts),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建成绩失败: {e}")))?;

        Ok(result.into_score())
    }

    /// 按成绩行 ID 更新教师、分数与作答次数
    pub async fn update_score_impl(&self, score_id: i64, update: ScoreUpdate) -> Result<Score> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(score_id),
            teacher_id: Set(update.teacher_id),
            points: Set(update.points),
            attempts: Set(update.attempts),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                TrackerError::not_found(format!("成绩不存在: {score_id}"))
            }
            e => TrackerError::database_operation(format!("更新成绩失败: {e}")),
        })?;

        Ok(result.into_score())
    }

    /// 列出学生的全部成绩
    pub async fn list_scores_for_student_impl(&self, student_id: i64) -> Result<Vec<Score>> {
        let scores = Scores::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::ProblemId)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(scores.into_iter().map(|m| m.into_score()).collect())
    }
}
