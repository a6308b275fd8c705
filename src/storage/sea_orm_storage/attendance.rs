//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{Result, TrackerError};
use crate::models::users::entities::Attendance;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 记录一次考勤
    pub async fn insert_attendance_impl(
        &self,
        student_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Attendance> {
        let model = ActiveModel {
            student_id: Set(student_id),
            attended_at: Set(at.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("记录考勤失败: {e}")))?;

        Ok(result.into_attendance())
    }

    /// 统计学生的考勤次数
    pub async fn count_attendance_impl(&self, student_id: i64) -> Result<u64> {
        AttendanceRecords::find()
            .filter(Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("统计考勤失败: {e}")))
    }
}
