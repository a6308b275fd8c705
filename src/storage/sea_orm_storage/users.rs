//! 学生与教师账号存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel as StudentActiveModel, Entity as Students};
use crate::entity::teachers::{ActiveModel as TeacherActiveModel, Entity as Teachers};
use crate::errors::{Result, TrackerError};
use crate::models::users::{
    entities::{Student, Teacher, TeacherCredential},
    requests::CreateAccountRequest,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateAccountRequest) -> Result<Student> {
        req.validate().map_err(TrackerError::validation)?;

        let model = StudentActiveModel {
            name: Set(req.name),
            password: Set(req.password),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 获取学生密码，学生不存在时返回 None
    pub async fn get_student_password_impl(&self, student_id: i64) -> Result<Option<String>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.password))
    }

    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateAccountRequest) -> Result<Teacher> {
        req.validate().map_err(TrackerError::validation)?;

        let model = TeacherActiveModel {
            name: Set(req.name),
            password: Set(req.password),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 获取所有教师的 ID 与密码
    pub async fn get_all_teachers_impl(&self) -> Result<Vec<TeacherCredential>> {
        let teachers = Teachers::find()
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(teachers
            .into_iter()
            .map(|m| TeacherCredential {
                id: m.id,
                password: m.password,
            })
            .collect())
    }
}
