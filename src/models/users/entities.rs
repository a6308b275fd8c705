use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 学生账号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

// 教师账号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

// 启动或重载时加载到内存的教师凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherCredential {
    pub id: i64,
    pub password: String,
}

// 考勤记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub attended_at: DateTime<Utc>,
}
