//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod problems;
mod scores;
mod submissions;
mod users;

use crate::config::DatabaseConfig;
use crate::errors::{Result, TrackerError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例并执行迁移
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TrackerError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TrackerError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存数据库随最后一个连接关闭而消失，必须保持至少一个连接常驻
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| TrackerError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| TrackerError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TrackerError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // 成绩模块
    async fn get_score(&self, problem_id: i64, student_id: i64) -> Result<Option<Score>> {
        self.get_score_impl(problem_id, student_id).await
    }

    async fn insert_score(&self, score: NewScore) -> Result<Score> {
        self.insert_score_impl(score).await
    }

    async fn update_score(&self, score_id: i64, update: ScoreUpdate) -> Result<Score> {
        self.update_score_impl(score_id, update).await
    }

    async fn list_scores_for_student(&self, student_id: i64) -> Result<Vec<Score>> {
        self.list_scores_for_student_impl(student_id).await
    }

    // 题目模块
    async fn create_problem(&self, problem: CreateProblemRequest) -> Result<Problem> {
        self.create_problem_impl(problem).await
    }

    async fn get_problem(&self, problem_id: i64) -> Result<Option<Problem>> {
        self.get_problem_impl(problem_id).await
    }

    async fn get_problem_points(&self, problem_id: i64) -> Result<Option<ProblemPoints>> {
        self.get_problem_points_impl(problem_id).await
    }

    async fn create_tag(&self, description: &str) -> Result<Tag> {
        self.create_tag_impl(description).await
    }

    // 账号模块
    async fn create_student(&self, student: CreateAccountRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_password(&self, student_id: i64) -> Result<Option<String>> {
        self.get_student_password_impl(student_id).await
    }

    async fn create_teacher(&self, teacher: CreateAccountRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_all_teachers(&self) -> Result<Vec<TeacherCredential>> {
        self.get_all_teachers_impl().await
    }

    // 考勤模块
    async fn insert_attendance(&self, student_id: i64, at: DateTime<Utc>) -> Result<Attendance> {
        self.insert_attendance_impl(student_id, at).await
    }

    async fn count_attendance(&self, student_id: i64) -> Result<u64> {
        self.count_attendance_impl(student_id).await
    }

    // 提交与反馈模块
    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission> {
        self.create_submission_impl(submission).await
    }

    async fn get_submission(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_impl(submission_id).await
    }

    async fn complete_submission(&self, submission_id: i64, at: DateTime<Utc>) -> Result<bool> {
        self.complete_submission_impl(submission_id, at).await
    }

    async fn create_feedback(&self, feedback: CreateFeedbackRequest) -> Result<Feedback> {
        self.create_feedback_impl(feedback).await
    }
}
