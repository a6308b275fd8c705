use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{GradingService, RosterService, ScoringService, TeacherService};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

/// 进程内共享的服务上下文
pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub teachers: Arc<TeacherService>,
    pub roster: Arc<RosterService>,
    pub scoring: Arc<ScoringService>,
    pub grading: Arc<GradingService>,
}

impl StartupContext {
    /// 在给定存储上装配全部服务，并加载教师凭据
    pub async fn assemble(storage: Arc<dyn Storage>, config: &AppConfig) -> Result<Self> {
        let teachers = Arc::new(TeacherService::new(
            storage.clone(),
            config.session.clone(),
        ));
        let count = teachers.reload_teachers().await?;
        debug!("{} teacher(s) authorized for this session", count);

        let roster = Arc::new(RosterService::new(storage.clone()));
        let scoring = Arc::new(ScoringService::new(
            storage.clone(),
            config.scoring.clone(),
        ));
        let grading = Arc::new(GradingService::new(
            storage.clone(),
            scoring.clone(),
            roster.clone(),
        ));

        Ok(Self {
            storage,
            teachers,
            roster,
            scoring,
            grading,
        })
    }
}

/// 准备服务启动的上下文
///
/// 存储无法打开或迁移失败时返回错误，调用方不应继续运行。
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    let context = StartupContext::assemble(storage, config).await?;
    warn!(
        "Scoring engine ready (unknown problem policy: {:?})",
        config.scoring.unknown_problem
    );

    Ok(context)
}
