//! 学生会话名册
//!
//! 所有 `StudentSession` 由名册独占，读写（包括遍历看板）都必须持有同一把互斥锁。
//! 锁只在内存操作期间持有，不跨越存储调用。

pub mod boards;
pub mod session;
pub mod template;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::models::{Board, GradingDecision, StudentSession};
use crate::storage::Storage;

pub use template::BoardTemplate;

#[derive(Debug, Default)]
pub(crate) struct RosterState {
    pub(crate) template: BoardTemplate,
    pub(crate) sessions: HashMap<i64, StudentSession>,
}

pub struct RosterService {
    storage: Arc<dyn Storage>,
    state: Mutex<RosterState>,
}

impl RosterService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_template(storage, BoardTemplate::default())
    }

    pub fn with_template(storage: Arc<dyn Storage>, template: BoardTemplate) -> Self {
        Self {
            storage,
            state: Mutex::new(RosterState {
                template,
                sessions: HashMap::new(),
            }),
        }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, RosterState> {
        self.state.lock().await
    }

    /// 验证学生并创建会话
    pub async fn authorize_and_start_session(&self, student_id: i64, password: &str) -> bool {
        session::authorize_and_start_session(self, student_id, password).await
    }

    /// 学生会话是否已激活
    pub async fn is_active(&self, student_id: i64) -> bool {
        self.lock().await.sessions.contains_key(&student_id)
    }

    /// 当前会话数
    pub async fn session_count(&self) -> usize {
        self.lock().await.sessions.len()
    }

    /// 学生看板快照
    pub async fn boards(&self, student_id: i64) -> Option<Vec<Board>> {
        boards::boards(self, student_id).await
    }

    /// 学生的提交状态计数
    pub async fn submission_status(&self, student_id: i64) -> Option<i32> {
        boards::submission_status(self, student_id).await
    }

    /// 评分后推进学生看板状态
    pub async fn record_grading(
        &self,
        student_id: i64,
        problem_id: i64,
        decision: GradingDecision,
    ) -> bool {
        boards::record_grading(self, student_id, problem_id, decision).await
    }

    /// 替换默认看板模板，已有会话不受影响
    pub async fn publish_template(&self, boards: Vec<Board>) {
        boards::publish_template(self, boards).await
    }

    /// 默认看板模板快照
    pub async fn template_boards(&self) -> Vec<Board> {
        self.lock().await.template.boards().to_vec()
    }
}
