//! 评分对账引擎
//!
//! 将一次评分结论合并到 (problem, student) 的持久化成绩中：
//! 分数只增不减，作答次数每次加一，每对至多一行成绩。

pub mod pair_lock;
pub mod reconcile;

use std::sync::Arc;

use crate::config::ScoringConfig;
use crate::models::{GradingDecision, ScoreOutcome};
use crate::storage::Storage;

pub use pair_lock::PairLocks;

pub struct ScoringService {
    storage: Arc<dyn Storage>,
    config: ScoringConfig,
    pair_locks: PairLocks,
}

impl ScoringService {
    pub fn new(storage: Arc<dyn Storage>, config: ScoringConfig) -> Self {
        Self {
            storage,
            config,
            pair_locks: PairLocks::new(),
        }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn get_config(&self) -> &ScoringConfig {
        &self.config
    }

    pub(crate) fn pair_locks(&self) -> &PairLocks {
        &self.pair_locks
    }

    /// 对账并持久化一次评分
    pub async fn reconcile_score(
        &self,
        decision: GradingDecision,
        problem_id: i64,
        student_id: i64,
        grading_teacher_id: i64,
        partial_credit: u32,
    ) -> ScoreOutcome {
        reconcile::reconcile_score(
            self,
            decision,
            problem_id,
            student_id,
            grading_teacher_id,
            partial_credit,
        )
        .await
    }
}
