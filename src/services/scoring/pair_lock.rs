//! 按 (problem, student) 串行化评分

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// 每个 (problem_id, student_id) 一把异步互斥锁
///
/// 同一对的评分按到达顺序依次执行，不同对之间互不阻塞。
/// 最后一个持有者释放后条目即被回收，表的大小只取决于正在评分的对数。
#[derive(Debug, Default)]
pub struct PairLocks {
    locks: DashMap<(i64, i64), Arc<Mutex<()>>>,
}

/// 持有某一对的锁，drop 时释放并回收无人等待的条目
#[must_use]
pub struct PairGuard<'a> {
    locks: &'a PairLocks,
    key: (i64, i64),
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for PairGuard<'_> {
    fn drop(&mut self) {
        // 先释放互斥锁，只剩表内引用时说明没有等待者
        self.guard.take();
        self.locks
            .locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl PairLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取指定对的锁
    pub async fn acquire(&self, problem_id: i64, student_id: i64) -> PairGuard<'_> {
        let key = (problem_id, student_id);
        // 先克隆 Arc 再 await，避免持有 DashMap 分片锁跨越等待点
        let lock = self.locks.entry(key).or_default().clone();
        let guard = lock.lock_owned().await;
        PairGuard {
            locks: self,
            key,
            guard: Some(guard),
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
