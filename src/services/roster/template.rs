use chrono::{DateTime, Utc};

use crate::models::Board;

/// 默认看板模板
///
/// 新会话创建时逐个复制其中的看板，模板本身不属于任何学生。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardTemplate {
    boards: Vec<Board>,
}

impl BoardTemplate {
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// 为一个新会话生成独立的看板列表，保持模板顺序
    pub fn instantiate(&self, now: DateTime<Utc>) -> Vec<Board> {
        self.boards.iter().map(|b| b.instantiate(now)).collect()
    }
}
