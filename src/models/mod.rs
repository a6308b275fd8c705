//! 业务数据模型

pub mod problems;
pub mod scores;
pub mod sessions;
pub mod submissions;
pub mod users;

pub use problems::entities::{Problem, ProblemPoints, Tag};
pub use scores::entities::{GradingDecision, Score, ScoreOutcome};
pub use sessions::entities::{Board, StudentSession};
