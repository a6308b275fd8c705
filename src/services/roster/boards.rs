use tracing::debug;

use super::{BoardTemplate, RosterService};
use crate::models::{Board, GradingDecision};

pub async fn boards(service: &RosterService, student_id: i64) -> Option<Vec<Board>> {
    let state = service.lock().await;
    state
        .sessions
        .get(&student_id)
        .map(|session| session.boards.clone())
}

pub async fn submission_status(service: &RosterService, student_id: i64) -> Option<i32> {
    let state = service.lock().await;
    state
        .sessions
        .get(&student_id)
        .map(|session| session.submission_status)
}

/// 评分后更新学生会话：提交状态计数加一，对应题目看板的作答次数加一
///
/// 学生没有活动会话时返回 false。
pub async fn record_grading(
    service: &RosterService,
    student_id: i64,
    problem_id: i64,
    decision: GradingDecision,
) -> bool {
    let mut state = service.lock().await;
    let Some(session) = state.sessions.get_mut(&student_id) else {
        return false;
    };

    session.submission_status = session.submission_status.saturating_add(1);
    if let Some(board) = session.board_mut(problem_id) {
        board.attempts = board.attempts.saturating_add(1);
    }

    debug!(
        "Board state advanced: student={} problem={} decision={}",
        student_id, problem_id, decision
    );
    true
}

pub async fn publish_template(service: &RosterService, boards: Vec<Board>) {
    let mut state = service.lock().await;
    state.template = BoardTemplate::new(boards);
    debug!("Board template replaced with {} board(s)", state.template.boards().len());
}
