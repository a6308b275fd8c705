//! 评分入口：对账成绩后推进学生看板

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::models::{ScoreOutcome, scores::requests::GradeRequest};
use crate::services::{RosterService, ScoringService};
use crate::storage::Storage;

pub struct GradingService {
    storage: Arc<dyn Storage>,
    scoring: Arc<ScoringService>,
    roster: Arc<RosterService>,
}

impl GradingService {
    pub fn new(
        storage: Arc<dyn Storage>,
        scoring: Arc<ScoringService>,
        roster: Arc<RosterService>,
    ) -> Self {
        Self {
            storage,
            scoring,
            roster,
        }
    }

    /// 评分一次提交
    ///
    /// 成绩写入成功后才会推进看板并标记提交完成；失败时直接返回对账结果。
    pub async fn grade_submission(&self, request: GradeRequest) -> ScoreOutcome {
        let outcome = self
            .scoring
            .reconcile_score(
                request.decision,
                request.problem_id,
                request.student_id,
                request.teacher_id,
                request.partial_credit,
            )
            .await;

        if !outcome.success {
            return outcome;
        }

        self.roster
            .record_grading(request.student_id, request.problem_id, request.decision)
            .await;

        if let Some(submission_id) = request.submission_id {
            match self
                .storage
                .complete_submission(submission_id, Utc::now())
                .await
            {
                Ok(true) => {}
                Ok(false) => warn!("Graded submission {} does not exist", submission_id),
                Err(e) => warn!(
                    "Failed to mark submission {} completed: {}",
                    submission_id, e
                ),
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::models::{Board, GradingDecision, submissions::requests::CreateSubmissionRequest};
    use crate::test_support::MemoryStorage;

    struct Fixture {
        storage: Arc<MemoryStorage>,
        roster: Arc<RosterService>,
        grading: GradingService,
    }

    fn fixture() -> Fixture {
        let storage = Arc::new(MemoryStorage::new());
        let scoring = Arc::new(ScoringService::new(
            storage.clone(),
            ScoringConfig::default(),
        ));
        let roster = Arc::new(RosterService::new(storage.clone()));
        let grading = GradingService::new(storage.clone(), scoring, roster.clone());
        Fixture {
            storage,
            roster,
            grading,
        }
    }

    fn request(decision: GradingDecision, problem_id: i64, student_id: i64) -> GradeRequest {
        GradeRequest {
            decision,
            problem_id,
            student_id,
            teacher_id: 1,
            partial_credit: 0,
            submission_id: None,
        }
    }

    #[tokio::test]
    async fn test_grading_advances_board_and_completes_submission() {
        let f = fixture();
        let pid = f.storage.add_problem(10, 2);
        let stid = f.storage.add_student("pw");
        f.roster
            .publish_template(vec![Board {
                content: "print(1)".to_string(),
                answer: "1".to_string(),
                attempts: 0,
                filename: "p.py".to_string(),
                problem_id: pid,
                started_at: Utc::now(),
            }])
            .await;
        assert!(f.roster.authorize_and_start_session(stid, "pw").await);

        let submission = f
            .storage
            .create_submission(CreateSubmissionRequest {
                problem_id: pid,
                student_id: stid,
                content: "print(1)".to_string(),
                priority: 1,
                completed: false,
            })
            .await
            .unwrap();

        let mut req = request(GradingDecision::Correct, pid, stid);
        req.submission_id = Some(submission.id);
        let outcome = f.grading.grade_submission(req).await;

        assert!(outcome.success);
        assert_eq!(outcome.score.unwrap().points, 10);
        assert_eq!(f.roster.boards(stid).await.unwrap()[0].attempts, 1);
        assert_eq!(f.roster.submission_status(stid).await, Some(1));
        let stored = f.storage.get_submission(submission.id).await.unwrap().unwrap();
        assert!(stored.is_completed());
    }

    #[tokio::test]
    async fn test_failed_reconciliation_does_not_touch_roster() {
        let f = fixture();
        let stid = f.storage.add_student("pw");
        assert!(f.roster.authorize_and_start_session(stid, "pw").await);

        let outcome = f
            .grading
            .grade_submission(request(GradingDecision::Correct, 12345, stid))
            .await;

        assert!(!outcome.success);
        assert_eq!(f.roster.submission_status(stid).await, Some(0));
    }

    #[tokio::test]
    async fn test_grading_without_active_session_still_scores() {
        let f = fixture();
        let pid = f.storage.add_problem(4, 1);

        let outcome = f
            .grading
            .grade_submission(request(GradingDecision::Incorrect, pid, 77))
            .await;

        assert!(outcome.success);
        assert_eq!(f.storage.score(pid, 77).unwrap().points, 0);
    }
}
