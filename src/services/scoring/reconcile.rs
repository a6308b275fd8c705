use tracing::{debug, error, warn};

use super::ScoringService;
use crate::config::UnknownProblemPolicy;
use crate::models::{
    GradingDecision, ProblemPoints, Score, ScoreOutcome,
    scores::requests::{NewScore, ScoreUpdate},
};

pub const CORRECT_MESSAGE: &str = "Answer is correct.";
pub const INCORRECT_MESSAGE: &str = "Answer is incorrect.";

/// 一次对账计算出的新成绩
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    pub points: i32,
    pub teacher_id: i64,
    pub attempts: i32,
}

/// 根据评分结论与当前成绩计算新的分数、记分教师和作答次数
///
/// 候选分数低于已存分数时保留已存分数及原记分教师，评分可能乱序到达。
pub fn compute(
    decision: GradingDecision,
    problem: ProblemPoints,
    partial_credit: u32,
    current: Option<&Score>,
    grading_teacher_id: i64,
) -> Reconciled {
    let candidate = match decision {
        GradingDecision::Correct => problem.merit,
        GradingDecision::Incorrect => {
            let partial = i32::try_from(partial_credit).unwrap_or(i32::MAX);
            if partial < problem.merit {
                partial
            } else {
                problem.effort
            }
        }
    };

    let (points, teacher_id) = match current {
        Some(score) if candidate < score.points => (score.points, score.teacher_id),
        _ => (candidate, grading_teacher_id),
    };

    let attempts = current.map_or(0, |s| s.attempts).saturating_add(1);

    Reconciled {
        points,
        teacher_id,
        attempts,
    }
}

pub async fn reconcile_score(
    service: &ScoringService,
    decision: GradingDecision,
    problem_id: i64,
    student_id: i64,
    grading_teacher_id: i64,
    partial_credit: u32,
) -> ScoreOutcome {
    let storage = service.get_storage();

    // 同一对的读改写必须串行
    let _guard = service.pair_locks().acquire(problem_id, student_id).await;

    // 1. 查询当前成绩，不存在表示首次提交
    let current = match storage.get_score(problem_id, student_id).await {
        Ok(current) => current,
        Err(e) => {
            let message = format!("Unable to read score: {problem_id} {student_id}");
            error!("{message}: {e}");
            return ScoreOutcome::failed(message);
        }
    };

    // 2. 查询题目分值
    let problem = match storage.get_problem_points(problem_id).await {
        Ok(Some(points)) => points,
        Ok(None) => match service.get_config().unknown_problem {
            UnknownProblemPolicy::Reject => {
                warn!(
                    "Problem {} not found while grading student {}",
                    problem_id, student_id
                );
                return ScoreOutcome::failed(format!("Problem {problem_id} not found."));
            }
            UnknownProblemPolicy::Zero => {
                warn!(
                    "Problem {} not found while grading student {}, scoring with zero merit",
                    problem_id, student_id
                );
                ProblemPoints::default()
            }
        },
        Err(e) => {
            let message = format!("Unable to read problem: {problem_id}");
            error!("{message}: {e}");
            return ScoreOutcome::failed(message);
        }
    };

    // 3-5. 计算分数、教师与次数
    let next = compute(
        decision,
        problem,
        partial_credit,
        current.as_ref(),
        grading_teacher_id,
    );

    let message = if decision.is_correct() {
        CORRECT_MESSAGE
    } else {
        INCORRECT_MESSAGE
    };

    // 6. 新增或按行 ID 更新
    let persisted = match current {
        None => storage
            .insert_score(NewScore {
                problem_id,
                student_id,
                teacher_id: next.teacher_id,
                points: next.points,
                attempts: next.attempts,
            })
            .await
            .map_err(|e| {
                let message = format!(
                    "Unable to add score: {problem_id} {student_id} {grading_teacher_id}"
                );
                error!("{message}: {e}");
                message
            }),
        Some(existing) => storage
            .update_score(
                existing.id,
                ScoreUpdate {
                    teacher_id: next.teacher_id,
                    points: next.points,
                    attempts: next.attempts,
                },
            )
            .await
            .map_err(|e| {
                let message =
                    format!("Unable to update score: {} {}", next.teacher_id, existing.id);
                error!("{message}: {e}");
                message
            }),
    };

    match persisted {
        Ok(score) => {
            debug!(
                "Score reconciled: problem={} student={} points={} attempts={} teacher={}",
                score.problem_id, score.student_id, score.points, score.attempts, score.teacher_id
            );
            ScoreOutcome::recorded(message, score)
        }
        Err(message) => ScoreOutcome::failed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::test_support::MemoryStorage;
    use std::sync::Arc;

    const PROBLEM: ProblemPoints = ProblemPoints {
        merit: 10,
        effort: 2,
    };

    fn score(points: i32, attempts: i32, teacher_id: i64) -> Score {
        Score {
            id: 1,
            problem_id: 1,
            student_id: 1,
            teacher_id,
            points,
            attempts,
            updated_at: chrono::Utc::now(),
        }
    }

    fn service_with(storage: Arc<MemoryStorage>, policy: UnknownProblemPolicy) -> ScoringService {
        ScoringService::new(
            storage,
            ScoringConfig {
                unknown_problem: policy,
            },
        )
    }

    #[test]
    fn test_compute_correct_awards_merit() {
        let next = compute(GradingDecision::Correct, PROBLEM, 0, None, 7);
        assert_eq!(
            next,
            Reconciled {
                points: 10,
                teacher_id: 7,
                attempts: 1
            }
        );
    }

    #[test]
    fn test_compute_partial_credit_below_merit() {
        let next = compute(GradingDecision::Incorrect, PROBLEM, 5, None, 7);
        assert_eq!(next.points, 5);
    }

    #[test]
    fn test_compute_partial_credit_clamped_to_effort() {
        let at_merit = compute(GradingDecision::Incorrect, PROBLEM, 10, None, 7);
        assert_eq!(at_merit.points, 2);

        let huge = compute(GradingDecision::Incorrect, PROBLEM, u32::MAX, None, 7);
        assert_eq!(huge.points, 2);
    }

    #[test]
    fn test_compute_never_lowers_and_keeps_previous_teacher() {
        let current = score(10, 2, 3);
        let next = compute(GradingDecision::Incorrect, PROBLEM, 8, Some(&current), 9);
        assert_eq!(
            next,
            Reconciled {
                points: 10,
                teacher_id: 3,
                attempts: 3
            }
        );
    }

    #[test]
    fn test_compute_equal_points_takes_grading_teacher() {
        let current = score(10, 1, 3);
        let next = compute(GradingDecision::Correct, PROBLEM, 0, Some(&current), 9);
        assert_eq!(next.teacher_id, 9);
        assert_eq!(next.attempts, 2);
    }

    #[tokio::test]
    async fn test_reconcile_example_sequence() {
        let storage = Arc::new(MemoryStorage::new());
        let pid = storage.add_problem(10, 2);
        let service = service_with(storage.clone(), UnknownProblemPolicy::Reject);

        let first = service
            .reconcile_score(GradingDecision::Incorrect, pid, 42, 100, 5)
            .await;
        assert!(first.success);
        assert_eq!(first.message, INCORRECT_MESSAGE);
        let stored = storage.score(pid, 42).unwrap();
        assert_eq!((stored.points, stored.attempts), (5, 1));

        let second = service
            .reconcile_score(GradingDecision::Correct, pid, 42, 200, 0)
            .await;
        assert_eq!(second.message, CORRECT_MESSAGE);
        let stored = storage.score(pid, 42).unwrap();
        assert_eq!((stored.points, stored.attempts, stored.teacher_id), (10, 2, 200));

        let third = service
            .reconcile_score(GradingDecision::Incorrect, pid, 42, 300, 8)
            .await;
        assert!(third.success);
        let stored = storage.score(pid, 42).unwrap();
        assert_eq!((stored.points, stored.attempts, stored.teacher_id), (10, 3, 200));

        assert_eq!(storage.score_rows(), 1);
    }

    #[tokio::test]
    async fn test_reconcile_is_monotonic_and_counts_attempts() {
        let storage = Arc::new(MemoryStorage::new());
        let pid = storage.add_problem(10, 2);
        let service = service_with(storage.clone(), UnknownProblemPolicy::Reject);

        let sequence = [
            (GradingDecision::Incorrect, 7),
            (GradingDecision::Incorrect, 3),
            (GradingDecision::Incorrect, 20),
            (GradingDecision::Correct, 0),
            (GradingDecision::Incorrect, 1),
            (GradingDecision::Incorrect, 9),
        ];

        let mut last_points = 0;
        for (n, (decision, partial)) in sequence.into_iter().enumerate() {
            let outcome = service.reconcile_score(decision, pid, 1, 5, partial).await;
            assert!(outcome.success);
            let stored = storage.score(pid, 1).unwrap();
            assert!(stored.points >= last_points);
            assert_eq!(stored.attempts as usize, n + 1);
            last_points = stored.points;
        }
        assert_eq!(last_points, 10);
        assert_eq!(storage.score_rows(), 1);
    }

    #[tokio::test]
    async fn test_unknown_problem_rejected_without_write() {
        let storage = Arc::new(MemoryStorage::new());
        let service = service_with(storage.clone(), UnknownProblemPolicy::Reject);

        let outcome = service
            .reconcile_score(GradingDecision::Correct, 999, 1, 5, 0)
            .await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Problem 999 not found.");
        assert_eq!(storage.score_rows(), 0);
    }

    #[tokio::test]
    async fn test_unknown_problem_zero_policy_records_zero() {
        let storage = Arc::new(MemoryStorage::new());
        let service = service_with(storage.clone(), UnknownProblemPolicy::Zero);

        let outcome = service
            .reconcile_score(GradingDecision::Correct, 999, 1, 5, 0)
            .await;
        assert!(outcome.success);
        let stored = storage.score(999, 1).unwrap();
        assert_eq!((stored.points, stored.attempts), (0, 1));
    }

    #[tokio::test]
    async fn test_insert_failure_reported_as_outcome() {
        let storage = Arc::new(MemoryStorage::new());
        let pid = storage.add_problem(10, 2);
        storage.fail_score_writes(true);
        let service = service_with(storage.clone(), UnknownProblemPolicy::Reject);

        let outcome = service
            .reconcile_score(GradingDecision::Correct, pid, 4, 6, 0)
            .await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, format!("Unable to add score: {pid} 4 6"));
        assert!(outcome.score.is_none());
    }

    #[tokio::test]
    async fn test_update_failure_reported_as_outcome() {
        let storage = Arc::new(MemoryStorage::new());
        let pid = storage.add_problem(10, 2);
        let service = service_with(storage.clone(), UnknownProblemPolicy::Reject);

        let first = service
            .reconcile_score(GradingDecision::Correct, pid, 4, 6, 0)
            .await;
        let score_id = first.score.unwrap().id;

        storage.fail_score_writes(true);
        let outcome = service
            .reconcile_score(GradingDecision::Incorrect, pid, 4, 8, 1)
            .await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, format!("Unable to update score: 6 {score_id}"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reconciliations_on_one_pair() {
        let storage = Arc::new(MemoryStorage::new());
        let pid = storage.add_problem(10, 2);
        let service = Arc::new(service_with(storage.clone(), UnknownProblemPolicy::Reject));

        let mut handles = Vec::new();
        for i in 0..32u32 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                let decision = if i % 8 == 0 {
                    GradingDecision::Correct
                } else {
                    GradingDecision::Incorrect
                };
                service.reconcile_score(decision, pid, 1, i as i64, i % 10).await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().success);
        }

        let stored = storage.score(pid, 1).unwrap();
        assert_eq!(stored.attempts, 32);
        assert_eq!(stored.points, 10);
        assert_eq!(storage.score_rows(), 1);
        assert!(service.pair_locks().is_empty());
    }

    #[tokio::test]
    async fn test_pair_locks_released_after_reconcile() {
        let storage = Arc::new(MemoryStorage::new());
        let pid = storage.add_problem(10, 2);
        let service = service_with(storage.clone(), UnknownProblemPolicy::Reject);

        for student_id in 0..1000 {
            let outcome = service
                .reconcile_score(GradingDecision::Correct, pid, student_id, 1, 0)
                .await;
            assert!(outcome.success);
        }
        assert_eq!(storage.score_rows(), 1000);
        assert!(service.pair_locks().is_empty());

        // 提前返回的失败路径同样回收
        let missing = service
            .reconcile_score(GradingDecision::Correct, 999_999, 1, 1, 0)
            .await;
        assert!(!missing.success);
        storage.fail_reads(true);
        let unreadable = service
            .reconcile_score(GradingDecision::Correct, pid, 1, 1, 0)
            .await;
        assert!(!unreadable.success);
        assert!(service.pair_locks().is_empty());
    }
}
