//! 单元测试用的内存存储

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::{Result, TrackerError};
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

#[derive(Default)]
struct Tables {
    scores: HashMap<i64, Score>,
    problems: HashMap<i64, Problem>,
    students: HashMap<i64, Student>,
    teachers: HashMap<i64, Teacher>,
    attendance: Vec<Attendance>,
    submissions: HashMap<i64, Submission>,
}

#[derive(Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
    next_id: AtomicI64,
    fail_score_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn check_reads(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TrackerError::database_operation("read failure"));
        }
        Ok(())
    }

    pub fn fail_score_writes(&self, fail: bool) {
        self.fail_score_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn add_problem(&self, merit: i32, effort: i32) -> i64 {
        let id = self.next_id();
        self.tables.lock().unwrap().problems.insert(
            id,
            Problem {
                id,
                teacher_id: 1,
                content: format!("problem {id}"),
                answer: String::new(),
                filename: format!("p{id}.py"),
                merit,
                effort,
                attempts: 0,
                tag_id: None,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn add_student(&self, password: &str) -> i64 {
        let id = self.next_id();
        self.tables.lock().unwrap().students.insert(
            id,
            Student {
                id,
                name: format!("student{id}"),
                password: password.to_string(),
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn add_teacher(&self, password: &str) -> i64 {
        let id = self.next_id();
        self.tables.lock().unwrap().teachers.insert(
            id,
            Teacher {
                id,
                name: format!("teacher{id}"),
                password: password.to_string(),
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn score(&self, problem_id: i64, student_id: i64) -> Option<Score> {
        self.tables
            .lock()
            .unwrap()
            .scores
            .values()
            .find(|s| s.problem_id == problem_id && s.student_id == student_id)
            .cloned()
    }

    pub fn score_rows(&self) -> usize {
        self.tables.lock().unwrap().scores.len()
    }

    pub fn attendance_rows(&self) -> usize {
        self.tables.lock().unwrap().attendance.len()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_score(&self, problem_id: i64, student_id: i64) -> Result<Option<Score>> {
        self.check_reads()?;
        // 让出调度，使并发测试能够交错执行读与写
        tokio::task::yield_now().await;
        Ok(self.score(problem_id, student_id))
    }

    async fn insert_score(&self, score: NewScore) -> Result<Score> {
        if self.fail_score_writes.load(Ordering::SeqCst) {
            return Err(TrackerError::database_operation("insert failure"));
        }
        let id = self.next_id();
        let mut tables = self.tables.lock().unwrap();
        if tables
            .scores
            .values()
            .any(|s| s.problem_id == score.problem_id && s.student_id == score.student_id)
        {
            return Err(TrackerError::database_operation(
                "UNIQUE constraint failed: scores.problem_id, scores.student_id",
            ));
        }
        let row = Score {
            id,
            problem_id: score.problem_id,
            student_id: score.student_id,
            teacher_id: score.teacher_id,
            points: score.points,
            attempts: score.attempts,
            updated_at: Utc::now(),
        };
        tables.scores.insert(id, row.clone());
        Ok(row)
    }

    async fn update_score(&self, score_id: i64, update: ScoreUpdate) -> Result<Score> {
        if self.fail_score_writes.load(Ordering::SeqCst) {
            return Err(TrackerError::database_operation("update failure"));
        }
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .scores
            .get_mut(&score_id)
            .ok_or_else(|| TrackerError::not_found(format!("score {score_id}")))?;
        row.teacher_id = update.teacher_id;
        row.points = update.points;
        row.attempts = update.attempts;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn list_scores_for_student(&self, student_id: i64) -> Result<Vec<Score>> {
        self.check_reads()?;
        let tables = self.tables.lock().unwrap();
        let mut scores: Vec<Score> = tables
            .scores
            .values()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect();
        scores.sort_by_key(|s| s.problem_id);
        Ok(scores)
    }

    async fn create_problem(&self, problem: CreateProblemRequest) -> Result<Problem> {
        let id = self.add_problem(problem.merit, problem.effort);
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .problems
            .get_mut(&id)
            .ok_or_else(|| TrackerError::not_found(format!("problem {id}")))?;
        row.teacher_id = problem.teacher_id;
        row.content = problem.content;
        row.answer = problem.answer;
        row.filename = problem.filename;
        row.attempts = problem.attempts;
        row.tag_id = problem.tag_id;
        Ok(row.clone())
    }

    async fn get_problem(&self, problem_id: i64) -> Result<Option<Problem>> {
        self.check_reads()?;
        Ok(self.tables.lock().unwrap().problems.get(&problem_id).cloned())
    }

    async fn get_problem_points(&self, problem_id: i64) -> Result<Option<ProblemPoints>> {
        self.check_reads()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .problems
            .get(&problem_id)
            .map(ProblemPoints::from))
    }

    async fn create_tag(&self, description: &str) -> Result<Tag> {
        Ok(Tag {
            id: self.next_id(),
            description: description.to_string(),
        })
    }

    async fn create_student(&self, student: CreateAccountRequest) -> Result<Student> {
        let id = self.add_student(&student.password);
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .students
            .get_mut(&id)
            .ok_or_else(|| TrackerError::not_found(format!("student {id}")))?;
        row.name = student.name;
        Ok(row.clone())
    }

    async fn get_student_password(&self, student_id: i64) -> Result<Option<String>> {
        self.check_reads()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .students
            .get(&student_id)
            .map(|s| s.password.clone()))
    }

    async fn create_teacher(&self, teacher: CreateAccountRequest) -> Result<Teacher> {
        let id = self.add_teacher(&teacher.password);
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .teachers
            .get_mut(&id)
            .ok_or_else(|| TrackerError::not_found(format!("teacher {id}")))?;
        row.name = teacher.name;
        Ok(row.clone())
    }

    async fn get_all_teachers(&self) -> Result<Vec<TeacherCredential>> {
        self.check_reads()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .teachers
            .values()
            .map(|t| TeacherCredential {
                id: t.id,
                password: t.password.clone(),
            })
            .collect())
    }

    async fn insert_attendance(&self, student_id: i64, at: DateTime<Utc>) -> Result<Attendance> {
        let row = Attendance {
            id: self.next_id(),
            student_id,
            attended_at: at,
        };
        self.tables.lock().unwrap().attendance.push(row.clone());
        Ok(row)
    }

    async fn count_attendance(&self, student_id: i64) -> Result<u64> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .attendance
            .iter()
            .filter(|a| a.student_id == student_id)
            .count() as u64)
    }

    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission> {
        let now = Utc::now();
        let row = Submission {
            id: self.next_id(),
            problem_id: submission.problem_id,
            student_id: submission.student_id,
            content: submission.content,
            priority: submission.priority,
            created_at: now,
            completed_at: submission.completed.then_some(now),
        };
        self.tables
            .lock()
            .unwrap()
            .submissions
            .insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_submission(&self, submission_id: i64) -> Result<Option<Submission>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .submissions
            .get(&submission_id)
            .cloned())
    }

    async fn complete_submission(&self, submission_id: i64, at: DateTime<Utc>) -> Result<bool> {
        let mut tables = self.tables.lock().unwrap();
        match tables.submissions.get_mut(&submission_id) {
            Some(row) => {
                row.completed_at = Some(at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_feedback(&self, feedback: CreateFeedbackRequest) -> Result<Feedback> {
        Ok(Feedback {
            id: self.next_id(),
            teacher_id: feedback.teacher_id,
            student_id: feedback.student_id,
            content: feedback.content,
            created_at: Utc::now(),
        })
    }
}
