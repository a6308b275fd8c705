use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::RosterService;
use crate::models::StudentSession;

pub async fn authorize_and_start_session(
    service: &RosterService,
    student_id: i64,
    password: &str,
) -> bool {
    let storage = service.get_storage();

    // 1. 验证密码，失败时不创建也不修改任何会话
    match storage.get_student_password(student_id).await {
        Ok(Some(stored)) if stored == password => {}
        Ok(Some(_)) => {
            debug!("Student {} failed authorization: wrong password", student_id);
            return false;
        }
        Ok(None) => {
            debug!("Student {} failed authorization: unknown student", student_id);
            return false;
        }
        Err(e) => {
            error!("Failed to load student {}: {}", student_id, e);
            return false;
        }
    }

    let now = Utc::now();

    // 2. 考勤记录与内存会话相互独立，写入失败不影响登录
    if let Err(e) = storage.insert_attendance(student_id, now).await {
        warn!("Failed to record attendance for student {}: {}", student_id, e);
    }

    // 3. 持锁创建会话并从模板复制看板
    {
        let mut state = service.lock().await;
        let boards = state.template.instantiate(now);
        let board_count = boards.len();
        state.sessions.insert(
            student_id,
            StudentSession {
                student_id,
                password: password.to_string(),
                boards,
                submission_status: 0,
            },
        );
        info!(
            "Student {} session started with {} board(s)",
            student_id, board_count
        );
    }

    true
}
