//! 教师凭据与会话口令
//!
//! 凭据表在内存中以 `Arc<TeacherDirectory>` 整体替换，读者只会看到完整的旧表或新表。

pub mod reload;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::SessionConfig;
use crate::storage::Storage;
use crate::utils::generate_passcode;

/// 某一时刻的教师凭据和共享口令
#[derive(Debug, Clone, Default)]
pub struct TeacherDirectory {
    passwords: HashMap<i64, String>,
    passcode: String,
}

impl TeacherDirectory {
    pub fn new(passwords: HashMap<i64, String>, passcode: String) -> Self {
        Self {
            passwords,
            passcode,
        }
    }

    pub fn authorize(&self, teacher_id: i64, password: &str) -> bool {
        self.passwords
            .get(&teacher_id)
            .is_some_and(|stored| stored == password)
    }

    pub fn passcode(&self) -> &str {
        &self.passcode
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

pub struct TeacherService {
    storage: Arc<dyn Storage>,
    session: SessionConfig,
    directory: RwLock<Arc<TeacherDirectory>>,
}

impl TeacherService {
    /// 创建空的教师表，并生成启动口令
    pub fn new(storage: Arc<dyn Storage>, session: SessionConfig) -> Self {
        let directory = TeacherDirectory::new(
            HashMap::new(),
            generate_passcode(session.startup_passcode_length),
        );
        Self {
            storage,
            session,
            directory: RwLock::new(Arc::new(directory)),
        }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn get_session_config(&self) -> &SessionConfig {
        &self.session
    }

    /// 当前凭据快照
    pub async fn snapshot(&self) -> Arc<TeacherDirectory> {
        self.directory.read().await.clone()
    }

    pub(crate) async fn replace(&self, directory: TeacherDirectory) {
        *self.directory.write().await = Arc::new(directory);
    }

    /// 教师验证
    pub async fn authorize_teacher(&self, teacher_id: i64, password: &str) -> bool {
        self.snapshot().await.authorize(teacher_id, password)
    }

    /// 当前共享口令
    pub async fn passcode(&self) -> String {
        self.snapshot().await.passcode().to_string()
    }

    pub async fn verify_passcode(&self, code: &str) -> bool {
        self.snapshot().await.passcode() == code
    }

    /// 从存储重新加载教师凭据并轮换口令，返回加载的教师数
    pub async fn reload_teachers(&self) -> crate::errors::Result<usize> {
        reload::reload_teachers(self).await
    }
}
