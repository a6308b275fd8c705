use std::collections::HashMap;

use tracing::{error, info};

use super::{TeacherDirectory, TeacherService};
use crate::errors::Result;
use crate::utils::generate_passcode;

pub async fn reload_teachers(service: &TeacherService) -> Result<usize> {
    // 新表在锁外构建完成后再整体替换
    let credentials = service.get_storage().get_all_teachers().await.map_err(|e| {
        error!("Failed to load teachers, keeping previous credentials: {}", e);
        e
    })?;

    let passwords: HashMap<i64, String> = credentials
        .into_iter()
        .map(|c| (c.id, c.password))
        .collect();
    let count = passwords.len();
    let passcode = generate_passcode(service.get_session_config().reload_passcode_length);

    service
        .replace(TeacherDirectory::new(passwords, passcode))
        .await;

    info!("Loaded {} teacher credential(s), session passcode rotated", count);
    Ok(count)
}
