use serde::Deserialize;

// 账号创建请求，学生与教师共用
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub password: String,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".to_string());
        }
        if self.password.is_empty() {
            return Err("Password must not be empty".to_string());
        }
        Ok(())
    }
}
