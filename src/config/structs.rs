use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub scoring: ScoringConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
    /// 追加写入的日志文件，空字符串表示只输出到标准输出
    pub log_file: String,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 会话口令配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub startup_passcode_length: usize,
    pub reload_passcode_length: usize,
}

/// 评分配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub unknown_problem: UnknownProblemPolicy,
}

/// 评分时题目不存在的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownProblemPolicy {
    /// 返回失败结果，不写入成绩
    #[default]
    Reject,
    /// 按 merit = effort = 0 计分
    Zero,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            startup_passcode_length: 12,
            reload_passcode_length: 20,
        }
    }
}
