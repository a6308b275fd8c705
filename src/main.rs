use std::path::Path;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use rust_gem_tracker::config::AppConfig;
use rust_gem_tracker::runtime::lifetime;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let (stdout_writer, _stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let development = config.is_development();

    let pretty_layer = development.then(|| {
        fmt::layer()
            .with_writer(stdout_writer.clone())
            .with_level(true)
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
    });
    let json_layer = (!development).then(|| fmt::layer().json().with_writer(stdout_writer));

    // 评分失败等事件同时追加到日志文件
    let (file_layer, _file_guard) = match config.log_file() {
        Some(log_file) => {
            let path = Path::new(log_file);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().unwrap_or(path.as_os_str());
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.app.log_level))
        .with(pretty_layer)
        .with(json_layer)
        .with(file_layer)
        .init();

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .expect("Failed to prepare storage and services");

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    warn!(
        "{} is ready, session passcode: {}",
        config.app.system_name,
        startup.teachers.passcode().await
    );

    lifetime::shutdown::listen_for_shutdown().await;

    warn!(
        "Shutting down with {} active student session(s)",
        startup.roster.session_count().await
    );
}
