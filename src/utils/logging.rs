use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";
const LOG_FILE_NAME: &str = "stock-history.log";

/// 日志时间使用 UTC+8 (上海时区)
struct ShanghaiTime;

impl FormatTime for ShanghaiTime {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Utc::now().with_timezone(&Shanghai);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// LOG_TO_FILE=true|1 时返回日志目录（LOG_DIR，默认 ./logs）
fn file_log_dir(log_to_file: Option<String>, log_dir: Option<String>) -> Option<String> {
    let enabled = log_to_file.is_some_and(|v| v == "true" || v == "1");
    enabled.then(|| log_dir.unwrap_or_else(|| "./logs".to_string()))
}

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 控制台输出层（始终启用）
    let console_layer = fmt::layer()
        .with_timer(ShanghaiTime)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // 按天轮转的文件层，Option<Layer> 为 None 时不输出
    let file_layer = file_log_dir(std::env::var("LOG_TO_FILE").ok(), std::env::var("LOG_DIR").ok()).map(|dir| {
        fmt::layer()
            .with_timer(ShanghaiTime)
            .with_writer(RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME))
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logging_is_opt_in() {
        assert_eq!(file_log_dir(None, None), None);
        assert_eq!(file_log_dir(Some("false".into()), Some("/var/log".into())), None);
        assert_eq!(file_log_dir(Some("1".into()), None).as_deref(), Some("./logs"));
        assert_eq!(
            file_log_dir(Some("true".into()), Some("/var/log/stock".into())).as_deref(),
            Some("/var/log/stock")
        );
    }
}
