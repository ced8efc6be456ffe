// 诊断日志设置
// 适配器自身的诊断信息走进程全局的 tracing 订阅器

use crate::logging::Severity;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 诊断日志初始化器
pub struct LoggingSetup;

impl LoggingSetup {
    /// 默认的诊断日志过滤规则
    pub const DEFAULT_FILTER: &'static str = "warn";

    /// 初始化诊断日志，输出到标准错误
    ///
    /// 过滤规则优先读取 RUST_LOG，没有时使用 `warn`。全局订阅器已经存在时
    /// 保持原样。
    pub fn init_diagnostics() {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(Self::DEFAULT_FILTER))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact();

        if tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .try_init()
            .is_err()
        {
            tracing::debug!("全局订阅器已存在，跳过诊断日志初始化");
        }
    }

    /// 解析命令行中的日志级别，大小写不敏感，WARN 视为 WARNING
    pub fn parse_level(level: &str) -> Option<Severity> {
        match level.to_uppercase().as_str() {
            "WARN" => Some(Severity::Warning),
            name => Severity::from_name(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(LoggingSetup::parse_level("debug"), Some(Severity::Debug));
        assert_eq!(LoggingSetup::parse_level("Info"), Some(Severity::Info));
        assert_eq!(LoggingSetup::parse_level("warn"), Some(Severity::Warning));
        assert_eq!(LoggingSetup::parse_level("WARNING"), Some(Severity::Warning));
        assert_eq!(LoggingSetup::parse_level("critical"), Some(Severity::Critical));
        assert_eq!(LoggingSetup::parse_level("verbose"), None);
    }

    #[test]
    fn test_init_diagnostics_twice() {
        LoggingSetup::init_diagnostics();
        LoggingSetup::init_diagnostics();
    }
}
