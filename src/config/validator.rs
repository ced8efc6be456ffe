// 配置验证器

use crate::config::Config;
use crate::errors::LoggerError;
use crate::logging::Severity;
use tracing::warn;

/// 配置验证器
pub struct ConfigValidator;

impl ConfigValidator {
    /// 验证配置并解析日志级别
    pub fn validate(config: &Config) -> Result<Severity, LoggerError> {
        let severity = Self::validate_level(&config.level)?;

        if config.text_formatter.is_some() && config.json_formatter.is_some() {
            warn!(module = %config.module, "同时配置了 text 和 json 格式，使用 json");
        }

        if config.syslog {
            warn!(module = %config.module, "syslog 输出尚未实现，忽略该选项");
        }

        Ok(severity)
    }

    /// 验证日志级别名称
    pub fn validate_level(level: &str) -> Result<Severity, LoggerError> {
        Severity::from_name(level).ok_or_else(|| LoggerError::unknown_level(level))
    }
}
