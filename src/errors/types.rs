// 统一错误类型定义

use thiserror::Error;

/// 日志适配器错误类型
///
/// 所有错误都只在构造阶段出现，日志调用本身不会返回错误。
#[derive(Debug, Error)]
pub enum LoggerError {
    /// 命名空间下没有配置，或者配置结构不合法
    #[error("getting the extra config for the aionix-logger module")]
    WrongConfig,

    /// 无法识别的日志级别
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// 宿主配置文件加载失败
    #[error("loading the host config: {message}")]
    Load { message: String },

    /// 输出目标初始化失败
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// 获取错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WrongConfig => "WRONG_CONFIG",
            Self::UnknownLevel(_) => "UNKNOWN_LEVEL",
            Self::Load { .. } => "CONFIG_LOAD_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// 是否为配置问题（用户可以通过修改配置修复）
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// 创建未知级别错误
    pub fn unknown_level(level: impl Into<String>) -> Self {
        Self::UnknownLevel(level.into())
    }

    /// 创建配置加载错误
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for LoggerError {
    fn from(err: config::ConfigError) -> Self {
        Self::load(err.to_string())
    }
}
