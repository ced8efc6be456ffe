// Aionix Logger Library
// 网关日志适配器：从扩展配置创建基于 tracing 的结构化日志

pub mod config;
pub mod errors;
pub mod logging;

pub use aionix_common::{ExtraConfig, Logger};
pub use crate::config::{config_getter, Config, NAMESPACE};
pub use crate::errors::LoggerError;
pub use crate::logging::{new_logger, Severity, Sink, TracingLogger};
