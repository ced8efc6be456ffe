// 日志适配器
// 把宿主的日志接口转发给私有的 tracing 订阅器

use crate::config::{config_getter, ConfigValidator};
use crate::errors::LoggerError;
use crate::logging::{Formatter, Output, Severity, Sink, FATAL_TARGET};
use aionix_common::{ExtraConfig, Logger};
use std::fmt::{Display, Write as _};
use std::io;
use tracing::dispatcher;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;

/// fatal 写完记录后调用的退出函数
pub type ExitHandler = fn(i32) -> !;

/// 基于 tracing 的网关日志适配器
///
/// 内部订阅器的级别固定为 TRACE，是否输出完全由适配器自己的阈值决定。
/// 订阅器只在每次调用期间作为当前线程的默认订阅器生效，不影响进程的全局
/// 订阅器。
///
/// # Example
///
/// ```
/// use aionix_logger::config::{Config, TextFormatterConfig};
/// use aionix_logger::{log_info, new_logger, Sink};
///
/// let config = Config {
///     level: "INFO".to_string(),
///     module: "gateway".to_string(),
///     text_formatter: Some(TextFormatterConfig::default()),
///     ..Config::default()
/// };
/// let sinks: Vec<Sink> = vec![Box::new(std::io::sink()) as Sink];
/// let logger = new_logger(&config.to_extra_config(), sinks)?;
/// log_info!(logger, "listening on port ", 8080);
/// # Ok::<(), aionix_logger::LoggerError>(())
/// ```
#[derive(Debug)]
pub struct TracingLogger {
    dispatch: Dispatch,
    output: Output,
    level: Severity,
    module: String,
    exit: ExitHandler,
}

/// 从扩展配置创建日志适配器
///
/// `sinks` 由调用方提供并持有；配置中 `stdout` 为真时再追加标准输出。
pub fn new_logger(extra: &ExtraConfig, sinks: Vec<Sink>) -> Result<TracingLogger, LoggerError> {
    TracingLogger::new(extra, sinks)
}

impl TracingLogger {
    pub fn new(extra: &ExtraConfig, mut sinks: Vec<Sink>) -> Result<Self, LoggerError> {
        let config = config_getter(extra).ok_or(LoggerError::WrongConfig)?;
        let level = ConfigValidator::validate(&config)?;
        let formatter = Formatter::from_config(&config);

        if config.stdout {
            sinks.push(Box::new(io::stdout()));
        }
        // syslog 暂不支持
        let output = Output::new(sinks);

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_writer(output.clone())
            .event_format(formatter)
            .finish();

        tracing::debug!(
            module = %config.module,
            level = %level,
            sinks = output.len(),
            "日志适配器创建完成"
        );

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            output,
            level,
            module: config.module,
            exit: std::process::exit,
        })
    }

    /// 替换 fatal 使用的退出函数
    pub fn with_exit_handler(mut self, exit: ExitHandler) -> Self {
        self.exit = exit;
        self
    }

    /// 阈值
    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// 输出目标数量，包括配置追加的标准输出
    pub fn sink_count(&self) -> usize {
        self.output.len()
    }

    fn log(&self, severity: Severity, values: &[&dyn Display]) {
        if !self.level.allows(severity) {
            return;
        }
        self.emit(severity, values);
    }

    fn emit(&self, severity: Severity, values: &[&dyn Display]) {
        let message = render(values);
        let module = self.module.as_str();

        dispatcher::with_default(&self.dispatch, || match severity {
            Severity::Debug => tracing::debug!(module = module, "{}", message),
            Severity::Info => tracing::info!(module = module, "{}", message),
            Severity::Warning => tracing::warn!(module = module, "{}", message),
            Severity::Error | Severity::Critical => {
                tracing::error!(module = module, "{}", message)
            }
        });
    }
}

/// 按顺序拼接所有值
fn render(values: &[&dyn Display]) -> String {
    let mut message = String::new();
    for value in values {
        let _ = write!(message, "{}", value);
    }
    message
}

impl Logger for TracingLogger {
    fn debug(&self, values: &[&dyn Display]) {
        self.log(Severity::Debug, values);
    }

    fn info(&self, values: &[&dyn Display]) {
        self.log(Severity::Info, values);
    }

    fn warning(&self, values: &[&dyn Display]) {
        self.log(Severity::Warning, values);
    }

    fn error(&self, values: &[&dyn Display]) {
        self.log(Severity::Error, values);
    }

    /// 不经过阈值判断，以 error 级别输出
    fn critical(&self, values: &[&dyn Display]) {
        self.emit(Severity::Critical, values);
    }

    /// 不经过阈值判断，写出 fatal 记录后退出进程
    fn fatal(&self, values: &[&dyn Display]) {
        let message = render(values);
        let module = self.module.as_str();

        dispatcher::with_default(&self.dispatch, || {
            tracing::error!(target: FATAL_TARGET, module = module, "{}", message)
        });

        if let Err(e) = self.output.flush() {
            tracing::warn!(module = module, error = %e, "退出前刷新日志输出失败");
        }
        (self.exit)(1)
    }
}
