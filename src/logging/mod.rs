// 日志系统模块
// 日志适配器、记录格式化、输出目标和诊断日志设置

pub mod setup;
pub mod severity;
pub mod formatter;
pub mod output;
pub mod logger;
mod macros;


pub use setup::*;
pub use severity::*;
pub use formatter::*;
pub use output::*;
pub use logger::*;
