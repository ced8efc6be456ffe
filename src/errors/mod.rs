// 错误处理模块
// 定义适配器的统一错误类型

pub mod types;

#[cfg(test)]
mod tests;

pub use types::*;
