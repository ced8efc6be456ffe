// Aionix Common Package
// 网关宿主与适配器共享的类型定义

pub mod types;
pub mod logger;

pub use types::*;
pub use logger::*;
