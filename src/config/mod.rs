// 配置管理模块
// 从宿主的扩展配置中提取并校验日志配置

pub mod settings;
pub mod loader;
pub mod validator;


pub use settings::*;
pub use loader::*;
pub use validator::*;
