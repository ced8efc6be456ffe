// 通用类型定义

use serde_json::Value;
use std::collections::HashMap;

/// 扩展配置
///
/// 宿主把各模块的配置块按命名空间存放在这里，值是任意结构化数据，
/// 由各模块自行解析。
pub type ExtraConfig = HashMap<String, Value>;

/// 创建只包含一个命名空间的扩展配置
pub fn extra_config_with(namespace: &str, value: Value) -> ExtraConfig {
    let mut extra = ExtraConfig::new();
    extra.insert(namespace.to_string(), value);
    extra
}
