// 日志适配器设置
// 定义配置结构体和命名空间提取逻辑

use aionix_common::{extra_config_with, ExtraConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 扩展配置中本模块的命名空间
pub const NAMESPACE: &str = "github_com/aionix/aionix-logger";

/// 日志适配器配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub level: String,
    pub stdout: bool,
    /// 只做兼容保留，目前不产生任何输出
    pub syslog: bool,
    pub module: String,
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    pub text_formatter: Option<TextFormatterConfig>,
    #[serde(rename = "json", skip_serializing_if = "Option::is_none")]
    pub json_formatter: Option<JsonFormatterConfig>,
}

/// 文本格式化配置
///
/// 同时接受 snake_case 键和旧配置中的 Go 字段名（如 `DisableTimestamp`）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFormatterConfig {
    #[serde(alias = "DisableTimestamp", alias = "disabletimestamp")]
    pub disable_timestamp: bool,
    /// strftime 格式，为空时使用 RFC 3339
    #[serde(alias = "TimestampFormat", alias = "timestampformat")]
    pub timestamp_format: Option<String>,
    #[serde(alias = "DisableSorting", alias = "disablesorting")]
    pub disable_sorting: bool,
    #[serde(alias = "QuoteEmptyFields", alias = "quoteemptyfields")]
    pub quote_empty_fields: bool,
    #[serde(alias = "ForceQuote", alias = "forcequote")]
    pub force_quote: bool,
    #[serde(alias = "DisableQuote", alias = "disablequote")]
    pub disable_quote: bool,
    /// 重命名内置键：time、level、msg
    #[serde(alias = "FieldMap", alias = "fieldmap")]
    pub field_map: HashMap<String, String>,
}

/// JSON 格式化配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonFormatterConfig {
    #[serde(alias = "DisableTimestamp", alias = "disabletimestamp")]
    pub disable_timestamp: bool,
    #[serde(alias = "TimestampFormat", alias = "timestampformat")]
    pub timestamp_format: Option<String>,
    /// 非空时自定义字段嵌套在该键下
    #[serde(alias = "DataKey", alias = "datakey")]
    pub data_key: Option<String>,
    /// 重命名内置键：time、level、msg
    #[serde(alias = "FieldMap", alias = "fieldmap")]
    pub field_map: HashMap<String, String>,
    #[serde(alias = "PrettyPrint", alias = "prettyprint")]
    pub pretty_print: bool,
}

impl Config {
    /// 把配置放进一个新的扩展配置中
    pub fn to_extra_config(&self) -> ExtraConfig {
        // Config 只包含字符串、布尔值和字符串映射，序列化不会失败
        let value = serde_json::to_value(self).unwrap_or_default();
        extra_config_with(NAMESPACE, value)
    }
}

/// 从扩展配置中提取日志配置
///
/// 命名空间不存在或者结构不合法时都返回 `None`，调用方无法区分两者。
pub fn config_getter(extra: &ExtraConfig) -> Option<Config> {
    let value = extra.get(NAMESPACE)?;

    match serde_json::from_value::<Config>(value.clone()) {
        Ok(config) => Some(config),
        Err(e) => {
            debug!(namespace = NAMESPACE, error = %e, "日志配置结构不合法");
            None
        }
    }
}
