// 日志记录格式化
// 把 tracing 事件渲染成 key=value 文本或 JSON 行

use crate::config::{Config, JsonFormatterConfig, TextFormatterConfig};
use chrono::{Local, SecondsFormat};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// fatal 记录使用的事件 target，tracing 本身没有 fatal 级别
pub const FATAL_TARGET: &str = "aionix_logger::fatal";

/// 记录格式
#[derive(Debug, Clone, PartialEq)]
pub enum Formatter {
    Text(TextFormatterConfig),
    Json(JsonFormatterConfig),
}

impl Default for Formatter {
    fn default() -> Self {
        Self::Text(TextFormatterConfig::default())
    }
}

/// 从事件中提取出的记录内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub level: &'static str,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl Record {
    fn from_event(event: &Event<'_>) -> Self {
        let mut record = Record {
            level: level_name(event),
            ..Record::default()
        };
        event.record(&mut RecordVisitor(&mut record));
        record
    }
}

struct RecordVisitor<'a>(&'a mut Record);

impl Visit for RecordVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.0.message = value.to_string(),
            name => self.0.fields.push((name.to_string(), value.to_string())),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.0.message = format!("{:?}", value),
            name => self.0.fields.push((name.to_string(), format!("{:?}", value))),
        }
    }
}

fn level_name(event: &Event<'_>) -> &'static str {
    let metadata = event.metadata();
    if metadata.target() == FATAL_TARGET {
        return "fatal";
    }
    match *metadata.level() {
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warning",
        Level::ERROR => "error",
        _ => "trace",
    }
}

/// 当前时间，格式无效时退回 RFC 3339
fn timestamp(format: Option<&str>) -> String {
    let now = Local::now();
    if let Some(format) = format.filter(|f| !f.is_empty()) {
        let mut out = String::new();
        if write!(out, "{}", now.format(format)).is_ok() {
            return out;
        }
    }
    now.to_rfc3339_opts(SecondsFormat::Secs, false)
}

impl Formatter {
    /// json 优先，其次 text，都没有时使用默认文本格式
    pub fn from_config(config: &Config) -> Self {
        match (&config.json_formatter, &config.text_formatter) {
            (Some(json), _) => Self::Json(json.clone()),
            (None, Some(text)) => Self::Text(text.clone()),
            (None, None) => Self::default(),
        }
    }

    /// 渲染一条记录，结果以换行结尾
    pub fn format_record(&self, record: &Record) -> Result<String, fmt::Error> {
        match self {
            Self::Text(config) => Ok(format_text(config, record)),
            Self::Json(config) => format_json(config, record).map_err(|_| fmt::Error),
        }
    }
}

/// 按 field_map 重命名内置键
fn mapped_key<'a>(field_map: &'a HashMap<String, String>, name: &'a str) -> &'a str {
    field_map.get(name).map(String::as_str).unwrap_or(name)
}

fn needs_quoting(config: &TextFormatterConfig, text: &str) -> bool {
    if config.force_quote {
        return true;
    }
    if config.quote_empty_fields && text.is_empty() {
        return true;
    }
    if config.disable_quote {
        return false;
    }
    !text
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+'))
}

fn append_pair(config: &TextFormatterConfig, line: &mut String, key: &str, value: &str) {
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(key);
    line.push('=');
    if needs_quoting(config, value) {
        // String 的 Debug 输出即带转义的双引号字符串
        let _ = write!(line, "{:?}", value);
    } else {
        line.push_str(value);
    }
}

fn format_text(config: &TextFormatterConfig, record: &Record) -> String {
    let mut line = String::new();

    if !config.disable_timestamp {
        let time = timestamp(config.timestamp_format.as_deref());
        append_pair(config, &mut line, mapped_key(&config.field_map, "time"), &time);
    }
    append_pair(config, &mut line, mapped_key(&config.field_map, "level"), record.level);
    append_pair(config, &mut line, mapped_key(&config.field_map, "msg"), &record.message);

    let mut fields: Vec<&(String, String)> = record.fields.iter().collect();
    if !config.disable_sorting {
        fields.sort_by(|a, b| a.0.cmp(&b.0));
    }
    for (key, value) in fields {
        append_pair(config, &mut line, key, value);
    }

    line.push('\n');
    line
}

fn format_json(config: &JsonFormatterConfig, record: &Record) -> serde_json::Result<String> {
    let data: Map<String, Value> = record
        .fields
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    let mut root = match config.data_key.as_deref().filter(|k| !k.is_empty()) {
        Some(data_key) => {
            let mut root = Map::new();
            root.insert(data_key.to_string(), Value::Object(data));
            root
        }
        None => data,
    };

    let key = |name: &str| mapped_key(&config.field_map, name).to_string();

    if !config.disable_timestamp {
        let time = timestamp(config.timestamp_format.as_deref());
        root.insert(key("time"), Value::String(time));
    }
    root.insert(key("level"), Value::String(record.level.to_string()));
    root.insert(key("msg"), Value::String(record.message.clone()));

    let mut out = if config.pretty_print {
        serde_json::to_string_pretty(&root)?
    } else {
        serde_json::to_string(&root)?
    };
    out.push('\n');
    Ok(out)
}

impl<S, N> FormatEvent<S, N> for Formatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let record = Record::from_event(event);
        let line = self.format_record(&record)?;
        writer.write_str(&line)
    }
}
