// 日志级别定义

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use tracing::Level;

/// 配置中可用的级别名称
static SEVERITIES: Lazy<HashMap<&'static str, Severity>> = Lazy::new(|| {
    HashMap::from([
        ("DEBUG", Severity::Debug),
        ("INFO", Severity::Info),
        ("WARNING", Severity::Warning),
        ("ERROR", Severity::Error),
        ("CRITICAL", Severity::Critical),
    ])
});

/// 适配器的日志级别，按严重程度递增排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// 按配置名称查找级别，名称区分大小写
    pub fn from_name(name: &str) -> Option<Self> {
        SEVERITIES.get(name).copied()
    }

    /// 配置名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// 对应的 tracing 级别，CRITICAL 降为 ERROR
    pub fn tracing_level(&self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error | Self::Critical => Level::ERROR,
        }
    }

    /// 以该级别为阈值时是否放行 `level` 的调用
    pub fn allows(&self, level: Severity) -> bool {
        level >= *self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Severity::from_name("DEBUG"), Some(Severity::Debug));
        assert_eq!(Severity::from_name("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::from_name("WARN"), None);
        assert_eq!(Severity::from_name("info"), None);
        assert_eq!(Severity::from_name(""), None);
    }

    #[test]
    fn test_name_round_trip() {
        for name in ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"] {
            let severity = Severity::from_name(name).unwrap();
            assert_eq!(severity.as_str(), name);
            assert_eq!(severity.to_string(), name);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_allows() {
        assert!(Severity::Debug.allows(Severity::Debug));
        assert!(Severity::Warning.allows(Severity::Error));
        assert!(!Severity::Warning.allows(Severity::Info));
        assert!(!Severity::Critical.allows(Severity::Error));
    }

    #[test]
    fn test_critical_maps_to_error() {
        assert_eq!(Severity::Critical.tracing_level(), Level::ERROR);
        assert_eq!(Severity::Error.tracing_level(), Level::ERROR);
        assert_eq!(Severity::Warning.tracing_level(), Level::WARN);
    }
}
