// 错误处理系统测试

use crate::errors::LoggerError;
use std::io;

#[test]
fn test_wrong_config_message() {
    let error = LoggerError::WrongConfig;
    assert_eq!(
        error.to_string(),
        "getting the extra config for the aionix-logger module"
    );
    assert_eq!(error.error_code(), "WRONG_CONFIG");
    assert!(error.is_configuration_error());
}

#[test]
fn test_unknown_level_message() {
    let error = LoggerError::unknown_level("UNKNOWN");
    assert_eq!(error.to_string(), "unknown log level: UNKNOWN");
    assert_eq!(error.error_code(), "UNKNOWN_LEVEL");
}

#[test]
fn test_unknown_level_keeps_empty_value() {
    let error = LoggerError::unknown_level("");
    assert_eq!(error.to_string(), "unknown log level: ");
}

#[test]
fn test_load_error() {
    let error = LoggerError::load("file not found");
    assert_eq!(error.to_string(), "loading the host config: file not found");
    assert_eq!(error.error_code(), "CONFIG_LOAD_ERROR");
    assert!(error.is_configuration_error());
}

#[test]
fn test_io_error_conversion() {
    let error: LoggerError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
    assert_eq!(error.error_code(), "IO_ERROR");
    assert_eq!(error.to_string(), "denied");
    assert!(!error.is_configuration_error());
}

#[test]
fn test_config_error_conversion() {
    let error: LoggerError = config::ConfigError::Message("bad table".to_string()).into();
    assert_eq!(error.error_code(), "CONFIG_LOAD_ERROR");
    assert!(error.to_string().contains("bad table"));
}
