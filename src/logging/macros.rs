// 日志宏
// 接收任意数量的可显示值，转发给 `Logger` 的对应方法

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.warning(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.critical(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.fatal(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}
