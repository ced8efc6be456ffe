// 宿主日志接口

use std::fmt::Display;

/// 网关日志接口
///
/// 宿主框架只通过这六个操作写日志。每个操作接收任意数量的可显示值，
/// 由实现按顺序拼接成一条消息。
///
/// 实现必须是 `Send + Sync`，宿主会在多个线程间共享同一个实例。
pub trait Logger: Send + Sync {
    fn debug(&self, values: &[&dyn Display]);

    fn info(&self, values: &[&dyn Display]);

    fn warning(&self, values: &[&dyn Display]);

    fn error(&self, values: &[&dyn Display]);

    /// 严重错误，不受阈值过滤
    fn critical(&self, values: &[&dyn Display]);

    /// 致命错误，写出记录后终止进程
    fn fatal(&self, values: &[&dyn Display]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingLogger {
        fn push(&self, level: &str, values: &[&dyn Display]) {
            let msg: String = values.iter().map(|v| v.to_string()).collect();
            self.lines.lock().unwrap().push(format!("{}:{}", level, msg));
        }
    }

    impl Logger for RecordingLogger {
        fn debug(&self, values: &[&dyn Display]) {
            self.push("debug", values);
        }
        fn info(&self, values: &[&dyn Display]) {
            self.push("info", values);
        }
        fn warning(&self, values: &[&dyn Display]) {
            self.push("warning", values);
        }
        fn error(&self, values: &[&dyn Display]) {
            self.push("error", values);
        }
        fn critical(&self, values: &[&dyn Display]) {
            self.push("critical", values);
        }
        fn fatal(&self, values: &[&dyn Display]) {
            self.push("fatal", values);
        }
    }

    #[test]
    fn test_logger_as_trait_object() {
        let recorder = RecordingLogger::default();
        {
            let logger: &dyn Logger = &recorder;
            logger.info(&[&"port ", &8080]);
            logger.critical(&[]);
        }

        let lines = recorder.lines.lock().unwrap();
        assert_eq!(*lines, vec!["info:port 8080".to_string(), "critical:".to_string()]);
    }
}
