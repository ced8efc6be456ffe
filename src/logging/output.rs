// 日志输出目标

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// 调用方提供的输出目标
pub type Sink = Box<dyn Write + Send>;

/// 一组共享的输出目标
///
/// 每条格式化好的记录通过一次 `write` 交给所有目标，每个目标在自己的锁内
/// 完整写入，因此并发调用的记录不会交错。
#[derive(Clone)]
pub struct Output {
    sinks: Arc<Vec<Mutex<Sink>>>,
}

impl Output {
    pub fn new(sinks: Vec<Sink>) -> Self {
        Self {
            sinks: Arc::new(sinks.into_iter().map(Mutex::new).collect()),
        }
    }

    /// 输出目标数量
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// 刷新所有输出目标
    pub fn flush(&self) -> io::Result<()> {
        self.make_writer().flush()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl<'a> MakeWriter<'a> for Output {
    type Writer = OutputWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        OutputWriter {
            sinks: &self.sinks,
        }
    }
}

/// 单次写入使用的写入器
pub struct OutputWriter<'a> {
    sinks: &'a [Mutex<Sink>],
}

fn lock(sink: &Mutex<Sink>) -> io::Result<std::sync::MutexGuard<'_, Sink>> {
    sink.lock()
        .map_err(|_| io::Error::other("log sink mutex poisoned"))
}

impl Write for OutputWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.sinks {
            [] => {}
            [sink] => lock(sink)?.write_all(buf)?,
            sinks => {
                // 任何一个目标失败都不影响其余目标收到同一份记录
                let mut first_err = None;
                for sink in sinks {
                    if let Err(e) = lock(sink).and_then(|mut w| w.write_all(buf)) {
                        first_err.get_or_insert(e);
                    }
                }
                if let Some(e) = first_err {
                    return Err(e);
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in self.sinks {
            lock(sink)?.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> Vec<u8> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_single_sink() {
        let buffer = SharedBuffer::default();
        let output = Output::new(vec![Box::new(buffer.clone()) as Sink]);

        output.make_writer().write_all(b"line\n").unwrap();

        assert_eq!(output.len(), 1);
        assert_eq!(buffer.contents(), b"line\n");
    }

    #[test]
    fn test_fan_out_is_identical() {
        let first = SharedBuffer::default();
        let second = SharedBuffer::default();
        let output = Output::new(vec![
            Box::new(first.clone()) as Sink,
            Box::new(second.clone()) as Sink,
        ]);

        let mut writer = output.make_writer();
        writer.write_all(b"one\n").unwrap();
        writer.write_all(b"two\n").unwrap();

        assert_eq!(first.contents(), b"one\ntwo\n");
        assert_eq!(first.contents(), second.contents());
    }

    #[test]
    fn test_no_sinks_discards() {
        let output = Output::new(Vec::new());
        assert!(output.is_empty());
        assert_eq!(output.make_writer().write(b"dropped").unwrap(), 7);
        output.flush().unwrap();
    }

    #[test]
    fn test_failing_sink_does_not_starve_others() {
        let buffer = SharedBuffer::default();
        let output = Output::new(vec![Box::new(FailingSink) as Sink, Box::new(buffer.clone()) as Sink]);

        let err = output.make_writer().write(b"record\n").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(buffer.contents(), b"record\n");
    }

    #[test]
    fn test_output_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Output>();
    }
}
