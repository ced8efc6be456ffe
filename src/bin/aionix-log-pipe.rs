// Aionix 日志管道 CLI 工具
// 按宿主配置创建日志适配器，把标准输入的每一行转发给它

use aionix_logger::config::ExtraConfigLoader;
use aionix_logger::logging::LoggingSetup;
use aionix_logger::{log_critical, log_debug, log_error, log_fatal, log_info, log_warning};
use aionix_logger::{new_logger, Severity, Sink};
use anyhow::{bail, Context, Result};
use std::env;
use std::fs::OpenOptions;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;

/// 命令行参数
struct PipeArgs {
    config_path: Option<PathBuf>,
    level: Severity,
    fatal: bool,
    output: Option<PathBuf>,
}

fn print_help() {
    println!("Aionix 日志管道");
    println!();
    println!("用法: aionix-log-pipe [CONFIG_FILE] [OPTIONS]");
    println!();
    println!("CONFIG_FILE 省略时读取环境变量 AIONIX_LOGGER_CONFIG（支持 .env）");
    println!();
    println!("选项:");
    println!("  --level LEVEL   转发使用的级别: DEBUG|INFO|WARNING|ERROR|CRITICAL（默认 INFO）");
    println!("  --fatal         以 fatal 级别写出第一行后退出");
    println!("  --output FILE   额外追加写入的日志文件");
    println!("  -h, --help      显示帮助");
}

fn parse_args(args: &[String]) -> Result<PipeArgs> {
    let mut parsed = PipeArgs {
        config_path: None,
        level: Severity::Info,
        fatal: false,
        output: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--level" => {
                let value = iter.next().context("--level 需要一个参数")?;
                parsed.level = LoggingSetup::parse_level(value)
                    .with_context(|| format!("未知的日志级别: {}", value))?;
            }
            "--fatal" => parsed.fatal = true,
            "--output" => {
                let value = iter.next().context("--output 需要一个参数")?;
                parsed.output = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => bail!("未知的选项: {}", other),
            path => parsed.config_path = Some(PathBuf::from(path)),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    LoggingSetup::init_diagnostics();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return Ok(());
    }

    let args = parse_args(&args)?;

    let extra = match &args.config_path {
        Some(path) => ExtraConfigLoader::from_file(path),
        None => ExtraConfigLoader::from_env_file(),
    }
    .context("加载宿主配置失败")?;

    let mut sinks: Vec<Sink> = Vec::new();
    if let Some(path) = &args.output {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("无法打开日志文件: {}", path.display()))?;
        sinks.push(Box::new(file));
    }

    let logger = new_logger(&extra, sinks).context("创建日志适配器失败")?;
    info!(level = %args.level, module = logger.module(), "开始转发标准输入");

    for line in io::stdin().lock().lines() {
        let line = line.context("读取标准输入失败")?;
        if args.fatal {
            log_fatal!(logger, line);
        }
        match args.level {
            Severity::Debug => log_debug!(logger, line),
            Severity::Info => log_info!(logger, line),
            Severity::Warning => log_warning!(logger, line),
            Severity::Error => log_error!(logger, line),
            Severity::Critical => log_critical!(logger, line),
        }
    }

    Ok(())
}
