//! 日志系统初始化
//!
//! 基于 `tracing` 和 `tracing-subscriber` 实现分阶段日志控制。
//!
//! # 使用示例
//! ```ignore
//! use posmark::config::LogConfig;
//! use posmark::logger::{init_with_file, LogFormat};
//!
//! init_with_file(&LogConfig::default(), LogFormat::Compact, None::<&str>)?;
//! ```

use std::io;

use thiserror::Error;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;
use posmark_config::Phase;

const PHASES: [Phase; 4] = [Phase::Cursor, Phase::Position, Phase::Lexer, Phase::Cli];

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    #[default]
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("cannot open log file: {0}")]
    File(#[from] io::Error),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// 构建各阶段的目标过滤器
pub fn targets(log_config: &LogConfig) -> Targets {
    PHASES.iter().fold(
        Targets::new().with_default(log_config.global),
        |targets, &phase| targets.with_target(phase.target(), log_config.level_for(phase)),
    )
}

/// 使用文件输出初始化日志系统
///
/// # Arguments
/// * `log_config` - 各阶段日志级别
/// * `format` - 日志格式
/// * `file` - 日志文件路径，None 表示只输出到 stderr
pub fn init_with_file<P: AsRef<std::path::Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> Result<(), LoggerError> {
    let targets = targets(log_config);

    // 日志写到 stderr，stdout 留给 token 输出
    let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    let installed = match file {
        Some(path) => {
            let file_handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;

            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file_handle))
                .with_filter(targets);

            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .try_init()
        }
        None => tracing_subscriber::registry().with(console_layer).try_init(),
    };
    installed.map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))
}

/// 根据格式创建 formatter layer
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 为当前测试初始化简单日志（仅打印到控制台）
#[cfg(test)]
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
