//! 全局配置系统
//!
//! 提供线程安全的全局配置单例：日志级别、游标和位置属性配置。
//!
//! # 使用示例
//! ```
//! use posmark::config::{Config, LogConfig, init, config};
//! use tracing::Level;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: Level::DEBUG,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! init(cfg).unwrap();
//! assert_eq!(config().log.global, Level::DEBUG);
//! ```

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::Level;

use posmark_config::{CursorConfig, FileConfig, Phase, PositionConfig};

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config already initialized")]
    AlreadyInitialized,
}

/// 初始化全局配置（只能调用一次）
pub fn init(config: Config) -> Result<(), ConfigError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// 获取全局配置引用
///
/// 未初始化时以默认配置完成初始化。
pub fn config() -> &'static Config {
    GLOBAL_CONFIG.get_or_init(Config::default)
}

/// 检查配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// 全局配置结构
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 日志配置
    pub log: LogConfig,
    /// 游标配置（行列基准、来源标签、事件开关）
    pub cursor: CursorConfig,
    /// 位置属性配置
    pub position: PositionConfig,
}

impl Config {
    /// 在默认配置上叠加配置文件
    pub fn from_file(file: &FileConfig) -> Self {
        let mut config = Config::default();
        file.apply(&mut config.cursor, &mut config.position);
        if let Some(level) = file.log_level.as_deref().and_then(parse_level) {
            config.log.global = level;
        }
        config
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 全局默认日志级别
    pub global: Level,
    /// Cursor 日志级别（None 表示使用 global）
    pub cursor: Option<Level>,
    /// Position 日志级别
    pub position: Option<Level>,
    /// Lexer 日志级别
    pub lexer: Option<Level>,
    /// CLI 日志级别
    pub cli: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            cursor: None,
            position: None,
            lexer: None,
            cli: None,
        }
    }
}

impl LogConfig {
    /// 获取指定阶段的实际日志级别
    ///
    /// 如果该阶段有特定配置则返回特定级别，否则返回全局级别
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Cursor => self.cursor,
            Phase::Position => self.position,
            Phase::Lexer => self.lexer,
            Phase::Cli => self.cli,
        };
        specific.unwrap_or(self.global)
    }
}

/// 解析日志级别字符串
///
/// `"silent"` 只保留错误日志。
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" | "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posmark_config::Baseline;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.log.global, Level::INFO);
        assert_eq!(cfg.cursor.baseline, Baseline::One);
        assert_eq!(cfg.position.property, "position");
    }

    #[test]
    fn test_log_level_for() {
        let cfg = LogConfig {
            global: Level::WARN,
            lexer: Some(Level::DEBUG),
            ..Default::default()
        };

        assert_eq!(cfg.level_for(Phase::Lexer), Level::DEBUG);
        assert_eq!(cfg.level_for(Phase::Position), Level::WARN);
        assert_eq!(cfg.level_for(Phase::Cli), Level::WARN);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("silent"), Some(Level::ERROR));
        assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_from_file() {
        let file: FileConfig = serde_json::from_str(
            r#"{ "baseline": "zero", "property": "loc", "log_level": "trace" }"#,
        )
        .unwrap();
        let cfg = Config::from_file(&file);
        assert_eq!(cfg.cursor.baseline, Baseline::Zero);
        assert!(cfg.cursor.emit_events);
        assert_eq!(cfg.position.property, "loc");
        assert_eq!(cfg.log.global, Level::TRACE);
    }
}
