//! Posmark - source position tracking for lexers and parsers
//!
//! Records where every token or node began and ended (character offset,
//! line, column) and attaches the span to the produced item.
//!
//! # Architecture
//!
//! ```text
//! posmark-config/  - Pure configuration data
//! posmark-core/    - Position tracker and reference lexer (no IO)
//! src/             - Global config, logging, high level API
//! posmark-cli/     - Command line front end
//! ```
//!
//! # Quick Start
//!
//! ```
//! use posmark::tokenize;
//!
//! let output = tokenize("foo").unwrap();
//! assert_eq!(output.tokens[0].position().unwrap().range(), [0, 3]);
//! ```

pub mod api;
pub mod config;
pub mod logger;

// 重导出常用类型
pub use api::{standard_lexer, tokenize, tokenize_with_config, ApiError, TokenizeOutput};
pub use config::{Config, ConfigError, LogConfig};
pub use logger::{LogFormat, LoggerError};
pub use posmark_config::{Baseline, CursorConfig, FileConfig, Phase, PositionConfig};
pub use posmark_core::kit::lexer::{RuleLexer, TextCursor, Token};
pub use posmark_core::position::{
    create_plugin, mark, mark_with_cursor, resolve, Cursor, Location, Marker, PositionError,
    PositionPlugin, PositionRange, Positioned, Positioning, Positions, Produce, Tracked,
};
