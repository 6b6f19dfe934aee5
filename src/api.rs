//! 高层 API - 供 CLI 和库用户使用
//!
//! 用标准规则集对源文本分词，并为每个 token 附加位置区间。
//!
//! # 使用示例
//! ```
//! use posmark::api::tokenize;
//!
//! let output = tokenize("abc\nmno").unwrap();
//! assert_eq!(output.tokens.len(), 3);
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use posmark_config::CursorConfig;
use posmark_core::kit::lexer::{one_char, take_while, RuleLexer, Token};
use posmark_core::position::{Cursor, PositionError, PositionPlugin};

use crate::config::{self, Config};

/// 不匹配时错误信息里最多带出的字符数
const SNIPPET_CHARS: usize = 16;

/// API 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 插件安装失败
    #[error(transparent)]
    Position(#[from] PositionError),

    /// 没有规则匹配剩余输入
    #[error("unexpected input at {line}:{column}: {snippet:?}")]
    UnexpectedInput {
        offset: usize,
        line: usize,
        column: usize,
        snippet: String,
    },
}

impl ApiError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            ApiError::UnexpectedInput { line, .. } => Some(*line),
            ApiError::Position(_) => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            ApiError::UnexpectedInput { column, .. } => Some(*column),
            ApiError::Position(_) => None,
        }
    }
}

/// 分词输出
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeOutput {
    /// 位置所挂的属性名
    pub property: String,
    pub tokens: Vec<Token>,
}

/// 标准规则集
///
/// 按顺序尝试：`newline`、`space`、`number`、`text`、`punct`。
pub fn standard_lexer(input: &str, config: &CursorConfig) -> RuleLexer {
    let mut lexer = RuleLexer::with_config(input, config.clone());
    lexer
        .capture("newline", one_char('\n'))
        .capture("space", take_while(|c| c != '\n' && c.is_whitespace()))
        .capture("number", take_while(|c| c.is_ascii_digit()))
        .capture("text", take_while(|c| c.is_alphanumeric() || c == '_'))
        .capture("punct", |input: &str| {
            input
                .chars()
                .next()
                .filter(char::is_ascii_punctuation)
                .map(char::len_utf8)
        });
    lexer
}

/// 使用全局配置分词
///
/// 全局配置未初始化时使用默认配置。
///
/// # Errors
/// 遇到任何规则都不匹配的字符时返回 `ApiError::UnexpectedInput`
pub fn tokenize(source: &str) -> Result<TokenizeOutput, ApiError> {
    tokenize_with_config(source, config::config())
}

/// 使用指定配置分词
#[instrument(target = "posmark::lexer", skip(source, config), fields(len = source.len()))]
pub fn tokenize_with_config(source: &str, config: &Config) -> Result<TokenizeOutput, ApiError> {
    info!(target: "posmark::lexer", "Starting tokenizer");

    let host = standard_lexer(source, &config.cursor);
    let mut lexer = PositionPlugin::from_config(&config.position).install(host)?;
    let tokens = lexer.tokenize();

    if !lexer.remaining().is_empty() {
        let snippet: String = lexer.remaining().chars().take(SNIPPET_CHARS).collect();
        debug!(target: "posmark::lexer", offset = lexer.offset(), snippet = %snippet, "Tokenizer stopped early");
        return Err(ApiError::UnexpectedInput {
            offset: lexer.offset(),
            line: lexer.line(),
            column: lexer.column(),
            snippet,
        });
    }

    info!(target: "posmark::lexer", "Tokenizer completed: {} tokens", tokens.len());
    Ok(TokenizeOutput {
        property: lexer.property().to_string(),
        tokens,
    })
}
