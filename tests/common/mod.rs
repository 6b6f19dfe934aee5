//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use posmark::{tokenize_with_config, ApiError, Config, Token};

/// 使用默认配置分词
pub fn run_tokenize(source: &str) -> Result<Vec<Token>, ApiError> {
    tokenize_with_config(source, &Config::default()).map(|output| output.tokens)
}

/// `(kind, value, [start, end])` 三元组，便于断言
pub fn summarize(tokens: &[Token]) -> Vec<(String, String, [usize; 2])> {
    tokens
        .iter()
        .map(|t| {
            let range = t.position().map(|p| p.range()).unwrap_or([0, 0]);
            (t.kind.clone(), t.value.clone(), range)
        })
        .collect()
}

/// 断言 token 的起止行列
pub fn assert_span(token: &Token, start: (usize, usize), end: (usize, usize)) {
    let position = token
        .position()
        .unwrap_or_else(|| panic!("token {:?} has no position", token.value));
    assert_eq!(
        (position.start.line, position.start.column),
        start,
        "start of {:?}",
        token.value
    );
    assert_eq!(
        (position.end.line, position.end.column),
        end,
        "end of {:?}",
        token.value
    );
}
