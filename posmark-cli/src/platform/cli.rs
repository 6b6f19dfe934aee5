//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use posmark::{ApiError, Baseline};

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源代码上下文
///
/// `baseline` 是错误里行列号的起点，用于换算成源码的行下标。
pub fn print_error_with_source(e: &ApiError, source: &str, baseline: Baseline) {
    eprintln!("error: {}", e);

    if let (Some(line), Some(column)) = (e.line(), e.column()) {
        let base = baseline.as_usize();
        if let Some(context) = render_source_context(source, line + 1 - base, column + 1 - base) {
            eprint!("{}", context);
        }
    }
}

/// 渲染源代码上下文，`error_line` 与 `error_col` 均从 1 开始
///
/// 行号越界时返回 `None`。
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> Option<String> {
    let lines: Vec<&str> = source.split('\n').collect();
    if error_line == 0 || error_line > lines.len() {
        return None;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(lines.len());
    let width = end_line.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("{}|--\n", "-".repeat(width + 1)));
    for line_idx in start_line..=end_line {
        out.push_str(&format!("{:>width$} | {}\n", line_idx, lines[line_idx - 1], width = width));
        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{:>width$} | {}^\n", "", marker, width = width));
        }
    }
    out.push_str(&format!("{}|--\n", "-".repeat(width + 1)));
    Some(out)
}
