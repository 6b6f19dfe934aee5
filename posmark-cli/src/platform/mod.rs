//! 平台适配层 - 终端格式化输出

pub mod cli;

pub use cli::{print_error_with_source, render_source_context};
