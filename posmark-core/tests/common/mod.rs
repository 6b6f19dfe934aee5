//! 测试辅助工具
//!
//! 提供位置跟踪测试的辅助函数

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use posmark_core::kit::lexer::{one_char, take_while, RuleLexer};
use posmark_core::position::Positioned;
use posmark_core::{CursorConfig, PositionRange};

/// Lexer with the rule set used across the position tests
pub fn build_lexer(input: &str) -> RuleLexer {
    build_lexer_with_config(input, CursorConfig::default())
}

pub fn build_lexer_with_config(input: &str, config: CursorConfig) -> RuleLexer {
    let mut lexer = RuleLexer::with_config(input, config);
    lexer
        .capture("slash", one_char('/'))
        .capture("star", one_char('*'))
        .capture("text", take_while(|c| c.is_alphanumeric() || c == '_'))
        .capture("dot", one_char('.'))
        .capture("newline", one_char('\n'));
    lexer
}

/// One observed emitter call
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub position: Option<PositionRange>,
}

/// Emitter that records every call into a shared log
pub fn recording_emitter() -> (
    impl Fn(&str, &dyn Positioned) + 'static,
    Rc<RefCell<Vec<Event>>>,
) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let emitter = move |name: &str, item: &dyn Positioned| {
        sink.borrow_mut().push(Event {
            name: name.to_string(),
            position: item.get_position("position").cloned(),
        });
    };
    (emitter, events)
}
