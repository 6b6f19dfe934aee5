//! 属性测试 - 位置不变量

mod common;

use common::build_lexer;
use posmark_core::kit::lexer::{take_while, RuleLexer, TextCursor};
use posmark_core::position::{Cursor, PositionPlugin};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_ranges_are_contiguous(input in "[a-z./*\n]{0,64}") {
        let mut lexer = PositionPlugin::default().install(build_lexer(&input)).unwrap();
        let tokens = lexer.tokenize();

        let mut offset = 0;
        for token in &tokens {
            let position = token.position().unwrap();
            prop_assert_eq!(position.start.offset, offset);
            prop_assert!(position.start.offset <= position.end.offset);
            prop_assert_eq!(position.len(), token.value.chars().count());
            offset = position.end.offset;
        }
        prop_assert_eq!(offset, input.chars().count());
    }

    #[test]
    fn prop_line_counts_newlines(input in "[a-z\n]{0,64}") {
        let mut lexer = PositionPlugin::default().install(build_lexer(&input)).unwrap();
        let tokens = lexer.tokenize();

        for token in &tokens {
            let position = token.position().unwrap();
            let before: String = input.chars().take(position.start.offset).collect();
            prop_assert_eq!(position.start.line, 1 + before.matches('\n').count());
            prop_assert!(position.start.column >= 1);
        }
    }

    #[test]
    fn prop_cursor_offset_counts_chars(input in "\\PC{0,32}", step in 1usize..4) {
        let mut cursor = TextCursor::new(input.clone());
        let mut last = cursor.offset();
        while !cursor.is_eof() {
            cursor.consume(step);
            prop_assert!(cursor.offset() > last);
            last = cursor.offset();
        }
        prop_assert_eq!(cursor.offset(), input.chars().count());
        prop_assert_eq!(cursor.consumed(), input.as_str());
    }

    #[test]
    fn prop_unmatched_input_leaves_cursor(input in "[0-9]{1,8}") {
        let mut host = RuleLexer::new(input.clone());
        host.capture("text", take_while(|c| c.is_alphabetic()));
        let mut lexer = PositionPlugin::default().install(host).unwrap();

        prop_assert!(lexer.advance().is_none());
        prop_assert_eq!(lexer.offset(), 0);
        prop_assert_eq!(lexer.remaining(), input.as_str());
    }
}
