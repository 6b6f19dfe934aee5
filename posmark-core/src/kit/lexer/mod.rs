//! Reference lexer host
//!
//! A small rule-driven lexer that implements [`Cursor`](crate::position::Cursor)
//! and [`Produce`](crate::position::Produce), used to drive the position
//! tracker end to end.

pub mod cursor;
pub mod lexer;
pub mod rules;
pub mod token;

pub use cursor::TextCursor;
pub use lexer::RuleLexer;
pub use rules::{literal, one_char, take_while, Matcher, Rule};
pub use token::Token;
