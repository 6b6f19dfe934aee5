//! Rule-driven lexer
//!
//! Tries its rules in registration order against the remaining input and
//! produces one [`Token`] per match. The lexer declares itself a
//! [`Capability::Lexer`] so the position plugin can be installed onto it.
//!
//! # Example
//!
//! ```rust,ignore
//! use posmark_core::kit::lexer::{take_while, RuleLexer};
//! use posmark_core::position::PositionPlugin;
//!
//! let mut lexer = RuleLexer::new("foo bar");
//! lexer.capture("text", take_while(char::is_alphanumeric));
//! lexer.capture("space", take_while(|c| c == ' '));
//!
//! let mut lexer = PositionPlugin::default().install(lexer)?;
//! let tokens = lexer.tokenize();
//! ```

use tracing::{debug, trace, warn};

use posmark_config::CursorConfig;

use super::cursor::TextCursor;
use super::rules::{Matcher, Rule};
use super::token::Token;
use crate::position::{Capability, Cursor, Emitter, Produce};

pub struct RuleLexer {
    cursor: TextCursor,
    rules: Vec<Rule>,
}

impl RuleLexer {
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_cursor(TextCursor::new(input))
    }

    pub fn with_config(input: impl Into<String>, config: CursorConfig) -> Self {
        Self::with_cursor(TextCursor::with_config(input, config))
    }

    /// Wrap an existing cursor; the lexer takes over its capability marker
    pub fn with_cursor(mut cursor: TextCursor) -> Self {
        cursor.set_capability(Some(Capability::Lexer));
        trace!(target: "posmark::lexer", "Creating new RuleLexer");
        Self {
            cursor,
            rules: Vec::new(),
        }
    }

    /// Register a rule producing tokens of `kind`
    ///
    /// Rules are tried in registration order; the first match wins.
    pub fn capture(&mut self, kind: impl Into<String>, matcher: impl Matcher + 'static) -> &mut Self {
        let rule = Rule::new(kind, matcher);
        debug!(target: "posmark::lexer", kind = rule.kind(), "Registered rule");
        self.rules.push(rule);
        self
    }

    /// Run only the rule named `kind` at the current position
    pub fn handle(&mut self, kind: &str) -> Option<Token> {
        let Some(rule) = self.rules.iter().find(|rule| rule.kind() == kind) else {
            warn!(target: "posmark::lexer", kind, "Unknown rule");
            return None;
        };
        run_rule(&mut self.cursor, rule)
    }

    /// Produce tokens until the input is exhausted or no rule matches
    ///
    /// Tokens carry no positions; install the position plugin for that.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.cursor.is_eof() {
            match self.advance() {
                Some(token) => tokens.push(token),
                None => break,
            }
        }
        tokens
    }

    pub fn rule_kinds(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::kind)
    }

    pub fn cursor(&self) -> &TextCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut TextCursor {
        &mut self.cursor
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }
}

fn run_rule(cursor: &mut TextCursor, rule: &Rule) -> Option<Token> {
    let len = rule.match_len(cursor.remaining())?;
    let value = cursor.consume(len).to_string();
    debug!(target: "posmark::lexer",
        kind = rule.kind(),
        value = %value,
        line = cursor.line(),
        column = cursor.column(),
        "Produced token"
    );
    Some(Token::new(rule.kind(), value))
}

impl Cursor for RuleLexer {
    fn offset(&self) -> usize {
        self.cursor.offset()
    }

    fn line(&self) -> usize {
        self.cursor.line()
    }

    fn column(&self) -> usize {
        self.cursor.column()
    }

    fn remaining(&self) -> &str {
        self.cursor.remaining()
    }

    fn capability(&self) -> Option<Capability> {
        self.cursor.capability()
    }

    fn source(&self) -> Option<&str> {
        self.cursor.source()
    }

    fn emitter(&self) -> Option<&dyn Emitter> {
        self.cursor.emitter()
    }
}

impl Produce for RuleLexer {
    type Item = Token;

    fn advance(&mut self) -> Option<Token> {
        if self.cursor.is_eof() {
            trace!(target: "posmark::lexer", "End of input");
            return None;
        }

        for rule in &self.rules {
            if let Some(token) = run_rule(&mut self.cursor, rule) {
                return Some(token);
            }
        }

        warn!(target: "posmark::lexer",
            offset = self.cursor.offset(),
            line = self.cursor.line(),
            column = self.cursor.column(),
            "No rule matched"
        );
        None
    }

    fn lex(&mut self, rule: &str) -> Option<Token> {
        self.handle(rule)
    }
}

impl std::fmt::Debug for RuleLexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleLexer")
            .field("cursor", &self.cursor)
            .field("rules", &self.rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::rules::{literal, one_char, take_while};
    use super::*;

    fn lexer(input: &str) -> RuleLexer {
        let mut lexer = RuleLexer::new(input);
        lexer
            .capture("newline", one_char('\n'))
            .capture("arrow", literal("=>"))
            .capture("punct", one_char('='))
            .capture("text", take_while(|c| c.is_alphanumeric()));
        lexer
    }

    #[test]
    fn test_declares_lexer_capability() {
        assert_eq!(lexer("").capability(), Some(Capability::Lexer));
    }

    #[test]
    fn test_rules_tried_in_order() {
        let mut lexer = lexer("a=>b=c");
        let kinds: Vec<String> = lexer.tokenize().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec!["text", "arrow", "text", "punct", "text"]);
        assert!(lexer.is_eof());
    }

    #[test]
    fn test_tokenize_stops_on_no_match() {
        let mut lexer = lexer("ab?cd");
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(lexer.remaining(), "?cd");
        assert_eq!(lexer.offset(), 2);
    }

    #[test]
    fn test_tokens_carry_no_positions() {
        let mut lexer = lexer("abc");
        let token = lexer.advance().unwrap();
        assert!(token.positions.is_empty());
    }

    #[test]
    fn test_handle_runs_named_rule() {
        let mut lexer = lexer("abc\n");
        assert!(lexer.handle("newline").is_none());
        assert!(lexer.handle("missing").is_none());

        let token = lexer.handle("text").unwrap();
        assert_eq!(token.value, "abc");
        let token = lexer.lex("newline").unwrap();
        assert_eq!(token.kind, "newline");
        assert_eq!((lexer.line(), lexer.column()), (2, 1));
    }

    #[test]
    fn test_offsets_only_grow() {
        let mut lexer = lexer("b\nc=>d");
        let mut last = lexer.offset();
        while lexer.advance().is_some() {
            assert!(lexer.offset() > last);
            last = lexer.offset();
        }
        assert!(lexer.is_eof());
        assert_eq!(lexer.rule_kinds().count(), 4);
    }
}
