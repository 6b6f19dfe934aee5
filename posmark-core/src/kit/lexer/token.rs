//! Token produced by [`RuleLexer`](super::RuleLexer)

use serde::{Deserialize, Serialize};

use crate::position::{PositionRange, Positioned, Positions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Kind of the rule that produced the token
    pub kind: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Positions::is_empty")]
    pub positions: Positions,
}

impl Token {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            positions: Positions::new(),
        }
    }

    /// Range attached under the default property name
    pub fn position(&self) -> Option<&PositionRange> {
        self.positions.primary()
    }
}

impl Positioned for Token {
    fn set_position(&mut self, name: &str, position: PositionRange) {
        self.positions.insert(name, position);
    }

    fn get_position(&self, name: &str) -> Option<&PositionRange> {
        self.positions.get(name)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)?;
        if let Some(position) = self.position() {
            write!(f, " @ {}", position)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Location;

    #[test]
    fn test_token_display() {
        let mut token = Token::new("text", "foo");
        assert_eq!(token.to_string(), "text \"foo\"");

        token.set_position(
            "position",
            PositionRange::new(Location::new(0, 1, 1), Location::new(3, 1, 4), None),
        );
        assert_eq!(token.to_string(), "text \"foo\" @ 1:1-1:4");
    }

    #[test]
    fn test_token_json_skips_empty_positions() {
        let token = Token::new("punct", ";");
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "punct", "value": ";" }));
    }

    #[test]
    fn test_token_json_with_position() {
        let mut token = Token::new("text", "ab");
        token.set_position(
            "position",
            PositionRange::new(Location::new(0, 1, 1), Location::new(2, 1, 3), None),
        );
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["positions"]["position"]["start"]["offset"], 0);
        assert_eq!(json["positions"]["position"]["end"]["column"], 3);
    }
}
