//! Position tracker errors

/// Errors raised by the position plugin
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The install target declares no capability marker
    #[error("expected a lexer or tokenizer instance; the target declares no capability marker")]
    InvalidTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_target_message() {
        let msg = PositionError::InvalidTarget.to_string();
        assert!(msg.starts_with("expected a lexer or tokenizer instance"));
    }
}
