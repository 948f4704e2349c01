//! Numeric literal scanning for the Sable lexer
//!
//! The lexer only decides the literal's kind; turning the text into a value
//! happens when the parser builds the literal node.

use crate::lexer::{Lexer, TokenKind};

impl Lexer<'_> {
    /// Tokenize `digits '.' digits` as a float, otherwise `digits` as an integer
    pub(crate) fn tokenize_number(&mut self) -> TokenKind {
        self.advance_while(|ch| ch.is_ascii_digit());

        let is_fraction = self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|ch| ch.is_ascii_digit());
        if !is_fraction {
            return TokenKind::IntLiteral;
        }

        self.advance(); // '.'
        self.advance_while(|ch| ch.is_ascii_digit());
        TokenKind::FloatLiteral
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{tokenize, TokenKind};
    use crate::parser::ParseError;

    #[test]
    fn test_integer_and_float() {
        let tokens = tokenize("42 3.14 007").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[0].text, "42");
        assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[1].text, "3.14");
        assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[2].text, "007");
    }

    #[test]
    fn test_float_is_one_token() {
        let tokens = tokenize("12.50").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[0].span.len(), 5);
    }

    #[test]
    fn test_trailing_dot_is_not_a_float() {
        let err = tokenize("1.").unwrap_err();
        match err {
            ParseError::UnrecognizedCharacter { character, span } => {
                assert_eq!(character, '.');
                assert_eq!(span.start.offset, 1);
            }
            other => panic!("Expected unrecognized character, got {:?}", other),
        }
    }

    #[test]
    fn test_number_followed_by_identifier() {
        let tokens = tokenize("2x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }
}
