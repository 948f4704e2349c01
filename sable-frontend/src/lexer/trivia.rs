//! Whitespace and comment skipping for the Sable lexer

use crate::lexer::Lexer;
use crate::parser::ParseError;

impl Lexer<'_> {
    /// Consume whitespace and comments up to the next token
    pub(crate) fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match (self.current_char(), self.peek_char(1)) {
                (Some(ch), _) if ch.is_whitespace() => self.advance_while(char::is_whitespace),
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skip `//` up to (not including) the end of the line
    fn skip_line_comment(&mut self) {
        self.advance_while(|ch| ch != '\n');
    }

    /// Skip `/* ... */`, stopping at the first `*/`
    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let start = self.tracker.location();
        self.advance(); // '/'
        self.advance(); // '*'

        while let Some(ch) = self.advance() {
            if ch == '*' && self.current_char() == Some('/') {
                self.advance();
                return Ok(());
            }
        }

        Err(ParseError::UnterminatedComment {
            span: self.tracker.span_from(start),
        })
    }
}
