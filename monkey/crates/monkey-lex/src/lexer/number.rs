//! Integer literal lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal: a maximal run of ASCII digits.
    ///
    /// Monkey has no floats, no signs (negation is a prefix expression)
    /// and no radix prefixes.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        Token::Int(self.cursor.slice_from(self.token_start).to_string())
    }
}
