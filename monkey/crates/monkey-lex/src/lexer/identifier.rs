//! Identifier and keyword lexing.

use crate::lexer::core::is_letter;
use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads a maximal run of letters and underscores, then checks the
    /// keyword table. Digits never continue an identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_letter(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(text.to_string()))
    }
}
