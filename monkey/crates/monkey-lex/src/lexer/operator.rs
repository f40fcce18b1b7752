//! Operator lexing for the two-character cases.
//!
//! Single-character operators are handled directly in `next_token`; only
//! `=`/`==` and `!`/`!=` need a peek.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::Eq
        } else {
            Token::Assign
        }
    }

    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::NotEq
        } else {
            Token::Bang
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_assign_vs_eq() {
        assert_eq!(lex_all("="), vec![Token::Assign]);
        assert_eq!(lex_all("=="), vec![Token::Eq]);
        assert_eq!(lex_all("= ="), vec![Token::Assign, Token::Assign]);
    }

    #[test]
    fn test_bang_vs_not_eq() {
        assert_eq!(lex_all("!"), vec![Token::Bang]);
        assert_eq!(lex_all("!="), vec![Token::NotEq]);
        assert_eq!(lex_all("!!"), vec![Token::Bang, Token::Bang]);
    }

    #[test]
    fn test_triple_equals() {
        // `===` lexes as `==` then `=`
        assert_eq!(lex_all("==="), vec![Token::Eq, Token::Assign]);
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(
            lex_all("+-*/<>"),
            vec![
                Token::Plus,
                Token::Minus,
                Token::Asterisk,
                Token::Slash,
                Token::Lt,
                Token::Gt,
            ]
        );
    }
}
