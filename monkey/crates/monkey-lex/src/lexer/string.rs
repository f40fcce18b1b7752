//! String literal lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Reads everything between double quotes with no escape processing.
    /// An unterminated string ends at the end of input; the content up to
    /// that point is kept.
    pub(crate) fn lex_string(&mut self) -> Token {
        // Skip the opening quote.
        self.cursor.advance();
        let content_start = self.cursor.position();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(content_start).to_string();

        // Consume the closing quote if the string was terminated.
        self.cursor.match_char('"');

        Token::Str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).next_token()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex_one(r#""foobar""#), Token::Str("foobar".to_string()));
    }

    #[test]
    fn test_string_with_spaces() {
        assert_eq!(lex_one(r#""foo bar""#), Token::Str("foo bar".to_string()));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(lex_one(r#""""#), Token::Str(String::new()));
    }

    #[test]
    fn test_no_escape_processing() {
        // Backslashes are ordinary characters.
        assert_eq!(lex_one(r#""a\nb""#), Token::Str("a\\nb".to_string()));
    }

    #[test]
    fn test_unterminated_string_ends_at_eof() {
        let mut lexer = Lexer::new(r#""hello"#);
        assert_eq!(lexer.next_token(), Token::Str("hello".to_string()));
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    #[test]
    fn test_tokens_continue_after_string() {
        let mut lexer = Lexer::new(r#""a" + "b""#);
        assert_eq!(lexer.next_token(), Token::Str("a".to_string()));
        assert_eq!(lexer.next_token(), Token::Plus);
        assert_eq!(lexer.next_token(), Token::Str("b".to_string()));
    }
}
