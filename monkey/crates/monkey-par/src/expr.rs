//! Expression parsing using Pratt Parsing (Top-Down Operator Precedence)
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators |
//! |-------|-----------|
//! | EQUALS | `==`, `!=` |
//! | LESSGREATER | `<`, `>` |
//! | SUM | `+`, `-` |
//! | PRODUCT | `*`, `/` |
//! | PREFIX | `!x`, `-x` |
//! | CALL | `f(...)` |
//! | INDEX | `a[...]` |
//!
//! All infix operators are left-associative: parsing the right-hand side
//! at the operator's own precedence makes `a - b - c` come out as
//! `((a - b) - c)`.

use monkey_lex::TokenKind;

use crate::ast::{
    ArrayLiteral, BooleanLiteral, CallExpr, Expr, FunctionLiteral, HashLiteral, Identifier,
    IfExpr, IndexExpr, InfixExpr, IntegerLiteral, PrefixExpr, StringLiteral,
};
use crate::Parser;

/// Precedence levels for Pratt parsing.
/// Higher numbers bind tighter.
pub mod prec {
    /// Lowest precedence (start of expression).
    pub const LOWEST: u8 = 0;

    /// Equality: `==`, `!=`
    pub const EQUALS: u8 = 1;

    /// Comparison: `<`, `>`
    pub const LESSGREATER: u8 = 2;

    /// Additive: `+`, `-`
    pub const SUM: u8 = 3;

    /// Multiplicative: `*`, `/`
    pub const PRODUCT: u8 = 4;

    /// Prefix operators: `-x`, `!x`
    pub const PREFIX: u8 = 5;

    /// Call: `myFunction(x)`
    pub const CALL: u8 = 6;

    /// Index: `array[index]`
    pub const INDEX: u8 = 7;
}

/// Precedence of a token when it appears in infix position.
///
/// Tokens without an infix role sit at [`prec::LOWEST`], which makes the
/// Pratt loop stop in front of them.
fn token_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => prec::EQUALS,
        TokenKind::Lt | TokenKind::Gt => prec::LESSGREATER,
        TokenKind::Plus | TokenKind::Minus => prec::SUM,
        TokenKind::Slash | TokenKind::Asterisk => prec::PRODUCT,
        TokenKind::LParen => prec::CALL,
        TokenKind::LBracket => prec::INDEX,
        _ => prec::LOWEST,
    }
}

impl<'a> Parser<'a> {
    /// Pratt parser core.
    ///
    /// Parses a prefix expression as the left-hand side, then, while the
    /// peek token is not `;` and binds tighter than `precedence`, folds
    /// infix expressions around it.
    pub(crate) fn parse_expression(&mut self, precedence: u8) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Precedence of the current token in infix position.
    pub(crate) fn current_precedence(&self) -> u8 {
        token_precedence(self.current_token().kind())
    }

    /// Precedence of the peek token in infix position.
    pub(crate) fn peek_precedence(&self) -> u8 {
        token_precedence(self.peek_token().kind())
    }

    /// Parses the expression introduced by the current token.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current_token().kind() {
            TokenKind::Ident => Some(Expr::Identifier(Identifier {
                token: self.current_token().clone(),
                value: self.current_token().literal().to_string(),
            })),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Some(Expr::StringLiteral(StringLiteral {
                token: self.current_token().clone(),
                value: self.current_token().literal().to_string(),
            })),
            TokenKind::True | TokenKind::False => Some(Expr::Boolean(BooleanLiteral {
                token: self.current_token().clone(),
                value: self.current_is(TokenKind::True),
            })),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.error(format!("no prefix parse function for {} found", kind));
                None
            },
        }
    }

    /// Applies the infix parse function for the current token to `left`.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.current_token().kind() {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => self.parse_infix_expression(left),
            TokenKind::LParen => self.parse_call_expression(left),
            TokenKind::LBracket => self.parse_index_expression(left),
            // No infix role; cannot be reached through the precedence gate.
            _ => Some(left),
        }
    }

    /// Parses an integer literal from the current token.
    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.current_token().clone();

        let value = match token.literal().parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.error(format!(
                    "could not parse '{}' as integer",
                    token.literal()
                ));
                return None;
            },
        };

        Some(Expr::IntegerLiteral(IntegerLiteral { token, value }))
    }

    /// Parses `!<expr>` or `-<expr>`.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.current_token().clone();
        let operator = token.literal().to_string();

        self.advance();
        let right = self.parse_expression(prec::PREFIX)?;

        Some(Expr::Prefix(PrefixExpr {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses `<left> <op> <right>` with the current token as operator.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current_token().clone();
        let operator = token.literal().to_string();
        let precedence = self.current_precedence();

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix(InfixExpr {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses `( <expr> )`.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();

        let expr = self.parse_expression(prec::LOWEST)?;

        self.expect_peek(TokenKind::RParen)?;

        Some(expr)
    }

    /// Parses `if (<cond>) { <conseq> }` with an optional `else` block.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.current_token().clone();

        self.expect_peek(TokenKind::LParen)?;

        self.advance();
        let condition = self.parse_expression(prec::LOWEST)?;

        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;

        let consequence = self.parse_block_stmt();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_stmt())
        } else {
            None
        };

        Some(Expr::If(IfExpr {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Parses `fn(<params>) { <body> }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.current_token().clone();

        self.expect_peek(TokenKind::LParen)?;

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;

        let body = self.parse_block_stmt();

        Some(Expr::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parses a comma-separated parameter list up to `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(identifiers);
        }

        self.advance();
        identifiers.push(Identifier {
            token: self.current_token().clone(),
            value: self.current_token().literal().to_string(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            identifiers.push(Identifier {
                token: self.current_token().clone(),
                value: self.current_token().literal().to_string(),
            });
        }

        self.expect_peek(TokenKind::RParen)?;

        Some(identifiers)
    }

    /// Parses `[ <elements> ]`.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let token = self.current_token().clone();

        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expr::Array(ArrayLiteral { token, elements }))
    }

    /// Parses a comma-separated expression list terminated by `end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Some(list);
        }

        self.advance();
        list.push(self.parse_expression(prec::LOWEST)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            list.push(self.parse_expression(prec::LOWEST)?);
        }

        self.expect_peek(end)?;

        Some(list)
    }

    /// Parses `<function>(<arguments>)` with `left` as the callee.
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let token = self.current_token().clone();

        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::Call(CallExpr {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Parses `<left>[<index>]`.
    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current_token().clone();

        self.advance();
        let index = self.parse_expression(prec::LOWEST)?;

        self.expect_peek(TokenKind::RBracket)?;

        Some(Expr::Index(IndexExpr {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    /// Parses `{ <key>: <value>, ... }`.
    ///
    /// Duplicate keys are accepted; the evaluator resolves them.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let token = self.current_token().clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(prec::LOWEST)?;

            self.expect_peek(TokenKind::Colon)?;

            self.advance();
            let value = self.parse_expression(prec::LOWEST)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;

        Some(Expr::Hash(HashLiteral { token, pairs }))
    }
}
