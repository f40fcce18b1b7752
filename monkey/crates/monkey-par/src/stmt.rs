//! Statement parsing - let, return, expression statements and blocks.

use monkey_lex::TokenKind;

use crate::ast::{BlockStmt, ExprStmt, Identifier, LetStmt, ReturnStmt, Stmt};
use crate::expr::prec;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses a statement, dispatching on the current token.
    pub(crate) fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current_token().kind() {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    fn parse_let_stmt(&mut self) -> Option<Stmt> {
        let token = self.current_token().clone();

        self.expect_peek(TokenKind::Ident)?;

        let name = Identifier {
            token: self.current_token().clone(),
            value: self.current_token().literal().to_string(),
        };

        self.expect_peek(TokenKind::Assign)?;

        self.advance();
        let value = self.parse_expression(prec::LOWEST)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Let(LetStmt { token, name, value }))
    }

    /// Parses `return <expression>;`.
    fn parse_return_stmt(&mut self) -> Option<Stmt> {
        let token = self.current_token().clone();

        self.advance();
        let return_value = self.parse_expression(prec::LOWEST)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Return(ReturnStmt {
            token,
            return_value,
        }))
    }

    /// Parses an expression in statement position, with an optional
    /// trailing semicolon.
    fn parse_expr_stmt(&mut self) -> Option<Stmt> {
        let token = self.current_token().clone();

        let expression = self.parse_expression(prec::LOWEST)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Expr(ExprStmt { token, expression }))
    }

    /// Parses `{ <statements> }`.
    ///
    /// Stops at `}` or end of input; a block itself cannot fail, only its
    /// statements can.
    pub(crate) fn parse_block_stmt(&mut self) -> BlockStmt {
        let token = self.current_token().clone();
        let mut statements = Vec::new();

        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_stmt() {
                statements.push(stmt);
            }
            self.advance();
        }

        BlockStmt { token, statements }
    }
}
