//! monkey-par - AST Node Definitions
//!
//! Every node keeps the token that introduced it, so `token_literal()`
//! can report the original source text. `Display` renders the canonical
//! pretty-print used by tests and diagnostics: prefix expressions as
//! `(op right)`, infix as `(left op right)`, index as `(left[index])`,
//! and so on.

use std::fmt;

use monkey_lex::Token;
use monkey_util::Span;

/// AST root - an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// The literal of the first statement's token, or `""` for an empty
    /// program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expr(ExprStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// The literal of the token that introduced this statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(s) => s.token.literal(),
            Stmt::Return(s) => s.token.literal(),
            Stmt::Expr(s) => s.token.literal(),
            Stmt::Block(s) => s.token.literal(),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(s) => write!(f, "{}", s),
            Stmt::Return(s) => write!(f, "{}", s),
            Stmt::Expr(s) => write!(f, "{}", s),
            Stmt::Block(s) => write!(f, "{}", s),
        }
    }
}

/// Let statement: `let name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    /// The `let` token.
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl fmt::Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {};",
            self.token.literal(),
            self.name,
            self.value
        )
    }
}

/// Return statement: `return value;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    /// The `return` token.
    pub token: Token,
    pub return_value: Expr,
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.token.literal(), self.return_value)
    }
}

/// Expression statement: an expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    /// The first token of the expression.
    pub token: Token,
    pub expression: Expr,
}

impl fmt::Display for ExprStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Block statement: `{ ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// The `{` token.
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(BooleanLiteral),
    StringLiteral(StringLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
    Array(ArrayLiteral),
    Index(IndexExpr),
    Hash(HashLiteral),
}

impl Expr {
    /// The literal of the token that introduced this expression.
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(e) => e.token.literal(),
            Expr::IntegerLiteral(e) => e.token.literal(),
            Expr::Boolean(e) => e.token.literal(),
            Expr::StringLiteral(e) => e.token.literal(),
            Expr::Prefix(e) => e.token.literal(),
            Expr::Infix(e) => e.token.literal(),
            Expr::If(e) => e.token.literal(),
            Expr::Function(e) => e.token.literal(),
            Expr::Call(e) => e.token.literal(),
            Expr::Array(e) => e.token.literal(),
            Expr::Index(e) => e.token.literal(),
            Expr::Hash(e) => e.token.literal(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(e) => write!(f, "{}", e),
            Expr::IntegerLiteral(e) => write!(f, "{}", e),
            Expr::Boolean(e) => write!(f, "{}", e),
            Expr::StringLiteral(e) => write!(f, "{}", e),
            Expr::Prefix(e) => write!(f, "{}", e),
            Expr::Infix(e) => write!(f, "{}", e),
            Expr::If(e) => write!(f, "{}", e),
            Expr::Function(e) => write!(f, "{}", e),
            Expr::Call(e) => write!(f, "{}", e),
            Expr::Array(e) => write!(f, "{}", e),
            Expr::Index(e) => write!(f, "{}", e),
            Expr::Hash(e) => write!(f, "{}", e),
        }
    }
}

/// Identifier expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Integer literal expression.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Boolean literal expression.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// String literal expression.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Prefix expression: `!right`, `-right`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    /// The operator token.
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl fmt::Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix expression: `left op right`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    /// The operator token.
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl fmt::Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If expression with optional alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    /// The `if` token.
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl fmt::Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function literal: `fn(params) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// The `fn` token.
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{}({}) {}",
            self.token.literal(),
            params.join(", "),
            self.body
        )
    }
}

/// Call expression: `function(arguments)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// The `(` token.
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}

/// Array literal: `[elements]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    /// The `[` token.
    pub token: Token,
    pub elements: Vec<Expr>,
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: Vec<String> = self.elements.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", elements.join(", "))
    }
}

/// Index expression: `left[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    /// The `[` token.
    pub token: Token,
    pub left: Box<Expr>,
    pub index: Box<Expr>,
}

impl fmt::Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

/// Hash literal: `{key: value, ...}`.
///
/// Pairs keep source order; key uniqueness is not checked at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    /// The `{` token.
    pub token: Token,
    pub pairs: Vec<(Expr, Expr)>,
}

impl fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}:{}", key, value))
            .collect();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}

/// Token with span wrapper, as produced by the lexer for the parser.
#[derive(Debug, Clone)]
pub struct TokenWithSpan {
    pub token: Token,
    pub span: Span,
}

impl TokenWithSpan {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_let_statement_display() {
        let program = Program {
            statements: vec![Stmt::Let(LetStmt {
                token: Token::Let,
                name: Identifier {
                    token: Token::Ident("myVar".to_string()),
                    value: "myVar".to_string(),
                },
                value: Expr::Identifier(Identifier {
                    token: Token::Ident("anotherVar".to_string()),
                    value: "anotherVar".to_string(),
                }),
            })],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_empty_program_token_literal() {
        let program = Program::default();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }

    #[test]
    fn test_prefix_display() {
        let expr = PrefixExpr {
            token: Token::Minus,
            operator: "-".to_string(),
            right: Box::new(Expr::IntegerLiteral(IntegerLiteral {
                token: Token::Int("5".to_string()),
                value: 5,
            })),
        };
        assert_eq!(expr.to_string(), "(-5)");
    }

    #[test]
    fn test_hash_display_keeps_order() {
        let int = |n: i64| {
            Expr::IntegerLiteral(IntegerLiteral {
                token: Token::Int(n.to_string()),
                value: n,
            })
        };
        let hash = HashLiteral {
            token: Token::LBrace,
            pairs: vec![(int(3), int(30)), (int(1), int(10)), (int(2), int(20))],
        };
        assert_eq!(hash.to_string(), "{3:30, 1:10, 2:20}");
    }
}
