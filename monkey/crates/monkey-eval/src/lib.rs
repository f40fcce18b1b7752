//! monkey-eval - Tree-walking evaluator for the Monkey language.
//!
//! [`eval_program`] recursively walks the AST and produces a [`Value`].
//! Two sentinel values steer control flow instead of host-language
//! exceptions:
//!
//! - `Value::Error` short-circuits every enclosing evaluation and
//!   propagates outward unchanged.
//! - `Value::Return` bubbles through nested blocks untouched and is
//!   unwrapped exactly once, at the nearest function boundary or at the
//!   program top.
//!
//! Statements may produce no value at all (a `let` binds and yields
//! nothing), which is why statement evaluation returns `Option<Value>`
//! while expression evaluation always returns a `Value`.


use indexmap::IndexMap;

use monkey_obj::{builtins, Env, Environment, Function, HashPair, Value};
use monkey_par::ast::{
    BlockStmt, Expr, HashLiteral, Identifier, IfExpr, Program, Stmt,
};

/// Evaluates a program against the given environment.
///
/// The result of the final statement is the result of the program; a
/// `return` unwraps its value here, and the first error aborts the rest.
pub fn eval_program(program: &Program, env: &Env) -> Option<Value> {
    let mut result = None;

    for stmt in &program.statements {
        match eval_stmt(stmt, env) {
            Some(Value::Return(value)) => return Some(*value),
            Some(Value::Error(message)) => return Some(Value::Error(message)),
            other => result = other,
        }
    }

    result
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a `Return` is passed through *without*
/// unwrapping, so it keeps propagating through enclosing blocks.
fn eval_block(block: &BlockStmt, env: &Env) -> Option<Value> {
    let mut result = None;

    for stmt in &block.statements {
        match eval_stmt(stmt, env) {
            Some(value @ (Value::Return(_) | Value::Error(_))) => return Some(value),
            other => result = other,
        }
    }

    result
}

/// Evaluates a single statement. `None` means the statement produced no
/// value (a successful `let`).
fn eval_stmt(stmt: &Stmt, env: &Env) -> Option<Value> {
    match stmt {
        Stmt::Expr(stmt) => Some(eval_expr(&stmt.expression, env)),
        Stmt::Let(stmt) => {
            let value = eval_expr(&stmt.value, env);
            if value.is_error() {
                return Some(value);
            }
            env.borrow_mut().set(stmt.name.value.clone(), value);
            None
        },
        Stmt::Return(stmt) => {
            let value = eval_expr(&stmt.return_value, env);
            if value.is_error() {
                return Some(value);
            }
            Some(Value::Return(Box::new(value)))
        },
        Stmt::Block(block) => eval_block(block, env),
    }
}

/// Evaluates an expression.
fn eval_expr(expr: &Expr, env: &Env) -> Value {
    match expr {
        Expr::IntegerLiteral(literal) => Value::Integer(literal.value),
        Expr::StringLiteral(literal) => Value::Str(literal.value.clone()),
        Expr::Boolean(literal) => Value::Boolean(literal.value),
        Expr::Identifier(identifier) => eval_identifier(identifier, env),
        Expr::Prefix(prefix) => {
            let right = eval_expr(&prefix.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&prefix.operator, right)
        },
        Expr::Infix(infix) => {
            let left = eval_expr(&infix.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expr(&infix.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&infix.operator, left, right)
        },
        Expr::If(if_expr) => eval_if_expression(if_expr, env),
        Expr::Function(literal) => Value::Function(Function {
            parameters: literal.parameters.clone(),
            body: literal.body.clone(),
            env: env.clone(),
        }),
        Expr::Call(call) => {
            let function = eval_expr(&call.function, env);
            if function.is_error() {
                return function;
            }
            match eval_expressions(&call.arguments, env) {
                Ok(args) => apply_function(function, args),
                Err(error) => error,
            }
        },
        Expr::Array(array) => match eval_expressions(&array.elements, env) {
            Ok(elements) => Value::Array(elements),
            Err(error) => error,
        },
        Expr::Index(index) => {
            let left = eval_expr(&index.left, env);
            if left.is_error() {
                return left;
            }
            let idx = eval_expr(&index.index, env);
            if idx.is_error() {
                return idx;
            }
            eval_index_expression(left, idx)
        },
        Expr::Hash(hash) => eval_hash_literal(hash, env),
    }
}

/// Evaluates expressions left to right; the first error aborts and is
/// returned alone.
fn eval_expressions(exprs: &[Expr], env: &Env) -> Result<Vec<Value>, Value> {
    let mut result = Vec::with_capacity(exprs.len());

    for expr in exprs {
        let value = eval_expr(expr, env);
        if value.is_error() {
            return Err(value);
        }
        result.push(value);
    }

    Ok(result)
}

fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => eval_bang_operator(right),
        "-" => eval_minus_prefix(right),
        _ => Value::error(format!(
            "unknown operator: {}{}",
            operator,
            right.type_name()
        )),
    }
}

/// `!x` follows truthiness on the canonical values: `!true` and `!false`
/// invert, `!null` is `true`, and everything else is `false`.
fn eval_bang_operator(right: Value) -> Value {
    match right {
        Value::Boolean(value) => Value::Boolean(!value),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

fn eval_minus_prefix(right: Value) -> Value {
    match right {
        Value::Integer(value) => Value::Integer(value.wrapping_neg()),
        other => Value::error(format!("unknown operator: -{}", other.type_name())),
    }
}

/// Dispatches an infix operation.
///
/// The arm order is pinned: integer pairs, then string pairs, then
/// `==`/`!=` on anything, then type mismatch, then unknown operator.
/// `5 == true` is therefore `false`, not a type mismatch.
fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r)
        },
        (Value::Str(l), Value::Str(r)) => eval_string_infix_expression(operator, l, r),
        _ => match operator {
            "==" => Value::Boolean(values_equal(&left, &right)),
            "!=" => Value::Boolean(!values_equal(&left, &right)),
            _ if left.type_name() != right.type_name() => Value::error(format!(
                "type mismatch: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            )),
            _ => Value::error(format!(
                "unknown operator: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            )),
        },
    }
}

/// Equality for the `==`/`!=` arms that integers and strings never
/// reach: canonical booleans and null compare by value, everything else
/// is unequal.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// Integer arithmetic wraps on overflow.
fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Value::error("division by zero: INTEGER / INTEGER")
            } else {
                Value::Integer(left.wrapping_div(right))
            }
        },
        "<" => Value::Boolean(left < right),
        ">" => Value::Boolean(left > right),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        _ => Value::error(format!(
            "unknown operator: INTEGER {} INTEGER",
            operator
        )),
    }
}

/// Strings support only concatenation.
fn eval_string_infix_expression(operator: &str, left: &str, right: &str) -> Value {
    if operator != "+" {
        return Value::error(format!("unknown operator: STRING {} STRING", operator));
    }

    let mut result = String::with_capacity(left.len() + right.len());
    result.push_str(left);
    result.push_str(right);
    Value::Str(result)
}

fn eval_if_expression(if_expr: &IfExpr, env: &Env) -> Value {
    let condition = eval_expr(&if_expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(&if_expr.consequence, env).unwrap_or(Value::Null)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_block(alternative, env).unwrap_or(Value::Null)
    } else {
        Value::Null
    }
}

/// `null` and `false` are falsy; every other value is truthy.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}

/// Resolves an identifier through the environment chain, then the
/// built-ins table.
fn eval_identifier(identifier: &Identifier, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(&identifier.value) {
        return value;
    }

    if let Some(builtin) = builtins::lookup(&identifier.value) {
        return builtin;
    }

    Value::error(format!("identifier not found: {}", identifier.value))
}

/// Applies a function or built-in to already-evaluated arguments.
fn apply_function(function: Value, args: Vec<Value>) -> Value {
    match function {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Value::error(format!(
                    "wrong number of arguments: want={}, got={}",
                    function.parameters.len(),
                    args.len()
                ));
            }

            let env = extend_function_env(&function, args);
            let evaluated = eval_block(&function.body, &env).unwrap_or(Value::Null);
            unwrap_return_value(evaluated)
        },
        Value::Builtin(builtin) => builtin(args),
        other => Value::error(format!("not a function: {}", other.type_name())),
    }
}

/// Builds the call environment: a fresh scope enclosed by the function's
/// captured environment, with parameters bound positionally.
fn extend_function_env(function: &Function, args: Vec<Value>) -> Env {
    let env = Environment::new_enclosed(function.env.clone());

    for (param, arg) in function.parameters.iter().zip(args) {
        env.borrow_mut().set(param.value.clone(), arg);
    }

    env
}

/// Unwraps a top-level `Return` on the way out of a function call, so a
/// `return` never escapes its function.
fn unwrap_return_value(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}

fn eval_index_expression(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(position)) => {
            let position = *position;
            if position < 0 || position as usize >= elements.len() {
                Value::Null
            } else {
                elements[position as usize].clone()
            }
        },
        (Value::Hash(pairs), _) => match index.hash_key() {
            Some(key) => pairs
                .get(&key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Value::Null),
            None => Value::error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => Value::error(format!(
            "index operator not supported: {}",
            left.type_name()
        )),
    }
}

/// Evaluates hash literal pairs in order. Keys must be hashable; a
/// duplicate key overwrites the earlier value in place.
fn eval_hash_literal(hash: &HashLiteral, env: &Env) -> Value {
    let mut pairs = IndexMap::new();

    for (key_expr, value_expr) in &hash.pairs {
        let key = eval_expr(key_expr, env);
        if key.is_error() {
            return key;
        }

        let Some(hash_key) = key.hash_key() else {
            return Value::error(format!("unusable as hash key: {}", key.type_name()));
        };

        let value = eval_expr(value_expr, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(hash_key, HashPair { key, value });
    }

    Value::Hash(pairs)
}
