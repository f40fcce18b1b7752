//! Runtime value definitions.
//!
//! A [`Value`] is a closed tagged union over everything a Monkey program
//! can produce. Each variant carries a type tag (`INTEGER`, `BOOLEAN`,
//! ...) used in error messages, and renders itself through `inspect()`.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use monkey_par::ast::{BlockStmt, Identifier};
use rustc_hash::FxHasher;

use crate::environment::Env;

/// Native function signature for built-ins.
pub type BuiltinFn = fn(Vec<Value>) -> Value;

/// A Monkey runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Str(String),
    Null,
    /// Wrapper that bubbles an early return through nested blocks until a
    /// function boundary (or the program top) unwraps it.
    Return(Box<Value>),
    /// A runtime error propagating outward through evaluation.
    Error(String),
    Function(Function),
    Builtin(BuiltinFn),
    Array(Vec<Value>),
    /// Hash values keep insertion order so `inspect()` is deterministic.
    Hash(IndexMap<HashKey, HashPair>),
}

/// A user-defined function: parameters, body, and the environment
/// captured when the literal was evaluated (the closure).
#[derive(Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
    pub env: Env,
}

// The captured environment may transitively contain this function, so
// the derived Debug would recurse forever.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Key for hash values: the operand's type tag plus a 64-bit content
/// hash. Two keys are equal iff both components match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: &'static str,
    pub value: u64,
}

/// A key-value pair stored in a hash.
///
/// The original key value is kept alongside so `inspect()` can render it.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

impl Value {
    /// Shorthand for constructing an error value.
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    /// The type tag used in error messages and hash keys.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    /// Renders the value for display, as pinned by the REPL contract.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Returns true if this value is a runtime error.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Computes the hash key for a hashable value.
    ///
    /// Only integers, booleans and strings are hashable; everything else
    /// returns `None` and surfaces as `unusable as hash key`.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(value) => Some(HashKey {
                kind: self.type_name(),
                value: *value as u64,
            }),
            Value::Boolean(value) => Some(HashKey {
                kind: self.type_name(),
                value: u64::from(*value),
            }),
            Value::Str(value) => {
                let mut hasher = FxHasher::default();
                value.hash(&mut hasher);
                Some(HashKey {
                    kind: self.type_name(),
                    value: hasher.finish(),
                })
            },
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Str(value) => f.write_str(value),
            Value::Null => f.write_str("null"),
            Value::Return(value) => write!(f, "{}", value),
            Value::Error(message) => write!(f, "ERROR: {}", message),
            Value::Function(function) => {
                let params: Vec<String> = function
                    .parameters
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), function.body)
            },
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Array(elements) => {
                let elements: Vec<String> =
                    elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Value::Hash(pairs) => {
                let pairs: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
        }
    }
}

// Structural equality for data values. Functions and builtins have no
// structural identity and never compare equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            _ => false,
        }
    }
}
