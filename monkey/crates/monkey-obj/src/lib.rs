//! monkey-obj - The Monkey runtime value universe.
//!
//! Defines the tagged [`Value`] type the evaluator produces, the
//! [`Environment`] scope chain that implements lexical binding, and the
//! fixed table of built-in functions.
//!
//! Errors and early returns are themselves values (`Value::Error`,
//! `Value::Return`); the evaluator threads them through nested evaluation
//! instead of using host-language control flow.

pub mod builtins;
pub mod environment;
pub mod value;

pub use environment::{Env, Environment};
pub use value::{Function, HashKey, HashPair, Value};
