//! Lexical environments.
//!
//! An [`Environment`] maps names to values and optionally links to an
//! enclosing environment. Lookups walk the chain outward; `set` writes
//! only to the local map, so inner scopes never mutate outer ones.
//!
//! Environments are shared through [`Env`] (`Rc<RefCell<_>>`) because
//! closures keep their defining scope alive after the evaluator has left
//! it. The `outer` links alone never form a cycle; only a function bound
//! in its own defining environment does.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Shared handle to an environment.
pub type Env = Rc<RefCell<Environment>>;

/// A single scope: local bindings plus an optional enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: FxHashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh top-level environment.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Function application binds parameters in one of these, layered
    /// over the function's captured environment.
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: FxHashMap::default(),
            outer: Some(outer),
        }))
    }

    /// Resolves a name, searching the local map first and then the
    /// enclosing chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this environment.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
