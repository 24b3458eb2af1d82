//! Variable bindings consulted by evaluation.

use std::collections::hash_map;
use std::collections::HashMap;

use crate::expr::Expr;

/// Mapping from variable names to bound expressions.
///
/// A binding does not have to be a constant: `x -> y + 1` is legal, and evaluation follows
/// such chains through the same context.
///
/// ```
/// use sym_rs::{make_constant, Context};
///
/// let ctx = Context::from([("x", make_constant(2.0)), ("y", make_constant(3.0))]);
/// assert_eq!(ctx.len(), 2);
///
/// let ctx = Context::new().with("x", 2.0).with("y", 3.0);
/// assert!(ctx.contains("y"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    bindings: HashMap<String, Expr>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, returning the previous binding if there was one.
    pub fn bind(&mut self, name: impl Into<String>, expr: impl Into<Expr>) -> Option<Expr> {
        self.bindings.insert(name.into(), expr.into())
    }

    /// Builder-style [`bind`][Context::bind].
    pub fn with(mut self, name: impl Into<String>, expr: impl Into<Expr>) -> Self {
        self.bind(name, expr);
        self
    }

    pub fn unbind(&mut self, name: &str) -> Option<Expr> {
        self.bindings.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over bindings in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Expr> {
        self.bindings.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Expr)> for Context {
    fn from_iter<I: IntoIterator<Item = (N, Expr)>>(iter: I) -> Self {
        let mut ctx = Context::new();
        ctx.extend(iter);
        ctx
    }
}

impl<N: Into<String>> Extend<(N, Expr)> for Context {
    fn extend<I: IntoIterator<Item = (N, Expr)>>(&mut self, iter: I) {
        for (name, expr) in iter {
            self.bind(name, expr);
        }
    }
}

impl<N: Into<String>, const K: usize> From<[(N, Expr); K]> for Context {
    fn from(bindings: [(N, Expr); K]) -> Self {
        bindings.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = (&'a String, &'a Expr);
    type IntoIter = hash_map::Iter<'a, String, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
