//! Numeric evaluation and specialization.
//!
//! - [`Expr::full_eval`] computes a number, following bindings transitively. It fails if any
//!   reachable variable is unbound.
//! - [`Expr::partial_eval`] replaces bound variables by their bindings and keeps the rest
//!   symbolic. It never folds constants: `2 * 3` stays a `Product` node.
//!
//! Neither operation memoizes. A node shared by several parents is visited once per reference.

use log::debug;

use crate::context::Context;
use crate::error::EvalError;
use crate::expr::{Expr, ExprKind};

/// Default nesting limit for [`Expr::full_eval`].
///
/// Evaluation runs on an explicit work stack, so this only bounds pathological inputs.
pub const DEFAULT_MAX_DEPTH: usize = 1 << 20;

/// Tunables for [`Expr::full_eval_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum nesting depth. Every visited node and every followed binding counts one level.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Pending work for [`Expr::full_eval_with`].
enum Task<'a> {
    Visit(&'a Expr, usize),
    Add,
    Mul,
    /// Done with the binding of the innermost variable being resolved.
    Leave,
}

fn pop2(values: &mut Vec<f64>) -> (f64, f64) {
    match (values.pop(), values.pop()) {
        (Some(b), Some(a)) => (a, b),
        _ => unreachable!("operand stack underflow"),
    }
}

impl Expr {
    /// Evaluates the expression to a number under `ctx`.
    ///
    /// # Errors
    ///
    /// - [`EvalError::UnboundVariable`] if a variable reached from `self`, directly or through
    ///   the bound expressions, has no binding in `ctx`.
    /// - [`EvalError::CyclicBinding`] if resolving a variable leads back to the same variable,
    ///   as with `x -> x + 1`.
    /// - [`EvalError::DepthLimitExceeded`] if nesting goes deeper than [`DEFAULT_MAX_DEPTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sym_rs::{Context, EvalError, Expr};
    ///
    /// let f = Expr::variable("x") * Expr::variable("y");
    /// let ctx = Context::new().with("x", 2.0).with("y", Expr::variable("x") + Expr::constant(1.0));
    /// assert_eq!(f.full_eval(&ctx), Ok(6.0));
    ///
    /// let err = f.full_eval(&Context::new()).unwrap_err();
    /// assert_eq!(err, EvalError::UnboundVariable { name: "x".to_string() });
    /// ```
    pub fn full_eval(&self, ctx: &Context) -> Result<f64, EvalError> {
        self.full_eval_with(ctx, &EvalConfig::default())
    }

    /// Same as [`full_eval`][Expr::full_eval], with an explicit configuration.
    ///
    /// Operands are evaluated left to right, so the reported unbound variable is the leftmost one.
    pub fn full_eval_with(&self, ctx: &Context, config: &EvalConfig) -> Result<f64, EvalError> {
        let limit = config.max_depth;
        let mut tasks = vec![Task::Visit(self, 0)];
        let mut values: Vec<f64> = Vec::new();
        // Variables whose bindings are currently being evaluated, outermost first.
        let mut resolving: Vec<&str> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(e, depth) => {
                    if depth >= limit {
                        debug!("full_eval: depth limit {} reached", limit);
                        return Err(EvalError::DepthLimitExceeded { limit });
                    }
                    match e.kind() {
                        ExprKind::Constant(v) => values.push(*v),
                        ExprKind::Variable(name) => {
                            if resolving.contains(&name.as_str()) {
                                debug!("full_eval: cyclic binding through {}", name);
                                return Err(EvalError::CyclicBinding { name: name.clone() });
                            }
                            let Some(bound) = ctx.get(name) else {
                                debug!("full_eval: unbound variable {}", name);
                                return Err(EvalError::unbound(name));
                            };
                            resolving.push(name.as_str());
                            tasks.push(Task::Leave);
                            tasks.push(Task::Visit(bound, depth + 1));
                        }
                        ExprKind::Sum(a, b) => {
                            tasks.push(Task::Add);
                            tasks.push(Task::Visit(b, depth + 1));
                            tasks.push(Task::Visit(a, depth + 1));
                        }
                        ExprKind::Product(a, b) => {
                            tasks.push(Task::Mul);
                            tasks.push(Task::Visit(b, depth + 1));
                            tasks.push(Task::Visit(a, depth + 1));
                        }
                    }
                }
                Task::Add => {
                    let (a, b) = pop2(&mut values);
                    values.push(a + b);
                }
                Task::Mul => {
                    let (a, b) = pop2(&mut values);
                    values.push(a * b);
                }
                Task::Leave => {
                    resolving.pop();
                }
            }
        }

        debug_assert_eq!(values.len(), 1);
        match values.pop() {
            Some(v) => Ok(v),
            None => unreachable!("operand stack underflow"),
        }
    }

    /// Specializes the expression under `ctx`.
    ///
    /// Bound variables are replaced by their bound expression as-is (the very same node, not
    /// specialized further). Unbound variables and constants are rebuilt unchanged, and
    /// composite nodes are rebuilt over the specialized children.
    ///
    /// ```
    /// use sym_rs::{Context, Expr};
    ///
    /// let f = (Expr::variable("x") * Expr::variable("y")) * Expr::constant(2.0);
    /// let g = f.partial_eval(&Context::new().with("x", 2.0));
    /// assert_eq!(g.render(), "((2 * y) * 2)");
    /// ```
    pub fn partial_eval(&self, ctx: &Context) -> Expr {
        match self.kind() {
            ExprKind::Constant(v) => Expr::constant(*v),
            ExprKind::Variable(name) => match ctx.get(name) {
                Some(bound) => bound.clone(),
                None => Expr::variable(name.clone()),
            },
            ExprKind::Sum(a, b) => Expr::sum(a.partial_eval(ctx), b.partial_eval(ctx)),
            ExprKind::Product(a, b) => Expr::product(a.partial_eval(ctx), b.partial_eval(ctx)),
        }
    }
}

pub fn full_eval(expr: &Expr, ctx: &Context) -> Result<f64, EvalError> {
    expr.full_eval(ctx)
}

pub fn partial_eval(expr: &Expr, ctx: &Context) -> Expr {
    expr.partial_eval(ctx)
}
