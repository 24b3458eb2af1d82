//! Structural symbolic differentiation.
//!
//! Rules:
//!
//! ```text
//! d/dv c       = 0
//! d/dv v       = 1
//! d/dv w       = 0                      (w != v)
//! d/dv (a + b) = a' + b'
//! d/dv (a * b) = (a' * b) + (a * b')
//! ```
//!
//! The introduced `0` and `1` constants are never simplified away, so every differentiation of a
//! product roughly doubles that branch. The original factors `a` and `b` are shared with the
//! input rather than copied.

use log::trace;

use crate::expr::{Expr, ExprKind};

impl Expr {
    /// Derivative of the expression with respect to the variable `var`.
    ///
    /// ```
    /// use sym_rs::{Context, Expr};
    ///
    /// let f = Expr::variable("x") * Expr::constant(32.0);
    /// let df = f.derivate("x");
    /// assert_eq!(df.render(), "((1 * 32) + (x * 0))");
    /// assert_eq!(df.full_eval(&Context::new().with("x", 2.0)), Ok(32.0));
    /// ```
    pub fn derivate(&self, var: &str) -> Expr {
        match self.kind() {
            ExprKind::Constant(_) => Expr::constant(0.0),
            ExprKind::Variable(name) => {
                if name == var {
                    Expr::constant(1.0)
                } else {
                    Expr::constant(0.0)
                }
            }
            ExprKind::Sum(a, b) => Expr::sum(a.derivate(var), b.derivate(var)),
            ExprKind::Product(a, b) => {
                trace!("derivate: product rule over {}", var);
                let left = Expr::product(a.derivate(var), b.clone());
                let right = Expr::product(a.clone(), b.derivate(var));
                Expr::sum(left, right)
            }
        }
    }

    /// Applies [`derivate`][Expr::derivate] `order` times.
    pub fn derivate_n(&self, var: &str, order: usize) -> Expr {
        let mut res = self.clone();
        for _ in 0..order {
            res = res.derivate(var);
        }
        res
    }
}

pub fn derivate(expr: &Expr, var: &str) -> Expr {
    expr.derivate(var)
}
