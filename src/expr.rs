//! Expression nodes and their factories.
//!
//! An [`Expr`] is a lightweight handle to an immutable node. Cloning a handle shares the node,
//! so the same subexpression can be referenced from many parents: expressions form a DAG.
//! Since factories only combine already-built expressions, cycles cannot be constructed.
//!
//! ```
//! use sym_rs::expr::Expr;
//!
//! let x = Expr::variable("x");
//! let y = Expr::variable("y");
//! let f = (x * y) * Expr::constant(2.0);
//! assert_eq!(f.render(), "((x * y) * 2)");
//! ```

use std::ops::{Add, Mul};
use std::sync::Arc;

/// The closed set of node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Literal numeric value.
    Constant(f64),
    /// Named placeholder. Names are case-sensitive.
    Variable(String),
    /// Addition of two subexpressions.
    Sum(Expr, Expr),
    /// Multiplication of two subexpressions.
    Product(Expr, Expr),
}

/// Shared handle to an immutable expression node.
///
/// Equality is structural: two separately built `x + 1` compare equal.
/// Use [`Expr::ptr_eq`] to test whether two handles share the same node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(Arc<ExprKind>);

impl Expr {
    fn new(kind: ExprKind) -> Self {
        Expr(Arc::new(kind))
    }

    pub fn constant(value: f64) -> Self {
        Expr::new(ExprKind::Constant(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::new(ExprKind::Variable(name.into()))
    }

    pub fn sum(lhs: Expr, rhs: Expr) -> Self {
        Expr::new(ExprKind::Sum(lhs, rhs))
    }

    pub fn product(lhs: Expr, rhs: Expr) -> Self {
        Expr::new(ExprKind::Product(lhs, rhs))
    }

    pub fn kind(&self) -> &ExprKind {
        &self.0
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(a: &Expr, b: &Expr) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Address of the shared node, used as a key when walking the DAG.
    pub(crate) fn node_id(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.kind(), ExprKind::Constant(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind(), ExprKind::Variable(_))
    }

    /// Value of a `Constant` node, `None` for every other variant.
    pub fn as_constant(&self) -> Option<f64> {
        match self.kind() {
            ExprKind::Constant(v) => Some(*v),
            _ => None,
        }
    }

    /// Name of a `Variable` node, `None` for every other variant.
    pub fn as_variable(&self) -> Option<&str> {
        match self.kind() {
            ExprKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Children of a composite node.
    pub fn children(&self) -> Option<(&Expr, &Expr)> {
        match self.kind() {
            ExprKind::Sum(a, b) | ExprKind::Product(a, b) => Some((a, b)),
            ExprKind::Constant(_) | ExprKind::Variable(_) => None,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::constant(value)
    }
}

pub fn make_variable(name: impl Into<String>) -> Expr {
    Expr::variable(name)
}

pub fn make_constant(value: f64) -> Expr {
    Expr::constant(value)
}

pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::sum(lhs, rhs)
}

pub fn multiply(lhs: Expr, rhs: Expr) -> Expr {
    Expr::product(lhs, rhs)
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::sum(self, rhs)
    }
}

impl Add for &Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::sum(self.clone(), rhs.clone())
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::product(self, rhs)
    }
}

impl Mul for &Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::product(self.clone(), rhs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_leaves() {
        let c = make_constant(21.0);
        assert!(c.is_constant());
        assert_eq!(c.as_constant(), Some(21.0));
        assert_eq!(c.as_variable(), None);
        assert!(c.children().is_none());

        let x = make_variable("x");
        assert!(x.is_variable());
        assert_eq!(x.as_variable(), Some("x"));
        assert_eq!(x.as_constant(), None);
    }

    #[test]
    fn test_composites() {
        let x = make_variable("x");
        let c = make_constant(32.0);

        let s = add(x.clone(), c.clone());
        assert!(matches!(s.kind(), ExprKind::Sum(..)));
        let (l, r) = s.children().unwrap();
        assert!(Expr::ptr_eq(l, &x));
        assert!(Expr::ptr_eq(r, &c));

        let p = multiply(x.clone(), c.clone());
        assert!(matches!(p.kind(), ExprKind::Product(..)));
    }

    #[test]
    fn test_operators() {
        let x = Expr::variable("x");
        let y = Expr::variable("y");

        assert_eq!(&x + &y, add(x.clone(), y.clone()));
        assert_eq!(&x * &y, multiply(x.clone(), y.clone()));
        assert_eq!(x.clone() * Expr::from(2.0), multiply(x, make_constant(2.0)));
    }

    #[test]
    fn test_structural_eq_vs_sharing() {
        let a = Expr::variable("x") + Expr::constant(1.0);
        let b = Expr::variable("x") + Expr::constant(1.0);
        assert_eq!(a, b);
        assert!(!Expr::ptr_eq(&a, &b));

        let c = a.clone();
        assert!(Expr::ptr_eq(&a, &c));
    }

    #[test]
    fn test_variable_names_are_case_sensitive() {
        assert_ne!(Expr::variable("x"), Expr::variable("X"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
    }
}
