//! Fully parenthesized infix rendering.
//!
//! Constants use the default `f64` formatting, so `2.0` renders as `2`.
//! There is no parser for this format; it is meant for diagnostics.

use std::fmt::{self, Display, Formatter, Write};

use crate::expr::{Expr, ExprKind};

impl Expr {
    /// Writes the rendering into any [`fmt::Write`] sink.
    pub fn render_to<W: Write>(&self, sink: &mut W) -> fmt::Result {
        match self.kind() {
            ExprKind::Constant(v) => write!(sink, "{}", v),
            ExprKind::Variable(name) => sink.write_str(name),
            ExprKind::Sum(a, b) => {
                sink.write_char('(')?;
                a.render_to(sink)?;
                sink.write_str(" + ")?;
                b.render_to(sink)?;
                sink.write_char(')')
            }
            ExprKind::Product(a, b) => {
                sink.write_char('(')?;
                a.render_to(sink)?;
                sink.write_str(" * ")?;
                b.render_to(sink)?;
                sink.write_char(')')
            }
        }
    }

    pub fn render(&self) -> String {
        let mut s = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.render_to(&mut s);
        s
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render_to(f)
    }
}

pub fn render(expr: &Expr) -> String {
    expr.render()
}
