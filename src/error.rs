//! Errors raised by numeric evaluation.

use thiserror::Error;

/// Failure of [`Expr::full_eval`][crate::expr::Expr::full_eval].
///
/// Only full evaluation can fail. Partial evaluation, differentiation and rendering are total
/// over every expression the factories can build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable was reached (possibly through a chain of bindings) that the context does not bind.
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },

    /// Resolving `name` led back to `name` itself, as in `x -> x + 1` or `x -> y, y -> x`.
    #[error("cyclic binding through `{name}`")]
    CyclicBinding { name: String },

    /// Evaluation nested deeper than [`EvalConfig::max_depth`][crate::eval::EvalConfig].
    #[error("evaluation depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },
}

impl EvalError {
    pub(crate) fn unbound(name: &str) -> Self {
        EvalError::UnboundVariable { name: name.to_string() }
    }
}
