//! # sym-rs: Symbolic Expressions in Rust
//!
//! **`sym-rs`** is a small engine for algebraic expressions built from constants, variables,
//! sums and products. An expression can be:
//!
//! - **fully evaluated** to a number under a [`Context`] of variable bindings,
//! - **partially evaluated**, replacing the bound variables and keeping the others symbolic,
//! - **differentiated** symbolically with respect to a named variable,
//! - **rendered** as fully parenthesized infix text, or exported to Graphviz.
//!
//! ## Key Features
//!
//! - **Immutable Shared Nodes**: An [`Expr`] is a cheap handle to an immutable node. Subexpressions
//!   are shared, not copied, so expressions form a DAG. Handles are `Send + Sync`.
//! - **Closed Node Set**: [`ExprKind`] enumerates the four node variants; every operation is an
//!   exhaustive match over them.
//! - **Explicit Failure**: Only [`Expr::full_eval`] can fail, with an [`EvalError`], never by
//!   defaulting a missing variable.
//! - **No Hidden Rewriting**: Neither partial evaluation nor differentiation folds constants or
//!   drops the `0`/`1` terms they introduce.
//!
//! ## Basic Usage
//!
//! ```rust
//! use sym_rs::{make_constant, make_variable, Context};
//!
//! // 1. Build f = (x * y) * 2
//! let x = make_variable("x");
//! let y = make_variable("y");
//! let f = (x * y) * make_constant(2.0);
//! assert_eq!(f.render(), "((x * y) * 2)");
//!
//! // 2. Evaluate with x = 2, y = 2
//! let ctx = Context::from([("x", make_constant(2.0)), ("y", make_constant(2.0))]);
//! assert_eq!(f.full_eval(&ctx), Ok(8.0));
//!
//! // 3. Specialize with x = 2 only
//! let g = f.partial_eval(&Context::new().with("x", 2.0));
//! assert_eq!(g.render(), "((2 * y) * 2)");
//!
//! // 4. Differentiate with respect to y, then evaluate at x = 2
//! let dg = f.derivate("y");
//! assert_eq!(dg.full_eval(&ctx), Ok(4.0));
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: The [`Expr`] handle, node variants and factories.
//! - **[`eval`]**: Full and partial evaluation.
//! - **[`derive`]**: Symbolic differentiation.
//! - **[`display`]**: Textual rendering.
//! - **[`stats`]**: Tree size, DAG size, depth and free variables.
//! - **[`dot`]**: Utilities for visualizing expressions using Graphviz.

pub mod context;
pub mod derive;
pub mod display;
pub mod dot;
pub mod error;
pub mod eval;
pub mod expr;
pub mod stats;

pub use crate::context::Context;
pub use crate::derive::derivate;
pub use crate::display::render;
pub use crate::error::EvalError;
pub use crate::eval::{full_eval, partial_eval, EvalConfig, DEFAULT_MAX_DEPTH};
pub use crate::expr::{add, make_constant, make_variable, multiply, Expr, ExprKind};
