//! Expression to DOT (Graphviz) conversion.
//!
//! Every distinct node of the DAG becomes one vertex, so subexpression sharing (for example the
//! factors reused by the product rule) is visible in the picture.
//!
//! # DOT Format
//!
//! - **Leaves** (constants and variables) are rendered as boxes at the bottom (sink rank),
//!   labelled with their textual rendering
//! - **Operators** are rendered as circles labelled `+` or `*`
//! - **Edges**: solid lines go to the left operand, dashed lines to the right operand
//! - **Root nodes** are rendered as plain text at the top (source rank)
//!
//! # Examples
//!
//! ```
//! use sym_rs::Expr;
//!
//! let f = Expr::variable("x") * Expr::constant(32.0);
//! let dot = f.derivate("x").to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::expr::{Expr, ExprKind};

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub op_shape: &'static str,
    /// Shape for constants and variables (default: "box")
    pub leaf_shape: &'static str,
    /// Shape for root nodes (default: "plaintext")
    pub root_shape: &'static str,
    /// Style for edges to the left operand (default: "solid")
    pub left_edge_style: &'static str,
    /// Style for edges to the right operand (default: "dashed")
    pub right_edge_style: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            op_shape: "circle",
            leaf_shape: "box",
            root_shape: "plaintext",
            left_edge_style: "solid",
            right_edge_style: "dashed",
        }
    }
}

impl Expr {
    /// Converts the expression DAG to DOT format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        to_dot_with_config(&[self], &DotConfig::default())
    }

    /// Converts the expression DAG to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        to_dot_with_config(&[self], config)
    }
}

/// Converts several expressions into a single DOT graph. Nodes shared between roots are drawn once.
pub fn to_dot(roots: &[&Expr]) -> Result<String, std::fmt::Error> {
    to_dot_with_config(roots, &DotConfig::default())
}

pub fn to_dot_with_config(roots: &[&Expr], config: &DotConfig) -> Result<String, std::fmt::Error> {
    // Assign ids to distinct nodes in DFS pre-order.
    let mut ids = HashMap::<usize, usize>::new();
    let mut nodes: Vec<&Expr> = Vec::new();
    let mut stack: Vec<&Expr> = roots.iter().rev().copied().collect();
    while let Some(e) = stack.pop() {
        if ids.contains_key(&e.node_id()) {
            continue;
        }
        ids.insert(e.node_id(), nodes.len());
        nodes.push(e);
        if let Some((a, b)) = e.children() {
            stack.push(b);
            stack.push(a);
        }
    }

    let mut dot = String::new();
    writeln!(dot, "digraph {{")?;
    writeln!(dot, "node [shape={}];", config.op_shape)?;

    writeln!(dot, "{{ rank=sink")?;
    for (id, e) in nodes.iter().enumerate() {
        if e.children().is_none() {
            let label = escape_label(&e.to_string());
            writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.leaf_shape, label)?;
        }
    }
    writeln!(dot, "}}")?;

    for (id, e) in nodes.iter().enumerate() {
        let (label, a, b) = match e.kind() {
            ExprKind::Sum(a, b) => ("+", a, b),
            ExprKind::Product(a, b) => ("*", a, b),
            ExprKind::Constant(_) | ExprKind::Variable(_) => continue,
        };
        writeln!(dot, "{} [label=\"{}\"];", id, label)?;
        writeln!(dot, "{} -> {} [style={}];", id, ids[&a.node_id()], config.left_edge_style)?;
        writeln!(dot, "{} -> {} [style={}];", id, ids[&b.node_id()], config.right_edge_style)?;
    }

    writeln!(dot, "{{ rank=source")?;
    for i in 0..roots.len() {
        writeln!(dot, "r{} [shape={}, label=\"f{}\"];", i, config.root_shape, i)?;
    }
    writeln!(dot, "}}")?;

    for (i, root) in roots.iter().enumerate() {
        writeln!(dot, "r{} -> {};", i, ids[&root.node_id()])?;
    }

    writeln!(dot, "}}")?;
    Ok(dot)
}

/// Escapes `label` for use inside a double-quoted DOT string.
fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
