//! Structural metrics over expression DAGs.
//!
//! Two notions of size matter here:
//!
//! - [`Expr::size`] counts a shared node once per reference. This is the size of the expression
//!   seen as a tree. Bindings are not followed, so it says nothing about what the nodes of a
//!   context add during [`Expr::full_eval`].
//! - [`Expr::unique_size`] counts every distinct node once. This is the memory footprint.
//!
//! Repeated differentiation makes the first grow much faster than the second.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::expr::{Expr, ExprKind};

impl Expr {
    /// Tree size: number of nodes, counting shared nodes once per reference.
    ///
    /// Variables count as single leaves whatever they are bound to. Saturates at `u64::MAX`.
    pub fn size(&self) -> u64 {
        let mut cache = HashMap::new();
        self.size_rec(&mut cache)
    }

    fn size_rec(&self, cache: &mut HashMap<usize, u64>) -> u64 {
        if let Some(&res) = cache.get(&self.node_id()) {
            return res;
        }
        let res = match self.children() {
            None => 1,
            Some((a, b)) => a.size_rec(cache).saturating_add(b.size_rec(cache)).saturating_add(1),
        };
        cache.insert(self.node_id(), res);
        res
    }

    /// Number of distinct nodes reachable from `self`.
    pub fn unique_size(&self) -> usize {
        let mut visited = HashSet::new();
        let mut stack = vec![self];
        while let Some(e) = stack.pop() {
            if !visited.insert(e.node_id()) {
                continue;
            }
            if let Some((a, b)) = e.children() {
                stack.push(a);
                stack.push(b);
            }
        }
        visited.len()
    }

    /// Number of nodes on the longest root-to-leaf path. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut cache = HashMap::new();
        self.depth_rec(&mut cache)
    }

    fn depth_rec(&self, cache: &mut HashMap<usize, usize>) -> usize {
        if let Some(&res) = cache.get(&self.node_id()) {
            return res;
        }
        let res = match self.children() {
            None => 1,
            Some((a, b)) => 1 + a.depth_rec(cache).max(b.depth_rec(cache)),
        };
        cache.insert(self.node_id(), res);
        res
    }

    /// Names of all variables occurring in the expression, sorted.
    ///
    /// Bindings of a context are not followed: this is purely syntactic.
    pub fn free_variables(&self) -> BTreeSet<&str> {
        let mut visited = HashSet::new();
        let mut vars = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(e) = stack.pop() {
            if !visited.insert(e.node_id()) {
                continue;
            }
            match e.kind() {
                ExprKind::Constant(_) => {}
                ExprKind::Variable(name) => {
                    vars.insert(name.as_str());
                }
                ExprKind::Sum(a, b) | ExprKind::Product(a, b) => {
                    stack.push(a);
                    stack.push(b);
                }
            }
        }
        vars
    }
}
