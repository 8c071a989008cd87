//! Labeled magma terms and canonical leaf labeling.
//!
//! An [`Expr`] is a [`Shape`] whose leaves carry variable indices. Expressions produced by
//! [`assign`] are *canonically labeled*: reading the leaves left to right, the first
//! occurrences of the variables are exactly `0, 1, 2, ...` in order.
//!
//! # Example
//!
//! ```
//! use magma_eqs::expr::{assign, Expr};
//! use magma_eqs::shape::Shape;
//!
//! let shape = Shape::node(Shape::Leaf, Shape::Leaf);
//! let labeled: Vec<(Expr, usize)> = assign(&shape, 0).collect();
//!
//! // x◦x and x◦y
//! assert_eq!(labeled.len(), 2);
//! assert_eq!(labeled[0], (Expr::op(Expr::Var(0), Expr::Var(0)), 1));
//! assert_eq!(labeled[1], (Expr::op(Expr::Var(0), Expr::Var(1)), 2));
//! ```

use std::cmp::max;

use crate::shape::Shape;

/// A magma term over variables `0, 1, 2, ...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr {
    /// Variable leaf
    Var(usize),
    /// Binary operation
    Op(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn op(left: Expr, right: Expr) -> Self {
        Expr::Op(Box::new(left), Box::new(right))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Expr::Var(_))
    }

    /// Number of operations in the term.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Op(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// The shape of this term, with labels erased.
    pub fn shape(&self) -> Shape {
        match self {
            Expr::Var(_) => Shape::Leaf,
            Expr::Op(l, r) => Shape::node(l.shape(), r.shape()),
        }
    }

    /// Leaf labels in left-to-right order.
    pub fn leaves(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<usize>) {
        match self {
            Expr::Var(v) => out.push(*v),
            Expr::Op(l, r) => {
                l.collect_leaves(out);
                r.collect_leaves(out);
            }
        }
    }

    /// One past the largest variable index occurring in the term.
    pub fn var_bound(&self) -> usize {
        match self {
            Expr::Var(v) => v + 1,
            Expr::Op(l, r) => max(l.var_bound(), r.var_bound()),
        }
    }

    /// Applies `perm` to every leaf label.
    ///
    /// # Panics
    ///
    /// Panics if some label is not a valid index into `perm`.
    pub fn rename(&self, perm: &[usize]) -> Expr {
        match self {
            Expr::Var(v) => Expr::Var(perm[*v]),
            Expr::Op(l, r) => Expr::op(l.rename(perm), r.rename(perm)),
        }
    }
}

/// Checks that the first occurrences of labels in `leaves` are `used, used + 1, ...`, given
/// that labels `0..used` were already introduced to the left.
pub fn is_canonical_from(leaves: &[usize], used: usize) -> bool {
    let mut next = used;
    for &v in leaves {
        if v == next {
            next += 1;
        } else if v > next {
            return false;
        }
    }
    true
}

/// Lazy sequence of labelings paired with the updated variable count.
pub type Assignments<'a> = Box<dyn Iterator<Item = (Expr, usize)> + 'a>;

/// Returns every canonical labeling of `shape`, given that `used` variables were already
/// introduced to the left of it.
///
/// Each item is `(expr, new_used)`, where `new_used` counts the variables introduced so far
/// including those first introduced inside `expr`. Feeding `new_used` into the labeling of
/// the next sibling (or the right-hand side of an equation) continues the same numbering.
pub fn assign(shape: &Shape, used: usize) -> Assignments<'_> {
    match shape {
        Shape::Leaf => Box::new((0..=used).map(move |v| (Expr::Var(v), max(v + 1, used)))),
        Shape::Node(left, right) => Box::new(assign(left, used).flat_map(move |(l, used)| {
            assign(right, used).map(move |(r, used)| (Expr::op(l.clone(), r), used))
        })),
    }
}
