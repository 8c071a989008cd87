//! Equations between magma terms.

use std::cmp::max;

use crate::expr::{is_canonical_from, Expr};

/// An ordered pair of terms, read as the law `lhs = rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Equation {
    pub lhs: Expr,
    pub rhs: Expr,
}

impl Equation {
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Equation { lhs, rhs }
    }

    /// The same law with sides exchanged.
    pub fn swapped(&self) -> Equation {
        Equation::new(self.rhs.clone(), self.lhs.clone())
    }

    /// Applies the variable renaming `perm` to both sides.
    pub fn rename(&self, perm: &[usize]) -> Equation {
        Equation::new(self.lhs.rename(perm), self.rhs.rename(perm))
    }

    /// One past the largest variable index on either side.
    ///
    /// For a canonically labeled equation this is the number of distinct variables.
    pub fn num_vars(&self) -> usize {
        max(self.lhs.var_bound(), self.rhs.var_bound())
    }

    /// Total number of operations on both sides.
    pub fn size(&self) -> usize {
        self.lhs.size() + self.rhs.size()
    }

    /// Whether both sides are the same tree with at least one operation.
    ///
    /// `x = x` itself is not trivial in this sense.
    pub fn is_trivial(&self) -> bool {
        self.lhs == self.rhs && !self.lhs.is_var()
    }

    /// Whether the leaves of `lhs` followed by the leaves of `rhs` introduce variables in the
    /// order `0, 1, 2, ...`.
    pub fn is_canonical(&self) -> bool {
        let mut leaves = self.lhs.leaves();
        leaves.extend(self.rhs.leaves());
        is_canonical_from(&leaves, 0)
    }
}
