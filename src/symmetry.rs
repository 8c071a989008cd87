//! Symmetries of an equation.
//!
//! Two equations denote the same law when one is obtained from the other by a bijective
//! renaming of variables, possibly followed by swapping the sides. The [`orbit`] of an
//! equation is the set of all such images, listed with repetitions when some renamings
//! happen to coincide on it.
//!
//! # Example
//!
//! ```
//! use magma_eqs::expr::Expr;
//! use magma_eqs::equation::Equation;
//! use magma_eqs::symmetry::orbit;
//!
//! // x◦y = y◦x
//! let lhs = Expr::op(Expr::Var(0), Expr::Var(1));
//! let rhs = Expr::op(Expr::Var(1), Expr::Var(0));
//!
//! let all: Vec<Equation> = orbit(&lhs, &rhs, 2).collect();
//! assert_eq!(all.len(), 4);
//! assert_eq!(all[0], Equation::new(lhs.clone(), rhs.clone()));
//! assert_eq!(all[1], Equation::new(rhs, lhs));
//! ```

use itertools::Itertools;

use crate::equation::Equation;
use crate::expr::Expr;

/// All permutations of `0..n`, in lexicographic order starting from the identity.
pub fn permutations(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (0..n).permutations(n)
}

/// Images of `lhs = rhs` under every renaming of the variables `0..n_vars`, sides kept.
pub fn renamings<'a>(lhs: &'a Expr, rhs: &'a Expr, n_vars: usize) -> impl Iterator<Item = Equation> + 'a {
    permutations(n_vars).map(move |perm| Equation::new(lhs.rename(&perm), rhs.rename(&perm)))
}

/// Images of `lhs = rhs` under every renaming of the variables `0..n_vars`, each followed by
/// its side-swapped counterpart.
///
/// The first item is always `lhs = rhs` itself. At most `2 * n_vars!` items are produced.
/// All labels occurring in `lhs` and `rhs` must be below `n_vars`.
pub fn orbit<'a>(lhs: &'a Expr, rhs: &'a Expr, n_vars: usize) -> impl Iterator<Item = Equation> + 'a {
    renamings(lhs, rhs, n_vars).flat_map(|eq| {
        let swapped = eq.swapped();
        [eq, swapped]
    })
}

/// Whether `a` and `b` are the same law up to renaming and side swap.
pub fn equivalent(a: &Equation, b: &Equation) -> bool {
    let n_vars = a.num_vars().max(b.num_vars());
    orbit(&a.lhs, &a.rhs, n_vars).any(|eq| eq == *b)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_log::test;

    use super::*;
    use crate::expr::assign;
    use crate::shape::shapes;

    fn var(v: usize) -> Expr {
        Expr::Var(v)
    }

    #[test]
    fn test_permutations() {
        let all: Vec<_> = permutations(3).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![0, 1, 2]);
        assert_eq!(all[5], vec![2, 1, 0]);
        assert_eq!(permutations(1).collect::<Vec<_>>(), vec![vec![0]]);
    }

    #[test]
    fn test_orbit_size() {
        let lhs = Expr::op(var(0), var(1));
        let rhs = var(2);
        let all: Vec<_> = orbit(&lhs, &rhs, 3).collect();
        assert_eq!(all.len(), 12);
        let unique: HashSet<_> = all.into_iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_orbit_identity_first() {
        let lhs = Expr::op(var(0), var(0));
        let rhs = var(1);
        let first = orbit(&lhs, &rhs, 2).next();
        assert_eq!(first, Some(Equation::new(lhs, rhs)));
    }

    #[test]
    fn test_orbit_collapses() {
        // x = x: every image is x = x
        let unique: HashSet<_> = orbit(&var(0), &var(0), 1).collect();
        assert_eq!(unique.len(), 1);

        // x◦y = y◦x: renaming x<->y equals swapping sides
        let lhs = Expr::op(var(0), var(1));
        let rhs = Expr::op(var(1), var(0));
        let unique: HashSet<_> = orbit(&lhs, &rhs, 2).collect();
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_renamings_keep_sides() {
        let lhs = Expr::op(var(0), var(1));
        let rhs = var(0);
        for eq in renamings(&lhs, &rhs, 2) {
            assert!(!eq.lhs.is_var());
            assert!(eq.rhs.is_var());
        }
        assert_eq!(renamings(&lhs, &rhs, 2).count(), 2);
    }

    #[test]
    fn test_equivalent() {
        // x◦y = x and y = y◦x
        let a = Equation::new(Expr::op(var(0), var(1)), var(0));
        let b = Equation::new(var(1), Expr::op(var(1), var(0)));
        assert!(equivalent(&a, &b));
        assert!(equivalent(&b, &a));

        // x◦y = y is a different law
        let c = Equation::new(Expr::op(var(0), var(1)), var(1));
        assert!(!equivalent(&a, &c));
    }

    #[test]
    fn test_orbit_closure() {
        // Every member of the orbit has the same orbit (as a set).
        for lhs_shape in shapes(1) {
            for rhs_shape in shapes(1) {
                for (lhs, used) in assign(&lhs_shape, 0) {
                    for (rhs, n) in assign(&rhs_shape, used) {
                        let base: HashSet<_> = orbit(&lhs, &rhs, n).collect();
                        for member in &base {
                            let other: HashSet<_> = orbit(&member.lhs, &member.rhs, n).collect();
                            assert_eq!(base, other);
                        }
                    }
                }
            }
        }
    }
}
