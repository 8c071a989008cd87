//! Enumeration of equations up to symmetry.
//!
//! The [`EquationEnumerator`] walks every candidate `(lhs, rhs)` pair with at most `max_ops`
//! operations in total and keeps the first member of each equivalence class it meets. A class
//! is recognized through an [`EquationSet`] holding the full orbit of every equation emitted
//! so far.
//!
//! # Candidate order
//!
//! Candidates are visited by lhs size, lhs shape, rhs size, rhs shape, lhs labeling and finally
//! rhs labeling. The rhs labeling continues the variable numbering of the lhs, so both sides
//! share one canonical first-occurrence order.
//!
//! # Example
//!
//! ```
//! use magma_eqs::enumerate::EquationEnumerator;
//! use num_bigint::BigUint;
//!
//! let enumerator = EquationEnumerator::with_bound(2);
//! let mut equations = enumerator.equations();
//! assert_eq!(equations.by_ref().count(), 46);
//!
//! let stats = equations.stats();
//! assert_eq!(stats.accepted, 46);
//! assert_eq!(BigUint::from(stats.candidates), enumerator.search_space());
//! ```

use std::collections::HashSet;

use log::{debug, info, trace};
use num_bigint::BigUint;

use crate::config::Config;
use crate::count::search_space;
use crate::equation::Equation;
use crate::expr::assign;
use crate::shape::{shape_table, Shape};
use crate::symmetry::orbit;

/// Registry of equations already covered by an emitted representative.
#[derive(Debug, Default)]
pub struct EquationSet {
    inner: HashSet<Equation>,
}

impl EquationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, eq: &Equation) -> bool {
        self.inner.contains(eq)
    }

    /// Whether any of `eqs` is already registered.
    pub fn contains_any<'e>(&self, mut eqs: impl Iterator<Item = &'e Equation>) -> bool {
        eqs.any(|eq| self.contains(eq))
    }

    pub fn insert(&mut self, eq: Equation) -> bool {
        self.inner.insert(eq)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Extend<Equation> for EquationSet {
    fn extend<T: IntoIterator<Item = Equation>>(&mut self, iter: T) {
        self.inner.extend(iter)
    }
}

/// Counters collected while enumerating.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Candidate pairs visited.
    pub candidates: usize,
    /// Representatives emitted.
    pub accepted: usize,
    /// Candidates whose class was already covered.
    pub duplicates: usize,
    /// Candidates dropped as `t = t` with `t` not a variable.
    pub trivial: usize,
    /// Size of the seen-registry.
    pub seen: usize,
}

/// Candidate equation paired with the number of variables it uses.
pub type Candidates<'a> = Box<dyn Iterator<Item = (Equation, usize)> + 'a>;

/// Driver for one bound on the total number of operations.
#[derive(Debug, Clone)]
pub struct EquationEnumerator {
    max_ops: usize,
    shapes: Vec<Vec<Shape>>,
}

impl EquationEnumerator {
    pub fn new(config: &Config) -> Self {
        Self::with_bound(config.max_ops())
    }

    /// Enumerator for `max_ops` without any display configuration.
    pub fn with_bound(max_ops: usize) -> Self {
        EquationEnumerator {
            max_ops,
            shapes: shape_table(max_ops),
        }
    }

    pub fn max_ops(&self) -> usize {
        self.max_ops
    }

    /// All shapes with `size` operations.
    ///
    /// # Panics
    ///
    /// Panics if `size > self.max_ops()`.
    pub fn shapes(&self, size: usize) -> &[Shape] {
        &self.shapes[size]
    }

    /// Exact number of candidates that [`candidates`][Self::candidates] yields.
    pub fn search_space(&self) -> BigUint {
        search_space(self.max_ops)
    }

    /// Every canonically labeled `(lhs, rhs)` pair within the bound, before deduplication.
    pub fn candidates(&self) -> Candidates<'_> {
        let max_ops = self.max_ops;
        let shapes = &self.shapes;
        Box::new((0..=max_ops).flat_map(move |lhs_size| {
            shapes[lhs_size].iter().flat_map(move |lhs_shape| {
                (0..=max_ops - lhs_size).flat_map(move |rhs_size| {
                    shapes[rhs_size].iter().flat_map(move |rhs_shape| {
                        assign(lhs_shape, 0).flat_map(move |(lhs, used)| {
                            assign(rhs_shape, used).map(move |(rhs, n_vars)| (Equation::new(lhs.clone(), rhs), n_vars))
                        })
                    })
                })
            })
        }))
    }

    /// Lazily yields one representative per equivalence class.
    ///
    /// Each call starts a fresh run with an empty seen-registry.
    pub fn equations(&self) -> Equations<'_> {
        debug!("enumerating equations with at most {} operations", self.max_ops);
        Equations {
            candidates: self.candidates(),
            seen: EquationSet::new(),
            stats: EnumerationStats::default(),
            done: false,
        }
    }

    /// Number of representatives, by running the enumeration to the end.
    pub fn count(&self) -> usize {
        self.equations().count()
    }
}

/// Iterator over representatives, created by [`EquationEnumerator::equations`].
pub struct Equations<'a> {
    candidates: Candidates<'a>,
    seen: EquationSet,
    stats: EnumerationStats,
    done: bool,
}

impl Equations<'_> {
    /// Counters so far; final once the iterator returned `None`.
    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }

    /// The seen-registry, holding the orbits of everything emitted so far.
    pub fn seen(&self) -> &EquationSet {
        &self.seen
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            let stats = &self.stats;
            info!(
                "enumeration finished: {} equations from {} candidates ({} duplicates, {} trivial, {} registered)",
                stats.accepted, stats.candidates, stats.duplicates, stats.trivial, stats.seen
            );
        }
    }
}

impl Iterator for Equations<'_> {
    type Item = Equation;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((eq, n_vars)) = self.candidates.next() else {
                self.finish();
                return None;
            };
            self.stats.candidates += 1;

            let images: Vec<Equation> = orbit(&eq.lhs, &eq.rhs, n_vars).collect();
            if self.seen.contains_any(images.iter()) {
                trace!("duplicate: {}", eq);
                self.stats.duplicates += 1;
                continue;
            }

            // `t = t` is dropped (and not registered) unless `t` is a single variable.
            if eq.is_trivial() {
                trace!("trivial: {}", eq);
                self.stats.trivial += 1;
                continue;
            }

            self.seen.extend(images);
            self.stats.accepted += 1;
            self.stats.seen = self.seen.len();
            debug!("#{}: {} ({} vars)", self.stats.accepted, eq, n_vars);
            return Some(eq);
        }
    }
}
