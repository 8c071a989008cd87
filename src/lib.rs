//! # magma-eqs: Enumeration of Magma Equations
//!
//! **`magma-eqs`** lists every equation `lhs = rhs` between magma terms (binary trees built
//! from a single operation `◦`) whose sides carry at most `max_ops` operations in total,
//! keeping exactly one representative per equivalence class.
//!
//! ## Equivalence
//!
//! Two equations are considered the same law when one turns into the other by
//!
//! - a bijective **renaming** of the variables (applied to both sides at once), and/or
//! - **swapping** the two sides.
//!
//! Syntactic tautologies `t = t` are dropped, except for the minimal reflexive law `x = x`.
//!
//! ## How it works
//!
//! The search is a triple-nested generator:
//!
//! 1. [`shape`]: every binary tree shape with a given number of operations (Catalan many).
//! 2. [`expr`]: every labeling of a shape's leaves in *canonical* first-occurrence order,
//!    threading the variable counter from the left side into the right side.
//! 3. [`symmetry`]: the full orbit of a candidate under renamings and side swap,
//!    checked against a seen-registry by the [`enumerate`] driver.
//!
//! ## Basic Usage
//!
//! ```rust
//! use magma_eqs::config::Config;
//! use magma_eqs::enumerate::EquationEnumerator;
//!
//! let config = Config::with_default_alphabet(1).unwrap();
//! let enumerator = EquationEnumerator::new(&config);
//!
//! let lines: Vec<String> = enumerator
//!     .equations()
//!     .map(|eq| config.display(&eq).to_string())
//!     .collect();
//!
//! assert_eq!(lines.len(), 7);
//! assert_eq!(lines[0], "x = x");
//! assert_eq!(lines[2], "x = x ◦︎ x");
//! ```

pub mod config;
pub mod count;
pub mod enumerate;
pub mod equation;
pub mod expr;
pub mod format;
pub mod shape;
pub mod symmetry;
