//! Binary tree shapes.
//!
//! A [`Shape`] is the placement pattern of operator applications in a magma term, with all
//! leaves left blank. Shapes with `n` internal nodes are counted by the Catalan numbers
//! (1, 1, 2, 5, 14, ...), see [`catalan`][crate::count::catalan].
//!
//! # Example
//!
//! ```
//! use magma_eqs::shape::{shapes, Shape};
//!
//! let all: Vec<Shape> = shapes(2).collect();
//! assert_eq!(all.len(), 2);
//! assert_eq!(all[0].to_string(), "_ ◦︎ (_ ◦︎ _)");
//! assert_eq!(all[1].to_string(), "(_ ◦︎ _) ◦︎ _");
//! ```

/// A binary tree without labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Blank leaf
    Leaf,
    /// Operator application
    Node(Box<Shape>, Box<Shape>),
}

impl Shape {
    pub fn node(left: Shape, right: Shape) -> Self {
        Shape::Node(Box::new(left), Box::new(right))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Shape::Leaf)
    }

    /// Number of internal (operator) nodes.
    pub fn size(&self) -> usize {
        match self {
            Shape::Leaf => 0,
            Shape::Node(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Number of leaves, always `size() + 1`.
    pub fn leaves(&self) -> usize {
        match self {
            Shape::Leaf => 1,
            Shape::Node(l, r) => l.leaves() + r.leaves(),
        }
    }
}

/// Lazy sequence of shapes.
pub type Shapes = Box<dyn Iterator<Item = Shape>>;

/// Returns an iterator over every distinct shape with exactly `n` internal nodes.
///
/// Shapes come out grouped by the size of the left subtree (`0..n`), and within one split
/// in the order of left shapes, then right shapes.
pub fn shapes(n: usize) -> Shapes {
    if n == 0 {
        return Box::new(std::iter::once(Shape::Leaf));
    }
    Box::new((0..n).flat_map(move |i| {
        shapes(i).flat_map(move |left| shapes(n - 1 - i).map(move |right| Shape::node(left.clone(), right)))
    }))
}

/// All shapes of sizes `0..=max_size`, materialized, indexed by size.
pub fn shape_table(max_size: usize) -> Vec<Vec<Shape>> {
    (0..=max_size).map(|n| shapes(n).collect()).collect()
}
