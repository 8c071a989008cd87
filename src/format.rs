//! Infix rendering of shapes, terms and equations.
//!
//! Every operation is written `a ◦︎ b`. Subterms that are operations get parentheses, the
//! outermost operation on each side does not: `x ◦︎ (y ◦︎ z) = (x ◦︎ y) ◦︎ z`.

use std::fmt;

use crate::config::Alphabet;
use crate::equation::Equation;
use crate::expr::Expr;
use crate::shape::Shape;

/// White bullet followed by the text presentation selector.
pub const DEFAULT_GLYPH: &str = "\u{25E6}\u{FE0E}";

/// Placeholder for a blank leaf of a [`Shape`].
pub const SHAPE_LEAF: &str = "_";

/// Display adapter for an [`Expr`].
pub struct ExprDisplay<'a> {
    expr: &'a Expr,
    alphabet: &'a Alphabet,
    glyph: &'a str,
}

impl<'a> ExprDisplay<'a> {
    pub fn new(expr: &'a Expr, alphabet: &'a Alphabet, glyph: &'a str) -> Self {
        ExprDisplay { expr, alphabet, glyph }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, expr: &Expr, outermost: bool) -> fmt::Result {
        match expr {
            Expr::Var(v) => write!(f, "{}", self.alphabet.name(*v)),
            Expr::Op(l, r) => {
                if !outermost {
                    write!(f, "(")?;
                }
                self.write(f, l, false)?;
                write!(f, " {} ", self.glyph)?;
                self.write(f, r, false)?;
                if !outermost {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, self.expr, true)
    }
}

/// Display adapter for an [`Equation`], rendered as `<lhs> = <rhs>`.
pub struct EquationDisplay<'a> {
    lhs: ExprDisplay<'a>,
    rhs: ExprDisplay<'a>,
}

impl<'a> EquationDisplay<'a> {
    pub fn new(eq: &'a Equation, alphabet: &'a Alphabet, glyph: &'a str) -> Self {
        EquationDisplay {
            lhs: ExprDisplay::new(&eq.lhs, alphabet, glyph),
            rhs: ExprDisplay::new(&eq.rhs, alphabet, glyph),
        }
    }
}

impl fmt::Display for EquationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// Display adapter for a [`Shape`] with a custom glyph.
pub struct ShapeDisplay<'a> {
    shape: &'a Shape,
    glyph: &'a str,
}

impl<'a> ShapeDisplay<'a> {
    pub fn new(shape: &'a Shape, glyph: &'a str) -> Self {
        ShapeDisplay { shape, glyph }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, shape: &Shape, outermost: bool) -> fmt::Result {
        match shape {
            Shape::Leaf => write!(f, "{}", SHAPE_LEAF),
            Shape::Node(l, r) => {
                if !outermost {
                    write!(f, "(")?;
                }
                self.write(f, l, false)?;
                write!(f, " {} ", self.glyph)?;
                self.write(f, r, false)?;
                if !outermost {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ShapeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, self.shape, true)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ShapeDisplay::new(self, DEFAULT_GLYPH))
    }
}

/// Variables are shown by index (`0 ◦︎ (1 ◦︎ 0)`), which needs no alphabet.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn go(f: &mut fmt::Formatter<'_>, expr: &Expr, outermost: bool) -> fmt::Result {
            match expr {
                Expr::Var(v) => write!(f, "{}", v),
                Expr::Op(l, r) if outermost => {
                    go(f, l, false)?;
                    write!(f, " {} ", DEFAULT_GLYPH)?;
                    go(f, r, false)
                }
                Expr::Op(l, r) => {
                    write!(f, "(")?;
                    go(f, l, false)?;
                    write!(f, " {} ", DEFAULT_GLYPH)?;
                    go(f, r, false)?;
                    write!(f, ")")
                }
            }
        }
        go(f, self, true)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
