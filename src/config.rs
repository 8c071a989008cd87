//! Run configuration: the operation bound and the variable alphabet.
//!
//! Every check happens up front, so a [`Config`] that was built successfully can always be
//! enumerated and printed in full.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::equation::Equation;
use crate::format::{EquationDisplay, DEFAULT_GLYPH};

/// Variable names used by the original equation list.
pub const DEFAULT_ALPHABET: &str = "xyzwuv";

/// Operation bound used by the original equation list.
pub const DEFAULT_MAX_OPS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("operation bound must be non-negative, got {0}")]
    NegativeBound(i64),
    #[error("bound of {max_ops} operations needs {required} variable names, but the alphabet has only {available}")]
    AlphabetTooSmall {
        max_ops: usize,
        required: usize,
        available: usize,
    },
    #[error("variable name at position {0} is empty")]
    EmptyName(usize),
    #[error("variable name {0:?} occurs more than once")]
    DuplicateName(String),
    #[error("operator glyph must not be empty")]
    EmptyGlyph,
}

/// Largest number of distinct variables any equation with at most `max_ops` operations uses.
///
/// Both sides together have at most `max_ops + 2` leaves, and labeling all of them with
/// distinct variables always gives an admitted equation.
pub fn required_vars(max_ops: usize) -> usize {
    max_ops + 2
}

/// Ordered list of variable display names; variable `i` is shown as the `i`-th name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    names: Vec<String>,
}

impl Alphabet {
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigError::EmptyName(i));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }
        Ok(Alphabet { names })
    }

    /// One single-character name per character of `chars`.
    pub fn from_chars(chars: &str) -> Result<Self, ConfigError> {
        Self::new(chars.chars().map(String::from))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= self.len()`; [`Config::new`] rules this out for enumerated equations.
    pub fn name(&self, var: usize) -> &str {
        &self.names[var]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            names: DEFAULT_ALPHABET.chars().map(String::from).collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}

/// Validated settings for one enumeration run.
#[derive(Debug, Clone)]
pub struct Config {
    max_ops: usize,
    alphabet: Alphabet,
    glyph: String,
}

impl Config {
    /// Fails if `alphabet` cannot name every variable an equation within `max_ops` may use.
    pub fn new(max_ops: usize, alphabet: Alphabet) -> Result<Self, ConfigError> {
        let required = required_vars(max_ops);
        if alphabet.len() < required {
            return Err(ConfigError::AlphabetTooSmall {
                max_ops,
                required,
                available: alphabet.len(),
            });
        }
        Ok(Config {
            max_ops,
            alphabet,
            glyph: DEFAULT_GLYPH.to_string(),
        })
    }

    pub fn with_default_alphabet(max_ops: usize) -> Result<Self, ConfigError> {
        Self::new(max_ops, Alphabet::default())
    }

    /// Replaces the operator glyph used for display.
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Result<Self, ConfigError> {
        let glyph = glyph.into();
        if glyph.is_empty() {
            return Err(ConfigError::EmptyGlyph);
        }
        self.glyph = glyph;
        Ok(self)
    }

    /// Converts a signed bound, as read from user input, to an operation count.
    pub fn bound_from_signed(raw: i64) -> Result<usize, ConfigError> {
        usize::try_from(raw).map_err(|_| ConfigError::NegativeBound(raw))
    }

    pub fn max_ops(&self) -> usize {
        self.max_ops
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Renders `eq` as `<lhs> = <rhs>` with this configuration's names and glyph.
    pub fn display<'a>(&'a self, eq: &'a Equation) -> EquationDisplay<'a> {
        EquationDisplay::new(eq, &self.alphabet, &self.glyph)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_ops: DEFAULT_MAX_OPS,
            alphabet: Alphabet::default(),
            glyph: DEFAULT_GLYPH.to_string(),
        }
    }
}
