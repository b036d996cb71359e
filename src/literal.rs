//! Type-safe wrappers for feature variables and signed literals.
//!
//! Variables are 1-indexed (0 is reserved), literals are signed DIMACS-style
//! integers: `v` means "variable `v` is true", `-v` means "variable `v` is false".

use std::fmt;
use std::ops::Neg;

/// A feature variable identifier (1-indexed).
///
/// # Invariants
///
/// - Variable IDs must be >= 1 (0 is reserved)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Variables must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable IDs must be >= 1");
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Returns the positive literal of this variable.
    pub fn positive(self) -> Lit {
        Lit(self.0 as i32)
    }

    /// Returns the negative literal of this variable.
    pub fn negative(self) -> Lit {
        Lit(-(self.0 as i32))
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A signed literal.
///
/// Ordering follows the underlying signed integer, which gives clauses a
/// canonical literal order independent of the order they were written in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit(i32);

impl Lit {
    /// Creates a literal from its signed representation.
    ///
    /// # Panics
    ///
    /// Panics if `value == 0` or `value == i32::MIN`, which has no negation.
    pub fn new(value: i32) -> Self {
        assert_ne!(value, 0, "Literal must be non-zero");
        assert_ne!(value, i32::MIN, "Literal {} is out of range", value);
        Lit(value)
    }

    /// Creates a literal of `var` with the given polarity.
    pub fn from_var(var: Var, positive: bool) -> Self {
        if positive {
            var.positive()
        } else {
            var.negative()
        }
    }

    /// Return the signed representation of the literal.
    pub const fn get(self) -> i32 {
        self.0
    }

    pub fn var(self) -> Var {
        Var(self.0.unsigned_abs())
    }

    pub const fn is_negated(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn negate(self) -> Self {
        Self(-self.0)
    }

    /// Dense unsigned code of the literal: `2 * var + (negated as u32)`.
    ///
    /// Codes 0 and 1 are never produced, since variables start at 1.
    /// The largest variable is `i32::MAX`, so the code always fits in `u32`.
    pub fn code(self) -> u32 {
        (self.0.unsigned_abs() << 1) + self.is_negated() as u32
    }

    /// Index of the literal in a dictionary over `num_vars` variables.
    ///
    /// ```text
    ///  v -> v
    /// -v -> num_vars + v
    /// ```
    ///
    /// Slot 0 is never produced.
    ///
    /// # Panics
    ///
    /// Panics if the variable of the literal exceeds `num_vars`.
    pub fn slot(self, num_vars: u32) -> usize {
        let v = self.0.unsigned_abs();
        assert!(
            v <= num_vars,
            "Literal {} is out of range for {} variables",
            self.0,
            num_vars
        );
        if self.is_negated() {
            (num_vars + v) as usize
        } else {
            v as usize
        }
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<i32> for Lit {
    fn from(value: i32) -> Self {
        Lit::new(value)
    }
}

impl From<Lit> for i32 {
    fn from(lit: Lit) -> Self {
        lit.0
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
