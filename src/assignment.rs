//! Core and dead features: the literals fixed by the feature model.
//!
//! A [`FixedAssignment`] is computed once by an external analysis of the
//! global formula and only read during preprocessing.

use crate::bitset::BitSet;
use crate::clause::Clause;
use crate::literal::{Lit, Var};

/// An immutable set of forced literals.
///
/// A positive literal marks a *core* feature (true in every configuration),
/// a negative one marks a *dead* feature (false in every configuration).
#[derive(Debug, Clone, Default)]
pub struct FixedAssignment {
    /// Forced literals, indexed by [`Lit::code`].
    forced: BitSet,
}

impl FixedAssignment {
    /// Creates an assignment that fixes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an assignment over `num_vars` variables from signed literals.
    ///
    /// ```
    /// use twise_rs::assignment::FixedAssignment;
    /// use twise_rs::literal::Lit;
    ///
    /// let fixed = FixedAssignment::new(3, [1, -3]);
    /// assert!(fixed.is_forced_true(Lit::new(1)));
    /// assert!(fixed.is_forced_false(Lit::new(3)));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a literal refers to a variable above `num_vars`.
    pub fn new<L>(num_vars: u32, literals: impl IntoIterator<Item = L>) -> Self
    where
        L: Into<Lit>,
    {
        let mut forced = BitSet::new(2 * num_vars as usize + 2);
        for lit in literals {
            let lit: Lit = lit.into();
            assert!(
                lit.var().id() <= num_vars,
                "Literal {} is out of range for {} variables",
                lit,
                num_vars
            );
            forced.insert(lit.code() as usize);
        }
        Self { forced }
    }

    /// Number of forced literals.
    pub fn len(&self) -> usize {
        self.forced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forced.is_empty()
    }

    pub fn contains(&self, lit: Lit) -> bool {
        self.forced.contains(lit.code() as usize)
    }

    /// Returns true if `lit` holds in every configuration.
    pub fn is_forced_true(&self, lit: Lit) -> bool {
        self.contains(lit)
    }

    /// Returns true if `lit` holds in no configuration.
    pub fn is_forced_false(&self, lit: Lit) -> bool {
        self.contains(-lit)
    }

    /// Forced literals, ordered by variable, positive before negative.
    pub fn literals(&self) -> impl Iterator<Item = Lit> + '_ {
        self.forced.iter().map(|code| {
            let v = (code >> 1) as i32;
            if code & 1 == 1 {
                Lit::new(-v)
            } else {
                Lit::new(v)
            }
        })
    }

    /// Core features (forced true).
    pub fn core(&self) -> Vec<Var> {
        self.literals()
            .filter(|lit| lit.is_positive())
            .map(|lit| lit.var())
            .collect()
    }

    /// Dead features (forced false).
    pub fn dead(&self) -> Vec<Var> {
        self.literals()
            .filter(|lit| lit.is_negated())
            .map(|lit| lit.var())
            .collect()
    }

    /// Number of clause literals that are forced false.
    pub fn count_conflicts(&self, clause: &Clause) -> usize {
        clause.iter().filter(|&lit| self.is_forced_false(lit)).count()
    }

    /// Returns true if every literal of the clause is forced true.
    ///
    /// Vacuously true for the empty clause.
    pub fn satisfies(&self, clause: &Clause) -> bool {
        clause.iter().all(|lit| self.is_forced_true(lit))
    }
}
