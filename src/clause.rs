//! Disjunctive clauses over signed literals.

use std::collections::HashSet;
use std::fmt;

use crate::literal::Lit;
use crate::utils::{pairing_fold, MyHash};

/// A disjunction of unique literals.
///
/// The literals keep the order they were given in (minus duplicates), but
/// equality and hashing treat the clause as a set.
#[derive(Debug, Clone)]
pub struct Clause {
    literals: Vec<Lit>,
}

impl Clause {
    /// Creates a clause from signed literals, dropping repeated ones.
    ///
    /// ```
    /// use twise_rs::clause::Clause;
    ///
    /// let c = Clause::new([3, -1, 3]);
    /// assert_eq!(c.len(), 2);
    /// assert_eq!(c, Clause::new([-1, 3]));
    /// ```
    pub fn new<L>(literals: impl IntoIterator<Item = L>) -> Self
    where
        L: Into<Lit>,
    {
        let mut seen = HashSet::new();
        let mut unique: Vec<Lit> = Vec::new();
        for lit in literals {
            let lit: Lit = lit.into();
            if seen.insert(lit) {
                unique.push(lit);
            }
        }
        Self { literals: unique }
    }

    pub fn literals(&self) -> &[Lit] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = Lit> + '_ {
        self.literals.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, lit: Lit) -> bool {
        self.literals.contains(&lit)
    }

    /// Literals in ascending order; the canonical form used for comparison.
    pub(crate) fn sorted(&self) -> Vec<Lit> {
        let mut sorted = self.literals.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl Eq for Clause {}

impl MyHash for Clause {
    fn hash(&self) -> u64 {
        let codes = self.sorted().into_iter().map(|lit| lit.code() as u64);
        pairing_fold(self.len() as u64, codes)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, "}}")
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = Lit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Lit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter().copied()
    }
}
