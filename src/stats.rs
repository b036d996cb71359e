use std::fmt;

/// Counters collected during one preprocessing pass.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Statistics {
    /// Number of input groups.
    pub groups: usize,
    /// Number of input expressions over all groups.
    pub expressions: usize,
    /// Expressions discarded because a clause is always true.
    pub always_true: usize,
    /// Expressions left without clauses after dropping conflicts.
    pub emptied: usize,
    /// Clauses dropped because they contain a forced-false literal.
    pub dropped_clauses: usize,
    /// Distinct presence conditions created.
    pub interned: usize,
    /// Expressions that mapped to an existing presence condition.
    pub reused: usize,
    /// Total number of dictionary entries.
    pub dictionary_entries: usize,
}

impl Statistics {
    /// Number of expressions that produced a presence condition.
    pub fn emitted(&self) -> usize {
        self.interned + self.reused
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Presence condition statistics:")?;
        writeln!(f, "  Groups: {}", self.groups)?;
        writeln!(f, "  Expressions: {}", self.expressions)?;
        writeln!(f, "  Always true (discarded): {}", self.always_true)?;
        writeln!(f, "  Emptied by conflicts: {}", self.emptied)?;
        writeln!(f, "  Dropped clauses: {}", self.dropped_clauses)?;
        writeln!(f, "  Conditions: {} ({} reused)", self.interned, self.reused)?;
        write!(f, "  Dictionary entries: {}", self.dictionary_entries)
    }
}
