//! Presence conditions: conjunctions of clauses tagged with the groups they occur in.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::clause::Clause;
use crate::literal::Lit;
use crate::utils::{pairing_fold, MyHash};

/// Handle of an interned [`PresenceCondition`].
///
/// Handles are dense indices in interning order and stay valid for the
/// lifetime of the manager that produced them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ConditionId(u32);

impl ConditionId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A non-empty conjunction of clauses.
///
/// Two presence conditions are equal when they have the same *set* of clauses
/// (clause order, clause repetition and literal order are irrelevant). Group
/// memberships do not take part in equality.
#[derive(Debug, Clone)]
pub struct PresenceCondition {
    clauses: Vec<Clause>,
    groups: BTreeSet<usize>,
}

impl PresenceCondition {
    /// # Panics
    ///
    /// Panics if `clauses` is empty.
    pub fn new(clauses: Vec<Clause>) -> Self {
        assert!(
            !clauses.is_empty(),
            "Presence condition must contain at least one clause"
        );
        Self {
            clauses,
            groups: BTreeSet::new(),
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Always false; a presence condition has at least one clause.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of literal occurrences over all clauses.
    pub fn total_literals(&self) -> usize {
        self.clauses.iter().map(Clause::len).sum()
    }

    /// Distinct literals, in order of first occurrence.
    pub fn literals(&self) -> Vec<Lit> {
        let mut seen = HashSet::new();
        self.clauses
            .iter()
            .flat_map(Clause::iter)
            .filter(|&lit| seen.insert(lit))
            .collect()
    }

    /// Indices of the groups this condition was derived from, ascending.
    pub fn groups(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.iter().copied()
    }

    pub fn in_group(&self, group: usize) -> bool {
        self.groups.contains(&group)
    }

    /// Returns true if the group was not recorded before.
    pub(crate) fn add_group(&mut self, group: usize) -> bool {
        self.groups.insert(group)
    }

    /// Stable sort of the clauses by ascending size.
    pub(crate) fn sort_clauses(&mut self) {
        self.clauses.sort_by_key(Clause::len);
    }

    /// Sorted, deduplicated clause set in canonical literal order.
    fn canonical(&self) -> Vec<Vec<Lit>> {
        let mut set: Vec<Vec<Lit>> = self.clauses.iter().map(Clause::sorted).collect();
        set.sort_unstable();
        set.dedup();
        set
    }
}

impl PartialEq for PresenceCondition {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for PresenceCondition {}

impl MyHash for PresenceCondition {
    fn hash(&self) -> u64 {
        let mut hashes: Vec<u64> = self.clauses.iter().map(MyHash::hash).collect();
        hashes.sort_unstable();
        hashes.dedup();
        pairing_fold(hashes.len() as u64, hashes)
    }
}

impl fmt::Display for PresenceCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(clauses: &[&[i32]]) -> PresenceCondition {
        PresenceCondition::new(clauses.iter().map(|c| Clause::new(c.iter().copied())).collect())
    }

    #[test]
    #[should_panic(expected = "Presence condition must contain at least one clause")]
    fn test_empty_panics() {
        PresenceCondition::new(vec![]);
    }

    #[test]
    fn test_set_of_sets_equality() {
        let a = pc(&[&[1, 2], &[-3]]);
        let b = pc(&[&[-3], &[2, 1]]);
        let c = pc(&[&[-3], &[2, 1], &[1, 2]]);
        let d = pc(&[&[-3], &[2]]);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, d);
        assert_eq!(MyHash::hash(&a), MyHash::hash(&b));
        assert_eq!(MyHash::hash(&a), MyHash::hash(&c));
    }

    #[test]
    fn test_groups_not_in_equality() {
        let mut a = pc(&[&[1]]);
        let b = pc(&[&[1]]);
        assert!(a.add_group(3));
        assert!(!a.add_group(3));
        assert!(a.add_group(0));
        assert_eq!(a, b);
        assert_eq!(a.groups().collect::<Vec<_>>(), vec![0, 3]);
        assert!(a.in_group(3));
        assert!(!b.in_group(3));
    }

    #[test]
    fn test_sort_clauses_stable() {
        let mut a = pc(&[&[1, 2, 3], &[4], &[5, 6], &[7]]);
        a.sort_clauses();
        let sizes: Vec<usize> = a.clauses().iter().map(Clause::len).collect();
        assert_eq!(sizes, vec![1, 1, 2, 3]);
        assert_eq!(a.clauses()[0], Clause::new([4]));
        assert_eq!(a.clauses()[1], Clause::new([7]));

        let before: Vec<Clause> = a.clauses().to_vec();
        a.sort_clauses();
        assert_eq!(a.clauses(), &before[..]);
    }

    #[test]
    fn test_literals_distinct() {
        let a = pc(&[&[2, -1], &[-1, 3], &[2]]);
        let lits: Vec<i32> = a.literals().into_iter().map(Lit::get).collect();
        assert_eq!(lits, vec![2, -1, 3]);
        assert_eq!(a.total_literals(), 5);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_literals_wide_condition() {
        let clauses: Vec<Clause> = (0..100)
            .map(|k| Clause::new((1..=500).map(|v| if k % 2 == 0 { v } else { -v })))
            .collect();
        let a = PresenceCondition::new(clauses);
        let lits = a.literals();
        assert_eq!(lits.len(), 1000);
        assert_eq!(lits[0], Lit::new(1));
        assert_eq!(lits[500], Lit::new(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(pc(&[&[1, -2], &[3]]).to_string(), "{1 | -2} & {3}");
    }
}
