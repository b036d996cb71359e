//! Canonicalization of presence conditions.
//!
//! The interner owns every [`PresenceCondition`] of a run. Structurally equal
//! clause sets map to one shared record, and every new record is indexed in
//! the [`LiteralDictionary`] once per distinct literal.

use log::debug;

use crate::clause::Clause;
use crate::condition::{ConditionId, PresenceCondition};
use crate::dictionary::LiteralDictionary;
use crate::table::Table;

#[derive(Debug, Clone)]
pub struct Interner {
    table: Table<PresenceCondition>,
    dictionary: LiteralDictionary,
    hits: usize,
    misses: usize,
}

impl Interner {
    /// Create an interner for `num_vars` variables with `2^table_bits` buckets.
    pub fn new(num_vars: u32, table_bits: usize) -> Self {
        Self {
            table: Table::new(table_bits),
            dictionary: LiteralDictionary::new(num_vars),
            hits: 0,
            misses: 0,
        }
    }

    /// Intern a simplified clause set on behalf of `group`.
    ///
    /// Returns the handle of the canonical condition, which now lists `group`
    /// among its groups and has its clauses sorted by ascending size.
    pub fn intern(&mut self, clauses: Vec<Clause>, group: usize) -> ConditionId {
        let candidate = PresenceCondition::new(clauses);
        let (index, added) = self.table.put(candidate);
        let id = ConditionId::new(index as u32);

        if added {
            self.misses += 1;
            let literals = self.table[index].literals();
            debug!("intern: new condition {} = {}", id, self.table[index]);
            for lit in literals {
                self.dictionary.push(lit, id);
            }
        } else {
            self.hits += 1;
            debug!("intern: reusing condition {} for group {}", id, group);
        }

        let condition = self.table.value_mut(index);
        condition.add_group(group);
        condition.sort_clauses();

        id
    }

    pub fn get(&self, id: ConditionId) -> &PresenceCondition {
        &self.table[id.index()]
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of lookups that found an existing condition.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that created a new condition.
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn dictionary(&self) -> &LiteralDictionary {
        &self.dictionary
    }

    /// All conditions in interning order.
    pub fn iter(&self) -> impl Iterator<Item = &PresenceCondition> + '_ {
        self.table.iter()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::literal::Lit;

    fn clauses(cs: &[&[i32]]) -> Vec<Clause> {
        cs.iter().map(|c| Clause::new(c.iter().copied())).collect()
    }

    #[test]
    fn test_intern_new() {
        let mut interner = Interner::new(4, 4);
        let id = interner.intern(clauses(&[&[1, 2], &[-3]]), 0);
        assert_eq!(id, ConditionId::new(0));
        assert_eq!(interner.len(), 1);
        assert_eq!(interner.misses(), 1);

        let pc = interner.get(id);
        assert_eq!(pc.groups().collect::<Vec<_>>(), vec![0]);
        // Sorted by size: the unit clause comes first.
        assert_eq!(pc.clauses()[0], Clause::new([-3]));

        let dict = interner.dictionary();
        assert_eq!(dict.get(Lit::new(1)), &[id]);
        assert_eq!(dict.get(Lit::new(2)), &[id]);
        assert_eq!(dict.get(Lit::new(-3)), &[id]);
        assert!(dict.get(Lit::new(3)).is_empty());
        assert_eq!(dict.num_entries(), 3);
    }

    #[test]
    fn test_intern_shared() {
        let mut interner = Interner::new(4, 4);
        let a = interner.intern(clauses(&[&[1, 2], &[-3]]), 0);
        let b = interner.intern(clauses(&[&[-3], &[2, 1]]), 2);
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
        assert_eq!(interner.hits(), 1);
        assert_eq!(interner.get(a).groups().collect::<Vec<_>>(), vec![0, 2]);
        // The dictionary is only filled on first insertion.
        assert_eq!(interner.dictionary().get(Lit::new(1)), &[a]);
        assert_eq!(interner.dictionary().num_entries(), 3);
    }

    #[test]
    fn test_dictionary_distinct_literals() {
        let mut interner = Interner::new(3, 4);
        let id = interner.intern(clauses(&[&[1, 2], &[1, 3], &[1]]), 0);
        assert_eq!(interner.dictionary().get(Lit::new(1)), &[id]);
        assert_eq!(interner.dictionary().num_entries(), 3);
    }

    #[test]
    fn test_single_bucket() {
        let mut interner = Interner::new(3, 0);
        let a = interner.intern(clauses(&[&[1]]), 0);
        let b = interner.intern(clauses(&[&[2]]), 0);
        let c = interner.intern(clauses(&[&[1]]), 1);
        assert_ne!(a, b);
        assert_eq!(a, c);
        assert_eq!(interner.len(), 2);
    }
}
