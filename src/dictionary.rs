//! Inverted index from literals to the presence conditions mentioning them.
//!
//! # Layout
//!
//! For `n` variables the dictionary has `2n + 1` slots:
//!
//! ```text
//! slot 0          reserved
//! slots 1..=n     positive literals  1 ..  n
//! slots n+1..=2n  negative literals -1 .. -n
//! ```
//!
//! Each slot lists condition handles in the order the conditions were interned.

use crate::condition::ConditionId;
use crate::literal::Lit;

#[derive(Debug, Clone)]
pub struct LiteralDictionary {
    num_vars: u32,
    slots: Vec<Vec<ConditionId>>,
    num_entries: usize,
}

impl LiteralDictionary {
    /// Create an empty dictionary for `num_vars` variables.
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            slots: vec![Vec::new(); 2 * num_vars as usize + 1],
            num_entries: 0,
        }
    }

    /// Slot index of a literal.
    ///
    /// # Panics
    ///
    /// Panics if the literal's variable exceeds the dictionary's variable count.
    pub fn slot(&self, lit: Lit) -> usize {
        lit.slot(self.num_vars)
    }

    /// Conditions containing `lit`, in interning order.
    pub fn get(&self, lit: Lit) -> &[ConditionId] {
        &self.slots[self.slot(lit)]
    }

    /// Raw slots, including the reserved slot 0.
    pub fn slots(&self) -> &[Vec<ConditionId>] {
        &self.slots
    }

    /// Total number of (literal, condition) entries.
    pub fn num_entries(&self) -> usize {
        self.num_entries
    }

    pub(crate) fn push(&mut self, lit: Lit, id: ConditionId) {
        let slot = self.slot(lit);
        self.slots[slot].push(id);
        self.num_entries += 1;
    }
}
