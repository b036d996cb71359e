//! The preprocessing pass and its published result.
//!
//! [`PresenceConditionManager`] runs in two phases:
//!
//! 1. For every group, for every expression: simplify against the fixed
//!    assignment, intern the surviving clause set, append the shared handle
//!    to the group's list.
//! 2. Sort every group's list by priority (see [`crate::sort`]).
//!
//! Nothing is mutated afterwards. The manager is `Send + Sync` and can be
//! shared by reference between search threads.

use log::{debug, info};

use crate::assignment::FixedAssignment;
use crate::condition::{ConditionId, PresenceCondition};
use crate::dictionary::LiteralDictionary;
use crate::expression::Expression;
use crate::interner::Interner;
use crate::literal::Lit;
use crate::simplify::{simplify_expression, Simplified};
use crate::sort::sort_group;
use crate::stats::Statistics;

/// Configuration of a preprocessing pass.
///
/// # Examples
///
/// ```
/// use twise_rs::manager::ManagerConfig;
///
/// let config = ManagerConfig::default().with_table_bits(8);
/// assert_eq!(config.table_bits, 8);
/// assert!(config.sort_groups);
/// ```
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Log2 of the number of buckets in the canonicalization table (default: 12)
    pub table_bits: usize,
    /// Whether to sort each group by priority after interning (default: true)
    pub sort_groups: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            table_bits: 12,
            sort_groups: true,
        }
    }
}

impl ManagerConfig {
    pub fn with_table_bits(mut self, bits: usize) -> Self {
        self.table_bits = bits;
        self
    }

    pub fn with_sort_groups(mut self, sort_groups: bool) -> Self {
        self.sort_groups = sort_groups;
        self
    }
}

/// Deduplicated, literal-indexed and priority-ordered presence conditions.
///
/// # Examples
///
/// ```
/// use twise_rs::assignment::FixedAssignment;
/// use twise_rs::expression::expression;
/// use twise_rs::literal::Lit;
/// use twise_rs::manager::PresenceConditionManager;
///
/// // Feature 2 is dead.
/// let fixed = FixedAssignment::new(4, [-2]);
/// let groups = vec![
///     vec![expression(&[&[2, 3], &[4]]), expression(&[&[1]])],
///     vec![expression(&[&[4]])],
/// ];
///
/// let pcm = PresenceConditionManager::new(4, &fixed, &groups);
///
/// // `{2 | 3}` was dropped, leaving `{4}`, which both groups share.
/// let first = pcm.group(0).next().unwrap();
/// let second = pcm.group(1).next().unwrap();
/// assert!(std::ptr::eq(first, second));
/// assert_eq!(first.groups().collect::<Vec<_>>(), vec![0, 1]);
/// assert_eq!(pcm.dictionary(Lit::new(4)).count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PresenceConditionManager {
    num_vars: u32,
    interner: Interner,
    grouped: Vec<Vec<ConditionId>>,
    stats: Statistics,
}

impl PresenceConditionManager {
    /// Run the pass with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if any literal of `fixed` or `groups` refers to a variable
    /// above `num_vars`. The check runs before anything is built.
    pub fn new(num_vars: u32, fixed: &FixedAssignment, groups: &[Vec<Expression>]) -> Self {
        Self::with_config(num_vars, fixed, groups, &ManagerConfig::default())
    }

    /// Run the pass with an explicit configuration.
    pub fn with_config(
        num_vars: u32,
        fixed: &FixedAssignment,
        groups: &[Vec<Expression>],
        config: &ManagerConfig,
    ) -> Self {
        validate(num_vars, fixed, groups);

        debug!(
            "pcm: {} variables, {} groups, {} fixed literals",
            num_vars,
            groups.len(),
            fixed.len()
        );

        let mut interner = Interner::new(num_vars, config.table_bits);
        let mut grouped = Vec::with_capacity(groups.len());
        let mut stats = Statistics {
            groups: groups.len(),
            ..Statistics::default()
        };

        for (group_index, group) in groups.iter().enumerate() {
            let mut list = Vec::new();
            for expression in group {
                stats.expressions += 1;
                match simplify_expression(expression, fixed) {
                    Simplified::AlwaysTrue => stats.always_true += 1,
                    Simplified::Empty { dropped } => {
                        stats.dropped_clauses += dropped;
                        stats.emptied += 1;
                    }
                    Simplified::Clauses { clauses, dropped } => {
                        stats.dropped_clauses += dropped;
                        list.push(interner.intern(clauses, group_index));
                    }
                }
            }
            debug!("pcm: group {} -> {} conditions", group_index, list.len());
            grouped.push(list);
        }

        if config.sort_groups {
            for list in grouped.iter_mut() {
                sort_group(list, |id| interner.get(id));
            }
        }

        stats.interned = interner.misses();
        stats.reused = interner.hits();
        stats.dictionary_entries = interner.dictionary().num_entries();

        info!(
            "pcm: {} expressions -> {} conditions ({} reused, {} always true, {} dropped clauses)",
            stats.expressions, stats.interned, stats.reused, stats.always_true, stats.dropped_clauses
        );

        Self {
            num_vars,
            interner,
            grouped,
            stats,
        }
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Number of distinct presence conditions.
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    pub fn condition(&self, id: ConditionId) -> &PresenceCondition {
        self.interner.get(id)
    }

    /// All distinct conditions in interning order.
    pub fn conditions(&self) -> impl Iterator<Item = &PresenceCondition> + '_ {
        self.interner.iter()
    }

    /// Conditions mentioning `lit`, in interning order.
    pub fn dictionary(&self, lit: Lit) -> impl Iterator<Item = &PresenceCondition> + '_ {
        self.dictionary_ids(lit)
            .iter()
            .map(move |&id| self.interner.get(id))
    }

    pub fn dictionary_ids(&self, lit: Lit) -> &[ConditionId] {
        self.interner.dictionary().get(lit)
    }

    pub fn literal_dictionary(&self) -> &LiteralDictionary {
        self.interner.dictionary()
    }

    /// One list of handles per input group, in priority order.
    pub fn grouped_presence_conditions(&self) -> &[Vec<ConditionId>] {
        &self.grouped
    }

    /// Conditions of one group, in priority order.
    pub fn group(&self, index: usize) -> impl Iterator<Item = &PresenceCondition> + '_ {
        self.grouped[index].iter().map(move |&id| self.interner.get(id))
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

fn validate(num_vars: u32, fixed: &FixedAssignment, groups: &[Vec<Expression>]) {
    let literals = fixed.literals().chain(
        groups
            .iter()
            .flatten()
            .flatten()
            .flat_map(|clause| clause.iter()),
    );
    for lit in literals {
        assert!(
            lit.var().id() <= num_vars,
            "Literal {} is out of range for {} variables",
            lit,
            num_vars
        );
    }
}
