//! Priority order of presence conditions inside a group.
//!
//! A greedy covering search does best when it meets the least constrained
//! conditions first:
//!
//! 1. fewer clauses first;
//! 2. for the same number of clauses, larger clauses first, measured as
//!    `Σ_i (|b_i| - |a_i|)` over clause positions (negative means `a` first).
//!
//! The sort is stable, so conditions with equal keys keep interning order.

use std::cmp::Ordering;

use crate::condition::{ConditionId, PresenceCondition};

/// Compare two conditions by priority.
pub fn compare_conditions(a: &PresenceCondition, b: &PresenceCondition) -> Ordering {
    let by_count = a.len().cmp(&b.len());
    if by_count != Ordering::Equal {
        return by_count;
    }

    let diff: isize = a
        .clauses()
        .iter()
        .zip(b.clauses())
        .map(|(ca, cb)| cb.len() as isize - ca.len() as isize)
        .sum();
    diff.cmp(&0)
}

/// Sort a group's condition handles by priority.
pub fn sort_group<'a, F>(group: &mut [ConditionId], get: F)
where
    F: Fn(ConditionId) -> &'a PresenceCondition,
{
    group.sort_by(|&a, &b| compare_conditions(get(a), get(b)));
}

/// Returns true if every adjacent pair of the group is in priority order.
pub fn is_sorted<'a, F>(group: &[ConditionId], get: F) -> bool
where
    F: Fn(ConditionId) -> &'a PresenceCondition,
{
    group
        .windows(2)
        .all(|w| compare_conditions(get(w[0]), get(w[1])) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;

    fn pc(clauses: &[&[i32]]) -> PresenceCondition {
        PresenceCondition::new(clauses.iter().map(|c| Clause::new(c.iter().copied())).collect())
    }

    #[test]
    fn test_fewer_clauses_first() {
        let a = pc(&[&[1]]);
        let b = pc(&[&[1], &[2]]);
        assert_eq!(compare_conditions(&a, &b), Ordering::Less);
        assert_eq!(compare_conditions(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_larger_clauses_first() {
        let a = pc(&[&[1, 2, 3], &[4]]);
        let b = pc(&[&[1], &[4]]);
        assert_eq!(compare_conditions(&a, &b), Ordering::Less);
        assert_eq!(compare_conditions(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_positional_sum() {
        // Position-wise: (1 - 3) + (3 - 1) = 0.
        let a = pc(&[&[1, 2, 3], &[4]]);
        let b = pc(&[&[5], &[6, 7, 8]]);
        assert_eq!(compare_conditions(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sort_group_stable() {
        let conditions = vec![
            pc(&[&[1], &[2]]),    // 0
            pc(&[&[3]]),          // 1
            pc(&[&[4, 5]]),       // 2
            pc(&[&[6]]),          // 3
            pc(&[&[7, 8], &[9]]), // 4
        ];
        let mut group: Vec<ConditionId> = (0..5).map(ConditionId::new).collect();
        let get = |id: ConditionId| &conditions[id.index()];

        sort_group(&mut group, get);
        let order: Vec<usize> = group.iter().map(|id| id.index()).collect();
        assert_eq!(order, vec![2, 1, 3, 4, 0]);
        assert!(is_sorted(&group, get));
    }

    #[test]
    fn test_is_sorted_detects_violation() {
        let conditions = vec![pc(&[&[1], &[2]]), pc(&[&[3]])];
        let group = vec![ConditionId::new(0), ConditionId::new(1)];
        assert!(!is_sorted(&group, |id| &conditions[id.index()]));
    }
}
