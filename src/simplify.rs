//! Clause simplification against the fixed assignment.
//!
//! Each clause of an expression is classified on its own:
//!
//! | Conflicts | All literals forced true | Fate |
//! |-----------|--------------------------|------|
//! | 0 | yes | [`ClauseFate::Satisfied`]: the whole expression is always true |
//! | 0 | no | [`ClauseFate::Keep`]: copied as is |
//! | > 0 | - | [`ClauseFate::Drop`]: removed, the expression goes on |
//!
//! A conflicting clause is dropped rather than rejecting the expression. The
//! remaining clauses alone decide the presence condition.

use log::debug;

use crate::assignment::FixedAssignment;
use crate::clause::Clause;

/// What happens to a single clause.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClauseFate {
    Keep,
    Drop,
    Satisfied,
}

/// Classify `clause` against the fixed assignment.
pub fn clause_fate(clause: &Clause, fixed: &FixedAssignment) -> ClauseFate {
    if fixed.count_conflicts(clause) > 0 {
        ClauseFate::Drop
    } else if fixed.satisfies(clause) {
        ClauseFate::Satisfied
    } else {
        ClauseFate::Keep
    }
}

/// Result of simplifying one expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Simplified {
    /// Some clause is always true, so the expression carries no information.
    AlwaysTrue,
    /// Every clause was dropped.
    Empty { dropped: usize },
    /// The clauses to build a presence condition from, in input order.
    Clauses { clauses: Vec<Clause>, dropped: usize },
}

/// Simplify all clauses of one expression.
///
/// Stops at the first always-true clause.
pub fn simplify_expression(expression: &[Clause], fixed: &FixedAssignment) -> Simplified {
    let mut clauses = Vec::with_capacity(expression.len());
    let mut dropped = 0;

    for clause in expression {
        match clause_fate(clause, fixed) {
            ClauseFate::Keep => clauses.push(clause.clone()),
            ClauseFate::Drop => {
                debug!("simplify: dropping conflicting clause {}", clause);
                dropped += 1;
            }
            ClauseFate::Satisfied => {
                debug!("simplify: clause {} is always true, discarding expression", clause);
                return Simplified::AlwaysTrue;
            }
        }
    }

    if clauses.is_empty() {
        Simplified::Empty { dropped }
    } else {
        Simplified::Clauses { clauses, dropped }
    }
}
