//! Raw input: expressions and expression groups.
//!
//! An expression is one alternative precondition of a test-goal element,
//! written as a conjunction of clauses. A group is the list of expressions for
//! one element set of the t-wise interaction.

use crate::clause::Clause;
use crate::literal::{Lit, Var};

/// A conjunction of clauses, before simplification.
pub type Expression = Vec<Clause>;

/// Build an expression from clauses given as signed integer slices.
///
/// ```
/// use twise_rs::expression::expression;
///
/// let e = expression(&[&[1, 2], &[-3]]);
/// assert_eq!(e.len(), 2);
/// ```
pub fn expression(clauses: &[&[i32]]) -> Expression {
    clauses.iter().map(|c| Clause::new(c.iter().copied())).collect()
}

/// One group with a single-literal expression per literal.
///
/// This is the usual input of a t-wise sampler, where every literal of a
/// feature is an element to combine.
pub fn literal_group(literals: impl IntoIterator<Item = Lit>) -> Vec<Expression> {
    literals
        .into_iter()
        .map(|lit| vec![Clause::new([lit])])
        .collect()
}

/// A single group over all `2 * num_vars` literals: `1, -1, 2, -2, ...`.
pub fn literal_groups(num_vars: u32) -> Vec<Vec<Expression>> {
    let literals = (1..=num_vars).flat_map(|v| {
        let var = Var::new(v);
        [var.positive(), var.negative()]
    });
    vec![literal_group(literals)]
}
