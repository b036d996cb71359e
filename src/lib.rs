//! # twise-rs: presence conditions for t-wise sampling
//!
//! **`twise-rs`** prepares the input of a greedy t-wise covering-array search over a feature model.
//! Every element of a t-wise interaction comes with *presence conditions*: conjunctions of clauses
//! that must hold for the element to appear in a configuration. This crate simplifies those
//! conditions against the core/dead features of the model, shares identical conditions between
//! groups, indexes them by literal, and orders them so the search meets the least constrained ones first.
//!
//! ## Key Features
//!
//! - **Simplification**: clauses already satisfied by core/dead features remove their whole expression,
//!   clauses contradicted by them are dropped.
//! - **Hash Consing**: structurally equal conditions are interned once and addressed by a
//!   [`ConditionId`][crate::condition::ConditionId] handle, no matter how many groups use them.
//! - **Inverted Index**: the [`LiteralDictionary`][crate::dictionary::LiteralDictionary] lists, for every
//!   literal, the conditions mentioning it.
//! - **1-Based Indexing**: variables are 1-indexed and literals are signed, as in DIMACS.
//!
//! ## Basic Usage
//!
//! ```rust
//! use twise_rs::assignment::FixedAssignment;
//! use twise_rs::expression::literal_groups;
//! use twise_rs::literal::Lit;
//! use twise_rs::manager::PresenceConditionManager;
//!
//! // 1. Core/dead features from an external analysis: x1 is core, x3 is dead.
//! let fixed = FixedAssignment::new(3, [1, -3]);
//!
//! // 2. One group with a unit expression per literal of 3 features.
//! let groups = literal_groups(3);
//!
//! // 3. Run the pass.
//! let pcm = PresenceConditionManager::new(3, &fixed, &groups);
//!
//! // `1` and `-3` are always true, `-1` and `3` contradict the model.
//! assert_eq!(pcm.group(0).count(), 2);
//! assert_eq!(pcm.dictionary(Lit::new(2)).count(), 1);
//! assert_eq!(pcm.dictionary(Lit::new(1)).count(), 0);
//! ```
//!
//! ## Core Components
//!
//! - **[`manager`]**: the two-phase pass and its read-only result.
//! - **[`simplify`]**: clause fates against the [`assignment::FixedAssignment`].
//! - **[`interner`]**: canonicalization on top of the hash-consing [`table`].
//! - **[`sort`]**: the priority order inside a group.

pub mod assignment;
pub mod bitset;
pub mod clause;
pub mod condition;
pub mod dictionary;
pub mod expression;
pub mod interner;
pub mod literal;
pub mod manager;
pub mod simplify;
pub mod sort;
pub mod stats;
pub mod table;
pub mod utils;
