//! Optimal tree search
//!
//! Exhaustive evaluation of fixed-size symptom subsets, keeping the tree
//! with the best success rate on the training records.

mod optimal;

pub use optimal::optimal_tree;
