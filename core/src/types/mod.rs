//! Core type definitions for diagnosis trees
//!
//! This module provides the fundamental types used throughout the diagtree library:
//! - [`Record`]: A labeled training example (illness + present symptoms)
//! - [`Diagnosis`]: Leaf outcome, either an illness or the "no finding" sentinel
//! - [`SymptomSet`]: Membership test over the symptoms of a subject
//! - [`MinimizeOptions`]: Configuration for tree minimization

mod diagnosis;
mod options;
mod record;
mod symptoms;

pub use diagnosis::Diagnosis;
pub use options::MinimizeOptions;
pub use record::Record;
pub use symptoms::SymptomSet;
