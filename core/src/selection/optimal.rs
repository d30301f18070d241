use crate::api::Diagnoser;
use crate::error::{DiagnoserError, Result};
use crate::tree::build_tree;
use crate::types::Record;
use itertools::Itertools;
use log::debug;
use std::collections::HashSet;

/// Finds the most accurate tree that tests exactly `depth` symptoms
///
/// Tries every combination of `depth` distinct symptoms (keeping their
/// order from `symptoms`), builds a tree for each and scores it against
/// `records`. The first combination with the strictly highest success
/// rate wins.
///
/// Returns `Ok(None)` when no candidate scores above zero, which is
/// always the case for empty `records`.
///
/// # Errors
///
/// - [`DiagnoserError::InvalidDepth`] if `depth > symptoms.len()`
/// - [`DiagnoserError::DuplicateSymptom`] if a symptom is listed twice
///
/// # Example
///
/// ```
/// use diagtree_core::{optimal_tree, Record};
///
/// let records = vec![
///     Record::new("influenza", ["cough", "fever"]),
///     Record::new("cold", ["cough"]),
///     Record::new("healthy", Vec::<String>::new()),
/// ];
///
/// let diagnoser = optimal_tree(&records, &["cough", "fever"], 1)
///     .unwrap()
///     .unwrap();
/// assert_eq!(diagnoser.root().symptom(), Some("cough"));
/// assert_eq!(diagnoser.diagnose(&[] as &[&str]), "healthy");
/// ```
pub fn optimal_tree<S: AsRef<str>>(
    records: &[Record],
    symptoms: &[S],
    depth: usize,
) -> Result<Option<Diagnoser>> {
    validate_symptoms(symptoms, depth)?;

    if records.is_empty() {
        return Ok(None);
    }

    let names: Vec<&str> = symptoms.iter().map(|symptom| symptom.as_ref()).collect();
    let mut best: Option<Diagnoser> = None;
    let mut best_accuracy = 0.0;

    for subset in names.iter().copied().combinations(depth) {
        let diagnoser = build_tree(records, subset.as_slice());
        let accuracy = diagnoser.calculate_success_rate(records)?;

        if accuracy > best_accuracy {
            debug!("New best tree {:?} with success rate {:.3}", subset, accuracy);
            best = Some(diagnoser);
            best_accuracy = accuracy;
        }
    }

    Ok(best)
}

/// Checks the depth range and symptom uniqueness
fn validate_symptoms<S: AsRef<str>>(symptoms: &[S], depth: usize) -> Result<()> {
    if depth > symptoms.len() {
        return Err(DiagnoserError::InvalidDepth {
            depth,
            max: symptoms.len(),
        });
    }

    let mut seen = HashSet::new();
    for symptom in symptoms {
        if !seen.insert(symptom.as_ref()) {
            return Err(DiagnoserError::DuplicateSymptom(symptom.as_ref().to_string()));
        }
    }

    Ok(())
}
