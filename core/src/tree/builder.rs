use super::Node;
use crate::api::Diagnoser;
use crate::types::{Diagnosis, Record};

/// Builds a diagnosis tree from training records
///
/// Splits on `symptoms` in the given order: the first symptom is tested
/// at the root, the second at depth one, and so on. Once every symptom
/// has been tested, the leaf holds the most common illness among the
/// records that reached it (earliest record wins a tie), or
/// [`Diagnosis::NoFinding`] when no record reached it.
///
/// Every leaf of the result sits at depth `symptoms.len()`. Repeated
/// symptoms are tested again; use [`optimal_tree`](crate::optimal_tree)
/// for validated input.
///
/// # Example
///
/// ```
/// use diagtree_core::{build_tree, Record};
///
/// let records = vec![
///     Record::new("influenza", ["cough", "fever"]),
///     Record::new("cold", ["cough"]),
///     Record::new("healthy", Vec::<String>::new()),
/// ];
///
/// let diagnoser = build_tree(&records, &["fever"]);
/// assert_eq!(diagnoser.diagnose(&["fever"]), "influenza");
/// assert_eq!(diagnoser.diagnose(&["cough"]), "cold");
/// ```
pub fn build_tree<S: AsRef<str>>(records: &[Record], symptoms: &[S]) -> Diagnoser {
    let subset: Vec<&Record> = records.iter().collect();
    Diagnoser::new(build_node(&subset, symptoms))
}

/// Recursive partition step
fn build_node<S: AsRef<str>>(records: &[&Record], symptoms: &[S]) -> Node {
    let Some((first, rest)) = symptoms.split_first() else {
        return Node::leaf(most_common_illness(records));
    };

    let symptom = first.as_ref();
    let (yes, no): (Vec<&Record>, Vec<&Record>) =
        records.iter().copied().partition(|record| record.has(symptom));

    Node::decision(symptom, build_node(&yes, rest), build_node(&no, rest))
}

/// Majority illness among `records`
///
/// Counts are kept in first-seen order so that ties resolve to the
/// illness encountered first.
fn most_common_illness(records: &[&Record]) -> Diagnosis {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(illness, _)| *illness == record.illness()) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.illness(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (illness, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((illness, count));
        }
    }

    best.map_or(Diagnosis::NoFinding, |(illness, _)| Diagnosis::illness(illness))
}
