use crate::error::{DiagnoserError, Result};
use crate::tree::Node;
use crate::types::{Diagnosis, MinimizeOptions, Record, SymptomSet};

/// Classifier wrapping a diagnosis tree
///
/// Provides a high-level API for diagnosing subjects and analysing the
/// tree it owns.
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
/// let mut diagnoser = build_tree(&records, &["cough", "fever"]);
/// assert_eq!(diagnoser.diagnose(&["cough", "fever"]), "influenza");
/// assert_eq!(diagnoser.calculate_success_rate(&records).unwrap(), 1.0);
///
/// diagnoser.minimize();
/// assert_eq!(diagnoser.diagnose(&["cough"]), "cold");
/// assert_eq!(diagnoser.diagnose(&[] as &[&str]), "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Diagnoser {
    root: Node,
}

impl Diagnoser {
    /// Wraps an existing tree
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns the root of the tree
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consumes the diagnoser, returning its tree
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Diagnoses a subject from its present symptoms
    ///
    /// Never fails: a subject that matches no training pattern gets
    /// whatever its path resolves to, possibly [`Diagnosis::NoFinding`].
    pub fn diagnose<S: SymptomSet + ?Sized>(&self, symptoms: &S) -> &Diagnosis {
        self.root.resolve(symptoms)
    }

    /// Fraction of `records` whose illness matches their diagnosis
    ///
    /// # Errors
    ///
    /// Returns [`DiagnoserError::EmptyRecords`] if `records` is empty.
    pub fn calculate_success_rate(&self, records: &[Record]) -> Result<f64> {
        if records.is_empty() {
            return Err(DiagnoserError::EmptyRecords);
        }

        let successes = records
            .iter()
            .filter(|record| self.diagnose(*record) == record.illness())
            .count();

        Ok(successes as f64 / records.len() as f64)
    }

    /// Distinct illnesses at the leaves, most frequent first
    ///
    /// Illnesses appearing at the same number of leaves keep the order in
    /// which a pre-order, yes-first traversal meets them. "No finding"
    /// leaves are not reported.
    pub fn all_illnesses(&self) -> Vec<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        self.root.walk_leaves(|_, diagnosis| {
            let Some(illness) = diagnosis.as_illness() else {
                return;
            };
            match counts.iter_mut().find(|(seen, _)| *seen == illness) {
                Some((_, count)) => *count += 1,
                None => counts.push((illness, 1)),
            }
        });

        // stable sort keeps first-visited order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(illness, _)| illness.to_string())
            .collect()
    }

    /// Branch decisions leading to every leaf diagnosing `illness`
    ///
    /// Each path lists the answers from the root down (`true` for a
    /// present symptom). Paths are returned in pre-order, yes-first.
    pub fn paths_to_illness(&self, illness: &str) -> Vec<Vec<bool>> {
        let mut paths = Vec::new();
        self.root.walk_leaves(|path, diagnosis| {
            if diagnosis.as_illness() == Some(illness) {
                paths.push(path.to_vec());
            }
        });
        paths
    }

    /// Merges redundant subtrees in place
    ///
    /// The minimized tree gives the same diagnosis as the original for
    /// every possible set of symptoms.
    pub fn minimize(&mut self) {
        self.minimize_with_options(MinimizeOptions::default());
    }

    /// Minimizes in place with explicit options
    ///
    /// See [`MinimizeOptions::remove_empty`] for the one rewrite that can
    /// change a diagnosis.
    pub fn minimize_with_options(&mut self, options: MinimizeOptions) {
        let root = std::mem::replace(&mut self.root, Node::leaf(Diagnosis::NoFinding));
        self.root = root.minimized(options);
    }

    /// Longest path from the root to a leaf
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl From<Node> for Diagnoser {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}
