/// Configuration for tree minimization
///
/// The default performs only the semantics-preserving merge of identical
/// sibling subtrees.
///
/// # Example
///
/// ```
/// use diagtree_core::MinimizeOptions;
///
/// let options = MinimizeOptions::default().remove_empty(true);
/// assert!(options.remove_empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MinimizeOptions {
    /// Replace a decision node by its other child when one child is a
    /// "no finding" leaf
    ///
    /// Inputs that used to reach the "no finding" leaf receive the
    /// diagnosis of the sibling branch instead; every other input keeps
    /// its diagnosis.
    pub remove_empty: bool,
}

impl MinimizeOptions {
    /// Builder: Elide "no finding" branches
    pub fn remove_empty(mut self, remove: bool) -> Self {
        self.remove_empty = remove;
        self
    }
}
