use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// A membership-testable collection of symptom names
///
/// Anything that can answer "is this symptom present?" can be diagnosed.
///
/// # Example
///
/// ```
/// use diagtree_core::SymptomSet;
/// use std::collections::HashSet;
///
/// let present: HashSet<String> = ["cough".to_string()].into_iter().collect();
/// assert!(present.has_symptom("cough"));
/// assert!(!["fever"].has_symptom("cough"));
/// ```
pub trait SymptomSet {
    /// Returns whether `symptom` is present
    fn has_symptom(&self, symptom: &str) -> bool;
}

impl<S: BuildHasher> SymptomSet for HashSet<String, S> {
    fn has_symptom(&self, symptom: &str) -> bool {
        self.contains(symptom)
    }
}

impl<S: BuildHasher> SymptomSet for HashSet<&str, S> {
    fn has_symptom(&self, symptom: &str) -> bool {
        self.contains(symptom)
    }
}

impl SymptomSet for BTreeSet<String> {
    fn has_symptom(&self, symptom: &str) -> bool {
        self.contains(symptom)
    }
}

impl<T: AsRef<str>> SymptomSet for [T] {
    fn has_symptom(&self, symptom: &str) -> bool {
        self.iter().any(|s| s.as_ref() == symptom)
    }
}

impl<T: AsRef<str>, const N: usize> SymptomSet for [T; N] {
    fn has_symptom(&self, symptom: &str) -> bool {
        self.as_slice().has_symptom(symptom)
    }
}

impl<T: AsRef<str>> SymptomSet for Vec<T> {
    fn has_symptom(&self, symptom: &str) -> bool {
        self.as_slice().has_symptom(symptom)
    }
}

impl<T: SymptomSet + ?Sized> SymptomSet for &T {
    fn has_symptom(&self, symptom: &str) -> bool {
        (**self).has_symptom(symptom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_membership() {
        let present = vec!["cough".to_string(), "fever".to_string()];
        assert!(present.has_symptom("fever"));
        assert!(!present.has_symptom("rash"));
    }

    #[test]
    fn test_empty_array() {
        let present: [&str; 0] = [];
        assert!(!present.has_symptom("cough"));
    }

    #[test]
    fn test_btree_set_membership() {
        let present: BTreeSet<String> = ["rash".to_string()].into_iter().collect();
        assert!(present.has_symptom("rash"));
        assert!(!present.has_symptom(""));
    }
}
