use super::SymptomSet;
use std::collections::HashSet;

/// Labeled training example
///
/// Pairs an illness label with the set of symptoms observed for one
/// subject. Records are immutable once created; duplicates are allowed
/// and are counted individually during training.
///
/// # Example
///
/// ```
/// use diagtree_core::Record;
///
/// let record = Record::new("influenza", ["cough", "fever"]);
/// assert_eq!(record.illness(), "influenza");
/// assert!(record.has("fever"));
/// assert!(!record.has("rash"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Record {
    illness: String,
    symptoms: HashSet<String>,
}

impl Record {
    /// Creates a new record
    pub fn new<I, S>(illness: impl Into<String>, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            illness: illness.into(),
            symptoms: symptoms.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the illness label
    pub fn illness(&self) -> &str {
        &self.illness
    }

    /// Returns the set of present symptoms
    pub fn symptoms(&self) -> &HashSet<String> {
        &self.symptoms
    }

    /// Checks if a symptom is present
    pub fn has(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }
}

impl SymptomSet for Record {
    fn has_symptom(&self, symptom: &str) -> bool {
        self.has(symptom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_symptoms() {
        let record = Record::new("healthy", Vec::<String>::new());
        assert_eq!(record.illness(), "healthy");
        assert!(record.symptoms().is_empty());
    }

    #[test]
    fn test_repeated_symptom_collapses() {
        let record = Record::new("cold", ["cough", "cough"]);
        assert_eq!(record.symptoms().len(), 1);
        assert!(record.has_symptom("cough"));
    }

    #[test]
    fn test_duplicate_records_compare_equal() {
        let a = Record::new("cold", ["cough"]);
        let b = Record::new("cold", ["cough"]);
        assert_eq!(a, b);
    }
}
