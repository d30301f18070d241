use std::fmt;

/// Outcome stored at a tree leaf
///
/// `NoFinding` is the sentinel used when no training record reached a
/// leaf. It is distinct from every illness label, including the empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Diagnosis {
    /// A named illness (or any other label, e.g. "healthy")
    Illness(String),
    /// No diagnosis applies
    NoFinding,
}

impl Diagnosis {
    /// Creates an illness diagnosis
    pub fn illness(name: impl Into<String>) -> Self {
        Diagnosis::Illness(name.into())
    }

    /// Returns whether this is the "no finding" sentinel
    pub fn is_no_finding(&self) -> bool {
        matches!(self, Diagnosis::NoFinding)
    }

    /// Returns the illness label, or `None` for the sentinel
    pub fn as_illness(&self) -> Option<&str> {
        match self {
            Diagnosis::Illness(name) => Some(name),
            Diagnosis::NoFinding => None,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &str {
        self.as_illness().unwrap_or("no finding")
    }
}

impl From<Option<String>> for Diagnosis {
    fn from(value: Option<String>) -> Self {
        value.map_or(Diagnosis::NoFinding, Diagnosis::Illness)
    }
}

impl PartialEq<str> for Diagnosis {
    fn eq(&self, other: &str) -> bool {
        self.as_illness() == Some(other)
    }
}

impl PartialEq<&str> for Diagnosis {
    fn eq(&self, other: &&str) -> bool {
        self.as_illness() == Some(*other)
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
