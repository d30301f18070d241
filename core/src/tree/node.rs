use crate::types::{Diagnosis, SymptomSet};

/// A node in a diagnosis tree
///
/// Either a leaf holding a [`Diagnosis`], or a decision node that tests
/// one symptom and owns exactly two children. A decision node with a
/// single child cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Node {
    /// Final outcome
    Leaf(Diagnosis),
    /// Symptom test; `yes` is taken when the symptom is present
    Decision {
        symptom: String,
        yes: Box<Node>,
        no: Box<Node>,
    },
}

impl Node {
    /// Creates a leaf node
    pub fn leaf(diagnosis: Diagnosis) -> Self {
        Node::Leaf(diagnosis)
    }

    /// Creates a decision node testing `symptom`
    pub fn decision(symptom: impl Into<String>, yes: Node, no: Node) -> Self {
        Node::Decision {
            symptom: symptom.into(),
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns the leaf diagnosis, or `None` for a decision node
    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match self {
            Node::Leaf(diagnosis) => Some(diagnosis),
            Node::Decision { .. } => None,
        }
    }

    /// Returns the tested symptom, or `None` for a leaf
    pub fn symptom(&self) -> Option<&str> {
        match self {
            Node::Decision { symptom, .. } => Some(symptom.as_str()),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the child taken when the symptom is present
    pub fn yes_child(&self) -> Option<&Node> {
        match self {
            Node::Decision { yes, .. } => Some(yes.as_ref()),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the child taken when the symptom is absent
    pub fn no_child(&self) -> Option<&Node> {
        match self {
            Node::Decision { no, .. } => Some(no.as_ref()),
            Node::Leaf(_) => None,
        }
    }

    /// Follows symptom tests from this node down to a leaf
    pub fn resolve<S: SymptomSet + ?Sized>(&self, symptoms: &S) -> &Diagnosis {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(diagnosis) => return diagnosis,
                Node::Decision { symptom, yes, no } => {
                    node = if symptoms.has_symptom(symptom) {
                        yes.as_ref()
                    } else {
                        no.as_ref()
                    };
                }
            }
        }
    }

    /// Longest root-to-leaf path length (a single leaf has depth 0)
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Decision { yes, no, .. } => 1 + yes.depth().max(no.depth()),
        }
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Decision { yes, no, .. } => 1 + yes.node_count() + no.node_count(),
        }
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Decision { yes, no, .. } => yes.leaf_count() + no.leaf_count(),
        }
    }

    /// Visits every leaf in pre-order, yes branch before no branch
    ///
    /// The callback receives the branch decisions taken from this node
    /// (`true` for yes) and the leaf's diagnosis.
    pub fn walk_leaves<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&[bool], &'a Diagnosis),
    {
        let mut path = Vec::new();
        self.walk_leaves_inner(&mut path, &mut visit);
    }

    fn walk_leaves_inner<'a, F>(&'a self, path: &mut Vec<bool>, visit: &mut F)
    where
        F: FnMut(&[bool], &'a Diagnosis),
    {
        match self {
            Node::Leaf(diagnosis) => visit(path.as_slice(), diagnosis),
            Node::Decision { yes, no, .. } => {
                path.push(true);
                yes.walk_leaves_inner(path, visit);
                path.pop();
                path.push(false);
                no.walk_leaves_inner(path, visit);
                path.pop();
            }
        }
    }
}
