use super::Node;
use crate::types::{Diagnosis, MinimizeOptions};

impl Node {
    /// Returns an equivalent tree with redundant decisions removed
    ///
    /// Works bottom-up: both children are minimized first, then a
    /// decision whose two children are identical subtrees is replaced by
    /// that subtree. Because children are already minimal when their
    /// parent is checked, a single pass reaches the fixpoint.
    ///
    /// With [`MinimizeOptions::remove_empty`], a decision with a
    /// "no finding" leaf on one side is also replaced by its other side.
    pub fn minimized(self, options: MinimizeOptions) -> Node {
        let (symptom, yes, no) = match self {
            Node::Leaf(_) => return self,
            Node::Decision { symptom, yes, no } => (symptom, yes, no),
        };

        let yes = (*yes).minimized(options);
        let no = (*no).minimized(options);

        if yes == no {
            return yes;
        }

        if options.remove_empty {
            if is_empty_leaf(&no) {
                return yes;
            }
            if is_empty_leaf(&yes) {
                return no;
            }
        }

        Node::decision(symptom, yes, no)
    }
}

fn is_empty_leaf(node: &Node) -> bool {
    matches!(node, Node::Leaf(Diagnosis::NoFinding))
}
