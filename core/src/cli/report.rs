use crate::api::Diagnoser;
use crate::tree::Node;
use std::fmt;

/// Text report formatter for a diagnosis tree
pub struct TextReport<'a> {
    diagnoser: &'a Diagnoser,
    success_rate: Option<f64>,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(diagnoser: &'a Diagnoser) -> Self {
        Self {
            diagnoser,
            success_rate: None,
        }
    }

    /// Adds a measured success rate to the report
    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = Some(rate);
        self
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
    match node {
        Node::Leaf(diagnosis) => writeln!(f, "{}", diagnosis),
        Node::Decision { symptom, yes, no } => {
            writeln!(f, "{}?", symptom)?;
            write!(f, "{:width$}yes: ", "", width = indent + 2)?;
            write_node(f, yes, indent + 2)?;
            write!(f, "{:width$}no:  ", "", width = indent + 2)?;
            write_node(f, no, indent + 2)
        }
    }
}

fn format_path(path: &[bool]) -> String {
    if path.is_empty() {
        return "(root)".to_string();
    }
    path.iter()
        .map(|&answer| if answer { "yes" } else { "no" })
        .collect::<Vec<_>>()
        .join(" > ")
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.diagnoser.root();

        writeln!(f, "Diagnosis Tree")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        writeln!(f, "Depth:          {}", root.depth())?;
        writeln!(f, "Nodes:          {}", root.node_count())?;
        writeln!(f, "Leaves:         {}", root.leaf_count())?;
        match self.success_rate {
            Some(rate) => writeln!(f, "Success Rate:   {:.1}%", rate * 100.0)?,
            None => writeln!(f, "Success Rate:   n/a")?,
        }
        writeln!(f)?;

        writeln!(f, "Structure")?;
        writeln!(f, "---------")?;
        write_node(f, root, 0)?;
        writeln!(f)?;

        writeln!(f, "Illnesses")?;
        writeln!(f, "---------")?;
        let illnesses = self.diagnoser.all_illnesses();
        if illnesses.is_empty() {
            writeln!(f, "none")?;
        }
        for illness in illnesses {
            writeln!(f, "{}:", illness)?;
            for path in self.diagnoser.paths_to_illness(&illness) {
                writeln!(f, "  {}", format_path(&path))?;
            }
        }

        Ok(())
    }
}
