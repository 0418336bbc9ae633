//! Output rendering for CLI commands

use std::io::{self, Write};

use crate::domain::entities::ArgGraph;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Counts reported by `argraph check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub statements: usize,
    pub issues: usize,
    pub arguments: usize,
    pub assumptions: usize,
    /// `None` when the graph carries no expected labelling
    pub expected_labels: Option<usize>,
    /// Issues whose proof standard was not recognized
    pub unresolved_standards: usize,
}

impl GraphSummary {
    pub fn of(graph: &ArgGraph) -> Self {
        Self {
            statements: graph.statement_count(),
            issues: graph.issue_count(),
            arguments: graph.argument_count(),
            assumptions: graph.assumptions().count(),
            expected_labels: graph.expected_labelling().map(|l| l.len()),
            unresolved_standards: graph.issues().filter(|i| i.standard().is_none()).count(),
        }
    }

    pub fn render_text(&self, source: &str) -> String {
        let mut out = format!("ok: {}\n", source);
        out.push_str(&format!("  statements:  {}\n", self.statements));
        out.push_str(&format!("  issues:      {}\n", self.issues));
        out.push_str(&format!("  arguments:   {}\n", self.arguments));
        out.push_str(&format!("  assumptions: {}\n", self.assumptions));
        if let Some(labels) = self.expected_labels {
            out.push_str(&format!("  expected labels: {}\n", labels));
        }
        if self.unresolved_standards > 0 {
            out.push_str(&format!(
                "  issues without a known proof standard: {}\n",
                self.unresolved_standards
            ));
        }
        out
    }

    pub fn to_json_event(&self, source: &str) -> serde_json::Value {
        serde_json::json!({
            "event": "summary",
            "command": "check",
            "source": source,
            "statements": self.statements,
            "issues": self.issues,
            "arguments": self.arguments,
            "assumptions": self.assumptions,
            "expected_labels": self.expected_labels,
            "unresolved_standards": self.unresolved_standards,
        })
    }
}

/// Unified diff between the original and normalized text of a graph
pub fn unified_diff(path: &str, old: &str, new: &str) -> String {
    use similar::TextDiff;
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}
