//! Statement entity - an atomic claim
//!
//! A statement's issue and its argument list are links owned by the graph:
//! they are set while linking issues and arguments, never by callers.

use super::Metadata;
use crate::domain::value_objects::Label;

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    id: String,
    metadata: Metadata,
    text: String,
    label: Label,
    /// Issue this statement is a position of
    issue: Option<String>,
    /// Arguments concluding this statement, in linking order
    args: Vec<String>,
}

impl Statement {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: Metadata::new(),
            text: text.into(),
            label: Label::default(),
            issue: None,
            args: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Record the evaluator's result for this statement
    pub fn set_label(&mut self, label: Label) {
        self.label = label;
    }

    pub fn issue(&self) -> Option<&str> {
        self.issue.as_deref()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn set_issue(&mut self, issue: Option<String>) {
        self.issue = issue;
    }

    pub(crate) fn push_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    pub(crate) fn remove_arg(&mut self, arg: &str) {
        self.args.retain(|a| a != arg);
    }

    /// Carry over the links of the statement this one replaces, or start
    /// unlinked when it replaces nothing.
    pub(crate) fn adopt_links(&mut self, previous: Option<Statement>) {
        match previous {
            Some(previous) => {
                self.issue = previous.issue;
                self.args = previous.args;
            }
            None => {
                self.issue = None;
                self.args.clear();
            }
        }
    }
}
