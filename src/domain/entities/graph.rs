//! Argument graph entity
//!
//! The graph owns its statements, issues and arguments in id-keyed maps.
//! Every link between them is an id, and the derived links (a statement's
//! issue and its list of concluding arguments) are only written here:
//!
//! - `add_issue` enforces that a statement is a position of at most one issue
//! - `add_argument` mirrors an argument's conclusion on the concluded statement
//!
//! References to statements that do not exist are stripped and handed back
//! to the caller as [`UnresolvedReference`]s.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use super::{Argument, Issue, Metadata, Statement};
use crate::domain::value_objects::{Label, ReferenceKind, UnresolvedReference};

/// Structural errors raised while linking a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("statement '{statement}' is a position of two issues: '{existing}' and '{conflicting}'")]
    IssueConflict {
        statement: String,
        existing: String,
        conflicting: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgGraph {
    metadata: Metadata,
    statements: BTreeMap<String, Statement>,
    issues: BTreeMap<String, Issue>,
    arguments: BTreeMap<String, Argument>,
    /// Bibliographic records, keyed by reference id
    references: BTreeMap<String, Metadata>,
    assumptions: BTreeSet<String>,
    /// Reference labelling to compare evaluation results against
    expected_labelling: Option<BTreeMap<String, Label>>,
}

impl ArgGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // --- metadata and pass-through tables ---

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }

    pub fn references(&self) -> &BTreeMap<String, Metadata> {
        &self.references
    }

    pub fn insert_reference(&mut self, id: impl Into<String>, record: Metadata) {
        self.references.insert(id.into(), record);
    }

    // --- statements ---

    /// Insert a statement, replacing any statement with the same id.
    ///
    /// A replacement keeps the links of the statement it replaces.
    pub fn add_statement(&mut self, mut statement: Statement) {
        let previous = self.statements.remove(statement.id());
        statement.adopt_links(previous);
        self.statements.insert(statement.id().to_string(), statement);
    }

    pub fn statement(&self, id: &str) -> Option<&Statement> {
        self.statements.get(id)
    }

    pub fn statement_mut(&mut self, id: &str) -> Option<&mut Statement> {
        self.statements.get_mut(id)
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.values()
    }

    pub fn contains_statement(&self, id: &str) -> bool {
        self.statements.contains_key(id)
    }

    // --- issues ---

    /// Insert an issue and link it to its positions.
    ///
    /// Position ids naming no statement are skipped and returned. If any
    /// position already belongs to a different issue nothing is changed and
    /// `GraphError::IssueConflict` is returned.
    pub fn add_issue<I, S>(
        &mut self,
        mut issue: Issue,
        positions: I,
    ) -> Result<Vec<UnresolvedReference>, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let positions: Vec<String> = positions.into_iter().map(Into::into).collect();

        for id in &positions {
            if let Some(existing) = self.statements.get(id).and_then(|s| s.issue()) {
                if existing != issue.id() {
                    return Err(GraphError::IssueConflict {
                        statement: id.clone(),
                        existing: existing.to_string(),
                        conflicting: issue.id().to_string(),
                    });
                }
            }
        }

        if let Some(previous) = self.issues.remove(issue.id()) {
            for id in previous.positions() {
                if let Some(statement) = self.statements.get_mut(id) {
                    statement.set_issue(None);
                }
            }
        }

        issue.clear_positions();
        let mut unresolved = Vec::new();
        for id in positions {
            match self.statements.get_mut(&id) {
                // Already linked means it was listed twice for this issue.
                Some(statement) if statement.issue().is_some() => {}
                Some(statement) => {
                    statement.set_issue(Some(issue.id().to_string()));
                    issue.push_position(id);
                }
                None => unresolved.push(UnresolvedReference::new(
                    ReferenceKind::Position,
                    issue.id(),
                    id,
                )),
            }
        }

        self.issues.insert(issue.id().to_string(), issue);
        Ok(unresolved)
    }

    pub fn issue(&self, id: &str) -> Option<&Issue> {
        self.issues.get(id)
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.values()
    }

    /// The issue a statement is a position of
    pub fn issue_of(&self, statement: &str) -> Option<&Issue> {
        self.statements
            .get(statement)
            .and_then(|s| s.issue())
            .and_then(|id| self.issues.get(id))
    }

    pub fn positions_of<'a>(&'a self, issue: &str) -> impl Iterator<Item = &'a Statement> + 'a {
        self.issues
            .get(issue)
            .into_iter()
            .flat_map(|i| i.positions())
            .filter_map(move |id| self.statements.get(id))
    }

    // --- arguments ---

    /// Insert an argument, replacing any argument with the same id.
    ///
    /// Premises, conclusion and undercutter naming no statement are removed
    /// from the argument and returned.
    pub fn add_argument(&mut self, mut argument: Argument) -> Vec<UnresolvedReference> {
        if let Some(previous) = self.arguments.remove(argument.id()) {
            if let Some(statement) = previous
                .conclusion()
                .and_then(|c| self.statements.get_mut(c))
            {
                statement.remove_arg(previous.id());
            }
        }

        let owner = argument.id().to_string();
        let mut unresolved = Vec::new();

        let statements = &self.statements;
        argument.premises_mut().retain(|premise| {
            let known = statements.contains_key(premise.statement());
            if !known {
                unresolved.push(UnresolvedReference::new(
                    ReferenceKind::Premise,
                    owner.as_str(),
                    premise.statement(),
                ));
            }
            known
        });

        if let Some(conclusion) = argument.take_conclusion() {
            match self.statements.get_mut(&conclusion) {
                Some(statement) => {
                    statement.push_arg(owner.as_str());
                    argument = argument.with_conclusion(conclusion);
                }
                None => unresolved.push(UnresolvedReference::new(
                    ReferenceKind::Conclusion,
                    owner.as_str(),
                    conclusion,
                )),
            }
        }

        if let Some(undercutter) = argument.take_undercutter() {
            if self.statements.contains_key(&undercutter) {
                argument = argument.with_undercutter(undercutter);
            } else {
                unresolved.push(UnresolvedReference::new(
                    ReferenceKind::Undercutter,
                    owner.as_str(),
                    undercutter,
                ));
            }
        }

        self.arguments.insert(owner, argument);
        unresolved
    }

    pub fn argument(&self, id: &str) -> Option<&Argument> {
        self.arguments.get(id)
    }

    pub fn argument_mut(&mut self, id: &str) -> Option<&mut Argument> {
        self.arguments.get_mut(id)
    }

    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.values()
    }

    /// Arguments whose conclusion is the given statement
    pub fn pro_arguments<'a>(&'a self, statement: &str) -> impl Iterator<Item = &'a Argument> + 'a {
        self.statements
            .get(statement)
            .into_iter()
            .flat_map(|s| s.args())
            .filter_map(move |id| self.arguments.get(id))
    }

    /// Statements undercutting the given argument (at most one)
    pub fn undercutters_of<'a>(&'a self, argument: &str) -> impl Iterator<Item = &'a Statement> + 'a {
        self.arguments
            .get(argument)
            .and_then(|a| a.undercutter())
            .and_then(|id| self.statements.get(id))
            .into_iter()
    }

    /// Arguments the given statement undercuts. Undercutters carry no
    /// back-link, so this scans the arguments.
    pub fn undercut_by<'a>(&'a self, statement: &'a str) -> impl Iterator<Item = &'a Argument> + 'a {
        self.arguments
            .values()
            .filter(move |a| a.undercutter() == Some(statement))
    }

    // --- assumptions and labels ---

    pub fn assume(&mut self, statement: impl Into<String>) {
        self.assumptions.insert(statement.into());
    }

    pub fn is_assumed(&self, statement: &str) -> bool {
        self.assumptions.contains(statement)
    }

    pub fn assumptions(&self) -> impl Iterator<Item = &str> {
        self.assumptions.iter().map(|s| s.as_str())
    }

    pub fn expected_labelling(&self) -> Option<&BTreeMap<String, Label>> {
        self.expected_labelling.as_ref()
    }

    pub fn set_expected_labelling(&mut self, labelling: Option<BTreeMap<String, Label>>) {
        self.expected_labelling = labelling;
    }

    /// Write evaluated labels onto the statements they name.
    ///
    /// Ids naming no statement are ignored.
    pub fn apply_labelling(&mut self, labelling: &BTreeMap<String, Label>) {
        for (id, label) in labelling {
            if let Some(statement) = self.statements.get_mut(id) {
                statement.set_label(*label);
            }
        }
    }

    // --- sizes ---

    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty() && self.issues.is_empty() && self.arguments.is_empty()
    }
}
