//! Argument entity - an instance of a scheme
//!
//! Arguments point at statements by id. A conclusion is mirrored in the
//! concluded statement's argument list; an undercutter is not.

use std::sync::Arc;

use super::Metadata;
use crate::domain::value_objects::Scheme;

/// A premise of an argument, optionally tagged with the role it plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Premise {
    Anonymous(String),
    Named { role: String, statement: String },
}

impl Premise {
    /// Build a premise from a possibly empty role
    pub fn new(role: impl Into<String>, statement: impl Into<String>) -> Self {
        let role = role.into();
        if role.is_empty() {
            Premise::Anonymous(statement.into())
        } else {
            Premise::Named {
                role,
                statement: statement.into(),
            }
        }
    }

    pub fn anonymous(statement: impl Into<String>) -> Self {
        Premise::Anonymous(statement.into())
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            Premise::Anonymous(_) => None,
            Premise::Named { role, .. } => Some(role),
        }
    }

    pub fn statement(&self) -> &str {
        match self {
            Premise::Anonymous(statement) | Premise::Named { statement, .. } => statement,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    id: String,
    metadata: Metadata,
    scheme: Arc<Scheme>,
    parameters: Vec<String>,
    premises: Vec<Premise>,
    conclusion: Option<String>,
    undercutter: Option<String>,
    /// Evaluated weight; 0.0 until an evaluator sets it
    weight: f64,
}

impl Argument {
    pub fn new(id: impl Into<String>, scheme: Arc<Scheme>) -> Self {
        Self {
            id: id.into(),
            metadata: Metadata::new(),
            scheme,
            parameters: Vec::new(),
            premises: Vec::new(),
            conclusion: None,
            undercutter: None,
            weight: 0.0,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_premise(mut self, premise: Premise) -> Self {
        self.premises.push(premise);
        self
    }

    pub fn with_conclusion(mut self, statement: impl Into<String>) -> Self {
        self.conclusion = Some(statement.into());
        self
    }

    pub fn with_undercutter(mut self, statement: impl Into<String>) -> Self {
        self.undercutter = Some(statement.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn scheme(&self) -> &Arc<Scheme> {
        &self.scheme
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn premises(&self) -> &[Premise] {
        &self.premises
    }

    pub fn conclusion(&self) -> Option<&str> {
        self.conclusion.as_deref()
    }

    pub fn undercutter(&self) -> Option<&str> {
        self.undercutter.as_deref()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub(crate) fn premises_mut(&mut self) -> &mut Vec<Premise> {
        &mut self.premises
    }

    pub(crate) fn take_conclusion(&mut self) -> Option<String> {
        self.conclusion.take()
    }

    pub(crate) fn take_undercutter(&mut self) -> Option<String> {
        self.undercutter.take()
    }
}
