//! Issue entity - a question decided among candidate statements

use super::Metadata;
use crate::domain::value_objects::ProofStandard;

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    id: String,
    metadata: Metadata,
    /// `None` when the source named a standard we do not know
    standard: Option<ProofStandard>,
    positions: Vec<String>,
}

impl Issue {
    pub fn new(id: impl Into<String>, standard: Option<ProofStandard>) -> Self {
        Self {
            id: id.into(),
            metadata: Metadata::new(),
            standard,
            positions: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn standard(&self) -> Option<ProofStandard> {
        self.standard
    }

    /// Statement ids of the positions, in source order
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    pub(crate) fn push_position(&mut self, statement: impl Into<String>) {
        self.positions.push(statement.into());
    }

    pub(crate) fn clear_positions(&mut self) {
        self.positions.clear();
    }
}
