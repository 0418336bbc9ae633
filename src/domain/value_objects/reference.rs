//! Cross-reference value objects
//!
//! Wire records point at statements by id. A reference that names no known
//! statement is "unresolved"; these types describe such references for
//! warnings and strict-mode errors.

/// Where a statement reference appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Position,
    Premise,
    Conclusion,
    Undercutter,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Position => "position",
            ReferenceKind::Premise => "premise",
            ReferenceKind::Conclusion => "conclusion",
            ReferenceKind::Undercutter => "undercutter",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A statement reference that did not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub kind: ReferenceKind,
    /// Id of the issue or argument holding the reference
    pub owner: String,
    /// The statement id that was not found
    pub target: String,
}

impl UnresolvedReference {
    pub fn new(kind: ReferenceKind, owner: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind,
            owner: owner.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' of '{}' names no known statement",
            self.kind, self.target, self.owner
        )
    }
}
