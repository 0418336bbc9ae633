//! Proof standard value object
//!
//! The burden of proof an evaluator applies when deciding an issue.

/// Proof standard of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofStandard {
    /// Preponderance of evidence
    PE,
    /// Clear and convincing evidence
    CCE,
    /// Beyond reasonable doubt
    BRD,
}

impl ProofStandard {
    /// Wire token emitted for an issue whose standard never resolved
    pub const UNRESOLVED_TOKEN: &'static str = "??";

    pub fn as_str(&self) -> &'static str {
        match self {
            ProofStandard::PE => "PE",
            ProofStandard::CCE => "CCE",
            ProofStandard::BRD => "BRD",
        }
    }

    /// Parse a wire token; `None` when the token is not a known standard.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "PE" => Some(ProofStandard::PE),
            "CCE" => Some(ProofStandard::CCE),
            "BRD" => Some(ProofStandard::BRD),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProofStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
