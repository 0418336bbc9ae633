//! Argumentation scheme value objects
//!
//! A scheme is a reusable argument pattern. The codec only cares about its
//! name and the weighing function the evaluator will apply to its instances.

use std::str::FromStr;

/// Weighing function selector of a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeighingFunction {
    /// All premises must hold (used for synthesized schemes)
    #[default]
    Linked,
    /// Any single premise suffices
    Convergent,
    /// Weight grows with the share of holding premises
    Cumulative,
    /// Weight grows with each holding premise, in order
    Factorized,
}

impl WeighingFunction {
    pub const ALL: [WeighingFunction; 4] = [
        WeighingFunction::Linked,
        WeighingFunction::Convergent,
        WeighingFunction::Cumulative,
        WeighingFunction::Factorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeighingFunction::Linked => "linked",
            WeighingFunction::Convergent => "convergent",
            WeighingFunction::Cumulative => "cumulative",
            WeighingFunction::Factorized => "factorized",
        }
    }
}

impl FromStr for WeighingFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| s.to_string())
    }
}

impl std::fmt::Display for WeighingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scheme descriptor, shared between all arguments that instantiate it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    id: String,
    weight: WeighingFunction,
}

impl Scheme {
    pub fn new(id: impl Into<String>, weight: WeighingFunction) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    /// Minimal descriptor for a scheme only known by name
    pub fn synthesized(id: impl Into<String>) -> Self {
        Self::new(id, WeighingFunction::default())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weighing_function(&self) -> WeighingFunction {
        self.weight
    }
}
