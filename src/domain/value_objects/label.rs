//! Label value object - argumentative status of a statement
//!
//! - `In`: the statement is acceptable
//! - `Out`: the statement is not acceptable
//! - `Undecided`: neither (also the status of anything not yet evaluated)

/// Tri-valued label of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    In,
    Out,
    #[default]
    Undecided,
}

impl Label {
    /// Wire token for this label
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::In => "in",
            Label::Out => "out",
            Label::Undecided => "undecided",
        }
    }

    /// Parse a wire token. Anything unrecognized is `Undecided`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "in" => Label::In,
            "out" => Label::Out,
            _ => Label::Undecided,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
