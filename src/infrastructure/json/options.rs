//! Codec options

/// Options controlling how wire input is linked into a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail on a reference to an unknown statement instead of dropping it
    pub strict_references: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            strict_references: true,
        }
    }
}

/// Options controlling how a graph is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent output for humans
    pub pretty: bool,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}
