//! JSON wire records
//!
//! Flat mirror of the domain graph: every link is a bare statement id and
//! issue ownership is only written from the issue side.
//!
//! On input every field is optional and `null` reads as empty, since other
//! producers of this format write `null` for empty collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::Metadata;

/// Read `null` the same as a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireArgGraph {
    #[serde(default, deserialize_with = "nullable")]
    pub meta: Metadata,
    #[serde(default, deserialize_with = "nullable")]
    pub issues: BTreeMap<String, WireIssue>,
    #[serde(default, deserialize_with = "nullable")]
    pub statements: BTreeMap<String, WireStatement>,
    #[serde(default, deserialize_with = "nullable")]
    pub arguments: BTreeMap<String, WireArgument>,
    #[serde(default, deserialize_with = "nullable")]
    pub references: BTreeMap<String, Metadata>,
    #[serde(default, deserialize_with = "nullable")]
    pub assumptions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<WireLabels>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireIssue {
    #[serde(default, deserialize_with = "nullable")]
    pub meta: Metadata,
    #[serde(default, deserialize_with = "nullable")]
    pub positions: Vec<String>,
    /// `PE`, `CCE` or `BRD`
    #[serde(default, deserialize_with = "nullable")]
    pub standard: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireStatement {
    #[serde(default, deserialize_with = "nullable")]
    pub meta: Metadata,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    /// `in`, `out` or `undecided`
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireArgument {
    #[serde(default, deserialize_with = "nullable")]
    pub meta: Metadata,
    #[serde(default, deserialize_with = "nullable")]
    pub scheme: String,
    #[serde(default, deserialize_with = "nullable")]
    pub parameters: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub premises: Vec<WirePremise>,
    /// Empty when absent
    #[serde(default, deserialize_with = "nullable")]
    pub conclusion: String,
    /// Empty when absent
    #[serde(default, deserialize_with = "nullable")]
    pub undercutter: String,
    /// 0.0 when absent
    #[serde(default, deserialize_with = "nullable")]
    pub weight: f64,
}

/// A premise is either a bare statement id or a `{role: statement}` object.
/// A `null` element names no statement and is never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WirePremise {
    Bare(String),
    Role(BTreeMap<String, String>),
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireLabels {
    #[serde(
        rename = "in",
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub in_: Vec<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub out: Vec<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub undecided: Vec<String>,
}
