//! Graph -> wire projection
//!
//! Reads the graph only; nothing here validates or mutates it.

use std::collections::BTreeMap;
use std::io::Write;

use super::options::EncodeOptions;
use super::wire::{WireArgGraph, WireArgument, WireIssue, WireLabels, WirePremise, WireStatement};
use crate::domain::entities::{ArgGraph, Argument, Issue, Premise, Statement};
use crate::domain::value_objects::{Label, ProofStandard};
use crate::error::{ArgraphError, ArgraphResult};

pub fn graph_to_wire(graph: &ArgGraph) -> WireArgGraph {
    WireArgGraph {
        meta: graph.metadata().clone(),
        issues: graph
            .issues()
            .map(|issue| (issue.id().to_string(), issue_to_wire(issue)))
            .collect(),
        statements: graph
            .statements()
            .map(|statement| (statement.id().to_string(), statement_to_wire(statement)))
            .collect(),
        arguments: graph
            .arguments()
            .map(|argument| (argument.id().to_string(), argument_to_wire(argument)))
            .collect(),
        references: graph.references().clone(),
        assumptions: graph.assumptions().map(str::to_string).collect(),
        labels: graph.expected_labelling().and_then(labels_to_wire),
    }
}

fn issue_to_wire(issue: &Issue) -> WireIssue {
    WireIssue {
        meta: issue.metadata().clone(),
        positions: issue.positions().to_vec(),
        standard: issue
            .standard()
            .map_or(ProofStandard::UNRESOLVED_TOKEN, |s| s.as_str())
            .to_string(),
    }
}

fn statement_to_wire(statement: &Statement) -> WireStatement {
    WireStatement {
        meta: statement.metadata().clone(),
        text: statement.text().to_string(),
        label: statement.label().as_str().to_string(),
    }
}

fn argument_to_wire(argument: &Argument) -> WireArgument {
    WireArgument {
        meta: argument.metadata().clone(),
        scheme: argument.scheme().id().to_string(),
        parameters: argument.parameters().to_vec(),
        premises: argument.premises().iter().map(premise_to_wire).collect(),
        conclusion: argument.conclusion().unwrap_or_default().to_string(),
        undercutter: argument.undercutter().unwrap_or_default().to_string(),
        weight: argument.weight(),
    }
}

/// A premise with an empty role is written bare, whichever variant holds it.
fn premise_to_wire(premise: &Premise) -> WirePremise {
    match premise {
        Premise::Named { role, statement } if !role.is_empty() => {
            WirePremise::Role(BTreeMap::from([(role.clone(), statement.clone())]))
        }
        _ => WirePremise::Bare(premise.statement().to_string()),
    }
}

/// Group an expected labelling by label; `None` when there is nothing to write.
fn labels_to_wire(labelling: &BTreeMap<String, Label>) -> Option<WireLabels> {
    if labelling.is_empty() {
        return None;
    }
    let mut labels = WireLabels::default();
    for (id, label) in labelling {
        match label {
            Label::In => labels.in_.push(id.clone()),
            Label::Out => labels.out.push(id.clone()),
            Label::Undecided => labels.undecided.push(id.clone()),
        }
    }
    Some(labels)
}

/// Serialize a graph to a byte sink
pub fn write_graph(
    graph: &ArgGraph,
    writer: &mut dyn Write,
    options: EncodeOptions,
) -> ArgraphResult<()> {
    let wire = graph_to_wire(graph);
    let result = if options.pretty {
        serde_json::to_writer_pretty(&mut *writer, &wire)
    } else {
        serde_json::to_writer(&mut *writer, &wire)
    };
    result.map_err(|e| {
        if e.is_io() {
            ArgraphError::Io(e.into())
        } else {
            ArgraphError::Serialize(e)
        }
    })?;
    writer.flush()?;
    Ok(())
}
