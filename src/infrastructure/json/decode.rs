//! Wire -> graph linking
//!
//! Builds a fresh graph in a fixed order: statements first, then issues
//! (checking the one-issue-per-statement rule), then arguments. References
//! that name no statement are reported as events and dropped, or fail the
//! decode under `strict_references`.

use std::collections::BTreeMap;
use std::io::Read;

use super::options::DecodeOptions;
use super::wire::{WireArgGraph, WireArgument, WireLabels, WirePremise};
use super::FORMAT;
use crate::domain::entities::{ArgGraph, Argument, Issue, Premise, Statement};
use crate::domain::ports::{DecodeEvent, DecodeEventSink};
use crate::domain::services::SchemeRegistry;
use crate::domain::value_objects::{Label, ProofStandard, UnresolvedReference};
use crate::error::{ArgraphError, ArgraphResult};

pub struct Decoder<'a> {
    registry: &'a SchemeRegistry,
    events: &'a dyn DecodeEventSink,
    options: DecodeOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(
        registry: &'a SchemeRegistry,
        events: &'a dyn DecodeEventSink,
        options: DecodeOptions,
    ) -> Self {
        Self {
            registry,
            events,
            options,
        }
    }

    /// Read the whole stream, parse it and link the result
    pub fn read_graph(&self, reader: &mut dyn Read) -> ArgraphResult<ArgGraph> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        let wire: WireArgGraph = serde_json::from_slice(&data).map_err(ArgraphError::Malformed)?;
        self.wire_to_graph(wire)
    }

    pub fn wire_to_graph(&self, wire: WireArgGraph) -> ArgraphResult<ArgGraph> {
        self.events.on_event(DecodeEvent::Started {
            format: FORMAT,
            statement_count: wire.statements.len(),
            issue_count: wire.issues.len(),
            argument_count: wire.arguments.len(),
        });

        let mut graph = ArgGraph::new();
        let mut dropped = 0;

        graph.set_metadata(wire.meta);
        for (id, record) in wire.references {
            graph.insert_reference(id, record);
        }

        for (id, record) in wire.statements {
            graph.add_statement(
                Statement::new(id, record.text)
                    .with_metadata(record.meta)
                    .with_label(Label::from_token(&record.label)),
            );
        }

        for (id, record) in wire.issues {
            let issue = Issue::new(id, ProofStandard::from_token(&record.standard))
                .with_metadata(record.meta);
            let unresolved = graph.add_issue(issue, record.positions)?;
            dropped += self.report(unresolved)?;
        }

        for (id, record) in wire.arguments {
            let argument = self.argument_from_wire(id, record);
            let unresolved = graph.add_argument(argument);
            dropped += self.report(unresolved)?;
        }

        for id in wire.assumptions {
            graph.assume(id);
        }

        if let Some(labels) = wire.labels {
            graph.set_expected_labelling(Some(labels_from_wire(labels)));
        }

        self.events.on_event(DecodeEvent::Completed {
            statement_count: graph.statement_count(),
            issue_count: graph.issue_count(),
            argument_count: graph.argument_count(),
            dropped_count: dropped,
        });

        Ok(graph)
    }

    fn argument_from_wire(&self, id: String, record: WireArgument) -> Argument {
        let resolved = self.registry.resolve(&record.scheme);
        if resolved.synthesized {
            self.events.on_event(DecodeEvent::SchemeSynthesized {
                scheme: record.scheme.clone(),
                argument: id.clone(),
            });
        }

        let mut argument = Argument::new(id, resolved.scheme)
            .with_metadata(record.meta)
            .with_parameters(record.parameters)
            .with_weight(record.weight);

        for premise in record.premises {
            let premise = self.premise_from_wire(argument.id(), premise);
            argument = argument.with_premise(premise);
        }
        if !record.conclusion.is_empty() {
            argument = argument.with_conclusion(record.conclusion);
        }
        if !record.undercutter.is_empty() {
            argument = argument.with_undercutter(record.undercutter);
        }
        argument
    }

    fn premise_from_wire(&self, argument: &str, premise: WirePremise) -> Premise {
        match premise {
            WirePremise::Bare(statement) => Premise::anonymous(statement),
            WirePremise::Role(entries) => {
                let entry_count = entries.len();
                match entries.into_iter().next() {
                    Some((role, statement)) => {
                        if entry_count > 1 {
                            self.events.on_event(DecodeEvent::PremiseAmbiguous {
                                argument: argument.to_string(),
                                kept_role: role.clone(),
                                entry_count,
                            });
                        }
                        Premise::new(role, statement)
                    }
                    // `{}` names no statement; linking reports it as unresolved.
                    None => Premise::anonymous(String::new()),
                }
            }
            WirePremise::Missing => Premise::anonymous(String::new()),
        }
    }

    /// Drop-and-warn, or fail on the first reference in strict mode
    fn report(&self, unresolved: Vec<UnresolvedReference>) -> ArgraphResult<usize> {
        let count = unresolved.len();
        for reference in unresolved {
            if self.options.strict_references {
                return Err(reference.into());
            }
            self.events.on_event(DecodeEvent::ReferenceDropped(reference));
        }
        Ok(count)
    }
}

/// Flatten grouped labels; for an id listed twice the later list wins
/// (`in`, then `out`, then `undecided`).
fn labels_from_wire(labels: WireLabels) -> BTreeMap<String, Label> {
    let mut labelling = BTreeMap::new();
    for (ids, label) in [
        (labels.in_, Label::In),
        (labels.out, Label::Out),
        (labels.undecided, Label::Undecided),
    ] {
        for id in ids {
            labelling.insert(id, label);
        }
    }
    labelling
}
