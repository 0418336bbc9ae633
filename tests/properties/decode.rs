//! Property tests for decoding generated wire graphs.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Value};

use argraph::{JsonCodec, SchemeRegistry};

fn id(prefix: &'static str) -> impl Strategy<Value = String> {
    (0u8..6).prop_map(move |n| format!("{prefix}{n}"))
}

fn premise() -> impl Strategy<Value = Value> {
    prop_oneof![
        id("s").prop_map(Value::from),
        ("[a-z]{1,6}", id("s")).prop_map(|(role, s)| {
            let mut entry = serde_json::Map::new();
            entry.insert(role, Value::from(s));
            Value::Object(entry)
        }),
    ]
}

fn argument() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just("linked"), Just("convergent"), Just("custom")],
        proptest::collection::vec(premise(), 0..4),
        prop_oneof![Just(String::new()), id("s")],
        prop_oneof![Just(String::new()), id("s")],
        prop_oneof![
            Just(0.0),
            0.0f64..1.0,
            any::<f64>().prop_filter("weights are finite", |w| w.is_finite()),
        ],
    )
        .prop_map(|(scheme, premises, conclusion, undercutter, weight)| {
            json!({
                "meta": {},
                "scheme": scheme,
                "parameters": [],
                "premises": premises,
                "conclusion": conclusion,
                "undercutter": undercutter,
                "weight": weight,
            })
        })
}

/// Graphs whose issues have disjoint positions, with references that may
/// or may not name a statement.
fn wire_graph() -> impl Strategy<Value = Value> {
    (
        proptest::collection::btree_set(id("s"), 0..6),
        proptest::collection::btree_map(id("a"), argument(), 0..4),
        proptest::collection::vec(id("s"), 0..3),
        prop_oneof![Just("PE"), Just("CCE"), Just("BRD"), Just("??")],
    )
        .prop_map(|(statements, arguments, assumptions, standard)| {
            let statement_records: BTreeMap<String, Value> = statements
                .iter()
                .map(|s| (s.clone(), json!({"meta": {}, "text": s, "label": "in"})))
                .collect();
            // s0..s2 may belong to i1, s3..s5 to i2.
            let (first, second): (Vec<&String>, Vec<&String>) =
                statements.iter().partition(|s| s.as_str() < "s3");
            json!({
                "meta": {},
                "issues": {
                    "i1": {"meta": {}, "positions": first, "standard": standard},
                    "i2": {"meta": {}, "positions": second, "standard": "PE"},
                },
                "statements": statement_records,
                "arguments": arguments,
                "references": {},
                "assumptions": assumptions,
            })
        })
}

/// Any premise element, including shapes the decoder rejects or drops
fn loose_premise() -> impl Strategy<Value = Value> {
    prop_oneof![
        premise(),
        Just(Value::Null),
        Just(json!({})),
        proptest::collection::btree_map("[a-z]{0,4}", id("s").prop_map(Value::from), 2..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        any::<i64>().prop_map(Value::from),
    ]
}

fn maybe_null(value: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop_oneof![4 => value, 1 => Just(Value::Null)]
}

/// Graph-shaped values without any of the guarantees `wire_graph` makes:
/// positions may overlap between issues, references may dangle, fields may
/// be `null` and premises may take any shape.
fn loose_graph() -> impl Strategy<Value = Value> {
    let ids = || proptest::collection::vec(id("s"), 0..4);
    (
        proptest::collection::btree_set(id("s"), 0..6),
        proptest::collection::btree_map(
            id("i"),
            (maybe_null(ids().prop_map(Value::from)), "[A-Z?]{0,3}"),
            0..3,
        ),
        proptest::collection::btree_map(
            id("a"),
            (
                "[a-z]{0,8}",
                maybe_null(proptest::collection::vec(loose_premise(), 0..4).prop_map(Value::from)),
                maybe_null(id("s").prop_map(Value::from)),
                maybe_null(id("s").prop_map(Value::from)),
            ),
            0..4,
        ),
        maybe_null((ids(), ids(), ids()).prop_map(|(in_, out, undecided)| {
            json!({"in": in_, "out": out, "undecided": undecided})
        })),
    )
        .prop_map(|(statements, issues, arguments, labels)| {
            let statements: serde_json::Map<String, Value> = statements
                .into_iter()
                .map(|s| (s, json!({"text": "t", "label": "in"})))
                .collect();
            let issues: serde_json::Map<String, Value> = issues
                .into_iter()
                .map(|(i, (positions, standard))| {
                    (i, json!({"positions": positions, "standard": standard}))
                })
                .collect();
            let arguments: serde_json::Map<String, Value> = arguments
                .into_iter()
                .map(|(a, (scheme, premises, conclusion, undercutter))| {
                    (
                        a,
                        json!({
                            "scheme": scheme,
                            "premises": premises,
                            "conclusion": conclusion,
                            "undercutter": undercutter,
                        }),
                    )
                })
                .collect();
            json!({
                "statements": statements,
                "issues": issues,
                "arguments": arguments,
                "labels": labels,
            })
        })
}

fn codec() -> JsonCodec {
    JsonCodec::with_registry(Arc::new(SchemeRegistry::with_basic_schemes()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding arbitrary bytes never panics.
    #[test]
    fn property_decode_never_panics(input in ".{0,256}") {
        let _ = codec().decode_str(&input);
    }

    /// PROPERTY: decoding graph-shaped input never panics; whatever decodes
    /// has only resolved links and encodes again.
    #[test]
    fn property_linking_never_panics(wire in loose_graph()) {
        let codec = codec();
        let Ok(graph) = codec.decode_str(&wire.to_string()) else {
            return Ok(());
        };

        for argument in graph.arguments() {
            for premise in argument.premises() {
                prop_assert!(graph.contains_statement(premise.statement()));
            }
        }
        for statement in graph.statements() {
            if let Some(issue) = statement.issue() {
                let issue = graph.issue(issue).unwrap();
                prop_assert!(issue.positions().iter().any(|p| p == statement.id()));
            }
        }
        prop_assert!(codec.encode_to_string(&graph).is_ok());
    }

    /// PROPERTY: every generated graph decodes, and re-decoding its encoding
    /// yields an equal graph.
    #[test]
    fn property_round_trip_is_lossless(wire in wire_graph()) {
        let codec = codec();
        let graph = codec.decode_str(&wire.to_string()).unwrap();

        let encoded = codec.encode_to_string(&graph).unwrap();
        let decoded = codec.decode_str(&encoded).unwrap();

        prop_assert_eq!(&decoded, &graph);
        prop_assert_eq!(codec.encode_to_string(&decoded).unwrap(), encoded);
    }

    /// PROPERTY: a decoded graph only links statements that exist.
    #[test]
    fn property_decoded_links_resolve(wire in wire_graph()) {
        let graph = codec().decode_str(&wire.to_string()).unwrap();

        for argument in graph.arguments() {
            for premise in argument.premises() {
                prop_assert!(graph.contains_statement(premise.statement()));
            }
            if let Some(conclusion) = argument.conclusion() {
                let statement = graph.statement(conclusion).unwrap();
                prop_assert!(statement.args().iter().any(|a| a == argument.id()));
            }
            if let Some(undercutter) = argument.undercutter() {
                prop_assert!(graph.contains_statement(undercutter));
            }
        }
        for issue in graph.issues() {
            for position in issue.positions() {
                prop_assert_eq!(graph.statement(position).unwrap().issue(), Some(issue.id()));
            }
        }
    }
}
