//! Codec contracts
//!
//! Decoding then encoding preserves every id, text, label, standard and
//! back-link; encoding never mutates the graph.

use std::sync::Arc;

use argraph::{ArgGraph, GraphCodec, JsonCodec, Label, ProofStandard, SchemeRegistry};

use crate::common::*;

fn codec() -> JsonCodec {
    JsonCodec::with_registry(Arc::new(SchemeRegistry::with_basic_schemes()))
}

fn decode(input: &str) -> ArgGraph {
    codec().decode_str(input).unwrap()
}

/// CONTRACT: decode(encode(g)) is equal to g
mod round_trip {
    use super::*;

    #[test]
    fn contract_encoded_graph_decodes_to_an_equal_graph() {
        let codec = codec();
        let graph = codec.decode_str(TANDEM_GRAPH).unwrap();

        let encoded = codec.encode_to_string(&graph).unwrap();
        let decoded = codec.decode_str(&encoded).unwrap();

        assert_eq!(decoded, graph);
    }

    #[test]
    fn contract_encoding_is_stable() {
        let codec = codec();
        let graph = codec.decode_str(TANDEM_GRAPH).unwrap();

        let first = codec.encode_to_string(&graph).unwrap();
        let second = codec
            .encode_to_string(&codec.decode_str(&first).unwrap())
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn contract_encode_does_not_mutate_the_graph() {
        let graph = decode(TANDEM_GRAPH);
        let before = graph.clone();

        let mut out = Vec::new();
        codec().encode(&graph, &mut out).unwrap();

        assert_eq!(graph, before);
    }

    #[test]
    fn contract_metadata_and_references_pass_through() {
        let codec = codec();
        let graph = codec.decode_str(TANDEM_GRAPH).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&codec.encode_to_string(&graph).unwrap()).unwrap();

        assert_eq!(value["meta"]["title"], "tandem");
        assert_eq!(value["references"]["r1"]["author"], "Walton");
        assert_eq!(value["statements"]["s4"]["meta"]["source"], "witness");
    }
}

/// CONTRACT: standards and statement labels survive decoding
mod values {
    use super::*;

    #[test]
    fn contract_standards_decode_to_their_variants() {
        let graph = decode(TANDEM_GRAPH);

        assert_eq!(graph.issue("i1").unwrap().standard(), Some(ProofStandard::PE));
        assert_eq!(graph.issue("i2").unwrap().standard(), Some(ProofStandard::BRD));
    }

    #[test]
    fn contract_unknown_standard_encodes_as_unresolved_token() {
        let codec = codec();
        let graph = codec
            .decode_str(r#"{"issues": {"i1": {"positions": [], "standard": "XYZ"}}}"#)
            .unwrap();

        assert_eq!(graph.issue("i1").unwrap().standard(), None);
        let value: serde_json::Value =
            serde_json::from_str(&codec.encode_to_string(&graph).unwrap()).unwrap();
        assert_eq!(value["issues"]["i1"]["standard"], "??");
    }

    #[test]
    fn contract_statement_labels_decode() {
        let graph = decode(TANDEM_GRAPH);

        assert_eq!(graph.statement("s1").unwrap().label(), Label::In);
        assert_eq!(graph.statement("s2").unwrap().label(), Label::Out);
        assert_eq!(graph.statement("s3").unwrap().label(), Label::Undecided);
    }

    #[test]
    fn contract_zero_weight_round_trips() {
        let codec = codec();
        let graph = codec.decode_str(TANDEM_GRAPH).unwrap();
        assert_eq!(graph.argument("a2").unwrap().weight(), 0.0);

        let value: serde_json::Value =
            serde_json::from_str(&codec.encode_to_string(&graph).unwrap()).unwrap();
        assert_eq!(value["arguments"]["a2"]["weight"], 0.0);
        assert_eq!(value["arguments"]["a1"]["weight"], 0.75);
    }
}

/// CONTRACT: evaluated weights survive encoding bit for bit
mod weights {
    use std::sync::Arc;

    use argraph::{Argument, Scheme};

    use super::*;

    #[test]
    fn contract_arbitrary_weights_round_trip_exactly() {
        let codec = codec();
        let scheme = Arc::new(Scheme::synthesized("linked"));
        let weights = [
            0.9856906946328695,
            0.21291890726713458,
            0.9259338926496359,
            0.1 + 0.2,
            f64::MIN_POSITIVE,
            f64::MAX,
            1e-310,
        ];

        let mut graph = ArgGraph::new();
        for (n, weight) in weights.iter().enumerate() {
            graph.add_argument(
                Argument::new(format!("a{n}"), Arc::clone(&scheme)).with_weight(*weight),
            );
        }

        let encoded = codec.encode_to_string(&graph).unwrap();
        let decoded = codec.decode_str(&encoded).unwrap();

        for (n, weight) in weights.iter().enumerate() {
            let id = format!("a{n}");
            assert_eq!(
                decoded.argument(&id).unwrap().weight().to_bits(),
                weight.to_bits(),
                "weight of {id}"
            );
        }
        assert_eq!(codec.encode_to_string(&decoded).unwrap(), encoded);
    }
}

/// CONTRACT: input that is not a graph fails as malformed, never panics
mod malformed {
    use super::*;

    #[test]
    fn contract_non_json_input_is_rejected() {
        for input in ["", "not json", "[1, 2]", r#"{"statements": 5}"#] {
            let err = codec().decode_str(input).unwrap_err();
            assert!(err.is_input_error(), "input {input:?} gave {err}");
        }
    }

    #[test]
    fn contract_empty_object_is_an_empty_graph() {
        let graph = decode("{}");
        assert!(graph.is_empty());
        assert!(graph.expected_labelling().is_none());
    }
}
