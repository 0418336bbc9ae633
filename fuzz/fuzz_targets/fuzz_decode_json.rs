#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;

use argraph::{GraphCodec, JsonCodec, SchemeRegistry};

fuzz_target!(|data: &[u8]| {
    let codec = JsonCodec::with_registry(Arc::new(SchemeRegistry::with_basic_schemes()));

    // Decoding arbitrary bytes must never panic, and whatever decodes must
    // encode and decode again with the same shape.
    let Ok(graph) = codec.decode(&mut &data[..]) else {
        return;
    };
    let encoded = codec.encode_to_string(&graph).expect("encode decoded graph");
    let decoded = codec.decode_str(&encoded).expect("decode encoded graph");
    assert_eq!(decoded.statement_count(), graph.statement_count());
    assert_eq!(decoded.issue_count(), graph.issue_count());
    assert_eq!(decoded.argument_count(), graph.argument_count());
    assert_eq!(decoded.expected_labelling(), graph.expected_labelling().filter(|l| !l.is_empty()));
});
