//! Round-trip property for the pattern codec.
//!
//! For every constructible pattern `P`, `decode(encode(P, emit_size=true))`
//! reproduces `P`'s structure — constructor identity, argument order and
//! count, sort annotations — and the streaming reader agrees with the plain
//! decoder byte for byte. `strip_raw_term` intentionally discards the
//! engine's embedded literal payloads and nothing else.

use proptest::prelude::*;
use rewire_ast::{Pattern, Sort, Symbol};
use rewire_binary::{decode_pattern, encode_pattern, read_pattern};
use std::io::Cursor;
use std::sync::Arc;

fn arb_sort() -> impl Strategy<Value = Arc<Sort>> {
    let leaf = prop_oneof![
        "[A-Z][a-z]{0,4}".prop_map(Sort::variable),
        "[A-Z][a-z]{0,4}".prop_map(|n| Sort::composite(n, vec![])),
    ];
    leaf.prop_recursive(3, 12, 3, |inner| {
        ("[A-Z][a-z]{0,4}", prop::collection::vec(inner, 0..3))
            .prop_map(|(name, args)| Sort::composite(name, args))
    })
}

fn arb_pattern() -> impl Strategy<Value = Arc<Pattern>> {
    let leaf = prop_oneof![
        "[a-z][a-z0-9]{0,5}".prop_map(Pattern::variable),
        "[ -~]{0,12}".prop_map(Pattern::string),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            "[a-z][a-z0-9']{0,5}",
            prop::collection::vec(arb_sort(), 0..2),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, formals, args)| {
                // Arity invariant: one sort argument per pattern argument.
                let sort_args = (0..args.len())
                    .map(|_| Sort::composite("S", vec![]))
                    .collect();
                Pattern::composite(Symbol::with_sorts(name, formals, sort_args), args)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128, // wide enough to hit deep trees, cheap enough for CI
        .. ProptestConfig::default()
    })]

    #[test]
    fn encode_decode_roundtrip(p in arb_pattern()) {
        let bytes = encode_pattern(&p, true);
        let plain = decode_pattern(&bytes, false).unwrap();
        prop_assert_eq!(&plain, &p);

        let streamed = read_pattern(&mut Cursor::new(&bytes), false).unwrap();
        prop_assert_eq!(&streamed, &p);
    }

    #[test]
    fn strip_raw_term_discards_only_the_wrapper(p in arb_pattern()) {
        let wrapped = Pattern::wrap_raw_term(Arc::clone(&p), "opaque-engine-bytes");
        let bytes = encode_pattern(&wrapped, true);

        let stripped = decode_pattern(&bytes, true).unwrap();
        prop_assert_eq!(&stripped, &p);

        let kept = decode_pattern(&bytes, false).unwrap();
        prop_assert_eq!(&kept, &wrapped);
    }

    #[test]
    fn arbitrary_prefixes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        // Decoding garbage must fail closed, not crash.
        let _ = decode_pattern(&bytes, false);
        let _ = read_pattern(&mut Cursor::new(&bytes), false);
    }
}
