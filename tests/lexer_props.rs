// tests/lexer_props.rs

use proptest::prelude::*;
use qtoolkit::myqasm::lexer::is_valid_identifier;
use qtoolkit::{lex, Instruction, QasmError};

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,8}"
        .prop_filter("keywords are not names", |s| {
            !matches!(s.as_str(), "INITIALIZE" | "SELECT" | "APPLY" | "MEASURE")
        })
}

fn initialize() -> impl Strategy<Value = String> {
    (name(), 1usize..8, any::<bool>()).prop_flat_map(|(register, qubits, with_bits)| {
        proptest::collection::vec(prop_oneof!["0", "1"], qubits).prop_map(move |bits| {
            if with_bits {
                format!("INITIALIZE {register} {qubits} [{}]", bits.concat())
            } else {
                format!("INITIALIZE {register} {qubits}")
            }
        })
    })
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        initialize(),
        (name(), name(), 0u32..64, 0u32..64).prop_map(|(a, b, s, l)| format!("SELECT {a} {b} {s} {l}")),
        (name(), name()).prop_map(|(g, r)| format!("APPLY {g} {r}")),
        name().prop_map(|r| format!("MEASURE {r}")),
        (name(), name(), name()).prop_map(|(n, a, b)| format!("{n} CONCAT {a} {b}")),
        (name(), name(), name()).prop_map(|(n, a, b)| format!("{n} TENSOR {a} {b}")),
        (name(), name()).prop_map(|(n, g)| format!("{n} INVERSE {g}")),
    ]
}

proptest! {
    #[test]
    fn well_formed_lines_parse_back_to_themselves(source in line()) {
        let tokens = lex(&source).expect("well-formed line should lex");
        let instruction = Instruction::from_tokens(&tokens).expect("lexed tokens should parse");
        prop_assert_eq!(instruction.to_string(), source);
    }

    #[test]
    fn identifiers_with_foreign_characters_are_rejected(prefix in name(), bad in "[()*!@#$%^&+=]") {
        let bad_name = format!("{prefix}{bad}");
        prop_assert!(!is_valid_identifier(&bad_name));
        prop_assert!(
            matches!(lex(&format!("MEASURE {bad_name}")), Err(QasmError::InvalidSyntax(_))),
            "bad name accepted"
        );
    }

    #[test]
    fn lexing_arbitrary_text_never_panics(source in "\\PC{0,40}") {
        let _ = lex(&source);
    }
}
