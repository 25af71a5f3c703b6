use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use vela_lexer::Lexer;

fn any_vela_like() -> impl Strategy<Value = String> {
    let ascii =
        proptest::collection::vec(any::<char>().prop_filter("ascii", |c| c.is_ascii()), 0..40)
            .prop_map(|v| v.into_iter().collect::<String>());
    let sym = ",;()[]{}?/* */ // \"\\ \n \t .. -> += == != && || func struct enum import let var if else while for in return break continue true false nil"
        .to_string();
    (ascii, any::<bool>(), any::<bool>()).prop_map(move |(a, f1, f2)| {
        let mut s = String::new();
        s.push_str(&a);
        if f1 {
            s.push_str(&sym);
        }
        if f2 {
            s.push_str(&sym);
        }
        s.chars().take(200).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16, max_shrink_iters: 200, .. ProptestConfig::default()
    })]
    #[ignore]
    #[test]
    fn lex_random_input_should_not_panic(s in any_vela_like()) {
        let result = Lexer::new(&s).lex();
        // Diagnostics are allowed; this only checks robustness (no panic)
        // and that every span stays inside the input.
        for t in &result.tokens {
            prop_assert!(t.span.end.0 as usize <= s.len());
            prop_assert!(t.span.start.0 <= t.span.end.0);
        }
    }
}
