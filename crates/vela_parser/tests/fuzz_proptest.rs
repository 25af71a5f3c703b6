use bumpalo::Bump;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use vela_ast::AstContext;
use vela_lexer::Lexer;
use vela_parser::Parser;
use vela_syntax::ByteIndex;

fn any_vela_like() -> impl Strategy<Value = String> {
    let ascii =
        proptest::collection::vec(any::<char>().prop_filter("ascii", |c| c.is_ascii()), 0..40)
            .prop_map(|v| v.into_iter().collect::<String>());
    let sym = "let var func struct enum if else while for in return break continue ( ) [ ] { } = == .. -> , ; : \n 1 2.5 \"s\" true nil x y"
        .to_string();
    (ascii, any::<bool>()).prop_map(move |(a, f)| {
        let mut s = String::new();
        s.push_str(&a);
        if f {
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
    fn parse_random_input_should_not_panic(s in any_vela_like()) {
        let mut ctx = AstContext::new();
        let lex = Lexer::new(&s).lex();
        let bump = Bump::new();
        let _ = Parser::new(&mut ctx, &s, &lex.tokens, &bump).parse();
    }

    #[ignore]
    #[test]
    fn incremental_never_consumes_past_the_input(s in any_vela_like()) {
        let mut ctx = AstContext::new();
        let lex = Lexer::new(&s).lex();
        let open_at = lex.incomplete_at.map(ByteIndex);
        let bump = Bump::new();
        let result = Parser::new(&mut ctx, &s, &lex.tokens, &bump).parse_incremental(open_at);
        if let Some(consumed) = result.consumed {
            prop_assert!(consumed.0 as usize <= s.len());
        }
    }
}
