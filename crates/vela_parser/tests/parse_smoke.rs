use bumpalo::Bump;
use vela_ast::{AssignOp, AstContext, BinaryOp, Expr, Item, Stmt};
use vela_lexer::Lexer;
use vela_parser::{ParseResult, Parser};

fn parse(src: &str) -> (ParseResult, AstContext) {
    let mut ctx = AstContext::new();
    let lex = Lexer::new(src).lex();
    assert!(lex.diagnostics.is_empty(), "lex: {:?}", lex.diagnostics);
    let bump = Bump::new();
    let result = Parser::new(&mut ctx, src, &lex.tokens, &bump).parse();
    (result, ctx)
}

#[test]
fn parses_each_declaration_form() {
    let src = "import math\n\
               func add(a: Int, b: Int) -> Int {\n\
                   return a + b\n\
               }\n\
               struct Point { x: Int, y: Int }\n\
               enum Color { red, green, blue }\n\
               let origin = Point(0, 0)\n";
    let (result, _ctx) = parse(src);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(result.items.len(), 5);
    assert!(matches!(result.items[0], Item::Import(_)));
    assert!(matches!(result.items[1], Item::Func(_)));
    assert!(matches!(result.items[2], Item::Struct(_)));
    assert!(matches!(result.items[3], Item::Enum(_)));
    assert!(matches!(result.items[4], Item::Binding(_)));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let (result, _ctx) = parse("let x = 1 + 2 * 3\n");
    let Item::Binding(b) = &result.items[0] else {
        panic!("expected binding");
    };
    let Expr::Binary { op, right, .. } = &b.value else {
        panic!("expected binary, got {:?}", b.value);
    };
    assert_eq!(*op, BinaryOp::Add);
    assert!(matches!(
        **right,
        Expr::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn comparison_binds_tighter_than_logic() {
    let (result, _ctx) = parse("let x = a < b && c > d\n");
    let Item::Binding(b) = &result.items[0] else {
        panic!("expected binding");
    };
    assert!(matches!(
        b.value,
        Expr::Binary {
            op: BinaryOp::And,
            ..
        }
    ));
}

#[test]
fn range_expression() {
    let (result, _ctx) = parse("let r = 0..10\n");
    let Item::Binding(b) = &result.items[0] else {
        panic!("expected binding");
    };
    assert!(matches!(b.value, Expr::Range(_, _)));
}

#[test]
fn compound_assignment_statement() {
    let (result, _ctx) = parse("x += 1\n");
    let Item::Stmt(Stmt::Assign(a)) = &result.items[0] else {
        panic!("expected assignment, got {:?}", result.items[0]);
    };
    assert_eq!(a.op, AssignOp::Add);
}

#[test]
fn literal_assignment_target_is_rejected() {
    let mut ctx = AstContext::new();
    let src = "1 = 2\n";
    let lex = Lexer::new(src).lex();
    let bump = Bump::new();
    let result = Parser::new(&mut ctx, src, &lex.tokens, &bump).parse();
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Invalid assignment target"))
    );
}

#[test]
fn keyword_cannot_name_a_binding() {
    let mut ctx = AstContext::new();
    let src = "let if = 3\n";
    let lex = Lexer::new(src).lex();
    let bump = Bump::new();
    let result = Parser::new(&mut ctx, src, &lex.tokens, &bump).parse();
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Keyword"))
    );
}

#[test]
fn recovers_to_the_next_statement() {
    let mut ctx = AstContext::new();
    let src = "let = 3\nlet y = 2\n";
    let lex = Lexer::new(src).lex();
    let bump = Bump::new();
    let result = Parser::new(&mut ctx, src, &lex.tokens, &bump).parse();
    assert!(!result.diagnostics.is_empty());
    assert_eq!(result.items.len(), 2);
    assert!(matches!(result.items[0], Item::Error(_)));
    assert!(matches!(result.items[1], Item::Binding(_)));
}

#[test]
fn else_on_the_next_line_attaches() {
    let src = "func f(x) {\n\
               if x > 0 {\n\
                   return 1\n\
               }\n\
               else {\n\
                   return 2\n\
               }\n\
               }\n";
    let (result, _ctx) = parse(src);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    let Item::Func(f) = &result.items[0] else {
        panic!("expected func");
    };
    let Stmt::If(i) = &f.body[0] else {
        panic!("expected if, got {:?}", f.body[0]);
    };
    assert!(i.else_branch.is_some());
}

#[test]
fn string_escapes_are_decoded() {
    let (result, _ctx) = parse("let s = \"a\\tb\\n\"\n");
    let Item::Binding(b) = &result.items[0] else {
        panic!("expected binding");
    };
    assert_eq!(b.value, Expr::Str("a\tb\n".to_string()));
}

#[test]
fn radix_literals_decode() {
    let (result, _ctx) = parse("let a = 0xFF\nlet b = 0b1010\nlet c = 1_000\n");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    let values: Vec<i64> = result
        .items
        .iter()
        .map(|item| {
            let Item::Binding(b) = item else {
                panic!("expected binding");
            };
            let Expr::Int(v) = b.value else {
                panic!("expected int");
            };
            v
        })
        .collect();
    assert_eq!(values, [255, 10, 1000]);
}

#[test]
fn bad_radix_digits_are_reported() {
    let (result, _ctx) = parse("let x = 0xZZ\n");
    assert_eq!(result.items.len(), 1);
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Invalid numeric literal")),
        "{:?}",
        result.diagnostics
    );
}

#[test]
fn overflowing_int_literal_is_reported() {
    let (result, _ctx) = parse("let x = 99999999999999999999\n");
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Invalid numeric literal")),
        "{:?}",
        result.diagnostics
    );
}
