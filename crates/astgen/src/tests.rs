//! Tests for astgen output shape.

use crate::{Grammar, VariantDef, define_ast, expression_grammar, generate};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_expression_grammar_declarations() {
    let code = generate(&expression_grammar());

    assert_eq!(count(&code, "trait Expr {}"), 1);
    assert_eq!(count(&code, "struct "), 4);
    assert_eq!(count(&code, "impl Expr for "), 4);

    // Each struct is closed and immediately followed by its own impl
    for name in ["Binary", "Grouping", "Literal", "Unary"] {
        let start = code.find(&format!("struct {name} {{\n")).expect(name);
        let close = start + code[start..].find("}\n").unwrap() + 2;
        assert!(
            code[close..].starts_with(&format!("impl Expr for {name} {{}}\n")),
            "{name} is not followed by its impl"
        );
    }
}

#[test]
fn test_deterministic() {
    let grammar = expression_grammar();
    assert_eq!(generate(&grammar), generate(&grammar));
    assert_eq!(generate(&grammar), generate(&grammar.clone()));
}

#[test]
fn test_order_preserved() {
    let variants = vec![
        VariantDef::new("Zeta", ["z: u8"]),
        VariantDef::new("Alpha", ["a: u8"]),
        VariantDef::new("Mid", ["m: u8"]),
    ];
    let code = define_ast("Node", &variants);

    let zeta = code.find("struct Zeta").unwrap();
    let alpha = code.find("struct Alpha").unwrap();
    let mid = code.find("struct Mid").unwrap();
    assert!(zeta < alpha && alpha < mid);

    let reversed: Vec<_> = variants.into_iter().rev().collect();
    let code = define_ast("Node", &reversed);
    assert!(code.find("struct Mid").unwrap() < code.find("struct Zeta").unwrap());
}

#[test]
fn test_fields_passed_through_verbatim() {
    let fields = [
        "left: Box<dyn Expr>",
        "operator: Token",
        "right Box<dyn Expr>",
        "weird :  Vec< (u8 ,u8) >",
    ];
    let code = define_ast("Expr", &[VariantDef::new("Binary", fields)]);

    let lines: Vec<_> = code.lines().collect();
    let open = lines.iter().position(|l| *l == "struct Binary {").unwrap();
    for (i, field) in fields.iter().enumerate() {
        assert_eq!(lines[open + 1 + i], format!("    {field},"));
    }
    assert_eq!(lines[open + 1 + fields.len()], "}");
}

#[test]
fn test_blank_line_between_blocks() {
    let code = generate(&expression_grammar());
    let blocks: Vec<_> = code.trim_end().split("\n\n").collect();

    assert_eq!(blocks.len(), 5);
    assert_eq!(blocks[0], "trait Expr {}");
    assert!(blocks[1..].iter().all(|b| b.starts_with("struct ")));
    assert!(code.ends_with("{}\n\n"));
}

#[test]
fn test_duplicate_names_are_not_rejected() {
    let variant = VariantDef::new("Twice", ["x: u8"]);
    let code = define_ast("Expr", &[variant.clone(), variant]);
    assert_eq!(count(&code, "struct Twice {"), 2);
}

#[test]
fn test_toml_grammar_generates_same_code() {
    let grammar = Grammar::load_default().unwrap();
    assert_eq!(generate(&grammar), generate(&expression_grammar()));
}
