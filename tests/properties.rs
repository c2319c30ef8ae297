use arrinit::{
    Mode,
    ast::{Ast, Tag},
    interpreter::{lexer::tokenize, value::core::Value},
    parse, parse_ast, parse_value,
};
use proptest::prelude::*;

/// Runs of whitespace that may separate tokens.
fn blank() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r', '\u{0b}', '\u{0c}',
                                                    '\u{a0}', '\u{2028}', '\u{3000}']),
                          0..3).prop_map(|chars| chars.into_iter().collect())
}

/// Syntactically valid programs with whitespace sprinkled between tokens.
fn program() -> impl Strategy<Value = String> {
    let leaf = (0u64..1000, blank()).prop_map(|(n, pad)| format!("{pad}{n}{pad}"));

    leaf.prop_recursive(3, 24, 5, |inner| {
            let initializer =
                prop_oneof![inner.clone(),
                            (0usize..8, inner.clone()).prop_map(|(i, v)| format!("[{i}] = {v}")),
                            (0usize..8, 0usize..8, inner).prop_map(|(a, b, v)| {
                                                              format!("[ {a} ... {b} ]={v}")
                                                          })];

            (prop::collection::vec(initializer, 0..5), any::<bool>()).prop_map(|(items, trailing)| {
                let mut src = format!("{{ {}", items.join(" , "));
                if trailing && !items.is_empty() {
                    src.push_str(" ,");
                }
                src.push_str(" }");
                src
            })
        })
}

/// Straightforward materialization of a parse tree, used as an oracle.
fn materialize(ast: &Ast) -> Value {
    let kid = &ast.kids()[0];
    match kid {
        Ast::Leaf(n) => Value::Integer(*n),
        Ast::Node { kids: initializers, .. } => {
            let mut out: Vec<Value> = Vec::new();
            for init in initializers {
                match init.kids() {
                    [val] => out.push(materialize(val)),
                    [designator, val] => {
                        let bounds: Vec<usize> = designator.kids()
                                                           .iter()
                                                           .map(|b| match b {
                                                               Ast::Leaf(n) => usize::try_from(*n).unwrap(),
                                                               Ast::Node { .. } => unreachable!(),
                                                           })
                                                           .collect();
                        let lo = *bounds.iter().min().unwrap();
                        let hi = *bounds.iter().max().unwrap();
                        if out.len() <= hi {
                            out.resize(hi + 1, Value::Integer(0));
                        }
                        let value = materialize(val);
                        for slot in &mut out[lo..=hi] {
                            *slot = value.clone();
                        }
                    },
                    other => panic!("malformed initializer {other:?}"),
                }
            }
            Value::Array(out)
        },
    }
}

proptest! {
    #[test]
    fn bare_number_is_its_own_value(n in any::<u64>()) {
        prop_assert_eq!(parse_value(&n.to_string()).unwrap(), Value::Integer(n));
    }

    #[test]
    fn lexemes_reproduce_source_without_whitespace(src in program()) {
        let tokens = tokenize(&src).unwrap();
        let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let stripped: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, stripped);
    }

    #[test]
    fn array_mode_agrees_with_the_tree(src in program()) {
        let ast = parse_ast(&src).unwrap();
        prop_assert_eq!(ast.tag(), Some(Tag::Val));
        prop_assert_eq!(parse_value(&src).unwrap(), materialize(&ast));
    }

    #[test]
    fn reversed_range_bounds_fill_the_same_slots(a in 0usize..50, b in 0usize..50, v in any::<u64>()) {
        let forward = parse(&format!("{{[{a}...{b}]={v}}}"), Mode::Array).unwrap();
        let backward = parse(&format!("{{[{b}...{a}]={v}}}"), Mode::Array).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn designated_array_length_is_highest_index_plus_one(indices in prop::collection::vec(0usize..64, 1..8)) {
        let body: Vec<String> = indices.iter().map(|i| format!("[{i}]=1")).collect();
        let value = parse_value(&format!("{{{}}}", body.join(","))).unwrap();
        let len = value.as_array().map(<[Value]>::len);
        prop_assert_eq!(len, indices.iter().max().map(|m| m + 1));
    }
}
