use arrinit::{
    error::LexError,
    interpreter::lexer::{TokenKind, Tokenizer, tokenize},
};

fn dump(src: &str) -> Vec<String> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
                 .iter()
                 .map(ToString::to_string)
                 .collect()
}

#[test]
fn every_token_kind() {
    assert_eq!(dump("{[1...2]=3,4,}"),
               ["LCURLY({)", "LSQUARE([)", "NUMBER(1)", "RANGE(...)", "NUMBER(2)", "RSQUARE(])",
                "EQUAL(=)", "NUMBER(3)", "COMMA(,)", "NUMBER(4)", "ENDCOMMA(,)", "RCURLY(})"]);
}

#[test]
fn whitespace_separates_tokens() {
    assert_eq!(dump(" { 12\t,\r\n 3 } "),
               ["LCURLY({)", "NUMBER(12)", "COMMA(,)", "NUMBER(3)", "RCURLY(})"]);
    assert_eq!(dump("1 2"), ["NUMBER(1)", "NUMBER(2)"]);
    assert!(dump(" \n\t ").is_empty());
}

#[test]
fn unicode_whitespace_is_skipped() {
    assert_eq!(dump("{1,\u{a0}2\u{0b},\u{2028}3\u{3000}}"),
               ["LCURLY({)", "NUMBER(1)", "COMMA(,)", "NUMBER(2)", "COMMA(,)", "NUMBER(3)",
                "RCURLY(})"]);
    assert_eq!(dump("7,\u{85}\u{0c}}"), ["NUMBER(7)", "ENDCOMMA(,)", "RCURLY(})"]);

    // Only `\n` starts a new line.
    let tokens = tokenize("1\u{2028}\r\n2").unwrap();
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].span, 6..7);
}

#[test]
fn comma_before_closing_brace_is_an_endcomma() {
    let kinds = |src: &str| tokenize(src).unwrap().into_iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(kinds(",}"), [TokenKind::EndComma, TokenKind::RCurly]);
    assert_eq!(kinds(", \n }"), [TokenKind::EndComma, TokenKind::RCurly]);
    assert_eq!(kinds(",]"), [TokenKind::Comma, TokenKind::RSquare]);
    assert_eq!(kinds(",,}"), [TokenKind::Comma, TokenKind::EndComma, TokenKind::RCurly]);
    assert_eq!(kinds(","), [TokenKind::Comma]);
}

#[test]
fn numbers_keep_their_lexeme() {
    let tokens = tokenize("007").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number(7));
    assert_eq!(tokens[0].lexeme, "007");
}

#[test]
fn tokens_carry_span_and_line() {
    let tokens = tokenize("{\n  12,\n3}").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Number(12));
    assert_eq!(tokens[1].span, 4..6);
    assert_eq!(tokens[1].line, 2);

    assert_eq!(tokens[3].kind, TokenKind::Number(3));
    assert_eq!(tokens[3].line, 3);
}

#[test]
fn eof_is_returned_forever() {
    let mut tokenizer = Tokenizer::new("7");

    assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Number(7));
    for _ in 0..3 {
        let token = tokenizer.next_token().unwrap();
        assert!(token.is_eof());
        assert_eq!(token.span, 1..1);
        assert_eq!(token.to_string(), "EOF");
    }
}

#[test]
fn empty_input_is_only_eof() {
    let mut tokenizer = Tokenizer::new("");
    assert!(tokenizer.next_token().unwrap().is_eof());
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn range_needs_exactly_three_dots() {
    for (src, lexeme) in [("1..2", ".."), ("1....2", "...."), (".", "."), ("[1.2]", ".")] {
        match tokenize(src) {
            Err(LexError::InvalidRange { lexeme: found, .. }) => assert_eq!(found, lexeme),
            other => panic!("expected an invalid range for {src:?}, got {other:?}"),
        }
    }

    assert_eq!(dump("..."), ["RANGE(...)"]);
}

#[test]
fn unexpected_characters() {
    for (src, character, position) in [("a", 'a', 0), ("{1;}", ';', 2), ("  (", '(', 2)] {
        match tokenize(src) {
            Err(LexError::UnexpectedCharacter { character: c, position: p, .. }) => {
                assert_eq!((c, p), (character, position), "for {src:?}");
            },
            other => panic!("expected an unexpected character for {src:?}, got {other:?}"),
        }
    }
}

#[test]
fn errors_stop_the_token_list() {
    let err = tokenize("{1, 2, x, 3}").unwrap_err();
    assert_eq!(err.position(), 7);

    let mut tokenizer = Tokenizer::new("1 x");
    assert!(tokenizer.next_token().is_ok());
    assert!(tokenizer.next_token().is_err());
}

#[test]
fn lex_error_messages() {
    let err = tokenize("1..2").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 1 at offset 1: Invalid range symbol \"..\", expected '...'.");

    let err = tokenize("\n#").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2 at offset 1: Unexpected character: '#'.");
}
