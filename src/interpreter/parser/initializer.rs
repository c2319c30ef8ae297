use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            builder::{Builder, LimitExceeded},
            core::{ParseResult, TokenStream},
            utils::parse_designator,
        },
    },
};

/// Parses a value: a number or a brace-delimited aggregate.
///
/// Each aggregate counts towards the nesting limit of `tokens` while it is
/// open.
///
/// Grammar:
/// ```text
///     val := NUMBER
///          | "{" initializers "}"
/// ```
/// # Errors
/// Returns a `ParseError` if the current token starts neither form, or if the
/// aggregate is malformed.
pub fn parse_val<B: Builder>(tokens: &mut TokenStream<'_>,
                             builder: &mut B)
                             -> ParseResult<B::Output> {
    match tokens.peek().kind {
        TokenKind::Number(n) => {
            tokens.advance()?;
            Ok(builder.number(n))
        },
        TokenKind::LCurly => parse_aggregate(tokens, builder),
        _ => Err(tokens.unexpected("NUMBER or LCURLY")),
    }
}

fn parse_aggregate<B: Builder>(tokens: &mut TokenStream<'_>,
                               builder: &mut B)
                               -> ParseResult<B::Output> {
    tokens.enter()?;
    tokens.expect(&TokenKind::LCurly)?;

    let mut aggregate = builder.open();
    parse_initializers(tokens, builder, &mut aggregate)?;

    tokens.expect(&TokenKind::RCurly)?;
    tokens.leave();

    Ok(builder.close(aggregate))
}

/// Parses the initializers between the braces of an aggregate.
///
/// After each initializer a `COMMA` continues the list and an `ENDCOMMA` ends
/// it. The lexer has already decided which of the two a comma is, so no
/// backtracking is needed to accept the trailing comma. A `}` right after the
/// opening brace is the empty aggregate.
///
/// Grammar:
/// ```text
///     initializers := initializer ("," initializer)* ","?
///                   | ε
/// ```
/// # Errors
/// - `ParseError::MissingSeparator` when a token that starts an initializer
///   follows an initializer directly.
/// - `ParseError::UnexpectedToken` for any other token after an initializer.
fn parse_initializers<B: Builder>(tokens: &mut TokenStream<'_>,
                                  builder: &mut B,
                                  aggregate: &mut B::Aggregate)
                                  -> ParseResult<()> {
    if tokens.check(&TokenKind::RCurly) {
        return Ok(());
    }

    loop {
        parse_initializer(tokens, builder, aggregate)?;

        match tokens.peek().kind {
            TokenKind::Comma => {
                tokens.advance()?;
            },
            TokenKind::EndComma => {
                tokens.advance()?;
                break;
            },
            TokenKind::RCurly => break,
            TokenKind::Number(_) | TokenKind::LCurly | TokenKind::LSquare => {
                return Err(ParseError::MissingSeparator { found: tokens.peek().clone() }.into());
            },
            _ => return Err(tokens.unexpected("COMMA, ENDCOMMA or RCURLY")),
        }
    }

    Ok(())
}

/// Parses one initializer and hands it to the builder.
///
/// Grammar:
/// ```text
///     initializer := "[" NUMBER "]" "=" val
///                  | "[" NUMBER "..." NUMBER "]" "=" val
///                  | val
/// ```
/// # Errors
/// Returns `ParseError::ArrayTooLarge` when the builder refuses the
/// initializer.
fn parse_initializer<B: Builder>(tokens: &mut TokenStream<'_>,
                                 builder: &mut B,
                                 aggregate: &mut B::Aggregate)
                                 -> ParseResult<()> {
    let start = tokens.peek().clone();

    let built = if tokens.check(&TokenKind::LSquare) {
        let designator = parse_designator(tokens)?;
        tokens.expect(&TokenKind::Equal)?;
        let value = parse_val(tokens, builder)?;
        builder.designated(aggregate, designator, value)
    } else {
        let value = parse_val(tokens, builder)?;
        builder.positional(aggregate, value)
    };

    built.map_err(|LimitExceeded { limit }| {
             ParseError::ArrayTooLarge { found: start, limit }.into()
         })
}
