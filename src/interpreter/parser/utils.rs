use crate::{
    ast::Designator,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenStream},
    },
    util::num::u64_to_index_checked,
};

/// Parses the bracketed target of an indexed initializer.
///
/// Both bounds of a range are kept as written; ordering is the consumer's
/// concern (see [`Designator::indices`]).
///
/// Grammar: `designator := "[" NUMBER ( "..." NUMBER )? "]"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - `[` or `]` is missing,
/// - a bound is not a number,
/// - a bound is at or beyond the configured maximum array length.
pub(in crate::interpreter::parser) fn parse_designator(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<Designator> {
    tokens.expect(&TokenKind::LSquare)?;

    let start = parse_index(tokens)?;

    let designator = match tokens.peek().kind {
        TokenKind::Range => {
            tokens.advance()?;
            let stop = parse_index(tokens)?;
            Designator::Range { start, stop }
        },
        TokenKind::RSquare => Designator::Index(start),
        _ => return Err(tokens.unexpected("RANGE or RSQUARE")),
    };

    tokens.expect(&TokenKind::RSquare)?;

    Ok(designator)
}

/// Parses a `NUMBER` used as an array index.
fn parse_index(tokens: &mut TokenStream<'_>) -> ParseResult<usize> {
    let TokenKind::Number(n) = tokens.peek().kind else {
        return Err(tokens.unexpected("NUMBER"));
    };

    let limit = tokens.max_array_len();
    let token = tokens.advance()?;

    u64_to_index_checked(n, limit).ok_or_else(|| {
                                      ParseError::IndexTooLarge { found: token, limit }.into()
                                  })
}
