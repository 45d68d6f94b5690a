//! # Parsing Utilities
//!
//! Small combinators shared by the PRMA field parsers: whole-token matching
//! and fixed-width numeric sub-fields.

use nom::{
    AsChar, Err, Input, Parser, ToUsize,
    bytes::complete::take,
    error::{ErrorKind, ParseError},
};

/// Ensures that the parser consumes all of its input.
///
/// PRMA fields arrive already split, so a token parser must account for every
/// character of the token: `"OKAY"` is not the state `OK` followed by noise.
///
/// # Arguments
///
/// * `f` - The parser to run
/// * `e` - Error kind to return if input is left over
///
/// # Examples
///
/// ```rust
/// use prma_parser::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::tag, error::ErrorKind};
///
/// let mut parser = consumed(tag("UA"), ErrorKind::Tag);
/// let result: IResult<_, _> = parser.parse("UA");
/// assert!(result.is_ok());
///
/// let result: IResult<_, _> = parser.parse("UAX");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    let mut f = f;
    move |i: I| {
        let (rest, o) = f.parse(i)?;

        if rest.input_len() != 0 {
            return Err(Err::Error(E::from_error_kind(rest, e)));
        }

        Ok((rest, o))
    }
}

/// Parses an unsigned integer spread over exactly `count` digit characters.
///
/// Fewer than `count` characters, or any non-digit among them, is an error.
///
/// # Examples
///
/// ```rust
/// use prma_parser::parsing::fixed_width;
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = fixed_width(2u8).parse("1234");
/// assert_eq!(result, Ok(("34", 12)));
///
/// let result: IResult<_, u8> = fixed_width(2u8).parse("1:");
/// assert!(result.is_err());
/// ```
pub fn fixed_width<I, E, C>(count: C) -> impl Parser<I, Output = u8, Error = E>
where
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
    C: ToUsize,
{
    take(count).and_then(consumed(nom::character::complete::u8, ErrorKind::Digit))
}
