use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::token::{one_of, take_while};
use winnow::{Parser, Result};

use crate::TickScale;

/// Converts the operand at the start of `input` to ticks.
///
/// An operand that cannot be parsed as a number converts to zero.
///
/// # Parameters
///
/// - `input`: Text immediately following a key letter.
/// - `scale`: Ticks per unit to apply to the operand.
pub fn parse_operand(input: &str, scale: TickScale) -> i32 {
    let mut input_ref: &str = input;
    parse_real
        .parse_next(&mut input_ref)
        .map(|value| scale.to_ticks(value))
        .unwrap_or(0)
}

/// Parses a real number, skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent.
///
/// Examples of valid input:
///
/// - `"12"`
/// - `" -12.5"`
/// - `".5"`
/// - `"2.5e-1"`
fn parse_real<'s>(input: &mut &'s str) -> Result<f64> {
    skip_ws.parse_next(input)?;
    take_real.try_map(str::parse::<f64>).parse_next(input)
}

/// Recognizes the text of a real number.
fn take_real<'s>(input: &mut &'s str) -> Result<&'s str> {
    (opt(parse_sign), parse_mantissa, opt(parse_exponent))
        .take()
        .parse_next(input)
}

/// Parse and discard a sign indicator ("+" or "-").
fn parse_sign<'s>(input: &mut &'s str) -> Result<()> {
    one_of(['+', '-']).void().parse_next(input)
}

/// Parse and discard a mantissa: `12`, `12.`, `12.5` or `.5`.
fn parse_mantissa<'s>(input: &mut &'s str) -> Result<()> {
    alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void()))
        .parse_next(input)
}

/// Parse and discard an exponent, like `e3` or `E-2`.
///
/// An exponent marker without digits fails, so that it is left unconsumed.
fn parse_exponent<'s>(input: &mut &'s str) -> Result<()> {
    (one_of(['e', 'E']), opt(parse_sign), digit1)
        .void()
        .parse_next(input)
}

/// Skip whitespace when parsing.
fn skip_ws<'s>(input: &mut &'s str) -> Result<()> {
    take_while(0.., char::is_whitespace)
        .parse_next(input)
        .map(|_| ())
}
