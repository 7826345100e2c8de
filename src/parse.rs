// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating the text of a single literal, together with the
//! category it was declared as, into a typed value. The text is the
//! literal's body: delimiters like quotes are not part of it, base
//! prefixes and escape introducers are optional (see
//! [Modes](../settings/struct.Modes.html)).

use crate::pos::Pos;
use crate::value::{LiteralCategory, LiteralValue, Value};
use crate::number::{Base, BinaryMantissa, push_digit};
use crate::settings::{Settings, CANONICAL_SETTINGS};
use num::traits::PrimInt;
use kstring::KString;
use thiserror::Error;
use std::ops::Range;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid digit '{0}' for base {1}")]
    InvalidDigit(char, u32),
    #[error("missing digits")]
    MissingDigits,
    #[error("value out of range")]
    Overflow,
    #[error("malformed float: {0}")]
    MalformedFloat(&'static str),
    #[error("invalid code point {0:#X}")]
    InvalidCodePoint(u32),
    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),
    #[error("expected {expected} digits, got {got}")]
    WrongDigitCount { expected: usize, got: usize },
    #[error("too many digits in code sequence")]
    TooManyDigits,
    #[error("expected exactly one code point, got {0}")]
    NotSingleCodePoint(usize),
    #[error("unexpected end of literal after '\\'")]
    UnexpectedEnd,
    #[error("character '{0}' is not allowed in raw text")]
    DisallowedInRaw(char),
    #[error("missing prefix '{0}'")]
    MissingPrefix(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{err} {pos}")]
pub struct ParseErrorWithPos {
    pub err: ParseError,
    pub pos: Pos
}

impl ParseError {
    pub fn at(self, p: Pos) -> ParseErrorWithPos {
        ParseErrorWithPos {
            err: self,
            pos: p
        }
    }
}

trait At<T> {
    fn at(self, p: Pos) -> Result<T, ParseErrorWithPos>;
    /// At the position of byte `i` in `text`, only computed on error.
    fn at_byte(self, text: &str, i: usize) -> Result<T, ParseErrorWithPos>;
}

impl<T> At<T> for Result<T, ParseError> {
    fn at(self, p: Pos) -> Result<T, ParseErrorWithPos> {
        self.map_err(|e| e.at(p))
    }
    fn at_byte(self, text: &str, i: usize) -> Result<T, ParseErrorWithPos> {
        self.map_err(|e| e.at(pos_at(text, i)))
    }
}

// The position of the byte offset `i` in `text`.
fn pos_at(text: &str, i: usize) -> Pos {
    text.get(..i).unwrap_or(text).chars().fold(Pos::default(), Pos::after)
}

fn try_u32_to_char(code: u32) -> Result<char, ParseError> {
    char::from_u32(code).ok_or(ParseError::InvalidCodePoint(code))
}

// Case-insensitive; returns the length of the prefix if present.
fn prefix_len(s: &str, prefix: &str) -> Option<usize> {
    let n = prefix.len();
    if s.len() >= n && s.is_char_boundary(n) && s[..n].eq_ignore_ascii_case(prefix) {
        Some(n)
    } else {
        None
    }
}

// Where the digits start, after the optional (or, in strict mode,
// required) prefix.
fn skip_prefix(
    text: &str,
    prefix: &'static str,
    settings: &Settings,
) -> Result<(usize, bool), ParseErrorWithPos> {
    if let Some(n) = prefix_len(text, prefix) {
        Ok((n, true))
    } else if settings.modes.require_prefix {
        Err(ParseError::MissingPrefix(prefix).at(Pos::default()))
    } else {
        Ok((0, false))
    }
}

/// Digits of `radix` from byte `start` to the end of `text`. With
/// `separators`, a single '_' may appear between two digits, or
/// before the first digit if `after_prefix`.
fn read_digits<T: PrimInt>(
    text: &str,
    start: usize,
    radix: u32,
    separators: bool,
    after_prefix: bool,
) -> Result<T, ParseErrorWithPos> {
    let mut n = T::zero();
    let mut seen_digit = false;
    let mut sep_allowed = after_prefix;
    let mut pending_sep = None;
    for (i, c) in text[start..].char_indices() {
        let i = start + i;
        if c == '_' && separators && sep_allowed {
            sep_allowed = false;
            pending_sep = Some(i);
            continue;
        }
        let d = c.to_digit(radix)
            .ok_or(ParseError::InvalidDigit(c, radix))
            .at_byte(text, i)?;
        n = push_digit(n, radix, d)
            .ok_or(ParseError::Overflow)
            .at_byte(text, start)?;
        seen_digit = true;
        sep_allowed = true;
        pending_sep = None;
    }
    if let Some(i) = pending_sep {
        return Err(ParseError::InvalidDigit('_', radix).at(pos_at(text, i)))
    }
    if !seen_digit {
        return Err(ParseError::MissingDigits.at(pos_at(text, text.len())))
    }
    Ok(n)
}

fn read_integer(
    text: &str,
    base: Base,
    settings: &Settings,
) -> Result<i64, ParseErrorWithPos> {
    let (start, has_prefix) = match base.prefix() {
        Some(prefix) => skip_prefix(text, prefix, settings)?,
        None => (0, false),
    };
    read_digits::<i64>(text, start, base.radix(),
                       settings.format.digit_separators, has_prefix)
}


/// The digits of a float mantissa (or exponent) with separators
/// removed.
#[derive(Debug, Default)]
struct Mantissa {
    cleaned: String,
    digits: usize,
    dot: bool,
}

fn scan_mantissa(
    text: &str,
    range: Range<usize>,
    radix: u32,
    separators: bool,
    after_prefix: bool,
) -> Result<Mantissa, ParseErrorWithPos> {
    let mut m = Mantissa::default();
    let mut sep_allowed = after_prefix;
    let mut pending_sep = None;
    let check_sep = |pending_sep: Option<usize>| match pending_sep {
        Some(i) => Err(ParseError::InvalidDigit('_', radix).at(pos_at(text, i))),
        None => Ok(()),
    };
    for (i, c) in text[range.clone()].char_indices() {
        let i = range.start + i;
        if c == '.' && !m.dot {
            check_sep(pending_sep)?;
            m.dot = true;
            m.cleaned.push('.');
            sep_allowed = false;
        } else if c == '_' && separators && sep_allowed {
            sep_allowed = false;
            pending_sep = Some(i);
        } else if c.is_digit(radix) {
            m.cleaned.push(c);
            m.digits += 1;
            sep_allowed = true;
            pending_sep = None;
        } else {
            return Err(ParseError::InvalidDigit(c, radix).at(pos_at(text, i)))
        }
    }
    check_sep(pending_sep)?;
    Ok(m)
}

// Optional sign and decimal digits from `start` to the end; saturates
// since anything that large over- or underflows the float anyway.
fn read_exponent(
    text: &str,
    start: usize,
    separators: bool,
) -> Result<i64, ParseErrorWithPos> {
    let (negative, start) = match text[start..].chars().next() {
        Some('-') => (true, start + 1),
        Some('+') => (false, start + 1),
        _ => (false, start),
    };
    let m = scan_mantissa(text, start..text.len(), 10, separators, false)?;
    if m.dot {
        let i = start + text[start..].find('.').unwrap_or(0);
        return Err(ParseError::InvalidDigit('.', 10).at(pos_at(text, i)))
    }
    if m.digits == 0 {
        return Err(ParseError::MalformedFloat("missing exponent digits")
                   .at(pos_at(text, text.len())))
    }
    let mut exp: i64 = 0;
    for c in m.cleaned.chars() {
        let d = i64::from(c.to_digit(10).unwrap_or(0));
        exp = exp.saturating_mul(10).saturating_add(d);
    }
    Ok(if negative { -exp } else { exp })
}

fn finite(x: f64) -> Result<f64, ParseError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ParseError::Overflow)
    }
}

fn parse_cleaned(s: &str) -> Result<f64, ParseError> {
    finite(s.parse::<f64>()
           .map_err(|_| ParseError::MalformedFloat("unparseable"))?)
}

fn read_float_decimal(
    text: &str,
    settings: &Settings,
) -> Result<f64, ParseErrorWithPos> {
    let m = scan_mantissa(text, 0..text.len(), 10,
                          settings.format.digit_separators, false)?;
    if m.digits == 0 {
        return Err(ParseError::MalformedFloat("missing mantissa")
                   .at(Pos::default()))
    }
    if !m.dot {
        return Err(ParseError::MalformedFloat("missing '.'")
                   .at(pos_at(text, text.len())))
    }
    parse_cleaned(&m.cleaned).at(Pos::default())
}

fn read_float_scientific(
    text: &str,
    settings: &Settings,
) -> Result<f64, ParseErrorWithPos> {
    let separators = settings.format.digit_separators;
    let e = text.find(|c: char| c == 'e' || c == 'E')
        .ok_or(ParseError::MalformedFloat("missing exponent"))
        .at_byte(text, text.len())?;
    let m = scan_mantissa(text, 0..e, 10, separators, false)?;
    if m.digits == 0 {
        return Err(ParseError::MalformedFloat("missing mantissa")
                   .at(Pos::default()))
    }
    let exp = read_exponent(text, e + 1, separators)?;
    parse_cleaned(&format!("{}e{}", m.cleaned, exp)).at(Pos::default())
}

fn read_float_hex(
    text: &str,
    settings: &Settings,
) -> Result<f64, ParseErrorWithPos> {
    let separators = settings.format.digit_separators;
    let (start, has_prefix) = skip_prefix(text, "0x", settings)?;
    let p = start + text[start..].find(|c: char| c == 'p' || c == 'P')
        .ok_or(ParseError::MalformedFloat("missing exponent"))
        .at_byte(text, text.len())?;
    let m = scan_mantissa(text, start..p, 16, separators, has_prefix)?;
    if m.digits == 0 {
        return Err(ParseError::MalformedFloat("missing mantissa")
                   .at(pos_at(text, start)))
    }
    let exp = read_exponent(text, p + 1, separators)?;
    let mut bm = BinaryMantissa::default();
    let mut fractional = false;
    for c in m.cleaned.chars() {
        if c == '.' {
            fractional = true;
        } else if let Some(d) = c.to_digit(16) {
            bm.push_hex_digit(d, fractional);
        }
    }
    finite(bm.to_f64(exp)).at(Pos::default())
}


fn simple_escape(c: char) -> Option<char> {
    match c {
        'a' => Some('\x07'), // alert
        'b' => Some('\x08'), // backspace
        'f' => Some('\x0C'), // form feed
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0B'), // vertical tab
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None
    }
}

fn read_char(text: &str) -> Result<char, ParseErrorWithPos> {
    let mut cs = text.chars();
    match (cs.next(), cs.next(), cs.next()) {
        (Some(c), None, _) => Ok(c),
        (Some('\\'), Some(e), None) =>
            simple_escape(e)
            .ok_or(ParseError::UnknownEscape(e))
            .at(Pos { line: 0, col: 1 }),
        _ => Err(ParseError::NotSingleCodePoint(text.chars().count())
                 .at(Pos::default())),
    }
}

#[derive(PartialEq)]
enum DigitCount {
    /// Exactly this many digits
    Exactly(usize),
    /// One up to this many digits
    UpTo(usize),
}

fn read_code_escape(
    text: &str,
    introducer: &'static str,
    radix: u32,
    count: DigitCount,
    settings: &Settings,
) -> Result<char, ParseErrorWithPos> {
    // The introducers are case-sensitive: \u and \U differ in length
    let start =
        if text.starts_with(introducer) {
            introducer.len()
        } else if settings.modes.require_prefix {
            return Err(ParseError::MissingPrefix(introducer).at(Pos::default()))
        } else {
            0
        };
    let got = text[start..].chars().count();
    match count {
        DigitCount::Exactly(expected) if got != expected =>
            return Err(ParseError::WrongDigitCount { expected, got }
                       .at(pos_at(text, start))),
        DigitCount::UpTo(max) if got > max => {
            let i = start + text[start..].char_indices()
                .nth(max).map(|(i, _)| i).unwrap_or(0);
            return Err(ParseError::TooManyDigits.at(pos_at(text, i)))
        }
        _ => {}
    }
    let code = read_digits::<u32>(text, start, radix, false, false)?;
    if radix == 8 && code > 0xFF {
        return Err(ParseError::Overflow.at(pos_at(text, start)))
    }
    try_u32_to_char(code).at(Pos::default())
}

// Reads the `n` digits of an escape in interpreted text, `got` of
// which (giving `code`) have already been consumed.
fn read_escape_digits(
    text: &str,
    cs: &mut impl Iterator<Item = (usize, char)>,
    radix: u32,
    n: usize,
    mut code: u32,
    mut got: usize,
) -> Result<u32, ParseErrorWithPos> {
    while got < n {
        match cs.next() {
            Some((i, c)) => {
                let d = c.to_digit(radix)
                    .ok_or(ParseError::InvalidDigit(c, radix))
                    .at_byte(text, i)?;
                code = code * radix + d;
                got += 1;
            }
            None => return Err(ParseError::WrongDigitCount { expected: n, got }
                               .at(pos_at(text, text.len())))
        }
    }
    Ok(code)
}

fn read_interpreted(text: &str) -> Result<String, ParseErrorWithPos> {
    let mut out = String::with_capacity(text.len());
    let mut cs = text.char_indices();
    while let Some((i, c)) = cs.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let (j, e) = cs.next()
            .ok_or(ParseError::UnexpectedEnd)
            .at_byte(text, i)?;
        if let Some(r) = simple_escape(e) {
            out.push(r);
            continue;
        }
        let code = match e {
            'x' => read_escape_digits(text, &mut cs, 16, 2, 0, 0)?,
            'u' => read_escape_digits(text, &mut cs, 16, 4, 0, 0)?,
            'U' => read_escape_digits(text, &mut cs, 16, 8, 0, 0)?,
            '0'..='7' => {
                let code = read_escape_digits(
                    text, &mut cs, 8, 3, e.to_digit(8).unwrap_or(0), 1)?;
                if code > 0xFF {
                    return Err(ParseError::Overflow.at(pos_at(text, i)))
                }
                code
            }
            _ => return Err(ParseError::UnknownEscape(e).at(pos_at(text, j)))
        };
        // Byte escapes yield the code point of the same number
        out.push(try_u32_to_char(code).at_byte(text, i)?);
    }
    Ok(out)
}

fn read_raw(text: &str, settings: &Settings) -> Result<String, ParseErrorWithPos> {
    let forbidden = settings.format.raw_forbidden;
    if let Some((i, c)) = text.char_indices().find(|(_, c)| forbidden.contains(c)) {
        return Err(ParseError::DisallowedInRaw(c).at(pos_at(text, i)))
    }
    if settings.format.raw_discard_cr {
        Ok(text.chars().filter(|c| *c != '\r').collect())
    } else {
        Ok(text.to_string())
    }
}

/// Parse `text` as a literal of the given category, with the
/// canonical settings.
pub fn parse(
    text: &str,
    category: LiteralCategory,
) -> Result<LiteralValue, ParseErrorWithPos> {
    parse_with(text, category, &CANONICAL_SETTINGS)
}

pub fn parse_with(
    text: &str,
    category: LiteralCategory,
    settings: &Settings,
) -> Result<LiteralValue, ParseErrorWithPos> {
    use LiteralCategory::*;
    let value = match category {
        IntegerDecimal => Value::Integer(read_integer(text, Base::Decimal, settings)?),
        IntegerBinary => Value::Integer(read_integer(text, Base::Binary, settings)?),
        IntegerOctal => Value::Integer(read_integer(text, Base::Octal, settings)?),
        IntegerHex => Value::Integer(read_integer(text, Base::Hex, settings)?),
        FloatDecimal => Value::Float(read_float_decimal(text, settings)?),
        FloatScientific => Value::Float(read_float_scientific(text, settings)?),
        FloatHex => Value::Float(read_float_hex(text, settings)?),
        CodePointChar => Value::CodePoint(read_char(text)?),
        CodePointOctalEscape => Value::CodePoint(
            read_code_escape(text, "\\", 8, DigitCount::UpTo(3), settings)?),
        CodePointHexEscape => Value::CodePoint(
            read_code_escape(text, "\\x", 16, DigitCount::Exactly(2), settings)?),
        CodePointUnicode16 => Value::CodePoint(
            read_code_escape(text, "\\u", 16, DigitCount::Exactly(4), settings)?),
        CodePointUnicode32 => Value::CodePoint(
            read_code_escape(text, "\\U", 16, DigitCount::Exactly(8), settings)?),
        TextInterpreted => Value::Text(KString::from_string(read_interpreted(text)?)),
        TextRaw => Value::Text(KString::from_string(read_raw(text, settings)?)),
    };
    Ok(LiteralValue::from_parts(category, value))
}
