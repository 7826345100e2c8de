// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data types representing a parsed literal, and rendering
//! them back to text.
//!
//! A [LiteralValue](LiteralValue) pairs a [Value](Value) with the
//! [LiteralCategory](LiteralCategory) it was read as; the pair is
//! checked on construction so that the category always matches the
//! kind of value.

use crate::number::{fmt_float_positional, fmt_float_shortest_g};
use crate::settings::{Format, FloatStyle, CodePointStyle, CANONICAL_FORMAT};
use std::fmt::Write;
use kstring::KString;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Float,
    CodePoint,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralCategory {
    IntegerDecimal,
    IntegerBinary,
    IntegerOctal,
    IntegerHex,
    FloatDecimal,
    FloatScientific,
    FloatHex,
    CodePointChar,
    CodePointOctalEscape,
    CodePointHexEscape,
    CodePointUnicode16,
    CodePointUnicode32,
    TextInterpreted,
    TextRaw,
}

impl LiteralCategory {
    pub const ALL: [LiteralCategory; 14] = [
        LiteralCategory::IntegerDecimal,
        LiteralCategory::IntegerBinary,
        LiteralCategory::IntegerOctal,
        LiteralCategory::IntegerHex,
        LiteralCategory::FloatDecimal,
        LiteralCategory::FloatScientific,
        LiteralCategory::FloatHex,
        LiteralCategory::CodePointChar,
        LiteralCategory::CodePointOctalEscape,
        LiteralCategory::CodePointHexEscape,
        LiteralCategory::CodePointUnicode16,
        LiteralCategory::CodePointUnicode32,
        LiteralCategory::TextInterpreted,
        LiteralCategory::TextRaw,
    ];

    pub fn kind(self) -> Kind {
        use LiteralCategory::*;
        match self {
            IntegerDecimal | IntegerBinary | IntegerOctal | IntegerHex =>
                Kind::Integer,
            FloatDecimal | FloatScientific | FloatHex =>
                Kind::Float,
            CodePointChar | CodePointOctalEscape | CodePointHexEscape
                | CodePointUnicode16 | CodePointUnicode32 =>
                Kind::CodePoint,
            TextInterpreted | TextRaw =>
                Kind::Text,
        }
    }
}

impl TryFrom<&str> for LiteralCategory {
    type Error = ();
    fn try_from(s: &str) -> Result<LiteralCategory, Self::Error> {
        LiteralCategory::ALL.iter()
            .find(|cat| category_to_str(**cat) == s)
            .copied()
            .ok_or(())
    }
}

pub fn category_to_str(c: LiteralCategory) -> &'static str {
    match c {
        LiteralCategory::IntegerDecimal => "integer-decimal",
        LiteralCategory::IntegerBinary => "integer-binary",
        LiteralCategory::IntegerOctal => "integer-octal",
        LiteralCategory::IntegerHex => "integer-hex",
        LiteralCategory::FloatDecimal => "float-decimal",
        LiteralCategory::FloatScientific => "float-scientific",
        LiteralCategory::FloatHex => "float-hex",
        LiteralCategory::CodePointChar => "code-point-char",
        LiteralCategory::CodePointOctalEscape => "code-point-octal-escape",
        LiteralCategory::CodePointHexEscape => "code-point-hex-escape",
        LiteralCategory::CodePointUnicode16 => "code-point-unicode16",
        LiteralCategory::CodePointUnicode32 => "code-point-unicode32",
        LiteralCategory::TextInterpreted => "text-interpreted",
        LiteralCategory::TextRaw => "text-raw",
    }
}

impl std::fmt::Display for LiteralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(category_to_str(*self))
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    CodePoint(char),
    Text(KString),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::CodePoint(_) => Kind::CodePoint,
            Value::Text(_) => Kind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralValue {
    category: LiteralCategory,
    value: Value,
}

impl LiteralValue {
    /// Returns `None` if `value` is not of the kind that `category`
    /// denotes.
    pub fn new(category: LiteralCategory, value: Value) -> Option<LiteralValue> {
        if category.kind() == value.kind() {
            Some(LiteralValue { category, value })
        } else {
            None
        }
    }

    // For the parser, which builds the value according to the
    // category.
    pub(crate) fn from_parts(category: LiteralCategory, value: Value) -> LiteralValue {
        debug_assert_eq!(category.kind(), value.kind());
        LiteralValue { category, value }
    }

    pub fn category(&self) -> LiteralCategory {
        self.category
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self.value { Some(n) } else { None }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(x) = self.value { Some(x) } else { None }
    }

    pub fn as_code_point(&self) -> Option<char> {
        if let Value::CodePoint(c) = self.value { Some(c) } else { None }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(s) = &self.value { Some(s.as_str()) } else { None }
    }

    /// Display adapter using the given format.
    pub fn display<'t>(&'t self, format: &'t Format) -> Rendered<'t> {
        Rendered { value: self, format }
    }
}

// Control, format, private use, unassigned, and separators other
// than the plain space.
static UNPRINTABLE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{Zs}\p{Zl}\p{Zp}]$").ok()
});

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true
    }
    match UNPRINTABLE.as_ref() {
        Some(re) => !re.is_match(c.encode_utf8(&mut [0; 4])),
        None => !(c.is_control() || c.is_whitespace()),
    }
}

fn fmt_code_point(f: &mut std::fmt::Formatter<'_>, c: char)
                  -> Result<(), std::fmt::Error> {
    if is_printable(c) {
        f.write_char(c)
    } else if (c as u32) <= 0xFFFF {
        f.write_fmt(format_args!("\\u{:04X}", c as u32))
    } else {
        f.write_fmt(format_args!("\\U{:08X}", c as u32))
    }
}

pub struct Rendered<'t> {
    value: &'t LiteralValue,
    format: &'t Format,
}

impl<'t> std::fmt::Display for Rendered<'t> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match &self.value.value {
            Value::Integer(n) => f.write_fmt(format_args!("{}", n)),
            Value::Float(x) => match self.format.float_style {
                FloatStyle::Positional => fmt_float_positional(f, *x),
                FloatStyle::ShortestG => fmt_float_shortest_g(f, *x),
            }
            Value::CodePoint(c) => match self.format.code_point_style {
                CodePointStyle::Char => fmt_code_point(f, *c),
                CodePointStyle::Number => f.write_fmt(format_args!("{}", *c as u32)),
            }
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.display(&CANONICAL_FORMAT), f)
    }
}

/// The canonical text of a value.
pub fn render(v: &LiteralValue) -> String {
    v.to_string()
}

pub fn render_with(v: &LiteralValue, format: &Format) -> String {
    v.display(format).to_string()
}
