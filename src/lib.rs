// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A parser and formatter for literals: integers in base 2, 8, 10
//! and 16, decimal, scientific and hexadecimal floats, code points
//! given as a character or as octal, hex or Unicode escapes, and
//! interpreted (escape-processing) or raw strings.
//!
//! * `anyliteral::parse::parse` turns the text of a literal plus the
//!   category it is declared as into a typed
//!   [LiteralValue](value::LiteralValue); errors say what is wrong
//!   and where (line and column within the literal).
//!
//! * `anyliteral::value::render` turns a value back into canonical
//!   text. Decimal integers, floats that re-parse to the same value,
//!   printable characters or `\u` escapes, and strings as they are.
//!   Other formats (e.g. the way Go prints them) are available
//!   through [settings](settings).
//!
//! * Tables of labelled literals can be read from files or any
//!   `Read` and printed in sections, see [read](read) and
//!   [demo](demo).
//!
//! Parsing and rendering are pure functions over plain data.

pub mod buffered_chars;
pub mod context;
pub mod debug;
pub mod demo;
pub mod number;
pub mod parse;
pub mod pos;
pub mod read;
pub mod settings;
pub mod table;
pub mod value;

pub use parse::parse;
pub use value::render;
