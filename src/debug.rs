// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for debugging the anyliteral library

use crate::value::{LiteralValue, Value};
use std::fmt::{Formatter, Display};

/// Shows the category and the raw payload of a value, as
/// `(category payload..)`: code points as hex numbers, floats with
/// their bit pattern, text as the list of its code points.
pub struct Dump<'t>(&'t LiteralValue);

impl<'t> Display for Dump<'t> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let v = self.0;
        f.write_fmt(format_args!("({}", v.category()))?;
        match v.value() {
            Value::Integer(n) => f.write_fmt(format_args!(" {}", n))?,
            Value::Float(x) => f.write_fmt(format_args!(" {:?} #x{:016x}", x, x.to_bits()))?,
            Value::CodePoint(c) => f.write_fmt(format_args!(" #x{:X}", *c as u32))?,
            Value::Text(s) => {
                for c in s.chars() {
                    f.write_fmt(format_args!(" #x{:X}", c as u32))?;
                }
            }
        }
        f.write_str(")")
    }
}

impl LiteralValue {
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }
}
