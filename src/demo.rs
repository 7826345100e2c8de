// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The sample literals shown by the demo program, one of each kind
//! of integer, float, code point and string literal.

use crate::context::Source;
use crate::read::{read_from, Row, ReadErrorWithLocation};
use crate::settings::Settings;

pub const DEMO_TABLE: &str = "\
[Integer Literals]
integer-decimal\tDecimal\t123
integer-binary\tBinary\t0b1011
integer-octal\tOctal\t0o17
integer-hex\tHexadecimal\t0x7F

[Floating Point Literals]
float-decimal\tDecimal Floating Point\t3.14
float-scientific\tScientific Notation\t2.5e2
float-hex\tHexadecimal Floating Point\t0x1.0p3

[Rune Literals]
; all of these are 'a'
code-point-char\tRune as character\ta
code-point-octal-escape\tRune as octal\t\\141
code-point-hex-escape\tRune as hexadecimal\t\\x61
code-point-unicode16\tRune as 16-bit hexadecimal\t\\u0061
code-point-unicode32\tRune as 32-bit Unicode\t\\U00000061

[String Literals]
text-interpreted\tInterpreted String\tHello, World!
text-raw\tRaw String\tHello,
|\tWorld!
text-interpreted\tString with Escape Sequences\tHello,\\n\\\"World!\\\"
";

pub fn demo_rows(settings: &Settings) -> Result<Vec<Row>, ReadErrorWithLocation> {
    read_from(DEMO_TABLE.as_bytes(), Source::Builtin("demo table"), settings)
}
