// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for both reading (parsing) and writing (rendering)
//! literals.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStyle {
    /// Shortest round-trip digits, positional, always with a '.'
    Positional,
    /// Like Go's `%v`: no trailing ".0", exponent form for very
    /// large or small magnitudes
    ShortestG,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePointStyle {
    /// The character itself if printable, else a `\u` escape
    Char,
    /// The decimal number of the code point
    Number,
}

#[derive(Debug)]
pub struct Format {
    /// Accept '_' between digits (and after a base prefix)
    pub digit_separators: bool,
    /// Characters that may not appear in raw text
    pub raw_forbidden: &'static [char],
    /// Drop carriage returns from raw text
    pub raw_discard_cr: bool,
    pub float_style: FloatStyle,
    pub code_point_style: CodePointStyle,
}

pub const CANONICAL_FORMAT : Format = Format {
    digit_separators: false,
    raw_forbidden: &[],
    raw_discard_cr: false,
    float_style: FloatStyle::Positional,
    code_point_style: CodePointStyle::Char,
};

/// What `fmt.Println` shows for Go's literals.
pub const GO_FORMAT : Format = Format {
    digit_separators: true,
    raw_forbidden: &['`'],
    raw_discard_cr: true,
    float_style: FloatStyle::ShortestG,
    code_point_style: CodePointStyle::Number,
};


#[derive(Debug)]
pub struct Modes {
    /// Base prefixes (`0x`..) and escape introducers (`\x`..) must be
    /// present instead of being optional
    pub require_prefix: bool,
}

pub const LENIENT_MODES : Modes = Modes {
    require_prefix: false,
};

pub const STRICT_MODES : Modes = Modes {
    require_prefix: true,
};

#[derive(Debug)]
pub struct Settings<'t> {
    pub format: &'t Format,
    pub modes: &'t Modes,
}

pub const CANONICAL_SETTINGS : Settings<'static> = Settings {
    format: &CANONICAL_FORMAT,
    modes: &LENIENT_MODES,
};

/// Go's literal syntax and `fmt.Println` output.
pub const GO_SETTINGS : Settings<'static> = Settings {
    format: &GO_FORMAT,
    modes: &STRICT_MODES,
};
