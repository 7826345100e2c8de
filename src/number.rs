// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Number bases, overflow-checked digit accumulation, assembling
//! hex floats, and the two ways of writing floats.

use num::traits::{PrimInt, NumCast};
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }
    /// Matched case-insensitively.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Base::Binary => Some("0b"),
            Base::Octal => Some("0o"),
            Base::Decimal => None,
            Base::Hex => Some("0x"),
        }
    }
}

/// `n * radix + d`, or `None` if that doesn't fit `T`.
pub fn push_digit<T: PrimInt>(n: T, radix: u32, d: u32) -> Option<T> {
    let radix: T = <T as NumCast>::from(radix)?;
    let d: T = <T as NumCast>::from(d)?;
    n.checked_mul(&radix)?.checked_add(&d)
}

/// Accumulates hex digits into at most 64 significant bits. Digits
/// beyond that only shift the exponent and are remembered as a sticky
/// bit, which is enough to round the result correctly.
#[derive(Debug, Default)]
pub struct BinaryMantissa {
    bits: u64,
    shift: i64,
    inexact: bool,
}

// `bits >> drop`, rounded to nearest, ties to even. `sticky` says
// whether there were non-zero bits below `bits`.
fn shift_round(bits: u64, drop: u32, sticky: bool) -> u64 {
    if drop == 0 {
        return bits
    }
    if drop > 64 {
        // below half of the last kept bit
        return 0
    }
    let wide = bits as u128;
    let kept = (wide >> drop) as u64;
    let rest = wide & ((1u128 << drop) - 1);
    let half = 1u128 << (drop - 1);
    if rest > half || (rest == half && (sticky || kept & 1 == 1)) {
        kept + 1
    } else {
        kept
    }
}

impl BinaryMantissa {
    pub fn push_hex_digit(&mut self, d: u32, fractional: bool) {
        if self.bits >> 60 == 0 {
            self.bits = self.bits << 4 | d as u64;
            if fractional {
                self.shift -= 4;
            }
        } else {
            if d != 0 {
                self.inexact = true;
            }
            if !fractional {
                self.shift += 4;
            }
        }
    }

    /// The mantissa times `2^exp`, rounded once to the nearest `f64`
    /// (subnormals included); infinite if out of range.
    pub fn to_f64(&self, exp: i64) -> f64 {
        if self.bits == 0 {
            return 0.0
        }
        // value = bits * 2^e, its highest bit at 2^top
        let e = exp.saturating_add(self.shift);
        let msb = 63 - self.bits.leading_zeros() as i64;
        let top = e.saturating_add(msb);
        if top > 1023 {
            return f64::INFINITY
        }
        if top >= -1022 {
            // 53 significant bits
            let drop = msb - 52;
            let m = if drop <= 0 {
                self.bits << (-drop) as u32
            } else {
                shift_round(self.bits, drop as u32, self.inexact)
            };
            let (m, q) = if m >> 53 != 0 { (m >> 1, e + drop + 1) } else { (m, e + drop) };
            let biased = q + 52 + 1023;
            if biased > 2046 {
                return f64::INFINITY
            }
            f64::from_bits((biased as u64) << 52 | (m & ((1 << 52) - 1)))
        } else {
            // Subnormal: a multiple of 2^-1074. Rounding up to 2^52
            // gives the bit pattern of the smallest normal.
            let drop = (-1074i64).saturating_sub(e);
            let m = if drop <= 0 {
                self.bits << (-drop) as u32
            } else {
                shift_round(self.bits, drop.min(65) as u32, self.inexact)
            };
            f64::from_bits(m)
        }
    }
}

/// Shortest round-trip digits, never in exponent form, always with a
/// decimal point.
pub fn fmt_float_positional(f: &mut Formatter<'_>, x: f64)
                            -> Result<(), std::fmt::Error> {
    let s = x.to_string();
    f.write_str(&s)?;
    if x.is_finite() && !s.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

/// Go's `%v` for float64: `%g` with the shortest digits, switching to
/// exponent form below 1e-4 and from 1e6 on.
pub fn fmt_float_shortest_g(f: &mut Formatter<'_>, x: f64)
                            -> Result<(), std::fmt::Error> {
    if x.is_nan() {
        return f.write_str("NaN")
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "+Inf" } else { "-Inf" })
    }
    if x == 0.0 {
        return f.write_str(if x.is_sign_negative() { "-0" } else { "0" })
    }
    let sci = format!("{:e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= 6 {
        f.write_fmt(format_args!("{}e{}{:02}",
                                 mantissa,
                                 if exp < 0 { '-' } else { '+' },
                                 exp.abs()))
    } else {
        f.write_fmt(format_args!("{}", x))
    }
}
