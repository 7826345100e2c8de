// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Not an example, but a program to show the struct sizes for
//! possible optimization.

use anyliteral::{settings::{Format, Modes, Settings}, context::Source, parse::{ParseError, ParseErrorWithPos}, pos::Pos, read::{ReadError, ReadErrorWithPos, ReadErrorWithLocation, Row}, table::{TableError, TableErrorWithPos, TableItem, TableItemWithPos, TableEntry}, value::{LiteralCategory, LiteralValue, Value}, number::BinaryMantissa};
use kstring::KString;

fn pr(ctx: &str, nam: &str, siz: usize) {
    println!("{siz}\t{ctx}\t{nam}")
}

const FQTY : bool = false;

macro_rules! ctx {
    ( $ctx:expr ) => {
        macro_rules! p {
            ( $t:ty ) => {
                let typename =
                    if FQTY {
                        std::any::type_name::<$t>()
                    } else {
                        stringify!($t)
                    };
                pr($ctx, typename, std::mem::size_of::<$t>())
            }
        }
    }
}

fn main() {
    {
        ctx!("context");
        p!{Source};
        p!{Pos};
    }

    {
        ctx!("settings");
        p!{Format};
        p!{Modes};
        p!{Settings};
    }

    {
        ctx!("value");
        p!{KString};
        p!{LiteralCategory};
        p!{Value};
        p!{LiteralValue};
        p!{BinaryMantissa};
    }

    {
        ctx!("parse");
        p!{ParseError};
        p!{ParseErrorWithPos};
        p!{Result<LiteralValue, ParseErrorWithPos>};
    }

    {
        ctx!("table");
        p!{TableEntry};
        p!{TableItem};
        p!{TableItemWithPos};
        p!{TableError};
        p!{TableErrorWithPos};
        // Item in impl Iterator<Item = Result<TableItemWithPos, TableErrorWithPos>> + 's:
        p!{Result<TableItemWithPos, TableErrorWithPos>};
    }

    {
        ctx!("read");
        p!{std::io::Error};
        p!{Row};
        p!{ReadError};
        p!{ReadErrorWithPos};
        p!{ReadErrorWithLocation};
        p!{Result<Vec<Row>, ReadErrorWithPos>};
        p!{Result<Vec<Row>, ReadErrorWithLocation>};
    }
}
