// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading a whole literal table into rows of parsed values, and
//! writing rows out as rendered lines.

use crate::pos::Pos;
use crate::context::Source;
use crate::table::{TableItem, TableItemWithPos, TableEntry, table_items,
                   TableError, TableErrorWithPos};
use crate::parse::{parse_with, ParseErrorWithPos};
use crate::settings::{Settings, Format};
use crate::value::LiteralValue;
use crate::buffered_chars::buffered_chars;
use std::fmt::{Formatter, Display};
use std::io::{Read, Write};
use std::path::Path;
use std::fs::File;
use kstring::KString;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    TE(TableError),
    #[error("{0} in literal")]
    PE(ParseErrorWithPos),
    #[error("continuation line without preceding entry")]
    ContinuationWithoutEntry,
}

#[derive(Error, Debug)]
#[error("{err} {pos}")]
pub struct ReadErrorWithPos {
    pub err: ReadError,
    pub pos: Pos
}

impl ReadError {
    fn at(self, p: Pos) -> ReadErrorWithPos {
        ReadErrorWithPos {
            err: self,
            pos: p
        }
    }
}

impl From<TableErrorWithPos> for ReadErrorWithPos {
    fn from(ep: TableErrorWithPos) -> ReadErrorWithPos {
        let TableErrorWithPos { err, pos } = ep;
        ReadErrorWithPos {
            err: ReadError::TE(err),
            pos
        }
    }
}

/// A read error together with where the table came from.
#[derive(Error, Debug)]
pub enum ReadErrorWithLocation {
    Pos(ReadErrorWithPos, Source),
    IO(std::io::Error, Source),
}

impl Display for ReadErrorWithLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ReadErrorWithLocation::Pos(e, source) =>
                f.write_fmt(format_args!("{} {}", e.err, source.with_pos(e.pos))),
            ReadErrorWithLocation::IO(e, source) =>
                f.write_fmt(format_args!("{}: {}", source, e)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Header(KString),
    /// Label and value
    Value(KString, LiteralValue),
}

// An entry whose literal may still grow by continuation lines.
struct Pending {
    entry: TableEntry,
    literal: String,
}

fn finish(
    pending: Option<Pending>,
    rows: &mut Vec<Row>,
    settings: &Settings,
) -> Result<(), ReadErrorWithPos> {
    if let Some(Pending { entry, literal }) = pending {
        let value = parse_with(&literal, entry.category, settings)
            .map_err(|e| ReadError::PE(e).at(entry.literal_pos))?;
        trace!(label = %entry.label, category = %entry.category, "parsed literal");
        rows.push(Row::Value(entry.label, value));
    }
    Ok(())
}

// Join continuation lines to their entries, parse the literals, and
// collect everything.
fn slurp(
    items: &mut impl Iterator<Item = Result<TableItemWithPos,
                                            TableErrorWithPos>>,
    settings: &Settings,
) -> Result<Vec<Row>, ReadErrorWithPos>
{
    let mut rows = Vec::new();
    let mut pending: Option<Pending> = None;
    for ti in items {
        let TableItemWithPos(item, pos) = ti?;
        match item {
            TableItem::Continuation(s) => {
                if let Some(p) = pending.as_mut() {
                    p.literal.push('\n');
                    p.literal.push_str(&s);
                } else {
                    return Err(ReadError::ContinuationWithoutEntry.at(pos))
                }
            }
            TableItem::Header(h) => {
                finish(pending.take(), &mut rows, settings)?;
                rows.push(Row::Header(h));
            }
            TableItem::Entry(entry) => {
                finish(pending.take(), &mut rows, settings)?;
                let literal = entry.literal.to_string();
                pending = Some(Pending { entry, literal });
            }
        }
    }
    finish(pending, &mut rows, settings)?;
    Ok(rows)
}

pub fn read_all(
    fh: impl Read,
    settings: &Settings,
) -> Result<Vec<Row>, ReadErrorWithPos>
{
    debug!("reading literal table");
    let mut items = table_items(buffered_chars(fh));
    let rows = slurp(&mut items, settings)?;
    debug!(rows = rows.len(), "read literal table");
    Ok(rows)
}

pub fn read_from(
    fh: impl Read,
    source: Source,
    settings: &Settings,
) -> Result<Vec<Row>, ReadErrorWithLocation>
{
    read_all(fh, settings).map_err(|e| ReadErrorWithLocation::Pos(e, source))
}

pub fn read_file(
    path: &Path,
    settings: &Settings,
) -> Result<Vec<Row>, ReadErrorWithLocation> {
    let source = Source::File(path.to_path_buf());
    match File::open(path) {
        Ok(fh) => read_from(fh, source, settings),
        Err(e) => Err(ReadErrorWithLocation::IO(e, source)),
    }
}

/// Headers as `---- Header ----`, preceded by an empty line unless
/// first, values as `label: value`.
pub fn write_all<'t>(
    out: impl Write,
    rows: impl IntoIterator<Item = &'t Row>,
    format: &Format,
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    let mut seen_item = false;
    for row in rows.into_iter() {
        match row {
            Row::Header(h) => {
                if seen_item {
                    writeln!(out)?;
                }
                writeln!(out, "---- {} ----", h)?;
            }
            Row::Value(label, v) => {
                writeln!(out, "{}: {}", label, v.display(format))?;
            }
        }
        seen_item = true;
    }
    Ok(())
}

pub fn write_file<'t>(
    path: &Path,
    rows: impl IntoIterator<Item = &'t Row>,
    format: &Format,
) -> Result<(), std::io::Error> {
    write_all(File::create(path)?, rows, format)
}
