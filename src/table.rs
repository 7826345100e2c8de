// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating a character stream to a stream of table items. A
//! table is line oriented:
//!
//! ```text
//! ; comment
//! [Section header]
//! category<TAB>label<TAB>literal
//! |continuation of the literal above, after a newline
//! ```
//!
//! Empty lines are ignored. Literals are not parsed here, and
//! continuation lines are not joined with their entry; see
//! [read](../read/index.html) for that.

use crate::pos::Pos;
use crate::value::LiteralCategory;
use kstring::KString;
use thiserror::Error;
use genawaiter::rc::Gen;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error ({0}) after")]
    IOError(anyhow::Error),
    #[error("unknown literal category '{0}'")]
    UnknownCategory(KString),
    #[error("missing tab-separated {0} field")]
    MissingField(&'static str),
    #[error("missing ']' closing the section header")]
    UnterminatedHeader,
}

#[derive(Error, Debug)]
#[error("{err} {pos}")]
pub struct TableErrorWithPos {
    pub err: TableError,
    pub pos: Pos
}

impl TableError {
    fn at(self, p: Pos) -> TableErrorWithPos {
        TableErrorWithPos {
            err: self,
            pos: p
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub category: LiteralCategory,
    pub label: KString,
    pub literal: KString,
    /// Where the literal field starts
    pub literal_pos: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableItem {
    Header(KString),
    Entry(TableEntry),
    Continuation(KString),
}

#[derive(Debug)]
pub struct TableItemWithPos(pub TableItem, pub Pos);


fn strip_cr(line: &mut String) {
    if line.ends_with('\r') {
        line.pop();
    }
}

// Reads up to and excluding the next '\n' into `out`. Returns the
// position of the line start (None if there was no line left), and
// whether the end of the input was reached; `cs` must not be asked
// again after that.
fn read_line(
    cs: &mut impl Iterator<Item = anyhow::Result<(char, Pos)>>,
    out: &mut String,
) -> Result<(Option<Pos>, bool), TableErrorWithPos> {
    out.clear();
    let mut startpos = None;
    let mut lastpos = Pos::default();
    loop {
        match cs.next() {
            None => break,
            Some(Err(e)) => return Err(TableError::IOError(e).at(lastpos)),
            Some(Ok((c, pos))) => {
                lastpos = pos;
                startpos.get_or_insert(pos);
                if c == '\n' {
                    strip_cr(out);
                    return Ok((startpos, false))
                }
                out.push(c);
            }
        }
    }
    strip_cr(out);
    Ok((startpos, true))
}

fn col_after(s: &str) -> u32 {
    s.chars().count() as u32
}

fn line_item(line: &str, pos: Pos) -> Result<Option<TableItem>, TableErrorWithPos> {
    if let Some(rest) = line.strip_prefix('|') {
        return Ok(Some(TableItem::Continuation(KString::from_ref(rest))))
    }
    if line.trim().is_empty() || line.starts_with(';') {
        return Ok(None)
    }
    if let Some(rest) = line.strip_prefix('[') {
        return match rest.trim_end().strip_suffix(']') {
            Some(header) => Ok(Some(TableItem::Header(KString::from_ref(header.trim())))),
            None => Err(TableError::UnterminatedHeader.at(
                Pos { line: pos.line, col: col_after(line) })),
        }
    }
    let mut fields = line.splitn(3, '\t');
    let category_str = fields.next().unwrap_or("");
    let category = LiteralCategory::try_from(category_str)
        .map_err(|()| TableError::UnknownCategory(KString::from_ref(category_str))
                 .at(pos))?;
    let label = fields.next()
        .ok_or(TableError::MissingField("label")
               .at(Pos { line: pos.line, col: col_after(line) }))?;
    let literal = fields.next()
        .ok_or(TableError::MissingField("literal")
               .at(Pos { line: pos.line, col: col_after(line) }))?;
    let literal_pos = Pos {
        line: pos.line,
        col: col_after(category_str) + col_after(label) + 2,
    };
    Ok(Some(TableItem::Entry(TableEntry {
        category,
        label: KString::from_ref(label),
        literal: KString::from_ref(literal),
        literal_pos,
    })))
}

pub fn table_items<'s>(
    cs: impl Iterator<Item = anyhow::Result<(char, Pos)>> + 's,
)
    -> impl Iterator<Item = Result<TableItemWithPos, TableErrorWithPos>> + 's
{
    Gen::new(|co| async move {
        let mut cs = cs;
        let mut tmp = String::new();
        loop {
            match read_line(&mut cs, &mut tmp) {
                Err(e) => {
                    co.yield_(Err(e)).await;
                    return;
                }
                Ok((maybe_pos, eof)) => {
                    if let Some(pos) = maybe_pos {
                        match line_item(&tmp, pos) {
                            Err(e) => {
                                co.yield_(Err(e)).await;
                                return;
                            }
                            Ok(Some(item)) => {
                                co.yield_(Ok(TableItemWithPos(item, pos))).await;
                            }
                            Ok(None) => {}
                        }
                    }
                    if eof {
                        // avoid calling next() again!
                        return
                    }
                }
            }
        }
    }).into_iter()
}
