// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Where a literal table came from (i.e. other than position), for
//! error messages.

use crate::pos::Pos;
use std::{path::PathBuf, fmt::{Formatter, Display}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    /// A table compiled into the program, by name
    Builtin(&'static str),
    Stdin,
}

impl Source {
    /// Location to be put *after* the error reason and a space,
    /// includes "in" or "from".
    pub fn with_pos(&self, pos: Pos) -> SourcePos<'_> {
        SourcePos(self, pos)
    }
}

/// Location to be put *before* a colon and the error reason.
impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Source::File(path) => f.write_fmt(format_args!("{:?}", path)),
            Source::Builtin(name) => f.write_fmt(format_args!("({})", name)),
            Source::Stdin => f.write_str("(stdin)"),
        }
    }
}

pub struct SourcePos<'t>(&'t Source, Pos);

impl<'t> Display for SourcePos<'t> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let SourcePos(source, pos) = self;
        match source {
            // Following the Emacs convention for location information
            Source::File(_) => f.write_fmt(format_args!("in {}{}", source, pos)),
            _ => f.write_fmt(format_args!("from {}{}", source, pos)),
        }
    }
}
