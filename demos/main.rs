// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyliteral::context::Source;
use anyliteral::demo::demo_rows;
use anyliteral::parse::parse_with;
use anyliteral::read::{read_file, read_from, write_all, Row};
use anyliteral::settings::{Settings, CANONICAL_FORMAT, GO_FORMAT,
                           LENIENT_MODES, STRICT_MODES};
use anyliteral::value::LiteralCategory;
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{Result, anyhow};


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print values the way Go's fmt.Println does
    #[clap(long, value_parser)]
    go: bool,
    /// Require base prefixes and escape introducers
    #[clap(long, value_parser)]
    strict: bool,
    /// Show category and raw payload instead of the rendered value
    #[clap(short, long, value_parser)]
    dump: bool,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the built-in sample literals (the default)
    Demo,
    /// Print a literal table ("-" for stdin)
    Table {
        #[clap(value_parser)]
        input_path: PathBuf,
    },
    /// Parse and print a single literal
    Parse {
        /// e.g. integer-hex, float-scientific, code-point-unicode16, text-raw
        #[clap(value_parser)]
        category: String,
        #[clap(value_parser)]
        text: String,
    },
}

fn print_dumps(rows: &[Row]) -> Result<()> {
    let mut out = BufWriter::new(stdout());
    for row in rows {
        match row {
            Row::Header(h) => writeln!(out, ";; {}", h)?,
            Row::Value(label, v) => writeln!(out, "{}: {}", label, v.dump())?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let settings = Settings {
        format: if args.go { &GO_FORMAT } else { &CANONICAL_FORMAT },
        modes: if args.strict { &STRICT_MODES } else { &LENIENT_MODES },
    };

    let rows = match args.command.unwrap_or(Command::Demo) {
        Command::Demo => demo_rows(&settings)?,
        Command::Table { input_path } => {
            if input_path.as_os_str() == "-" {
                read_from(stdin().lock(), Source::Stdin, &settings)?
            } else {
                read_file(&input_path, &settings)?
            }
        }
        Command::Parse { category, text } => {
            let cat = LiteralCategory::try_from(category.as_str())
                .map_err(|()| anyhow!("unknown literal category {:?}", category))?;
            let v = parse_with(&text, cat, &settings)?;
            if args.dump {
                println!("{}", v.dump());
            } else {
                println!("{}", v.display(settings.format));
            }
            return Ok(())
        }
    };

    if args.dump {
        print_dumps(&rows)?;
    } else {
        write_all(BufWriter::new(stdout()), &rows, settings.format)?;
    }
    Ok(())
}
