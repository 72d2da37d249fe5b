//! The `get` subcommand

use crate::{select::CommandArgs, utils::format_value};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use zseq::{
    codec::{find_in, Match},
    command::{CommandTable, Opcode},
    source::SequenceFile,
};

/// Arguments for the `get` subcommand
#[derive(Args)]
#[clap(author, version, about = "Print the value of a command in a sequence file", long_about = None)]
pub struct GetArgs {
    /// The sequence file to read
    path: PathBuf,

    #[clap(flatten)]
    command: CommandArgs,

    /// Print the value in decimal, instead of hexadecimal
    #[clap(short, long)]
    decimal: bool,
}

/// Print the value of a command in a sequence file
pub fn get(args: &GetArgs) -> Result<()> {
    let command = args.command.resolve(&CommandTable::default())?;

    match lookup(&args.path, command.opcode)? {
        Some(found) => println!("{}", format_value(found.value, args.decimal)),
        None => println!(
            "{} doesn't contain a {} command",
            args.path.to_string_lossy(),
            command
        ),
    }

    Ok(())
}

fn lookup(path: &Path, opcode: Opcode) -> Result<Option<Match>> {
    let mut source = SequenceFile::read_only(path);

    find_in(&mut source, opcode)
        .with_context(|| format!("Could not read {}", path.to_string_lossy()))
}
