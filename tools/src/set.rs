//! The `set` subcommand

use crate::{select::CommandArgs, utils::check_for_overwrite};
use anyhow::{Context, Result};
use clap::Args;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;
use zseq::{
    byte::{parse_byte, Narrowing},
    codec::{patch_in, Patched},
    command::CommandTable,
    source::SequenceFile,
};

/// Arguments for the `set` subcommand
#[derive(Args)]
#[clap(author, version, about = "Change the value of a command in a sequence file", long_about = None)]
pub struct SetArgs {
    /// The sequence file to patch
    path: PathBuf,

    /// The new value, in decimal or hexadecimal (0x7F, $7F)
    #[clap(allow_hyphen_values = true)]
    value: String,

    #[clap(flatten)]
    command: CommandArgs,

    /// Keep only the lowest byte of values that don't fit in a byte
    #[clap(short, long)]
    truncate: bool,

    /// Write the patched sequence here, leaving the original untouched
    #[clap(short, long)]
    output: Option<PathBuf>,
}

/// Change the value of a command in a sequence file
pub fn set(args: SetArgs) -> Result<()> {
    let narrowing = if args.truncate {
        Narrowing::Truncate
    } else {
        Narrowing::Checked
    };

    // Validate everything before the sequence is touched
    let value = parse_byte(&args.value, narrowing)
        .with_context(|| format!("{} is not a valid value", args.value))?;
    let command = args.command.resolve(&CommandTable::default())?;

    let path = match args.output {
        Some(output) if is_same_file(&args.path, &output)? => output,
        Some(output) => {
            check_for_overwrite(&output)?;
            fs::copy(&args.path, &output).with_context(|| {
                format!(
                    "Could not copy {} to {}",
                    args.path.to_string_lossy(),
                    output.to_string_lossy()
                )
            })?;

            output
        }
        None => args.path,
    };

    let mut source = SequenceFile::new(&path);
    let patched = patch_in(&mut source, command.opcode, value)
        .with_context(|| format!("Could not patch {}", path.to_string_lossy()))?;

    match patched {
        Patched::Written { offset, previous } => {
            info!(offset, "wrote operand");
            println!(
                "{}: {} {:02X} => {:02X}",
                path.to_string_lossy(),
                command,
                previous,
                value
            );
        }
        Patched::NotPresent => println!(
            "{} doesn't contain a {} command, so it was left untouched",
            path.to_string_lossy(),
            command
        ),
    }

    Ok(())
}

/// Do two paths refer to the same file? Copying a file onto itself would empty it.
fn is_same_file(source: &Path, output: &Path) -> Result<bool> {
    if !output.exists() {
        return Ok(false);
    }

    let canonicalize = |path: &Path| {
        fs::canonicalize(path)
            .with_context(|| format!("Could not resolve {}", path.to_string_lossy()))
    };

    Ok(canonicalize(source)? == canonicalize(output)?)
}
