//! The `inspect` subcommand

use crate::utils::{format_value, iter_files, SEQUENCE_EXTENSIONS};
use anyhow::{bail, Context, Result};
use clap::Args;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::debug;
use walkdir::DirEntry;
use zseq::{command::CommandTable, source::SequenceFile};

/// Arguments for the `inspect` subcommand
#[derive(Args)]
#[clap(author, version, about = "Inspect .zseq and .seq files, or even entire directories, for their commands", long_about = None)]
pub struct InspectArgs {
    /// The path(s) to inspect
    path: Vec<PathBuf>,

    /// Search folders recursively
    #[clap(short, long)]
    recursive: bool,
}

/// Inspect .zseq and .seq files, or even entire directories, for their commands
pub fn inspect(args: &InspectArgs) -> Result<()> {
    if let Some(missing) = args.path.iter().find(|path| !path.exists()) {
        bail!("{} does not exist", missing.to_string_lossy());
    }

    let table = CommandTable::default();
    let paths: Vec<_> = iter_files(&args.path, args.recursive, SEQUENCE_EXTENSIONS)
        .map(DirEntry::into_path)
        .collect();

    debug!(count = paths.len(), "found sequence files");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some((last, rest)) = paths.split_last() {
        for path in rest {
            print(&mut out, path, &table)?;
            writeln!(out)?;
        }

        print(&mut out, last, &table)?;
    }

    Ok(())
}

fn print<W>(mut out: W, path: &Path, table: &CommandTable) -> Result<()>
where
    W: Write,
{
    let mut source = SequenceFile::read_only(path);
    let values = table
        .read_all(&mut source)
        .with_context(|| format!("Could not read {}", path.to_string_lossy()))?;

    writeln!(out, "{}", path.to_string_lossy())?;

    for (command, found) in values {
        match found {
            Some(found) => writeln!(
                out,
                "  {:<16} | {} | @{:06X} | {}",
                command.name,
                command.opcode,
                found.offset,
                format_value(found.value, false)
            )?,
            None => writeln!(
                out,
                "  {:<16} | {} | ------- | --",
                command.name, command.opcode
            )?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;

    #[test]
    fn report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.zseq");
        write(&path, [0xD3_u8, 0x20, 0xDB, 0x58, 0xFF]).unwrap();

        let mut out = Vec::new();
        print(&mut out, &path, &CommandTable::default()).unwrap();

        let report = String::from_utf8(out).unwrap();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[1], "  master-volume    | 0xDB | @000003 | 58");
    }

    #[test]
    fn report_missing_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("silence.seq");
        write(&path, [0x01_u8, 0x02, 0x03]).unwrap();

        let mut out = Vec::new();
        print(&mut out, &path, &CommandTable::default()).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.ends_with("  master-volume    | 0xDB | ------- | --\n"));
    }

    #[test]
    fn unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.zseq");

        let mut out = Vec::new();
        assert!(print(&mut out, &path, &CommandTable::default()).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let args = InspectArgs {
            path: vec![dir.path().join("missing.zseq")],
            recursive: false,
        };

        assert!(inspect(&args).is_err());
    }
}
