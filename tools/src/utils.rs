use anyhow::{Context, Result};
use std::{io::stdin, path::Path};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// File extensions of event sequences
pub const SEQUENCE_EXTENSIONS: &[&str] = &["zseq", "seq"];

pub fn iter_files<'a, I>(
    paths: I,
    recursive: bool,
    extensions: &'a [&'static str],
) -> impl Iterator<Item = DirEntry> + 'a
where
    I: IntoIterator + 'a,
    <I as IntoIterator>::Item: AsRef<Path>,
{
    paths
        .into_iter()
        .flat_map(move |path| {
            let mut walk_dir = WalkDir::new(path.as_ref()).sort_by_file_name();
            if !recursive {
                walk_dir = walk_dir.max_depth(1);
            }

            walk_dir
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!(%error, "skipping unreadable path");
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file()
                && !is_hidden(entry)
                && extensions
                    .iter()
                    .any(|extension| *extension == entry.path().extension().unwrap_or_default())
        })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Format an operand byte as hexadecimal, or decimal if requested
pub fn format_value(value: u8, decimal: bool) -> String {
    if decimal {
        format!("{value:03}")
    } else {
        format!("{value:02X}")
    }
}

pub fn check_for_overwrite(path: &Path) -> Result<()> {
    if path.exists() {
        loop {
            println!(
                "{} already exists. Do you want to overwrite it? Y/n",
                path.to_string_lossy()
            );

            let mut line = String::new();
            stdin()
                .read_line(&mut line)
                .context("Could not read terminal input")?;

            match line.trim_end() {
                "Y" => break,
                "n" => std::process::exit(0),
                _ => (),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, write};

    #[test]
    fn files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("a.zseq"), [0xDB_u8, 0x40]).unwrap();
        write(dir.path().join("b.seq"), [0xDB_u8, 0x40]).unwrap();
        write(dir.path().join("c.txt"), "categories").unwrap();
        write(dir.path().join(".hidden.zseq"), [0xDB_u8, 0x40]).unwrap();

        create_dir(dir.path().join("nested")).unwrap();
        write(dir.path().join("nested").join("d.zseq"), [0xDB_u8, 0x40]).unwrap();

        let names = |recursive| -> Vec<String> {
            iter_files([dir.path()], recursive, SEQUENCE_EXTENSIONS)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        };

        assert_eq!(names(false), ["a.zseq", "b.seq"]);
        assert_eq!(names(true), ["a.zseq", "b.seq", "d.zseq"]);
    }

    #[test]
    fn single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.zseq");
        write(&path, [0xDB_u8, 0x40]).unwrap();

        let paths: Vec<_> = iter_files([&path], false, SEQUENCE_EXTENSIONS)
            .map(DirEntry::into_path)
            .collect();

        assert_eq!(paths, [path]);
    }

    #[test]
    fn values() {
        assert_eq!(format_value(0x7F, false), "7F");
        assert_eq!(format_value(0x0A, false), "0A");
        assert_eq!(format_value(0x7F, true), "127");
        assert_eq!(format_value(5, true), "005");
    }
}
