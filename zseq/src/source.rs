//! Fresh views on sequence data
//!
//! Some storage can't hand out a shared, rewindable cursor. Entries in a zip archive are the
//! typical example: every time you want to look at one, you open it again. The codec's
//! [`find_in`](crate::codec::find_in) and [`patch_in`](crate::codec::patch_in) therefore take a
//! [`StreamSource`], and open a new view for every pass they make over the data.

use std::{
    fs::{File, OpenOptions},
    io,
    path::{Path, PathBuf},
};
use tracing::trace;

/// Something that can open a fresh view on the same sequence bytes, as often as needed
///
/// Any closure returning an [`io::Result`] of a stream is a source:
///
/// ```
/// # use zseq::{codec::find_in, command::Opcode};
/// # use std::io::Cursor;
/// let bytes = vec![0x01, 0xDB, 0x40, 0x02];
/// let mut source = || -> std::io::Result<_> { Ok(Cursor::new(bytes.as_slice())) };
///
/// let volume = find_in(&mut source, Opcode::MASTER_VOLUME)?;
/// assert_eq!(volume.map(|found| found.value), Some(0x40));
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait StreamSource {
    /// The view that is returned by [`open()`](Self::open)
    type Stream;

    /// Open a new view, positioned at the start of the sequence
    fn open(&mut self) -> io::Result<Self::Stream>;
}

impl<F, S> StreamSource for F
where
    F: FnMut() -> io::Result<S>,
{
    type Stream = S;

    fn open(&mut self) -> io::Result<S> {
        self()
    }
}

/// A sequence file (`.zseq`/`.seq`) on disk
///
/// Every call to [`open()`](StreamSource::open) opens a new file handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceFile {
    path: PathBuf,
    writable: bool,
}

impl SequenceFile {
    /// A source that opens the file for reading and writing, so it can be patched
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            writable: true,
        }
    }

    /// A source that only ever opens the file for reading
    pub fn read_only<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            writable: false,
        }
    }

    /// The path this source opens
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Does this source open handles that can be written to?
    pub fn is_writable(&self) -> bool {
        self.writable
    }
}

impl StreamSource for SequenceFile {
    type Stream = File;

    fn open(&mut self) -> io::Result<File> {
        trace!(path = %self.path.display(), writable = self.writable, "opening sequence file");

        OpenOptions::new()
            .read(true)
            .write(self.writable)
            .open(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn closure() {
        let mut opened = 0;
        let mut source = || -> io::Result<_> {
            opened += 1;
            Ok(io::Cursor::new([1, 2, 3]))
        };

        assert_eq!(source.open().unwrap().into_inner(), [1, 2, 3]);
        assert_eq!(source.open().unwrap().into_inner(), [1, 2, 3]);
        assert_eq!(opened, 2);
    }

    #[test]
    fn file_views_are_fresh() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xDB, 0x40]).unwrap();

        let mut source = SequenceFile::new(file.path());
        assert!(source.is_writable());

        let mut first = [0; 1];
        source.open().unwrap().read_exact(&mut first).unwrap();

        let mut second = Vec::new();
        source.open().unwrap().read_to_end(&mut second).unwrap();

        assert_eq!(first, [0xDB]);
        assert_eq!(second, [0xDB, 0x40]);
    }

    #[test]
    fn read_only() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let mut source = SequenceFile::read_only(file.path());
        assert!(!source.is_writable());
        assert_eq!(source.path(), file.path());

        let mut stream = source.open().unwrap();
        assert!(stream.write_all(&[0]).is_err());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = SequenceFile::new(dir.path().join("missing.zseq"));

        assert_eq!(
            source.open().unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
