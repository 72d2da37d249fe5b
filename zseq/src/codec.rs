//! Finding and patching single-byte commands in a sequence
//!
//! A command in this sense is an [`Opcode`] byte directly followed by a one byte operand.
//! Only the _first_ occurrence of an opcode counts: scanning stops as soon as it has been
//! found. Sequences aren't parsed, so an opcode value that appears earlier as part of some
//! other command's data would be picked up instead. Sequences with several instances of the
//! same command (in loops or conditional blocks) only ever have their first one reported.

use crate::{command::Opcode, source::StreamSource};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use tracing::debug;

/// A command that was found in a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Position of the operand byte within the sequence (one past the opcode)
    pub offset: u64,

    /// The operand byte
    pub value: u8,
}

/// The result of a patch
///
/// See [`patch`] for more information on when each is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patched {
    /// The operand at `offset` has been overwritten. It used to be `previous`.
    Written { offset: u64, previous: u8 },

    /// The sequence doesn't contain the command and has been left untouched
    NotPresent,
}

impl Patched {
    /// Was a byte written?
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Find the first occurrence of a command in a sequence
///
/// Bytes are read from `reader` one by one until one equals `opcode`, after which the byte
/// right after it is returned as the operand. Running out of bytes, either before the
/// opcode shows up or right after it, returns `Ok(None)`. Nothing past the operand is read,
/// so wrap unbuffered readers in a [`BufReader`](std::io::BufReader) yourself if needed.
///
/// ```
/// # use zseq::{codec::find, command::Opcode};
/// # use std::io::Cursor;
/// let found = find(Cursor::new([0x01, 0xDB, 0x40, 0x02]), Opcode::MASTER_VOLUME)?;
/// assert_eq!(found.map(|found| (found.offset, found.value)), Some((2, 0x40)));
///
/// let found = find(Cursor::new([0x01, 0x02, 0x03]), Opcode::MASTER_VOLUME)?;
/// assert_eq!(found, None);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn find<R>(reader: R, opcode: Opcode) -> io::Result<Option<Match>>
where
    R: Read,
{
    let mut bytes = reader.bytes();
    let mut offset = 0;

    while let Some(byte) = bytes.next() {
        offset += 1;

        if byte? == opcode.value() {
            let found = match bytes.next() {
                Some(value) => Some(Match {
                    offset,
                    value: value?,
                }),
                None => None,
            };

            debug!(%opcode, ?found, "scanned sequence");
            return Ok(found);
        }
    }

    debug!(%opcode, length = offset, "opcode not present in sequence");
    Ok(None)
}

/// Find the first occurrence of a command in an in-memory sequence
pub fn find_in_slice(bytes: &[u8], opcode: Opcode) -> Option<Match> {
    let position = bytes.iter().position(|byte| *byte == opcode.value())?;
    let offset = position + 1;

    bytes.get(offset).map(|value| Match {
        offset: offset as u64,
        value: *value,
    })
}

/// Find the first occurrence of a command, using a fresh view from a [`StreamSource`]
pub fn find_in<S>(source: &mut S, opcode: Opcode) -> io::Result<Option<Match>>
where
    S: StreamSource,
    S::Stream: Read,
{
    // The view is dropped afterwards, so reading ahead is harmless
    find(BufReader::new(source.open()?), opcode)
}

/// Overwrite the operand of the first occurrence of a command
///
/// The stream is rewound and scanned with [`find`]. If the command was found, its operand
/// byte is replaced by `value`. Nothing else in the stream changes, including its length.
/// If the sequence doesn't contain the command, nothing is written and
/// [`Patched::NotPresent`] is returned.
///
/// ```
/// # use zseq::{codec::{patch, Patched}, command::Opcode};
/// # use std::io::Cursor;
/// let mut sequence = Cursor::new(vec![0x01, 0xDB, 0x40, 0x02]);
///
/// let patched = patch(&mut sequence, Opcode::MASTER_VOLUME, 0x7F)?;
/// assert_eq!(patched, Patched::Written { offset: 2, previous: 0x40 });
/// assert_eq!(sequence.into_inner(), [0x01, 0xDB, 0x7F, 0x02]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn patch<S>(mut stream: S, opcode: Opcode, value: u8) -> io::Result<Patched>
where
    S: Read + Write + Seek,
{
    stream.seek(SeekFrom::Start(0))?;

    match find(&mut stream, opcode)? {
        Some(found) => write_operand(stream, opcode, found, value),
        None => Ok(not_present(opcode)),
    }
}

/// Overwrite the operand of the first occurrence of a command in an in-memory sequence
pub fn patch_slice(bytes: &mut [u8], opcode: Opcode, value: u8) -> Patched {
    match find_in_slice(bytes, opcode) {
        Some(Match {
            offset,
            value: previous,
        }) => {
            bytes[offset as usize] = value;
            Patched::Written { offset, previous }
        }
        None => Patched::NotPresent,
    }
}

/// Overwrite the operand of the first occurrence of a command, through a [`StreamSource`]
///
/// The scan and the write each get their own view from `source`. This is the variant to
/// use for storage that can be reopened, but not rewound (like an entry in a zip archive).
pub fn patch_in<S>(source: &mut S, opcode: Opcode, value: u8) -> io::Result<Patched>
where
    S: StreamSource,
    S::Stream: Read + Write + Seek,
{
    match find_in(source, opcode)? {
        Some(found) => write_operand(source.open()?, opcode, found, value),
        None => Ok(not_present(opcode)),
    }
}

fn write_operand<W>(mut writer: W, opcode: Opcode, found: Match, value: u8) -> io::Result<Patched>
where
    W: Write + Seek,
{
    let Match {
        offset,
        value: previous,
    } = found;

    writer.seek(SeekFrom::Start(offset))?;
    writer.write_all(&[value])?;
    writer.flush()?;

    debug!(%opcode, offset, previous, value, "patched sequence");
    Ok(Patched::Written { offset, previous })
}

fn not_present(opcode: Opcode) -> Patched {
    debug!(%opcode, "opcode not present, leaving sequence untouched");
    Patched::NotPresent
}
