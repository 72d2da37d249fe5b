//! Reading and patching commands in Zelda 64 sequence files
//!
//! Music packs for the Zelda 64 randomizers (`.mmrs`/`.ootrs`) carry their music as an
//! event sequence (`.zseq`/`.seq`). A few settings of such a song, like its master volume,
//! are stored as a single command byte followed by a one byte operand somewhere in that
//! sequence. This crate finds those commands and rewrites their operand in place.
//!
//! ```
//! # use zseq::{codec::{find_in_slice, patch_slice, Patched}, command::Opcode};
//! let mut sequence = [0x01, 0xDB, 0x40, 0x02];
//!
//! let volume = find_in_slice(&sequence, Opcode::MASTER_VOLUME).unwrap();
//! assert_eq!((volume.offset, volume.value), (2, 0x40));
//!
//! patch_slice(&mut sequence, Opcode::MASTER_VOLUME, 0x7F);
//! assert_eq!(sequence, [0x01, 0xDB, 0x7F, 0x02]);
//! ```
//!
//! This crate does not open `.mmrs`/`.ootrs` containers themselves. Hand it the sequence
//! bytes, a stream over them, or a [`StreamSource`](source::StreamSource) that can reopen
//! the archive entry every time the codec asks for a fresh view.

pub mod byte;
pub mod codec;
pub mod command;
pub mod source;

pub use codec::{Match, Patched};
pub use command::{Command, CommandTable, Opcode};
