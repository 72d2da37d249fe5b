//! # zseq Tools
//!
//! Custom music for the Zelda 64 randomizers is distributed as `.mmrs`/`.ootrs` packs, which
//! carry the song itself as a `.zseq`/`.seq` event sequence. Some of a song's settings, like
//! its master volume, live inside that sequence as a command byte followed by a value. This
//! crate provides a command-line utility for reading and changing those values on extracted
//! sequence files.
//!
//! ## Inspect
//!
//! ```console
//! zseq-tools-inspect 0.1.0
//! Inspect .zseq and .seq files, or even entire directories, for their commands
//!
//! USAGE:
//!     zseq-tools inspect [OPTIONS] [PATH]...
//!
//! ARGS:
//!     <PATH>...    The path(s) to inspect
//!
//! OPTIONS:
//!     -h, --help         Print help information
//!     -r, --recursive    Search folders recursively
//!     -V, --version      Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! $ zseq-tools inspect -r music/
//! music/clocktown.zseq
//!   master-volume    | 0xDB | @000003 | 58
//!
//! music/silence.seq
//!   master-volume    | 0xDB | ------- | --
//! ```
//!
//! ## Get
//!
//! ```console
//! zseq-tools-get 0.1.0
//! Print the value of a command in a sequence file
//!
//! USAGE:
//!     zseq-tools get [OPTIONS] <PATH>
//!
//! ARGS:
//!     <PATH>    The sequence file to read
//!
//! OPTIONS:
//!     -c, --command <COMMAND>    Name of the command to look for [default: master-volume]
//!     -d, --decimal              Print the value in decimal, instead of hexadecimal
//!     -h, --help                 Print help information
//!         --opcode <OPCODE>      Raw opcode to look for instead of a named command (e.g. 0xDB)
//!     -V, --version              Print version information
//! ```
//!
//! ## Set
//!
//! ```console
//! zseq-tools-set 0.1.0
//! Change the value of a command in a sequence file
//!
//! USAGE:
//!     zseq-tools set [OPTIONS] <PATH> <VALUE>
//!
//! ARGS:
//!     <PATH>     The sequence file to patch
//!     <VALUE>    The new value, in decimal or hexadecimal (0x7F, $7F)
//!
//! OPTIONS:
//!     -c, --command <COMMAND>    Name of the command to look for [default: master-volume]
//!     -h, --help                 Print help information
//!     -o, --output <OUTPUT>      Write the patched sequence here, leaving the original untouched
//!         --opcode <OPCODE>      Raw opcode to look for instead of a named command (e.g. 0xDB)
//!     -t, --truncate             Keep only the lowest byte of values that don't fit in a byte
//!     -V, --version              Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! $ zseq-tools set clocktown.zseq 0x7F
//! clocktown.zseq: master-volume (0xDB) 58 => 7F
//! ```
//!
//! Set `RUST_LOG=debug` to see what the tools are doing.

pub mod get;
pub mod inspect;
pub mod select;
pub mod set;
pub(crate) mod utils;
