//! Sequence commands and the table of known commands

use crate::{
    byte::{ByteRangeError, Narrowing, narrow},
    codec::{self, Match},
    source::StreamSource,
};
use std::{fmt, io};
use thiserror::Error;

/// The byte that identifies a command within a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opcode(u8);

impl Opcode {
    /// Sets the master volume of a sequence. Its operand is the volume level.
    pub const MASTER_VOLUME: Self = Self(0xDB);

    /// Create an opcode from its byte value
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The byte value of this opcode
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Opcode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Opcode {
    type Error = ByteRangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        narrow(value, Narrowing::Checked).map(Self)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// A named command with a single byte operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Name used to refer to the command, e.g. on the command-line
    pub name: &'static str,

    /// The opcode that marks the command in a sequence
    pub opcode: Opcode,

    /// What the operand means
    pub description: &'static str,
}

impl Command {
    /// Set the master volume (0-255, usually shown in hexadecimal)
    pub const MASTER_VOLUME: Self = Self {
        name: "master-volume",
        opcode: Opcode::MASTER_VOLUME,
        description: "Master volume level",
    };

    /// The commands every [`CommandTable`] starts out with
    pub const BUILTIN: &'static [Self] = &[Self::MASTER_VOLUME];
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.opcode)
    }
}

/// An ordered set of commands, looked up by name or opcode
///
/// The default table contains the [built-in](Command::BUILTIN) commands, and callers can
/// [insert](CommandTable::insert) their own.
///
/// ```
/// # use zseq::command::{Command, CommandTable, Opcode};
/// let mut table = CommandTable::default();
/// table.insert(Command {
///     name: "tempo",
///     opcode: Opcode::new(0xDD),
///     description: "Tempo in beats per minute",
/// });
///
/// assert_eq!(table.by_name("master-volume")?.opcode, Opcode::MASTER_VOLUME);
/// assert_eq!(table.by_opcode(Opcode::new(0xDD)).map(|command| command.name), Some("tempo"));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    /// A table without any commands in it
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the table
    ///
    /// A command with the same name is replaced, keeping its position in the table.
    pub fn insert(&mut self, command: Command) {
        match self.commands.iter_mut().find(|c| c.name == command.name) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    /// Look up a command by its name
    pub fn by_name(&self, name: &str) -> Result<&Command, UnknownCommandError> {
        self.commands
            .iter()
            .find(|command| command.name == name)
            .ok_or_else(|| UnknownCommandError {
                name: name.to_owned(),
            })
    }

    /// Look up the first command in the table with a given opcode
    pub fn by_opcode(&self, opcode: Opcode) -> Option<&Command> {
        self.commands.iter().find(|command| command.opcode == opcode)
    }

    /// Iterate over the commands in the table
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// The number of commands in the table
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Does the table contain any commands?
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Look up every command of the table in a sequence
    ///
    /// Every command gets its own view from `source`, so this can be used with storage that
    /// can't be rewound. Commands that aren't present are paired with `None`.
    pub fn read_all<S>(&self, source: &mut S) -> io::Result<Vec<(Command, Option<Match>)>>
    where
        S: StreamSource,
        S::Stream: io::Read,
    {
        self.commands
            .iter()
            .map(|command| {
                let found = codec::find_in(source, command.opcode)?;
                Ok((*command, found))
            })
            .collect()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            commands: Command::BUILTIN.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a CommandTable {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// A command name that isn't in the [`CommandTable`]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command \"{name}\"")]
pub struct UnknownCommandError {
    pub name: String,
}
