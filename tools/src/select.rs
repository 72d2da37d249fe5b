//! Picking the command a subcommand operates on

use anyhow::{Context, Result};
use clap::Args;
use zseq::{
    byte::{parse_byte, Narrowing},
    command::{Command, CommandTable, Opcode},
};

/// Arguments for choosing a command, either by name or by raw opcode
#[derive(Args, Debug, Default)]
pub struct CommandArgs {
    /// Name of the command to look for [default: master-volume]
    #[clap(short, long, conflicts_with = "opcode")]
    command: Option<String>,

    /// Raw opcode to look for instead of a named command (e.g. 0xDB)
    #[clap(long)]
    opcode: Option<String>,
}

impl CommandArgs {
    /// Resolve the arguments against a command table
    ///
    /// Opcodes that aren't in the table still resolve, to a command without a proper name.
    pub fn resolve(&self, table: &CommandTable) -> Result<Command> {
        if let Some(opcode) = &self.opcode {
            let opcode = parse_byte(opcode, Narrowing::Checked)
                .map(Opcode::new)
                .with_context(|| format!("{opcode} is not a valid opcode"))?;

            return Ok(table.by_opcode(opcode).copied().unwrap_or(Command {
                name: "command",
                opcode,
                description: "Unnamed command",
            }));
        }

        let name = self
            .command
            .as_deref()
            .unwrap_or(Command::MASTER_VOLUME.name);

        Ok(*table.by_name(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let command = CommandArgs::default()
            .resolve(&CommandTable::default())
            .unwrap();

        assert_eq!(command, Command::MASTER_VOLUME);
    }

    #[test]
    fn by_name() {
        let args = CommandArgs {
            command: Some("master-volume".to_owned()),
            opcode: None,
        };
        assert_eq!(
            args.resolve(&CommandTable::default()).unwrap(),
            Command::MASTER_VOLUME
        );

        let args = CommandArgs {
            command: Some("tempo".to_owned()),
            opcode: None,
        };
        assert!(args.resolve(&CommandTable::default()).is_err());
    }

    #[test]
    fn by_opcode() {
        let args = CommandArgs {
            command: None,
            opcode: Some("0xDB".to_owned()),
        };
        assert_eq!(
            args.resolve(&CommandTable::default()).unwrap(),
            Command::MASTER_VOLUME
        );

        let args = CommandArgs {
            command: None,
            opcode: Some("$DD".to_owned()),
        };
        assert_eq!(
            args.resolve(&CommandTable::default()).unwrap().opcode,
            Opcode::new(0xDD)
        );

        let args = CommandArgs {
            command: None,
            opcode: Some("0x1DB".to_owned()),
        };
        assert!(args.resolve(&CommandTable::default()).is_err());
    }
}
