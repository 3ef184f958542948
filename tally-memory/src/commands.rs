//! Memory slot commands
//!
//! The slot is a scratch register separate from the running result:
//! nothing here assigns to `current_result`, and no arithmetic command
//! touches the slot.

use tally_plugin::prelude::*;
use tracing::info;

pub struct Store;
pub struct Recall;
pub struct MemClear;
pub struct MemShow;

impl CommandPlugin for Store {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "store",
            description: "Store a value (default: the current result) in memory",
            usage: "store [value]",
        }
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> CalcResult<String> {
        let value = match args {
            [] => session.current_result,
            [token] => parse_number(token)?,
            _ => return Err(CalcError::arg_count("store", 1, args.len())),
        };
        session.memory = Some(value);
        info!(value, "stored value in memory");
        Ok(format!("Stored {}", format_number(value)))
    }
}

impl CommandPlugin for Recall {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "recall",
            description: "Recall the value stored in memory",
            usage: "recall",
        }
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> CalcResult<String> {
        match session.memory {
            Some(value) => Ok(format!("Memory: {}", format_number(value))),
            None => Ok("Memory is empty".to_string()),
        }
    }
}

impl CommandPlugin for MemClear {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "memclear",
            description: "Clear the memory slot",
            usage: "memclear",
        }
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> CalcResult<String> {
        session.memory = None;
        info!("memory cleared");
        Ok("Memory cleared".to_string())
    }
}

impl CommandPlugin for MemShow {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "memory",
            description: "Show the memory slot",
            usage: "memory",
        }
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> CalcResult<String> {
        match session.memory {
            Some(value) => Ok(format!("Memory: {}", format_number(value))),
            None => Ok("No value in memory".to_string()),
        }
    }
}
