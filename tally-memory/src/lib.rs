//! Memory Slot Extensions for tally

mod commands;

pub use commands::{MemClear, MemShow, Recall, Store};

use tally_core::CalcResult;
use tally_plugin::Session;
use tracing::info;

/// Registration hook invoked by the plugin loader
pub fn register_commands(session: &mut Session) -> CalcResult<()> {
    session.registry.register_command(Store);
    session.registry.register_command(Recall);
    session.registry.register_command(MemClear);
    session.registry.register_command(MemShow);
    info!("memory plugin registered");
    Ok(())
}
