//! Tally Standard Library

pub mod commands;
pub mod functions;

use tally_plugin::OperationRegistry;

/// Load built-in operations and commands into a registry
pub fn load_standard_library(registry: OperationRegistry) -> OperationRegistry {
    registry
        .with_operation(functions::Add)
        .with_operation(functions::Subtract)
        .with_operation(functions::Multiply)
        .with_operation(functions::Divide)
        .with_command(commands::History)
        .with_command(commands::Stats)
        .with_command(commands::Clear)
        .with_command(commands::Menu)
        .with_command(commands::Plugins)
}

/// Create a registry with the standard library loaded
pub fn standard_registry() -> OperationRegistry {
    load_standard_library(OperationRegistry::new())
}
