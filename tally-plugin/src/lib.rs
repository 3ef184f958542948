//! Tally Plugin System
//!
//! Provides the calculator's extension seam:
//! - Operations (pure, fixed-arity numeric executors)
//! - Commands (side effects against the live session)
//! - The registry, session state and plugin loader

mod loader;
mod registry;
mod session;
mod traits;

pub use loader::{PluginLoader, RegisterFn};
pub use registry::OperationRegistry;
pub use session::{PluginStatus, Session};
pub use traits::{CommandMeta, CommandPlugin, OperationMeta, OperationPlugin};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        CommandMeta, CommandPlugin, OperationMeta, OperationPlugin, OperationRegistry,
        PluginLoader, Session,
    };
    pub use tally_core::prelude::*;
}
