//! Plugin discovery and loading
//!
//! Plugins are trusted, statically linked crates, each exposing a single
//! registration hook that receives the live session. The loader walks its
//! roster in lexicographic name order and contains every per-plugin
//! failure, including panics: one broken plugin never keeps the rest of
//! the calculator from coming up.

use crate::{PluginStatus, Session};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tally_core::CalcResult;
use tracing::{info, warn};

/// A plugin's registration hook
pub type RegisterFn = fn(&mut Session) -> CalcResult<()>;

struct PluginDescriptor {
    name: &'static str,
    register: RegisterFn,
}

/// Roster of plugins to load into a session
pub struct PluginLoader {
    plugins: Vec<PluginDescriptor>,
}

impl PluginLoader {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn with_plugin(mut self, name: &'static str, register: RegisterFn) -> Self {
        self.plugins.push(PluginDescriptor { name, register });
        self
    }

    /// Invoke every registration hook against the session, deterministic
    /// order, failures logged and skipped. Returns the number of plugins
    /// that registered cleanly.
    pub fn load_all(&self, session: &mut Session) -> usize {
        let mut roster: Vec<&PluginDescriptor> = self.plugins.iter().collect();
        roster.sort_by_key(|d| d.name);

        let mut loaded = 0;
        for descriptor in roster {
            let outcome = catch_unwind(AssertUnwindSafe(|| (descriptor.register)(session)));
            let error = match outcome {
                Ok(Ok(())) => {
                    info!(plugin = descriptor.name, "plugin registered");
                    loaded += 1;
                    None
                }
                Ok(Err(e)) => {
                    warn!(plugin = descriptor.name, error = %e, "plugin failed to register, skipping");
                    Some(e.to_string())
                }
                Err(_) => {
                    warn!(plugin = descriptor.name, "plugin panicked during registration, skipping");
                    Some("panicked during registration".to_string())
                }
            };
            session.plugins.push(PluginStatus {
                name: descriptor.name.to_string(),
                error,
            });
        }
        loaded
    }
}

impl Default for PluginLoader {
    fn default() -> Self {
        Self::new()
    }
}
