//! Scientific Extensions for tally
//!
//! Provides:
//! - `pow` with real-domain failure cases and overflow saturation
//! - `sqrt` with negative-radicand rejection

mod functions;

pub use functions::{power, sqrt_of, Pow, Sqrt};

use tally_core::CalcResult;
use tally_plugin::Session;
use tracing::info;

/// Registration hook invoked by the plugin loader
pub fn register_commands(session: &mut Session) -> CalcResult<()> {
    session.registry.register_operation(Pow);
    session.registry.register_operation(Sqrt);
    info!("scientific plugin registered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_history::HistoryStore;
    use tally_plugin::OperationRegistry;
    use tempfile::TempDir;

    #[test]
    fn test_register_commands_adds_operations() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(
            OperationRegistry::new(),
            HistoryStore::load(dir.path().join("history.csv")),
        );

        register_commands(&mut session).unwrap();
        assert!(session.registry.contains("pow"));
        assert!(session.registry.contains("sqrt"));

        assert_eq!(session.dispatch("pow 2 3").unwrap(), "Result: 8");
        assert_eq!(session.dispatch("sqrt 16").unwrap(), "Result: 4");
    }

    #[test]
    fn test_sqrt_of_current_result() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(
            OperationRegistry::new(),
            HistoryStore::load(dir.path().join("history.csv")),
        );
        register_commands(&mut session).unwrap();

        session.current_result = 81.0;
        assert_eq!(session.dispatch("sqrt").unwrap(), "Result: 9");
    }
}
