//! Calculator entry point

mod config;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use tally_history::HistoryStore;
use tally_plugin::{PluginLoader, Session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn plugin_roster() -> PluginLoader {
    PluginLoader::new()
        .with_plugin("memory", tally_memory::register_commands)
        .with_plugin("scientific", tally_scientific::register_commands)
}

/// Standard library plus every plugin, wired to the given history file
fn build_session(history_path: PathBuf) -> Session {
    let registry = tally_std::standard_registry();
    let history = HistoryStore::load(history_path);
    let mut session = Session::new(registry, history);

    let loaded = plugin_roster().load_all(&mut session);
    info!(loaded, total = session.plugins.len(), "plugins loaded");
    session
}

fn run() -> rustyline::Result<()> {
    let mut session = build_session(config::history_file());
    repl::Repl::new()?.run(&mut session)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "calculator terminated abnormally");
            eprintln!("An unexpected error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir) -> Session {
        build_session(dir.path().join("history.csv"))
    }

    #[test]
    fn test_full_session_wiring() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        // Built-ins and both plugins answer.
        assert_eq!(session.dispatch("add 2 3").unwrap(), "Result: 5");
        assert_eq!(session.dispatch("pow 2 3").unwrap(), "Result: 8");
        assert_eq!(session.dispatch("store").unwrap(), "Stored 8");

        let out = session.dispatch("plugins").unwrap();
        assert!(out.contains("memory: loaded"));
        assert!(out.contains("scientific: loaded"));
    }

    #[test]
    fn test_chained_running_result() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        session.dispatch("add 2 3").unwrap();
        session.dispatch("multiply 4").unwrap();
        let expected = format!("Result: {}", 20.0_f64.sqrt());
        assert_eq!(session.dispatch("sqrt").unwrap(), expected);
        assert_eq!(session.history.len(), 3);
    }

    #[test]
    fn test_history_survives_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");

        {
            let mut session = build_session(path.clone());
            session.dispatch("add 2 3").unwrap();
        }

        let mut session = build_session(path);
        let out = session.dispatch("history").unwrap();
        assert!(out.contains("add 2 3 = 5"));
    }

    #[test]
    fn test_broken_plugin_leaves_builtins_usable() {
        fn register_broken(_session: &mut Session) -> tally_plugin::prelude::CalcResult<()> {
            panic!("bad plugin");
        }

        let dir = TempDir::new().unwrap();
        let history = HistoryStore::load(dir.path().join("history.csv"));
        let mut session = Session::new(tally_std::standard_registry(), history);

        plugin_roster()
            .with_plugin("broken", register_broken)
            .load_all(&mut session);

        // Built-ins and the surviving plugins still answer.
        assert_eq!(session.dispatch("add 2 3").unwrap(), "Result: 5");
        assert_eq!(session.dispatch("sqrt 16").unwrap(), "Result: 4");
        let out = session.dispatch("plugins").unwrap();
        assert!(out.contains("broken: failed"));
        assert!(out.contains("scientific: loaded"));
    }

    #[test]
    fn test_domain_errors_keep_session_alive() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        assert!(session.dispatch("divide 1 0").is_err());
        assert!(session.dispatch("sqrt -1").is_err());
        assert!(session.dispatch("pow -2 0.5").is_err());
        assert!(session.dispatch("frobnicate").is_err());

        // The session still works and nothing was recorded.
        assert_eq!(session.dispatch("add 1 1").unwrap(), "Result: 2");
        assert_eq!(session.history.len(), 1);
    }
}
