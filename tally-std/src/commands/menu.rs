//! MENU and PLUGINS commands

use tally_plugin::prelude::*;

pub struct Menu;
pub struct Plugins;

impl CommandPlugin for Menu {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "menu",
            description: "Show available commands",
            usage: "menu",
        }
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> CalcResult<String> {
        let mut lines = vec![
            "Available commands:".to_string(),
            "------------------".to_string(),
        ];
        for (name, description) in session.registry.list_entries() {
            lines.push(format!("{name}: {description}"));
        }
        lines.push(String::new());
        lines.push("quit: Exit the calculator".to_string());
        Ok(lines.join("\n"))
    }
}

impl CommandPlugin for Plugins {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "plugins",
            description: "List loaded plugins",
            usage: "plugins",
        }
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> CalcResult<String> {
        if session.plugins.is_empty() {
            return Ok("No plugins loaded".to_string());
        }
        let lines: Vec<String> = session
            .plugins
            .iter()
            .map(|p| match &p.error {
                None => format!("{}: loaded", p.name),
                Some(reason) => format!("{}: failed ({reason})", p.name),
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_registry;
    use tally_history::HistoryStore;
    use tally_plugin::PluginStatus;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir) -> Session {
        Session::new(
            standard_registry(),
            HistoryStore::load(dir.path().join("history.csv")),
        )
    }

    #[test]
    fn test_menu_lists_builtins() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let out = session.dispatch("menu").unwrap();
        for name in ["add:", "subtract:", "multiply:", "divide:", "history:", "stats:"] {
            assert!(out.contains(name), "menu missing {name}: {out}");
        }
    }

    #[test]
    fn test_plugins_empty() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        assert_eq!(session.dispatch("plugins").unwrap(), "No plugins loaded");
    }

    #[test]
    fn test_plugins_reports_outcomes() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        session.plugins.push(PluginStatus {
            name: "memory".to_string(),
            error: None,
        });
        session.plugins.push(PluginStatus {
            name: "broken".to_string(),
            error: Some("panicked during registration".to_string()),
        });

        let out = session.dispatch("plugins").unwrap();
        assert!(out.contains("memory: loaded"));
        assert!(out.contains("broken: failed"));
    }
}
