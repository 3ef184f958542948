//! Operation Registry

use crate::{CommandPlugin, OperationPlugin};
use std::collections::HashMap;
use std::sync::Arc;

/// Central registry mapping command names to executable entries.
///
/// Names are unique and case-normalized to lower-case; registering an
/// existing name overwrites the previous entry. Built once at startup via
/// the `with_*` builders and extended afterwards by plugin hooks through
/// the `register_*` methods.
pub struct OperationRegistry {
    operations: HashMap<String, Arc<dyn OperationPlugin>>,
    commands: HashMap<String, Arc<dyn CommandPlugin>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
            commands: HashMap::new(),
        }
    }

    pub fn with_operation<O: OperationPlugin + 'static>(mut self, op: O) -> Self {
        self.register_operation(op);
        self
    }

    pub fn with_command<C: CommandPlugin + 'static>(mut self, cmd: C) -> Self {
        self.register_command(cmd);
        self
    }

    pub fn register_operation<O: OperationPlugin + 'static>(&mut self, op: O) {
        let name = op.meta().name.to_lowercase();
        self.operations.insert(name, Arc::new(op));
    }

    pub fn register_command<C: CommandPlugin + 'static>(&mut self, cmd: C) {
        let name = cmd.meta().name.to_lowercase();
        self.commands.insert(name, Arc::new(cmd));
    }

    /// Case-normalized lookup. Returns a cloned handle so callers can
    /// invoke the entry while holding the session mutably.
    pub fn get_operation(&self, name: &str) -> Option<Arc<dyn OperationPlugin>> {
        self.operations.get(&name.to_lowercase()).cloned()
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<dyn CommandPlugin>> {
        self.commands.get(&name.to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.operations.contains_key(&name) || self.commands.contains_key(&name)
    }

    /// `(name, description)` pairs over operations and commands, ordered
    /// by name. Used to render the menu.
    pub fn list_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .operations
            .values()
            .map(|op| {
                let meta = op.meta();
                (meta.name.to_lowercase(), format!("{} (Usage: {})", meta.description, meta.usage))
            })
            .chain(self.commands.values().map(|cmd| {
                let meta = cmd.meta();
                (meta.name.to_lowercase(), format!("{} (Usage: {})", meta.description, meta.usage))
            }))
            .collect();
        entries.sort();
        entries
    }

    /// Find the registered name closest to `name`, for unknown-command
    /// suggestions
    pub fn suggest(&self, name: &str) -> Option<String> {
        let query = name.to_lowercase();
        self.operations
            .keys()
            .chain(self.commands.keys())
            .map(|candidate| (candidate, Self::similarity(&query, candidate)))
            .filter(|(_, score)| *score > 0)
            .max_by_key(|(candidate, score)| (*score, std::cmp::Reverse(candidate.len())))
            .map(|(candidate, _)| candidate.clone())
    }

    fn similarity(query: &str, candidate: &str) -> usize {
        if candidate.starts_with(query) || query.starts_with(candidate) {
            100
        } else if candidate.contains(query) || query.contains(candidate) {
            50
        } else {
            0
        }
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OperationMeta, Session};
    use tally_core::CalcResult;

    struct Doubler;

    impl OperationPlugin for Doubler {
        fn meta(&self) -> OperationMeta {
            OperationMeta {
                name: "double",
                arity: 1,
                description: "Double a number",
                usage: "double x",
                examples: &["double 4"],
            }
        }

        fn call(&self, operands: &[f64]) -> CalcResult<f64> {
            Ok(operands[0] * 2.0)
        }
    }

    struct Halver;

    impl OperationPlugin for Halver {
        fn meta(&self) -> OperationMeta {
            OperationMeta {
                name: "double",
                arity: 1,
                description: "Halve a number",
                usage: "double x",
                examples: &[],
            }
        }

        fn call(&self, operands: &[f64]) -> CalcResult<f64> {
            Ok(operands[0] / 2.0)
        }
    }

    struct Noop;

    impl crate::CommandPlugin for Noop {
        fn meta(&self) -> crate::CommandMeta {
            crate::CommandMeta {
                name: "noop",
                description: "Do nothing",
                usage: "noop",
            }
        }

        fn execute(&self, _session: &mut Session, _args: &[&str]) -> CalcResult<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = OperationRegistry::new().with_operation(Doubler);
        assert!(registry.get_operation("DOUBLE").is_some());
        assert!(registry.contains("Double"));
    }

    #[test]
    fn test_reregistration_overwrites() {
        let registry = OperationRegistry::new()
            .with_operation(Doubler)
            .with_operation(Halver);
        let op = registry.get_operation("double").unwrap();
        assert_eq!(op.call(&[8.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_list_entries_sorted() {
        let registry = OperationRegistry::new()
            .with_operation(Doubler)
            .with_command(Noop);
        let names: Vec<String> = registry
            .list_entries()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["double", "noop"]);
    }

    #[test]
    fn test_suggest_close_name() {
        let registry = OperationRegistry::new().with_operation(Doubler);
        assert_eq!(registry.suggest("dou").as_deref(), Some("double"));
        assert_eq!(registry.suggest("zzz"), None);
    }
}
