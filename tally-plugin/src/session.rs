//! REPL session state and command dispatch
//!
//! The session owns the running result, the memory slot, the registry and
//! the history store, and applies the uniform numeric-input policy: split
//! on whitespace, match the operation's arity (the running result fills in
//! as implicit first operand when exactly one token is missing), parse
//! every token as a finite number. Only a fully successful execution
//! commits the result and appends to history.

use crate::OperationPlugin;
use crate::OperationRegistry;
use std::sync::Arc;
use tally_core::{format_number, parse_number, CalcError, CalcResult};
use tally_history::HistoryStore;
use tracing::debug;

/// Outcome of one plugin registration attempt, kept for the `plugins`
/// command
#[derive(Debug, Clone)]
pub struct PluginStatus {
    pub name: String,
    /// `None` when the plugin registered cleanly
    pub error: Option<String>,
}

/// Live REPL state handed to commands and plugin hooks
pub struct Session {
    /// Implicit first operand for one-token invocations
    pub current_result: f64,
    /// Scratch register, touched only by explicit store/recall commands
    pub memory: Option<f64>,
    pub registry: OperationRegistry,
    pub history: HistoryStore,
    pub plugins: Vec<PluginStatus>,
}

impl Session {
    pub fn new(registry: OperationRegistry, history: HistoryStore) -> Self {
        Self {
            current_result: 0.0,
            memory: None,
            registry,
            history,
            plugins: Vec::new(),
        }
    }

    /// Resolve and execute one input line, returning the text to print
    pub fn dispatch(&mut self, line: &str) -> CalcResult<String> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(String::new());
        };
        let name = name.to_lowercase();
        let args: Vec<&str> = parts.collect();
        debug!(command = %name, ?args, "dispatching");

        if let Some(op) = self.registry.get_operation(&name) {
            return self.run_operation(op, &args);
        }
        if let Some(cmd) = self.registry.get_command(&name) {
            return cmd.execute(self, &args);
        }

        Err(match self.registry.suggest(&name) {
            Some(close) => CalcError::UnknownCommand(format!("{name} (did you mean '{close}'?)")),
            None => CalcError::UnknownCommand(name),
        })
    }

    fn run_operation(&mut self, op: Arc<dyn OperationPlugin>, args: &[&str]) -> CalcResult<String> {
        let meta = op.meta();
        let mut operands = Vec::with_capacity(meta.arity);

        if args.len() + 1 == meta.arity {
            operands.push(self.current_result);
        } else if args.len() != meta.arity {
            return Err(CalcError::arg_count(meta.name, meta.arity, args.len()));
        }
        for token in args {
            operands.push(parse_number(token)?);
        }
        // Only the implicit operand can be non-finite at this point; it is
        // rejected before execution so it can never reach the history.
        if let Some(bad) = operands.iter().find(|v| !v.is_finite()) {
            return Err(CalcError::NonFiniteOperand(*bad));
        }

        let result = op.call(&operands)?;
        self.current_result = result;

        let x = operands.first().copied().unwrap_or(0.0);
        let y = operands.get(1).copied().unwrap_or(0.0);
        self.history.add_calculation(meta.name, x, y, result)?;

        Ok(format!("Result: {}", format_number(result)))
    }
}
