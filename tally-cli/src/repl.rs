//! The read-eval-print loop
//!
//! One line at a time: read, trim, dispatch, print. Domain errors are
//! printed and the loop continues; only `quit`/`exit`, Ctrl-C or Ctrl-D
//! end it.

use crate::config;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tally_plugin::Session;
use tracing::info;

pub struct Repl {
    editor: DefaultEditor,
}

impl Repl {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    pub fn run(&mut self, session: &mut Session) -> rustyline::Result<()> {
        info!("starting calculator repl");
        println!("Welcome to the tally calculator!");
        if let Ok(menu) = session.dispatch("menu") {
            println!("{menu}");
        }
        println!();

        let line_history = config::line_history_file();
        let _ = self.editor.load_history(&line_history);

        loop {
            match self.editor.readline("calc> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    if is_exit_command(line) {
                        break;
                    }

                    match session.dispatch(line) {
                        Ok(output) => {
                            if !output.is_empty() {
                                println!("{output}");
                            }
                        }
                        Err(e) => println!("Error: {e}"),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        let _ = self.editor.save_history(&line_history);
        println!("Goodbye!");
        info!("calculator repl exited normally");
        Ok(())
    }
}

fn is_exit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("quit"));
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("QUIT"));
        assert!(!is_exit_command("quite"));
        assert!(!is_exit_command("add 1 2"));
    }
}
