//! HISTORY, STATS and CLEAR commands

use tally_plugin::prelude::*;

pub struct History;
pub struct Stats;
pub struct Clear;

/// Parse the optional `history` limit argument. Non-positive values mean
/// "everything", matching the read contract of the store.
fn parse_limit(args: &[&str]) -> CalcResult<Option<usize>> {
    match args {
        [] => Ok(None),
        [token] => match token.parse::<i64>() {
            Ok(n) if n > 0 => Ok(Some(n as usize)),
            Ok(_) => Ok(None),
            Err(_) => Err(CalcError::InvalidNumberFormat(token.to_string())),
        },
        _ => Err(CalcError::arg_count("history", 1, args.len())),
    }
}

impl CommandPlugin for History {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "history",
            description: "Show past calculations, newest first",
            usage: "history [limit]",
        }
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> CalcResult<String> {
        let limit = parse_limit(args)?;
        let records = session.history.get_history(limit);
        if records.is_empty() {
            return Ok("No calculations yet".to_string());
        }

        let mut lines = Vec::with_capacity(records.len());
        for record in records {
            lines.push(format!(
                "{}  {} {} {} = {}",
                record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.operation,
                format_number(record.x),
                format_number(record.y),
                format_number(record.result),
            ));
        }
        Ok(lines.join("\n"))
    }
}

impl CommandPlugin for Stats {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "stats",
            description: "Show aggregate statistics over the history",
            usage: "stats",
        }
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> CalcResult<String> {
        let stats = session.history.get_statistics();
        serde_json::to_string_pretty(&stats)
            .map_err(|e| CalcError::Persistence(e.to_string()))
    }
}

impl CommandPlugin for Clear {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "clear",
            description: "Clear the calculation history",
            usage: "clear",
        }
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> CalcResult<String> {
        session.history.clear_history()?;
        Ok("History cleared".to_string())
    }
}
