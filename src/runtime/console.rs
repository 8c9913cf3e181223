/*!
 * Console Commands
 * Line-oriented command grammar for the interactive binary
 */

use crate::SimulationError;
use serde::Serialize;

/// Parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `submit <name> <arrival> <burst>` or `submit-run ...`
    Submit {
        name: String,
        arrival: String,
        burst: String,
        run: bool,
    },
    Run,
    Pause,
    Block,
    Status,
    Table,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  submit <name> <arrival> <burst>      queue a process (pauses execution)
  submit-run <name> <arrival> <burst>  queue a process and run
  run                                  start or resume execution
  pause                                stop execution ticks
  block                                move the eligible process to the blocked queue
  status                               print statistics as JSON
  table                                print finalized rows as JSON lines
  help                                 show this text
  quit                                 stop the simulation";

impl ConsoleCommand {
    /// Parse one line; blank lines yield `Ok(None)`
    ///
    /// Numeric fields are kept raw so validation errors come from the
    /// submission boundary.
    pub fn parse(line: &str) -> Result<Option<Self>, SimulationError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };

        let command = match verb.to_lowercase().as_str() {
            "submit" | "submit-run" => {
                let args: Vec<&str> = parts.collect();
                let [name, arrival, burst] = args.as_slice() else {
                    return Err(SimulationError::InvalidCommand(format!(
                        "{} expects <name> <arrival> <burst>",
                        verb
                    )));
                };
                Self::Submit {
                    name: name.to_string(),
                    arrival: arrival.to_string(),
                    burst: burst.to_string(),
                    run: verb.eq_ignore_ascii_case("submit-run"),
                }
            }
            "run" => Self::Run,
            "pause" => Self::Pause,
            "block" => Self::Block,
            "status" => Self::Status,
            "table" => Self::Table,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(SimulationError::InvalidCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Render one value as a single JSON line for console output
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, SimulationError> {
    serde_json::to_string(value).map_err(|e| SimulationError::Serialization(e.to_string()))
}
