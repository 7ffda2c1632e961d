//! REPL command handler
//!
//! Dispatches the calculator commands (angle mode, memory slot, history,
//! help) ahead of expression evaluation.

use super::{format_result, Session};
use crate::core::AngleMode;

/// Command result
#[derive(Debug)]
pub enum CommandResult {
    /// Exit the REPL
    Exit,
    /// Continue to next input
    Continue,
    /// Output a message
    Output(String),
    /// Re-evaluate a recalled history entry
    Recall(String),
}

/// Command handler for the REPL
pub struct CommandHandler<'a> {
    session: &'a mut Session,
}

impl<'a> CommandHandler<'a> {
    /// Create a new command handler
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Handle a line; `None` means it is an expression, not a command.
    pub fn handle(&mut self, line: &str) -> Option<CommandResult> {
        let lower = line.to_ascii_lowercase();

        match lower.as_str() {
            "exit" | "quit" => return Some(CommandResult::Exit),
            "help" => return Some(CommandResult::Output(help_text())),
            "mode rad" => {
                self.session.ctx.angle_mode = AngleMode::Radians;
                return Some(CommandResult::Output(
                    "Angle mode set to RADIANS".to_string(),
                ));
            }
            "mode deg" => {
                self.session.ctx.angle_mode = AngleMode::Degrees;
                return Some(CommandResult::Output(
                    "Angle mode set to DEGREES".to_string(),
                ));
            }
            "mr" => {
                return Some(CommandResult::Output(format!(
                    "Memory recall: {}",
                    format_result(self.session.ctx.memory)
                )));
            }
            "mc" => {
                self.session.ctx.memory = 0.0;
                return Some(CommandResult::Output("Memory cleared".to_string()));
            }
            "h" => return Some(CommandResult::Output(self.history_listing(None))),
            "!!" => return Some(self.recall_last()),
            _ => {}
        }

        if line.starts_with('?') {
            return Some(CommandResult::Output(help_text()));
        }

        // memory arithmetic takes a lowercase `m` prefix, so `M+1` still
        // reads as an expression over the memory constant
        if let Some(rest) = line.strip_prefix("m+") {
            return Some(self.memory_add(rest, 1.0));
        }
        if let Some(rest) = line.strip_prefix("m-") {
            return Some(self.memory_add(rest, -1.0));
        }

        if let Some(rest) = lower.strip_prefix("h ") {
            if let Ok(count) = rest.trim().parse::<usize>() {
                return Some(CommandResult::Output(self.history_listing(Some(count))));
            }
        }

        if let Some(rest) = line.strip_prefix('!') {
            if let Ok(index) = rest.trim().parse::<usize>() {
                return Some(self.recall_entry(index));
            }
        }

        None
    }

    /// Apply `m+`/`m-` with the given sign.
    fn memory_add(&mut self, text: &str, sign: f64) -> CommandResult {
        match text.trim().parse::<f64>() {
            Ok(value) => {
                self.session.ctx.memory += sign * value;
                let verb = if sign > 0.0 {
                    "added to"
                } else {
                    "subtracted from"
                };
                CommandResult::Output(format!("Memory slot {verb}: {}", format_result(value.abs())))
            }
            Err(_) => CommandResult::Output("Invalid memory operation".to_string()),
        }
    }

    /// Numbered history listing, optionally only the last `count` entries.
    fn history_listing(&self, count: Option<usize>) -> String {
        let history = &self.session.history;
        if history.is_empty() {
            return "(history is empty)".to_string();
        }
        let start = count.map_or(0, |n| history.len().saturating_sub(n));
        history[start..]
            .iter()
            .enumerate()
            .map(|(offset, entry)| format!("{}: {}", start + offset + 1, entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `!<n>` recall, 1-based
    fn recall_entry(&self, index: usize) -> CommandResult {
        match index
            .checked_sub(1)
            .and_then(|i| self.session.history.get(i))
        {
            Some(entry) => CommandResult::Recall(entry.clone()),
            None => CommandResult::Output(format!("No history entry {index}")),
        }
    }

    /// `!!` recall of the most recent entry
    fn recall_last(&self) -> CommandResult {
        match self.session.history.last() {
            Some(entry) => CommandResult::Recall(entry.clone()),
            None => CommandResult::Output("(history is empty)".to_string()),
        }
    }
}

/// Help message
fn help_text() -> String {
    [
        "bigcalc - Help:",
        "Basic usage: <number> <operator> <number>  (e.g. 3 + 4)",
        "Operators: + - * / ^ %",
        "Functions: sin cos tan asin acos atan sinh cosh tanh sqrt cbrt ln log exp pow abs floor ceil fact nCr nPr gcd lcm",
        "Constants: pi e M (memory recall)",
        "Angle mode: mode rad|deg (default is rad)",
        "Memory: m+ <value>, m- <value>, mr (recall), mc (clear)",
        "History: h (show), h <n> (show last n), !<n> (recall n), !! (repeat last)",
        "Exit: exit or quit",
    ]
    .join("\n")
}
