//! Line-based REPL with rustyline
//!
//! Thin interactive front end over the expression pipeline. All mutable
//! session state lives here: angle mode, memory slot, numbered history.
//! The core is called once per line and keeps nothing between calls.

mod commands;

pub use commands::{CommandHandler, CommandResult};

use std::path::PathBuf;

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, EditMode, Editor};

use crate::core::{evaluate, to_postfix, tokenize, AngleMode, CalcError, EvaluationContext};
use crate::util::config::{self, UserConfig};
use crate::{Result, NAME, VERSION};

/// Line REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt to display
    pub prompt: String,
    /// Enable VI mode
    pub vi_mode: bool,
    /// History file path
    pub history_file: Option<PathBuf>,
    /// Maximum history size
    pub history_size: usize,
    /// Angle mode the session starts in
    pub angle_mode: AngleMode,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            vi_mode: false,
            history_file: None,
            history_size: 256,
            angle_mode: AngleMode::Radians,
        }
    }
}

impl ReplConfig {
    /// Build a REPL config from the user config file.
    pub fn from_user_config(user: &UserConfig) -> Self {
        Self {
            prompt: user.repl.prompt.clone(),
            vi_mode: user.repl.vi_mode,
            history_file: user
                .repl
                .history_file
                .clone()
                .or_else(config::get_history_path),
            history_size: user.repl.history_size,
            angle_mode: user.calc.angle_mode(),
        }
    }
}

/// Interactive session state: the evaluation context the core receives,
/// plus the numbered expression history.
#[derive(Debug, Default)]
pub struct Session {
    pub ctx: EvaluationContext,
    pub history: Vec<String>,
}

impl Session {
    /// Create a session starting in the given angle mode
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            ctx: EvaluationContext::new(angle_mode),
            history: Vec::new(),
        }
    }

    /// Run one expression through the pipeline.
    ///
    /// The line is recorded into history once it scans cleanly, even if a
    /// later stage rejects it.
    pub fn eval(&mut self, line: &str) -> std::result::Result<f64, CalcError> {
        let tokens = tokenize(line)?;
        self.history.push(line.to_string());
        let rpn = to_postfix(&tokens)?;
        Ok(evaluate(&rpn, &self.ctx)?)
    }
}

/// Line REPL
///
/// A line-based REPL with rustyline support for editing and history.
pub struct LineRepl {
    config: ReplConfig,
    editor: Editor<(), FileHistory>,
    session: Session,
}

impl LineRepl {
    /// Create a new line REPL with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ReplConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: ReplConfig) -> Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .completion_type(CompletionType::List)
            .edit_mode(if config.vi_mode {
                EditMode::Vi
            } else {
                EditMode::Emacs
            })
            .build();

        let mut editor = Editor::with_config(rl_config)?;

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                let _ = editor.load_history(history_file);
            }
        }

        let session = Session::new(config.angle_mode);

        Ok(Self {
            config,
            editor,
            session,
        })
    }

    /// Run the REPL until exit
    pub fn run(&mut self) -> Result<()> {
        println!("{NAME} {VERSION} - type ? or help for help");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    let action = CommandHandler::new(&mut self.session).handle(line);
                    match action {
                        Some(CommandResult::Exit) => break,
                        Some(CommandResult::Continue) => continue,
                        Some(CommandResult::Output(message)) => {
                            println!("{message}");
                        }
                        Some(CommandResult::Recall(entry)) => {
                            println!("{entry}");
                            self.eval_and_print(&entry);
                        }
                        None => self.eval_and_print(line),
                    }
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C cancels the current line
                    println!("(interrupted)");
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            if let Some(dir) = history_file.parent() {
                let _ = std::fs::create_dir_all(dir);
            }
            let _ = self.editor.save_history(history_file);
        }

        println!("Goodbye!");
        Ok(())
    }

    fn eval_and_print(&mut self, line: &str) {
        match self.session.eval(line) {
            Ok(value) => println!("Result: {}", format_result(value)),
            Err(error) => println!("Error: {error}"),
        }
    }

    /// Get the session reference
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get the session mut reference
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

/// Format a value with up to 10 significant digits, trimming trailing
/// zeros, switching to exponent form outside the `%g` fixed-point range.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    if (-4..10).contains(&magnitude) {
        let decimals = (9 - magnitude).max(0) as usize;
        trim_zeros(format!("{value:.decimals$}"))
    } else {
        let text = format!("{value:.9e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}e{}", trim_zeros(mantissa.to_string()), exponent)
            }
            None => text,
        }
    }
}

fn trim_zeros(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
