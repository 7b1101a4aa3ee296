//! # Host Runtime
//!
//! The main event loop that ties everything together:
//! input pump → engine transition → render.

use crate::commands::{HostCommand, HELP_TEXT};
use crate::input_script::{InputScript, InputScriptError, ScriptedInput};
use crate::render::DisplayRenderer;
use crate::settings::HostSettings;
use calc_core::{Action, CalculatorEngine, Outcome};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    ScriptError(#[from] InputScriptError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Host mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    /// Replay a script (deterministic)
    Script,
    /// Read key lines from the input stream
    Interactive,
}

/// Host runtime configuration
#[derive(Debug, Clone)]
pub struct HostRuntimeConfig {
    /// Host mode
    pub mode: HostMode,
    /// Input script text (for script mode)
    pub script: Option<String>,
    /// Display and engine settings
    pub settings: HostSettings,
    /// Maximum steps to run (0 = unlimited)
    pub max_steps: usize,
    /// Whether to print the final snapshot as JSON on exit
    pub print_snapshot: bool,
}

impl Default for HostRuntimeConfig {
    fn default() -> Self {
        Self {
            mode: HostMode::Interactive,
            script: None,
            settings: HostSettings::default(),
            max_steps: 0,
            print_snapshot: false,
        }
    }
}

/// Host runtime state
enum HostState {
    Running,
    Shutdown,
}

/// Host runtime
pub struct HostRuntime<W: Write> {
    /// Configuration
    config: HostRuntimeConfig,
    /// Calculator engine
    engine: CalculatorEngine,
    /// Display renderer
    renderer: DisplayRenderer,
    /// Input script (if in script mode)
    script: Option<InputScript>,
    /// Inputs parsed from the current interactive line
    pending_inputs: VecDeque<ScriptedInput>,
    /// Current state
    state: HostState,
    /// Step counter
    steps: usize,
    /// Output sink
    out: W,
}

impl<W: Write> HostRuntime<W> {
    /// Creates a new host runtime
    pub fn new(config: HostRuntimeConfig, out: W) -> Result<Self, HostRuntimeError> {
        let engine = CalculatorEngine::with_config(config.settings.engine_config());
        let renderer = DisplayRenderer::new(
            config.settings.thousands_separator.clone(),
            config.settings.show_history,
        );

        // Parse script if provided
        let script = match (&config.mode, &config.script) {
            (HostMode::Script, Some(text)) => Some(InputScript::from_text(text)?),
            (HostMode::Script, None) => return Err(InputScriptError::EmptyScript.into()),
            (HostMode::Interactive, _) => None,
        };

        Ok(Self {
            config,
            engine,
            renderer,
            script,
            pending_inputs: VecDeque::new(),
            state: HostState::Running,
            steps: 0,
            out,
        })
    }

    /// Runs the host event loop
    ///
    /// Returns when:
    /// - Quit command received
    /// - Max steps reached (if configured)
    /// - Script or input stream exhausted
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<(), HostRuntimeError> {
        info!(mode = ?self.config.mode, "calculator host started");
        self.render()?;

        loop {
            if matches!(self.state, HostState::Shutdown) {
                break;
            }

            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                break;
            }

            let Some(next) = self.next_input(&mut input)? else {
                break;
            };

            self.step(next)?;
            self.steps += 1;
        }

        if self.config.print_snapshot {
            self.print_snapshot()?;
        }

        info!(steps = self.steps, "calculator host stopped");
        Ok(())
    }

    /// Executes one step: apply the input, then render if anything changed
    pub fn step(&mut self, input: ScriptedInput) -> Result<(), HostRuntimeError> {
        match input {
            ScriptedInput::Action(action) => self.apply_action(action),
            ScriptedInput::Command(command) => self.execute_command(command)?,
        }

        if self.renderer.needs_redraw(&self.engine) {
            self.render()?;
        }

        Ok(())
    }

    /// Pulls the next input from the script or the input stream
    fn next_input<R: BufRead>(
        &mut self,
        input: &mut R,
    ) -> Result<Option<ScriptedInput>, HostRuntimeError> {
        match self.config.mode {
            HostMode::Script => Ok(self.script.as_mut().and_then(InputScript::next_input)),
            HostMode::Interactive => {
                while self.pending_inputs.is_empty() {
                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        return Ok(None);
                    }

                    match InputScript::parse_line(&line) {
                        Ok(parsed) => self.pending_inputs.extend(parsed),
                        Err(e) => {
                            warn!(line = line.trim(), error = %e, "rejected input line");
                            writeln!(self.out, "! {}", e)?;
                        }
                    }
                }
                Ok(self.pending_inputs.pop_front())
            }
        }
    }

    fn apply_action(&mut self, action: Action) {
        match self.engine.apply(action) {
            Outcome::Failed(error) => {
                warn!(action = action.name(), %error, "arithmetic produced the error marker");
            }
            outcome => {
                debug!(
                    action = action.name(),
                    ?outcome,
                    entry = self.engine.current_entry(),
                    status = %self.engine.status(),
                    "applied action"
                );
            }
        }
    }

    /// Executes a host command
    pub fn execute_command(&mut self, command: HostCommand) -> Result<(), HostRuntimeError> {
        debug!(?command, "host command");
        match command {
            HostCommand::Snapshot => self.print_snapshot()?,
            HostCommand::Settings => {
                let json = serde_json::to_string(&self.config.settings)?;
                writeln!(self.out, "{}", json)?;
            }
            HostCommand::Help => {
                write!(self.out, "{}", HELP_TEXT)?;
            }
            HostCommand::Quit => {
                self.state = HostState::Shutdown;
            }
        }
        Ok(())
    }

    fn print_snapshot(&mut self) -> Result<(), HostRuntimeError> {
        let json = serde_json::to_string(&self.engine.snapshot())?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }

    /// Renders the current display state
    fn render(&mut self) -> Result<(), HostRuntimeError> {
        let output = self.renderer.render(&self.engine);
        self.out.write_all(output.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Returns the calculator engine (for testing)
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the step count
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Returns true once a quit command was executed
    pub fn is_shutdown(&self) -> bool {
        matches!(self.state, HostState::Shutdown)
    }

    /// Returns the output sink (for testing)
    pub fn output(&self) -> &W {
        &self.out
    }
}
