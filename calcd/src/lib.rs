//! # Calculator Host Runtime
//!
//! Terminal host for the calculator engine.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The engine never prints
//! - **Output is snapshot rendering**: Each changed revision prints one frame
//! - **Input is explicit actions**: Keys and buttons map to engine actions
//! - **Deterministic mode is first-class**: Scripts replay exact sessions
//!
//! ## Responsibilities
//!
//! The host runtime:
//! - Maps keyboard characters and button names to engine actions
//! - Runs the event loop (input → transition → render)
//! - Formats entries with digit grouping and renders history and status
//! - Loads settings and sets up logging

pub mod commands;
pub mod input_script;
pub mod logging;
pub mod render;
pub mod runtime;
pub mod settings;

pub use commands::{HostCommand, HostCommandError, HostCommandParser};
pub use input_script::{InputScript, InputScriptError, ScriptedInput};
pub use render::{DisplayFrame, DisplayRenderer};
pub use runtime::{HostMode, HostRuntime, HostRuntimeConfig, HostRuntimeError};
pub use settings::{HostSettings, SettingsError};
