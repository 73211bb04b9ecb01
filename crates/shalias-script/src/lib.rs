//! # shalias-script
//!
//! Turns collected alias groups and extension groups into ready-to-source
//! shell scripts. One [`ScriptRenderer`] per shell dialect shares the
//! accumulation and alignment logic; dialect specifics (delimiters,
//! escaping, statement syntax) live in a [`ShellDialect`] strategy type.

pub mod bash;
pub mod renderer;
pub mod windows;

pub use bash::Bash;
pub use renderer::{ScriptBuilder, ScriptRenderer, ShellDialect, BELL_MARKER};
pub use windows::Windows;

/// Script builder for the POSIX bash dialect.
pub type BashScriptBuilder = ScriptRenderer<Bash>;

/// Script builder for the Windows command interpreter.
pub type WindowsScriptBuilder = ScriptRenderer<Windows>;
