//! Windows command interpreter dialect
//!
//! Scripts use `doskey` macros with CRLF line endings. `$*` forwards
//! trailing arguments; it is substituted for the args placeholder or,
//! for placeholder-free commands that pass arguments, appended.

use shalias_core::model::{Alias, ARGS_PLACEHOLDER};

use crate::renderer::{executable_command, ShellDialect};

/// Dialect strategy for the Windows command interpreter.
pub struct Windows;

impl ShellDialect for Windows {
    const ID: &'static str = "windows";
    const NEWLINE: &'static str = "\r\n";
    const COMMAND_DELIM: &'static str = " ^& ";
    const ARGS_VALUE: &'static str = "$*";
    const HELP_ESCAPES: &'static [(&'static str, &'static str)] = &[
        ("&", "^&"),
        ("<", "^<"),
        (">", "^>"),
        ("|", "^|"),
        ("{@bell}", "^G"),
    ];

    fn header() -> &'static str {
        "@echo off"
    }

    fn footer() -> Option<&'static str> {
        Some("@echo on")
    }

    fn comment_prefix() -> &'static str {
        "REM "
    }

    fn installation_lines() -> &'static [&'static str] {
        &[
            "Register the aliases with every cmd.exe instance by running:",
            "  doskey /macrofile=PATH_TO_THIS_FILE",
            "For automatic loading add that command to the AutoRun value of",
            "  HKCU\\Software\\Microsoft\\Command Processor",
        ]
    }

    fn help_open(_help_name: &str, help_key: &str) -> String {
        format!("doskey {help_key} = ")
    }

    fn help_close() -> &'static str {
        ""
    }

    fn echo_fragment(content: &str) -> String {
        format!("echo {content}")
    }

    fn alias_statement(alias: &Alias, key: &str) -> String {
        let mut command = executable_command(alias.command(), Self::ARGS_VALUE);
        if alias.pass_args() && !alias.command().contains(ARGS_PLACEHOLDER) {
            command.push_str(" $*");
        }
        format!("doskey {key} = {command}")
    }

    fn doc_url_fragment(url: &str) -> String {
        format!("echo For additional information please refer to: {url}")
    }
}
