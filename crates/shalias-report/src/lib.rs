//! # shalias-report
//!
//! Renders the collected alias catalogue as a Markdown reference page.
//! The report consumes the same collector contract as the script
//! builders, so a single processor run can produce scripts and
//! documentation together. Unlike the script builders, the report is
//! not filtered by environment: it documents the whole catalogue and
//! states each alias's environment explicitly.

use shalias_core::collector::AliasCollector;
use shalias_core::model::{Alias, AliasGroup, ExtensionGroup, ARGS_PLACEHOLDER};
use tracing::debug;

/// Collects alias groups and renders them as one Markdown page.
#[derive(Default)]
pub struct MarkdownReport {
    alias_groups: Vec<AliasGroup>,
    extension_groups: Vec<ExtensionGroup>,
}

impl MarkdownReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the accumulated catalogue as a Markdown document.
    pub fn render(&self) -> String {
        debug!(
            "rendering report for {} alias groups and {} extension groups",
            self.alias_groups.len(),
            self.extension_groups.len()
        );

        let mut page = String::with_capacity(4096);
        page.push_str("# Alias Reference\n");

        for group in &self.alias_groups {
            page.push_str("\n## ");
            page.push_str(group.name());
            page.push('\n');

            if let Some(comment) = group.comment() {
                page.push('\n');
                page.push_str(comment);
                page.push('\n');
            }

            page.push_str("\n| Alias | Command | Arguments | Environment | Comment |\n");
            page.push_str("| ----- | ------- | --------- | ----------- | ------- |\n");
            for alias in group.aliases() {
                push_alias_row(&mut page, alias);
            }
        }

        for extension_group in &self.extension_groups {
            if extension_group.is_empty() {
                continue;
            }
            let extension = extension_group.extension();

            page.push_str("\n## Extension: ");
            page.push_str(extension.name());
            if let Some(mnemonic) = extension.mnemonic() {
                page.push_str(" (");
                page.push_str(mnemonic);
                page.push(')');
            }
            page.push('\n');

            if let Some(comment) = extension.comment() {
                page.push('\n');
                page.push_str(comment);
                page.push('\n');
            }

            page.push_str("\n| Alias | Command | Arguments | Environment | Comment |\n");
            page.push_str("| ----- | ------- | --------- | ----------- | ------- |\n");
            for alias in extension_group.aliases() {
                push_alias_row(&mut page, alias);
            }
        }

        page
    }
}

impl AliasCollector for MarkdownReport {
    fn add_aliases(&mut self, group: &AliasGroup) {
        if !group.aliases().is_empty() {
            self.alias_groups.push(group.clone());
        }
    }

    fn set_extension_groups(&mut self, groups: &[ExtensionGroup]) {
        self.extension_groups.extend_from_slice(groups);
    }
}

fn push_alias_row(page: &mut String, alias: &Alias) {
    let args = if alias.pass_args() { "yes" } else { "no" };
    let env = alias.env().unwrap_or("all");
    let comment = alias.comment().unwrap_or("");
    page.push_str(&format!(
        "| `{}` | `{}` | {} | {} | {} |\n",
        cell(alias.name()),
        cell(&display_command(alias.command())),
        args,
        env,
        cell(comment),
    ));
}

/// Strips the args placeholder for display.
fn display_command(command: &str) -> String {
    command
        .replace(" {@args}", "")
        .replace(ARGS_PLACEHOLDER, "")
}

/// Keeps table cells intact when the text itself contains pipes.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
