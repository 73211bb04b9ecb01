//! Shared accumulation, alignment, and rendering logic
//!
//! Every dialect composes the same [`ScriptRenderer`] with a
//! [`ShellDialect`] strategy. The renderer owns the two-phase state
//! machine: any number of collector calls, then one terminal
//! [`ScriptBuilder::create_script`].

use std::marker::PhantomData;

use shalias_core::collector::AliasCollector;
use shalias_core::model::{Alias, AliasGroup, ExtensionGroup, ARGS_PLACEHOLDER};
use tracing::debug;

/// Marker commands may carry for the BEL control byte, which XML 1.0
/// cannot represent literally. Executable bodies receive the real byte;
/// help lines receive the dialect's printable substitute.
pub const BELL_MARKER: &str = "{@bell}";

const BELL: &str = "\u{0007}";

/// Dialect-specific rendering strategy.
///
/// Implementations are stateless marker types; all accumulation state
/// lives in the [`ScriptRenderer`].
pub trait ShellDialect {
    /// Identifier matched against alias environments. Doubles as the
    /// output artifact name.
    const ID: &'static str;

    /// The newline sequence of the generated script.
    const NEWLINE: &'static str;

    /// Separator between the echo fragments of the help alias body.
    const COMMAND_DELIM: &'static str;

    /// Replacement for the args placeholder inside executable command
    /// text. Empty when the dialect forwards trailing arguments
    /// natively.
    const ARGS_VALUE: &'static str;

    /// Fixed substitution table applied to text embedded in help echo
    /// lines. Never applied to executable alias bodies.
    const HELP_ESCAPES: &'static [(&'static str, &'static str)];

    /// First line(s) of the script, without trailing newline.
    fn header() -> &'static str;

    /// Closing line of the script, if the dialect has one.
    fn footer() -> Option<&'static str>;

    /// Prefix turning a line into a script comment.
    fn comment_prefix() -> &'static str;

    /// Static guidance on installing the generated script.
    fn installation_lines() -> &'static [&'static str];

    /// Opens the synthesized help alias definition.
    fn help_open(help_name: &str, help_key: &str) -> String;

    /// Closes the synthesized help alias definition.
    fn help_close() -> &'static str;

    /// Renders one echo fragment of the help body.
    fn echo_fragment(content: &str) -> String;

    /// Renders the executable statement binding an alias to its
    /// command. `key` is the alias name padded for column alignment.
    fn alias_statement(alias: &Alias, key: &str) -> String;

    /// Renders the echo fragment pointing at further documentation.
    fn doc_url_fragment(url: &str) -> String;
}

/// Script-producing collector; one instance per target dialect.
pub trait ScriptBuilder: AliasCollector {
    /// The dialect identifier, also used as the output artifact name.
    fn id(&self) -> &'static str;

    /// Sets the comment text rendered at the top of the script.
    fn set_comment_intro(&mut self, intro: Option<String>);

    /// Sets the comment text rendered at the bottom of the script.
    fn set_comment_extro(&mut self, extro: Option<String>);

    /// Sets the documentation URL shown in the help listing.
    fn set_doc_url(&mut self, doc_url: Option<String>);

    /// Whether to add installation instructions after the intro.
    fn set_add_installation_comment(&mut self, flag: bool);

    /// Renders the accumulated aliases into the complete script text.
    fn create_script(&self) -> String;
}

/// Accumulates alias groups and renders them for dialect `D`.
pub struct ScriptRenderer<D: ShellDialect> {
    help_alias_name: String,
    max_alias_name_len: usize,
    alias_groups: Vec<AliasGroup>,
    extension_groups: Vec<ExtensionGroup>,
    comment_intro: Option<String>,
    comment_extro: Option<String>,
    doc_url: Option<String>,
    add_installation_comment: bool,
    _dialect: PhantomData<D>,
}

impl<D: ShellDialect> ScriptRenderer<D> {
    /// Create a renderer whose help alias carries the given name. The
    /// alignment width is seeded with that name's length.
    pub fn new(help_alias_name: impl Into<String>) -> Self {
        let help_alias_name = help_alias_name.into();
        let max_alias_name_len = help_alias_name.len();
        Self {
            help_alias_name,
            max_alias_name_len,
            alias_groups: Vec::new(),
            extension_groups: Vec::new(),
            comment_intro: None,
            comment_extro: None,
            doc_url: None,
            add_installation_comment: false,
            _dialect: PhantomData,
        }
    }

    fn pad(&self, name: &str) -> String {
        format!("{:<width$}", name, width = self.max_alias_name_len)
    }

    fn track_name_length(&mut self, name: &str) {
        if name.len() > self.max_alias_name_len {
            self.max_alias_name_len = name.len();
        }
    }

    fn append_comment_block(&self, script: &mut String, text: Option<&str>) {
        let Some(text) = text else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            script.push_str(D::comment_prefix());
            script.push_str(line);
            script.push_str(D::NEWLINE);
        }
    }

    fn push_fragment(help: &mut String, content: &str) {
        help.push_str(&D::echo_fragment(content));
        help.push_str(D::COMMAND_DELIM);
    }

    fn append_alias(&self, script: &mut String, help: &mut String, alias: &Alias) {
        let key = self.pad(alias.name());

        script.push_str(&D::alias_statement(alias, &key));
        script.push_str(D::NEWLINE);

        let args_marker = if alias.pass_args() { " [args]" } else { "" };
        let help_line = format!(
            " {} = {}{}",
            key,
            display_command::<D>(alias.command()),
            args_marker
        );
        Self::push_fragment(help, &help_line);
    }

    fn append_extensions(&self, script: &mut String, help: &mut String) {
        let rendered: Vec<&ExtensionGroup> = self
            .extension_groups
            .iter()
            .filter(|group| group.extension().env().is_none_or(|env| env == D::ID))
            .filter(|group| !group.is_empty())
            .collect();
        if rendered.is_empty() {
            return;
        }

        Self::push_fragment(help, " --- ALIAS EXTENSIONS");
        for group in rendered {
            let extension = group.extension();
            let heading = match extension.mnemonic() {
                Some(mnemonic) => format!(" ...{} ({}):", extension.name(), mnemonic),
                None => format!(" ...{}:", extension.name()),
            };
            Self::push_fragment(help, &heading);

            for alias in group.aliases() {
                self.append_alias(script, help, alias);
            }
        }
    }
}

impl<D: ShellDialect> AliasCollector for ScriptRenderer<D> {
    fn add_aliases(&mut self, group: &AliasGroup) {
        let mine = group.filter(D::ID);
        if mine.is_empty() {
            return;
        }

        for alias in mine.aliases() {
            self.track_name_length(alias.name());
        }
        // The unfiltered group is retained so that the full document
        // context is still available at render time; filtering is
        // re-applied per alias.
        self.alias_groups.push(group.clone());
    }

    fn set_extension_groups(&mut self, groups: &[ExtensionGroup]) {
        for group in groups {
            for alias in group.aliases() {
                self.track_name_length(alias.name());
            }
        }
        self.extension_groups.extend_from_slice(groups);
    }
}

impl<D: ShellDialect> ScriptBuilder for ScriptRenderer<D> {
    fn id(&self) -> &'static str {
        D::ID
    }

    fn set_comment_intro(&mut self, intro: Option<String>) {
        self.comment_intro = intro;
    }

    fn set_comment_extro(&mut self, extro: Option<String>) {
        self.comment_extro = extro;
    }

    fn set_doc_url(&mut self, doc_url: Option<String>) {
        self.doc_url = doc_url;
    }

    fn set_add_installation_comment(&mut self, flag: bool) {
        self.add_installation_comment = flag;
    }

    fn create_script(&self) -> String {
        debug!(
            "rendering {} script with {} alias groups and {} extension groups",
            D::ID,
            self.alias_groups.len(),
            self.extension_groups.len()
        );

        let help_key = self.pad(&self.help_alias_name);

        let mut help = String::with_capacity(1024);
        help.push_str(&D::help_open(&self.help_alias_name, &help_key));

        let mut script = String::with_capacity(2048);
        script.push_str(D::header());
        script.push_str(D::NEWLINE);
        self.append_comment_block(&mut script, self.comment_intro.as_deref());
        if self.add_installation_comment {
            for line in D::installation_lines() {
                script.push_str(D::comment_prefix());
                script.push_str(line);
                script.push_str(D::NEWLINE);
            }
        }

        for group in &self.alias_groups {
            Self::push_fragment(&mut help, &format!(" --- {}", group.name()));
            for alias in group.aliases() {
                if alias.env().is_none_or(|env| env == D::ID) {
                    self.append_alias(&mut script, &mut help, alias);
                }
            }
        }

        self.append_extensions(&mut script, &mut help);

        if !self.alias_groups.is_empty() {
            Self::push_fragment(&mut help, " --- help");
        }

        help.push_str(&D::echo_fragment(&format!(" {} = This help.", help_key)));
        if let Some(url) = self.doc_url.as_deref().filter(|u| !u.trim().is_empty()) {
            help.push_str(D::COMMAND_DELIM);
            help.push_str(&D::doc_url_fragment(url));
        }
        help.push_str(D::help_close());

        script.push_str(&help);
        script.push_str(D::NEWLINE);
        self.append_comment_block(&mut script, self.comment_extro.as_deref());
        if let Some(footer) = D::footer() {
            script.push_str(footer);
            script.push_str(D::NEWLINE);
        }

        script
    }
}

/// Resolves the args and bell placeholders for an executable command
/// body. Help-line escaping is deliberately not applied here.
pub(crate) fn executable_command(command: &str, args_value: &str) -> String {
    let resolved = if args_value.is_empty() {
        command
            .replace(" {@args}", "")
            .replace(ARGS_PLACEHOLDER, "")
    } else {
        command.replace(ARGS_PLACEHOLDER, args_value)
    };
    resolved.replace(BELL_MARKER, BELL)
}

/// Strips the args placeholder and applies the dialect's help escaping
/// table for embedding a command into an echo line.
fn display_command<D: ShellDialect>(command: &str) -> String {
    let mut text = command
        .replace(" {@args}", "")
        .replace(ARGS_PLACEHOLDER, "");
    for (from, to) in D::HELP_ESCAPES {
        text = text.replace(from, to);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_command_resolves_args_placeholder() {
        assert_eq!(
            executable_command("xxx cmd {@args} yyy", "$*"),
            "xxx cmd $* yyy"
        );
        assert_eq!(executable_command("xxx cmd {@args} yyy", ""), "xxx cmd yyy");
        assert_eq!(executable_command("plain", "$*"), "plain");
    }

    #[test]
    fn test_executable_command_resolves_bell_marker() {
        assert_eq!(
            executable_command("echo done{@bell}", ""),
            "echo done\u{0007}"
        );
    }
}
