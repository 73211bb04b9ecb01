//! Bash dialect
//!
//! Bash aliases forward trailing arguments natively, so the args
//! placeholder is removed from executable bodies instead of being
//! substituted. The help alias body is single-quoted as a whole, with
//! each fragment echoed in double quotes.

use shalias_core::model::Alias;

use crate::renderer::{executable_command, ShellDialect};

/// Dialect strategy for POSIX bash.
pub struct Bash;

impl ShellDialect for Bash {
    const ID: &'static str = "bash";
    const NEWLINE: &'static str = "\n";
    const COMMAND_DELIM: &'static str = " && ";
    const ARGS_VALUE: &'static str = "";
    const HELP_ESCAPES: &'static [(&'static str, &'static str)] = &[
        ("\"", "\\\""),
        ("'", "'\\''"),
        ("{@bell}", "\\a"),
    ];

    fn header() -> &'static str {
        "#!/bin/bash"
    }

    fn footer() -> Option<&'static str> {
        None
    }

    fn comment_prefix() -> &'static str {
        "# "
    }

    fn installation_lines() -> &'static [&'static str] {
        &[
            "Add the aliases to your ~/.bashrc or source it from ~/.bash_profile like this:",
            "  source PATH_TO_THIS_FILE",
            "For further information please refer to",
            "  http://tldp.org/LDP/Bash-Beginners-Guide/html/Bash-Beginners-Guide.html",
        ]
    }

    fn help_open(help_name: &str, _help_key: &str) -> String {
        format!("alias {help_name}='")
    }

    fn help_close() -> &'static str {
        "'"
    }

    fn echo_fragment(content: &str) -> String {
        format!("echo \"{content}\"")
    }

    fn alias_statement(alias: &Alias, _key: &str) -> String {
        let command = executable_command(alias.command(), Self::ARGS_VALUE);
        format!("alias {}='{}'", alias.name(), command)
    }

    fn doc_url_fragment(url: &str) -> String {
        format!("echo -e \"For additional information please refer to: \\n  {url}\"")
    }
}

#[cfg(test)]
mod tests {
    use shalias_core::collector::AliasCollector;
    use shalias_core::model::{Alias, AliasExtension, AliasGroup, ExtensionGroup};

    use crate::renderer::ScriptBuilder;
    use crate::BashScriptBuilder;

    const HEADER: &str = "#!/bin/bash\n";

    const NO_ALIAS_PRESENT: &str = "#!/bin/bash\n\
        # Some intro\n\
        # Second intro Line\n\
        alias h='echo \" h = This help.\"'\n\
        # Some extro\n\
        # Second extro Line\n";

    fn builder() -> BashScriptBuilder {
        let mut builder = BashScriptBuilder::new("h");
        builder.set_comment_intro(Some("Some intro\nSecond intro Line".into()));
        builder.set_comment_extro(Some("Some extro\nSecond extro Line".into()));
        builder
    }

    fn group_with(alias: Alias) -> AliasGroup {
        let mut group = AliasGroup::new("test", None);
        group.push(alias);
        group
    }

    fn alias(name: &str, command: &str, env: Option<&str>, pass_args: bool) -> Alias {
        Alias::new(
            name,
            command,
            None,
            env.map(str::to_string),
            pass_args,
        )
        .unwrap()
    }

    #[test]
    fn creates_script_without_aliases() {
        assert_eq!(builder().create_script(), NO_ALIAS_PRESENT);
    }

    #[test]
    fn creates_script_without_intro() {
        let mut builder = builder();
        builder.set_comment_intro(None);
        assert_eq!(
            builder.create_script(),
            "#!/bin/bash\n\
             alias h='echo \" h = This help.\"'\n\
             # Some extro\n\
             # Second extro Line\n"
        );
    }

    #[test]
    fn creates_script_without_extro() {
        let mut builder = builder();
        builder.set_comment_extro(None);
        assert_eq!(
            builder.create_script(),
            "#!/bin/bash\n\
             # Some intro\n\
             # Second intro Line\n\
             alias h='echo \" h = This help.\"'\n"
        );
    }

    #[test]
    fn rejects_alias_with_foreign_environment() {
        let mut builder = builder();
        builder.add_aliases(&group_with(alias("any", "command", Some("windows"), true)));
        assert_eq!(builder.create_script(), NO_ALIAS_PRESENT);
    }

    #[test]
    fn accepts_alias_with_matching_environment() {
        let mut builder = builder();
        builder.add_aliases(&group_with(alias("any", "command", Some("bash"), true)));
        let script = builder.create_script();

        assert!(script.contains("alias any='command'\n"));
        assert!(script.contains(
            "alias h='echo \" --- test\" && echo \" any = command [args]\" \
             && echo \" --- help\" && echo \" h   = This help.\"'"
        ));
    }

    #[test]
    fn strips_args_placeholder_from_executable_body() {
        let mut builder = builder();
        builder.add_aliases(&group_with(alias(
            "i",
            "mvn {@args} clean install",
            None,
            true,
        )));
        let script = builder.create_script();

        assert!(script.contains("alias i='mvn clean install'\n"));
        assert!(script.contains("echo \" i = mvn clean install [args]\""));
    }

    #[test]
    fn marks_aliases_not_passing_args() {
        let mut builder = builder();
        builder.add_aliases(&group_with(alias("any", "command", None, false)));
        let script = builder.create_script();

        assert!(script.contains("echo \" any = command\" && echo \" --- help\""));
    }

    #[test]
    fn appends_doc_url_as_extra_echo_line() {
        let mut builder = builder();
        builder.set_doc_url(Some("http://example.org/aliases".into()));
        let script = builder.create_script();

        assert!(script.contains(
            "echo \" h = This help.\" && \
             echo -e \"For additional information please refer to: \\n  \
             http://example.org/aliases\"'"
        ));
    }

    #[test]
    fn adds_installation_instructions_when_requested() {
        let mut builder = builder();
        builder.set_add_installation_comment(true);
        let script = builder.create_script();

        assert!(script.starts_with(HEADER));
        assert!(script.contains("# Second intro Line\n# Add the aliases to your ~/.bashrc"));
        assert!(script.contains("#   source PATH_TO_THIS_FILE\n"));
    }

    #[test]
    fn escapes_quotes_in_help_text_but_not_in_the_body() {
        let mut builder = builder();
        builder.add_aliases(&group_with(alias(
            "lsd",
            "ls -d \"$PWD\"/*",
            None,
            false,
        )));
        let script = builder.create_script();

        assert!(script.contains("alias lsd='ls -d \"$PWD\"/*'\n"));
        assert!(script.contains("echo \" lsd = ls -d \\\"$PWD\\\"/*\""));
    }

    #[test]
    fn renders_bell_marker_as_printable_escape_in_help() {
        let mut builder = builder();
        builder.add_aliases(&group_with(alias("ring", "echo done{@bell}", None, false)));
        let script = builder.create_script();

        assert!(script.contains("alias ring='echo done\u{0007}'\n"));
        assert!(script.contains("echo \" ring = echo done\\a\""));
    }

    #[test]
    fn renders_extension_aliases_with_their_own_section() {
        let mut builder = builder();
        let base = alias("any", "command", None, false);
        builder.add_aliases(&group_with(base.clone()));

        let extension = AliasExtension::new(
            "xx",
            "xxx {@cmd} yyy",
            vec!["test".into()],
            vec![],
            Some("Does xxx and yyy.".into()),
            Some("X".into()),
            None,
        )
        .unwrap();
        let mut extension_group = ExtensionGroup::new(extension);
        extension_group.add_alias(Some("test"), &base);
        builder.set_extension_groups(&[extension_group]);

        let script = builder.create_script();
        assert!(script.contains("alias anyxx='xxx command yyy'\n"));
        assert!(script.contains("echo \" --- ALIAS EXTENSIONS\""));
        assert!(script.contains("echo \" ...xx (X):\""));
        assert!(script.contains("echo \" anyxx = xxx command yyy\""));
    }
}
