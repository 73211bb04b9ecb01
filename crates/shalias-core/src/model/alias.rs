//! Alias value type

use crate::error::{Error, Result};
use crate::model::is_blank;

/// A named shorthand bound to a shell command, optionally scoped to one
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// The short name of the alias.
    pub(crate) name: String,

    /// The command that is bound to the short name.
    pub(crate) command: String,

    /// Optional comment with detailed information about the alias and
    /// the context of its usage. Used by reports.
    pub(crate) comment: Option<String>,

    /// The environment the alias is applied to. `None` means the alias
    /// applies everywhere.
    pub(crate) env: Option<String>,

    /// Whether arguments passed to the alias are appended to the
    /// command.
    pub(crate) pass_args: bool,
}

impl Alias {
    /// Create a new alias, validating that both name and command are
    /// non-blank.
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        comment: Option<String>,
        env: Option<String>,
        pass_args: bool,
    ) -> Result<Self> {
        let name = name.into();
        let command = command.into();

        let name_is_blank = is_blank(&name);
        let command_is_blank = is_blank(&command);
        if name_is_blank && command_is_blank {
            return Err(Error::AliasNameAndCommandMissing);
        } else if name_is_blank {
            return Err(Error::AliasNameMissing { command });
        } else if command_is_blank {
            return Err(Error::AliasCommandMissing { name });
        }

        Ok(Self {
            name,
            command,
            comment,
            env,
            pass_args,
        })
    }

    /// The short name of the alias.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command that is bound to the short name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The optional comment describing the alias.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The environment the alias is applied to, if restricted.
    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    /// Whether arguments are appended to the command.
    pub fn pass_args(&self) -> bool {
        self.pass_args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_round_trips_fields() {
        let alias = Alias::new(
            "i",
            "mvn -T 4 clean install",
            Some("Runs a clean install.".to_string()),
            Some("bash".to_string()),
            true,
        )
        .unwrap();

        assert_eq!(alias.name(), "i");
        assert_eq!(alias.command(), "mvn -T 4 clean install");
        assert_eq!(alias.comment(), Some("Runs a clean install."));
        assert_eq!(alias.env(), Some("bash"));
        assert!(alias.pass_args());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Alias::new("  ", "mvn install", None, None, true).unwrap_err();
        assert!(matches!(err, Error::AliasNameMissing { ref command } if command == "mvn install"));
    }

    #[test]
    fn test_blank_command_is_rejected() {
        let err = Alias::new("i", "", None, None, true).unwrap_err();
        assert!(matches!(err, Error::AliasCommandMissing { ref name } if name == "i"));
    }

    #[test]
    fn test_blank_name_and_command_are_rejected() {
        let err = Alias::new("", "  ", None, None, true).unwrap_err();
        assert!(matches!(err, Error::AliasNameAndCommandMissing));
    }
}
