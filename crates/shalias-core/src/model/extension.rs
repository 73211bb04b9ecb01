//! Alias extensions
//!
//! An extension wraps the command of selected aliases in a template,
//! producing new, derived aliases in addition to the originals.

use crate::error::{Error, Result};
use crate::model::{is_blank, Alias};

/// The placeholder in an extension template that is replaced with the
/// original command string.
pub const COMMAND_PLACEHOLDER: &str = "{@cmd}";

/// The placeholder spliced into a derived command where the caller's
/// arguments belong. Dialect renderers decide how to resolve it.
pub const ARGS_PLACEHOLDER: &str = "{@args}";

/// A named rule that wraps the command of selected aliases in a
/// template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasExtension {
    /// Appended to the extended alias name, without separator.
    name: String,
    /// The template applied to the selected aliases' commands.
    template: String,
    /// Names of groups whose aliases are extended.
    apply_to_groups: Vec<String>,
    /// Names of single aliases that are extended.
    apply_to_aliases: Vec<String>,
    /// Optional comment appended to the comment of the extended alias.
    comment: Option<String>,
    /// Optional mnemonic shown next to the extension name in help
    /// listings.
    mnemonic: Option<String>,
    /// The environment forced onto every derived alias.
    env: Option<String>,
}

impl AliasExtension {
    /// Create a new extension, validating that both name and template
    /// are non-blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        apply_to_groups: Vec<String>,
        apply_to_aliases: Vec<String>,
        comment: Option<String>,
        mnemonic: Option<String>,
        env: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        let template = template.into();

        let name_is_blank = is_blank(&name);
        let template_is_blank = is_blank(&template);
        if name_is_blank && template_is_blank {
            return Err(Error::ExtensionNameAndTemplateMissing);
        } else if name_is_blank {
            return Err(Error::ExtensionNameMissing { template });
        } else if template_is_blank {
            return Err(Error::ExtensionTemplateMissing { name });
        }

        Ok(Self {
            name,
            template,
            apply_to_groups,
            apply_to_aliases,
            comment,
            mnemonic,
            env,
        })
    }

    /// The name of the extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template applied to the selected aliases' commands.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The optional comment appended to extended aliases' comments.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The optional mnemonic for help listings.
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    /// The environment forced onto derived aliases, if any.
    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    /// Checks whether the extension applies to the alias. An alias is
    /// extended if its group is listed in `apply_to_groups` or its name
    /// is listed in `apply_to_aliases`; either condition suffices.
    pub fn is_applicable(&self, group: Option<&str>, alias: &Alias) -> bool {
        group.is_some_and(|g| self.apply_to_groups.iter().any(|n| n == g))
            || self.apply_to_aliases.iter().any(|n| n == alias.name())
    }

    /// Applies the extension to the alias, returning the derived alias
    /// or `None` if the extension is not applicable.
    pub fn apply(&self, group: Option<&str>, alias: &Alias) -> Option<Alias> {
        if !self.is_applicable(group, alias) {
            return None;
        }

        let insert = if alias.pass_args() {
            format!("{} {}", alias.command(), ARGS_PLACEHOLDER)
        } else {
            alias.command().to_string()
        };
        let command = self.template.replace(COMMAND_PLACEHOLDER, &insert);

        // Extension comments never stand alone: without an original
        // comment the derived alias has none.
        let comment = match (alias.comment(), self.comment.as_deref()) {
            (Some(original), Some(extension)) => Some(format!("{original} {extension}")),
            (Some(original), None) => Some(original.to_string()),
            (None, _) => None,
        };

        Some(Alias {
            name: format!("{}{}", alias.name(), self.name),
            command,
            comment,
            env: self.env.clone(),
            pass_args: false,
        })
    }
}

/// Pairs one extension with the ordered sequence of aliases it has
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroup {
    extension: AliasExtension,
    aliases: Vec<Alias>,
}

impl ExtensionGroup {
    /// Create an empty group for the given extension.
    pub fn new(extension: AliasExtension) -> Self {
        Self {
            extension,
            aliases: Vec::new(),
        }
    }

    /// The extension that produces this group's aliases.
    pub fn extension(&self) -> &AliasExtension {
        &self.extension
    }

    /// The derived aliases, in the order they were produced.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Whether no alias has been derived yet.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Offers an alias to the extension; the derived alias is appended
    /// if the extension is applicable, otherwise this is a no-op.
    pub fn add_alias(&mut self, group: Option<&str>, alias: &Alias) {
        if let Some(derived) = self.extension.apply(group, alias) {
            self.aliases.push(derived);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extension() -> AliasExtension {
        AliasExtension::new(
            "xx",
            "xxx {@cmd} yyy",
            vec!["test".to_string()],
            vec!["build".to_string()],
            None,
            None,
            None,
        )
        .unwrap()
    }

    fn alias(name: &str, pass_args: bool) -> Alias {
        Alias::new(name, "command", None, None, pass_args).unwrap()
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = AliasExtension::new("", "{@cmd}", vec![], vec![], None, None, None).unwrap_err();
        assert!(
            matches!(err, Error::ExtensionNameMissing { ref template } if template == "{@cmd}")
        );
    }

    #[test]
    fn test_blank_template_is_rejected() {
        let err = AliasExtension::new("xx", "  ", vec![], vec![], None, None, None).unwrap_err();
        assert!(matches!(err, Error::ExtensionTemplateMissing { ref name } if name == "xx"));
    }

    #[test]
    fn test_applicable_by_group_membership() {
        let ext = extension();
        let alias = alias("any", false);

        assert!(ext.is_applicable(Some("test"), &alias));
        assert!(!ext.is_applicable(Some("other"), &alias));
        assert!(!ext.is_applicable(None, &alias));
    }

    #[test]
    fn test_applicable_by_alias_name_regardless_of_group() {
        let ext = extension();
        let alias = alias("build", false);

        assert!(ext.is_applicable(Some("unrelated"), &alias));
        assert!(ext.is_applicable(None, &alias));
    }

    #[test]
    fn test_apply_appends_extension_name() {
        let ext = extension();
        let derived = ext.apply(Some("test"), &alias("any", false)).unwrap();
        assert_eq!(derived.name(), "anyxx");
        assert_eq!(derived.command(), "xxx command yyy");
        assert!(!derived.pass_args());
    }

    #[test]
    fn test_apply_inserts_args_placeholder_for_pass_args() {
        let ext = extension();
        let derived = ext.apply(Some("test"), &alias("any", true)).unwrap();
        assert_eq!(derived.command(), "xxx command {@args} yyy");
        assert!(!derived.pass_args());
    }

    #[test]
    fn test_apply_returns_none_when_not_applicable() {
        let ext = extension();
        assert!(ext.apply(Some("other"), &alias("any", true)).is_none());
    }

    #[test]
    fn test_apply_forces_extension_env() {
        let ext = AliasExtension::new(
            "xx",
            "{@cmd}",
            vec!["test".to_string()],
            vec![],
            None,
            None,
            Some("bash".to_string()),
        )
        .unwrap();
        let original =
            Alias::new("any", "command", None, Some("windows".to_string()), false).unwrap();

        let derived = ext.apply(Some("test"), &original).unwrap();
        assert_eq!(derived.env(), Some("bash"));
    }

    #[test]
    fn test_apply_concatenates_comments() {
        let ext = AliasExtension::new(
            "xx",
            "{@cmd}",
            vec!["test".to_string()],
            vec![],
            Some("Does xxx and yyy.".to_string()),
            None,
            None,
        )
        .unwrap();

        let with_comment = Alias::new(
            "any",
            "command",
            Some("Original.".to_string()),
            None,
            false,
        )
        .unwrap();
        let derived = ext.apply(Some("test"), &with_comment).unwrap();
        assert_eq!(derived.comment(), Some("Original. Does xxx and yyy."));

        // The extension comment never appears without an original one.
        let without_comment = Alias::new("any", "command", None, None, false).unwrap();
        let derived = ext.apply(Some("test"), &without_comment).unwrap();
        assert_eq!(derived.comment(), None);
    }

    #[test]
    fn test_extension_group_collects_applicable_aliases_only() {
        let mut group = ExtensionGroup::new(extension());
        group.add_alias(Some("test"), &alias("any", false));
        group.add_alias(Some("other"), &alias("skipped", false));
        group.add_alias(None, &alias("build", false));

        let names: Vec<&str> = group.aliases().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["anyxx", "buildxx"]);
    }
}
