//! Alias groups

use crate::model::Alias;

/// An ordered group of aliases, as declared in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasGroup {
    name: String,
    comment: Option<String>,
    aliases: Vec<Alias>,
}

impl AliasGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>, comment: Option<String>) -> Self {
        Self {
            name: name.into(),
            comment,
            aliases: Vec::new(),
        }
    }

    /// The name of this group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optional description of the group.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The aliases belonging to this group, in document order.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Whether the group contains no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Append an alias to this group.
    pub fn push(&mut self, alias: Alias) {
        self.aliases.push(alias);
    }

    /// Create a copy containing only aliases that are unrestricted or
    /// belong to the given environment, preserving relative order.
    pub fn filter(&self, env: &str) -> AliasGroup {
        let aliases = self
            .aliases
            .iter()
            .filter(|alias| alias.env().is_none_or(|e| e == env))
            .cloned()
            .collect();

        AliasGroup {
            name: self.name.clone(),
            comment: self.comment.clone(),
            aliases,
        }
    }
}
