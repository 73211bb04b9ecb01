//! Parses alias definition documents and feeds collectors
//!
//! The document is read once: extension declarations are materialized
//! first so that every alias, wherever it is declared, is offered to
//! every extension. Groups are then walked in document order and
//! broadcast to all collectors, followed by a single broadcast of the
//! populated extension groups.

use roxmltree::{Document, Node};
use tracing::debug;

use crate::collector::AliasCollector;
use crate::error::{Error, Result};
use crate::model::{Alias, AliasExtension, AliasGroup, ExtensionGroup};

/// Namespace prefix of the supported alias document major-version
/// family. Documents whose root namespace does not start with this
/// prefix are rejected.
pub const SUPPORTED_NS_PREFIX: &str = "http://smartics.de/alias/1";

/// Reads an alias definition document and applies its contents to
/// registered collectors.
#[derive(Debug)]
pub struct AliasesProcessor<'input> {
    doc: Document<'input>,
}

impl<'input> AliasesProcessor<'input> {
    /// Parse the document and validate its namespace version marker.
    ///
    /// Fails with [`Error::Xml`] on malformed input and with
    /// [`Error::UnsupportedVersion`] when the root namespace belongs to
    /// an unsupported major-version family.
    pub fn new(source: &'input str) -> Result<Self> {
        let doc = Document::parse(source)?;

        let ns = doc
            .root_element()
            .tag_name()
            .namespace()
            .unwrap_or_default();
        if !ns.starts_with(SUPPORTED_NS_PREFIX) {
            return Err(Error::unsupported_version(ns, SUPPORTED_NS_PREFIX));
        }

        Ok(Self { doc })
    }

    /// Applies the alias information from the document to the given
    /// collectors.
    pub fn process(&self, collectors: &mut [&mut dyn AliasCollector]) -> Result<()> {
        let root = self.doc.root_element();

        // Pass 1: materialize every extension so declaration order
        // between extensions and groups does not matter.
        let mut extension_groups: Vec<ExtensionGroup> = Vec::new();
        for element in child_elements(root, "extension") {
            let extension = self.create_extension(element)?;
            debug!("registered extension '{}'", extension.name());
            extension_groups.push(ExtensionGroup::new(extension));
        }

        // Pass 2: walk the groups, offering each alias to every
        // extension before appending it to its group.
        for element in child_elements(root, "group") {
            let name = element
                .attribute("name")
                .ok_or_else(|| Error::missing_attribute("group", "name"))?;
            let comment = self.comment_of(element);

            let mut group = AliasGroup::new(name, comment);
            for alias_element in child_elements(element, "alias") {
                let alias = self.create_alias(alias_element)?;
                for extension_group in &mut extension_groups {
                    extension_group.add_alias(Some(name), &alias);
                }
                group.push(alias);
            }

            debug!(
                "collected alias group '{}' with {} aliases",
                group.name(),
                group.aliases().len()
            );
            for collector in collectors.iter_mut() {
                collector.add_aliases(&group);
            }
        }

        for collector in collectors.iter_mut() {
            collector.set_extension_groups(&extension_groups);
        }

        Ok(())
    }

    fn create_extension(&self, element: Node<'_, 'input>) -> Result<AliasExtension> {
        let name = child_text_normalized(element, "name").unwrap_or_default();
        let template = child_element(element, "template")
            .and_then(|t| t.text())
            .map(str::trim)
            .unwrap_or_default();
        let env = element.attribute("env").map(str::to_string);
        let comment = self.comment_of(element);
        let mnemonic = child_element(element, "comment")
            .and_then(|c| c.attribute("mnemonic"))
            .map(str::to_string);

        let mut apply_to_groups = Vec::new();
        let mut apply_to_aliases = Vec::new();
        if let Some(apply_to) = child_element(element, "apply-to") {
            for group in child_elements(apply_to, "group") {
                if let Some(text) = normalized_text(group) {
                    apply_to_groups.push(text);
                }
            }
            for alias in child_elements(apply_to, "alias") {
                if let Some(text) = normalized_text(alias) {
                    apply_to_aliases.push(text);
                }
            }
        }

        AliasExtension::new(
            name,
            template,
            apply_to_groups,
            apply_to_aliases,
            comment,
            mnemonic,
            env,
        )
    }

    fn create_alias(&self, element: Node<'_, 'input>) -> Result<Alias> {
        let name = child_text_normalized(element, "name").unwrap_or_default();

        let command_element = child_element(element, "command");
        let command = command_element
            .and_then(|c| c.text())
            .map(normalize_space)
            .unwrap_or_default();
        // The flag defaults to true; only an explicit non-"true" value
        // turns it off.
        let pass_args = command_element
            .and_then(|c| c.attribute("passArgs"))
            .is_none_or(|v| v.eq_ignore_ascii_case("true"));

        let comment = self.comment_of(element);
        let env = element.attribute("env").map(str::to_string);

        Alias::new(name, command, comment, env, pass_args)
    }

    /// Extracts the serialized inner content of a `comment` child
    /// element, keeping simple inline markup. Blank content counts as
    /// absent.
    fn comment_of(&self, element: Node<'_, 'input>) -> Option<String> {
        let comment = child_element(element, "comment")?;
        let first = comment.first_child()?;
        let last = comment.last_child()?;

        let inner = &self.doc.input_text()[first.range().start..last.range().end];
        let trimmed = inner.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &'static str) -> Option<Node<'a, 'input>> {
    child_elements(node, name).next()
}

fn child_text_normalized(node: Node<'_, '_>, name: &'static str) -> Option<String> {
    child_element(node, name).and_then(normalized_text)
}

fn normalized_text(node: Node<'_, '_>) -> Option<String> {
    let text = normalize_space(node.text().unwrap_or_default());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collapses runs of whitespace to single spaces and trims the ends.
fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
