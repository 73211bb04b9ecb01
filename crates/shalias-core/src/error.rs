//! Error types for shalias-core

use thiserror::Error;

/// Result type alias using shalias-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for shalias
#[derive(Error, Debug)]
pub enum Error {
    /// XML parsing error
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Unsupported alias document version
    #[error(
        "Unsupported alias document version: namespace '{found}' does not \
         start with the supported prefix '{expected}'"
    )]
    UnsupportedVersion { found: String, expected: String },

    /// Required attribute missing from an element
    #[error("Missing attribute '{attribute}' on element '{element}'")]
    MissingAttribute { element: String, attribute: String },

    /// Alias name and command both blank
    #[error("Alias name and command are required, but missing")]
    AliasNameAndCommandMissing,

    /// Alias name blank
    #[error("Alias name is required for command '{command}', but missing")]
    AliasNameMissing { command: String },

    /// Alias command blank
    #[error("Alias command is required for name '{name}', but missing")]
    AliasCommandMissing { name: String },

    /// Extension name and template both blank
    #[error("Extension name and template are required, but missing")]
    ExtensionNameAndTemplateMissing,

    /// Extension name blank
    #[error("Extension name is required for template '{template}', but missing")]
    ExtensionNameMissing { template: String },

    /// Extension template blank
    #[error("Extension template is required for extension '{name}', but missing")]
    ExtensionTemplateMissing { name: String },
}

impl Error {
    /// Create an unsupported version error
    pub fn unsupported_version(found: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            found: found.into(),
            expected: expected.into(),
        }
    }

    /// Create a missing attribute error
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}
