//! The alias data model
//!
//! Value types are immutable after construction; required fields are
//! validated when an instance is created. Derived aliases are produced
//! by [`AliasExtension::apply`], never by mutating an existing value.

mod alias;
mod extension;
mod group;

pub use alias::Alias;
pub use extension::{AliasExtension, ExtensionGroup, ARGS_PLACEHOLDER, COMMAND_PLACEHOLDER};
pub use group::AliasGroup;

/// Checks whether a string is empty or whitespace only.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
