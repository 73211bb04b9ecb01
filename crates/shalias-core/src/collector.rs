//! The collector contract driven by the document loader

use crate::model::{AliasGroup, ExtensionGroup};

/// Receives alias groups and extension groups from a loader pass.
///
/// Script builders and report generators both implement this trait; the
/// loader makes no distinction between consumer kinds. Collectors must
/// treat the supplied values as read-only and copy whatever they need
/// to retain.
pub trait AliasCollector {
    /// Called once per alias group, in document order, after the group
    /// is fully populated.
    fn add_aliases(&mut self, group: &AliasGroup);

    /// Called once after all groups, with every declared extension and
    /// the aliases it produced, in declaration order.
    fn set_extension_groups(&mut self, groups: &[ExtensionGroup]);
}
