use dsc_core::plugin::Plugin;
use dsc_core::{ConnectorDescriptor, DescriptorDecl};

use crate::ucanaccess::UCANACCESS;

pub const BUILTIN_DECLS: &[DescriptorDecl] = &[UCANACCESS];

/// Connectors compiled into the binary.
pub struct BuiltinPlugin {
    decls: &'static [DescriptorDecl],
}

impl BuiltinPlugin {
    pub fn new() -> Self {
        Self {
            decls: BUILTIN_DECLS,
        }
    }
}

impl Default for BuiltinPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for BuiltinPlugin {
    fn id(&self) -> &str {
        "dsc.plugin.builtin"
    }
    fn name(&self) -> &str {
        "builtin"
    }
    fn connector_descriptors(&self) -> Vec<ConnectorDescriptor> {
        self.decls.iter().map(DescriptorDecl::descriptor).collect()
    }
}
