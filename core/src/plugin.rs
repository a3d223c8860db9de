use crate::descriptor::ConnectorDescriptor;

/// A source of connector descriptors.
pub trait Plugin: Send {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    fn connector_descriptors(&self) -> Vec<ConnectorDescriptor>;
}
