use std::collections::BTreeMap;
use std::sync::Arc;

use crate::descriptor::ConnectorDescriptor;
use crate::error::RegistryError;
use crate::plugin::Plugin;
use crate::url::{subprotocol_of, JdbcUrl};

/// Connector descriptors indexed by alias.
#[derive(Debug, Default)]
pub struct ConnectorRegistry {
    connectors: BTreeMap<String, Arc<ConnectorDescriptor>>,
}

fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// `net.ucanaccess.jdbc.UcanaccessDriver`: a package plus a class name.
fn is_qualified_class_name(name: &str) -> bool {
    let segments: Vec<&str> = name.split('.').collect();
    segments.len() >= 2 && segments.iter().all(|s| is_java_identifier(s))
}

pub fn validate(descriptor: &ConnectorDescriptor) -> Result<(), RegistryError> {
    let alias = descriptor.alias.trim();
    if alias.is_empty() {
        return Err(RegistryError::EmptyAlias);
    }
    if descriptor.translator_name.trim().is_empty() {
        return Err(RegistryError::MissingTranslator {
            alias: alias.to_string(),
        });
    }
    if descriptor.is_jdbc && descriptor.driver_class_names.is_empty() {
        return Err(RegistryError::MissingDriver {
            alias: alias.to_string(),
        });
    }

    for (i, driver) in descriptor.driver_class_names.iter().enumerate() {
        if !is_qualified_class_name(driver) {
            return Err(RegistryError::InvalidDriver {
                alias: alias.to_string(),
                driver: driver.clone(),
            });
        }
        if descriptor.driver_class_names[..i].contains(driver) {
            return Err(RegistryError::DuplicateDriver {
                alias: alias.to_string(),
                driver: driver.clone(),
            });
        }
    }

    if descriptor.is_jdbc {
        JdbcUrl::parse(&descriptor.default_url).map_err(|source| RegistryError::InvalidUrl {
            alias: alias.to_string(),
            url: descriptor.default_url.clone(),
            source,
        })?;
    }
    Ok(())
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self {
            connectors: BTreeMap::new(),
        }
    }

    /// Validates and stores `descriptor` under its trimmed alias. A rejected
    /// descriptor leaves the registry untouched.
    pub fn register(
        &mut self,
        mut descriptor: ConnectorDescriptor,
    ) -> Result<Arc<ConnectorDescriptor>, RegistryError> {
        if descriptor.alias.trim().len() != descriptor.alias.len() {
            descriptor.alias = descriptor.alias.trim().to_string();
        }
        validate(&descriptor)?;
        if self.connectors.contains_key(&descriptor.alias) {
            return Err(RegistryError::DuplicateAlias {
                alias: descriptor.alias,
            });
        }

        log::debug!(
            "register connector {} (translator: {}, drivers: {:?})",
            descriptor.alias,
            descriptor.translator_name,
            descriptor.driver_class_names
        );
        let descriptor = Arc::new(descriptor);
        self.connectors
            .insert(descriptor.alias.clone(), descriptor.clone());
        Ok(descriptor)
    }

    /// Registers everything `plugin` provides, stopping at the first rejection.
    pub fn add_plugin(&mut self, plugin: &dyn Plugin) -> Result<usize, RegistryError> {
        let mut count = 0;
        for descriptor in plugin.connector_descriptors() {
            self.register(descriptor)
                .map_err(|e| RegistryError::Plugin {
                    plugin: plugin.id().to_string(),
                    source: Box::new(e),
                })?;
            count += 1;
        }
        log::info!("plugin {} registered {} connector(s)", plugin.id(), count);
        Ok(count)
    }

    pub fn get(&self, alias: &str) -> Option<Arc<ConnectorDescriptor>> {
        self.connectors.get(alias).cloned()
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.connectors.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    pub fn aliases(&self) -> Vec<&str> {
        self.connectors.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ConnectorDescriptor>> {
        self.connectors.values()
    }

    pub fn find_by_driver(&self, class_name: &str) -> Vec<Arc<ConnectorDescriptor>> {
        self.connectors
            .values()
            .filter(|d| d.has_driver(class_name))
            .cloned()
            .collect()
    }

    /// Picks the connector whose default url uses the same jdbc subprotocol
    /// as `url`. Ties go to the alphabetically first alias.
    pub fn resolve_url(&self, url: &str) -> Option<Arc<ConnectorDescriptor>> {
        let wanted = subprotocol_of(url)?;
        self.connectors
            .values()
            .filter(|d| d.is_jdbc)
            .find(|d| subprotocol_of(&d.default_url).as_deref() == Some(wanted.as_str()))
            .cloned()
    }
}
