use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::descriptor::ConnectorDescriptor;
use crate::error::RegistryError;
use crate::plugin::Plugin;
use crate::registry::ConnectorRegistry;

pub struct Global {
    pub registry: ConnectorRegistry,
    pub plugin_ids: Vec<String>,
}

impl Global {
    fn new() -> Self {
        Self {
            registry: ConnectorRegistry::new(),
            plugin_ids: Vec::new(),
        }
    }
}

static GLOBAL: Lazy<Arc<Mutex<Global>>> = Lazy::new(|| Arc::new(Mutex::new(Global::new())));

fn global() -> MutexGuard<'static, Global> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn init() {
    Lazy::force(&GLOBAL);
}

pub fn add_plugin(p: Box<dyn Plugin>) -> Result<usize, RegistryError> {
    let mut g = global();
    let count = g.registry.add_plugin(p.as_ref())?;
    g.plugin_ids.push(p.id().to_string());
    Ok(count)
}

pub fn register(descriptor: ConnectorDescriptor) -> Result<Arc<ConnectorDescriptor>, RegistryError> {
    global().registry.register(descriptor)
}

pub fn descriptor(alias: &str) -> Option<Arc<ConnectorDescriptor>> {
    global().registry.get(alias)
}

pub fn plugin_ids() -> Vec<String> {
    global().plugin_ids.clone()
}

pub fn with_registry<F, R>(f: F) -> R
where
    F: FnOnce(&ConnectorRegistry) -> R,
{
    let g = global();
    f(&g.registry)
}
