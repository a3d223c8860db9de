use dsc_core::{global as dg, RegistryError};
use std::path::PathBuf;

pub mod builtin;
pub mod json;
pub mod ucanaccess;

pub fn init() -> Result<(), RegistryError> {
    {
        use builtin::BuiltinPlugin;
        dg::add_plugin(Box::new(BuiltinPlugin::new()))?;
    }
    Ok(())
}

/// Like [`init`], then loads `connector.json` files from `dirs`, or from the
/// default locations when `dirs` is empty.
pub fn init_with_dirs(dirs: Vec<PathBuf>) -> Result<(), RegistryError> {
    init()?;
    {
        use json::JsonPlugin;
        let plugin = if dirs.is_empty() {
            JsonPlugin::new()
        } else {
            JsonPlugin::with_dirs(dirs)
        };
        dg::add_plugin(Box::new(plugin))?;
    }
    Ok(())
}
